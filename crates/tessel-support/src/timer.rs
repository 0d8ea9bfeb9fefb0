//! Pausable wall-clock stopwatch.

use std::time::{Duration, Instant};

use tracing::trace;

/// Accumulates wall-clock time across pause/unpause cycles.
///
/// A new timer starts running immediately.
#[derive(Clone, Debug)]
pub struct Timer {
    /// Start of the current running segment.
    segment_start: Instant,
    /// Time banked by earlier segments.
    banked: Duration,
    paused: bool,
}

impl Timer {
    /// Start a timer now.
    pub fn new() -> Self {
        Self {
            segment_start: Instant::now(),
            banked: Duration::ZERO,
            paused: false,
        }
    }

    /// Total time spent unpaused.
    pub fn elapsed(&self) -> Duration {
        if self.paused {
            self.banked
        } else {
            self.banked + self.segment_start.elapsed()
        }
    }

    /// Total time spent unpaused, in seconds rounded to milliseconds.
    pub fn elapsed_time(&self) -> f64 {
        (self.elapsed().as_secs_f64() * 1000.0).round() / 1000.0
    }

    /// Whether the timer is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop accumulating time. Pausing a paused timer does nothing.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.banked += self.segment_start.elapsed();
        self.paused = true;
        trace!(banked_ms = self.banked.as_millis() as u64, "timer paused");
    }

    /// Resume accumulating time. Unpausing a running timer does nothing.
    pub fn unpause(&mut self) {
        if !self.paused {
            return;
        }
        self.segment_start = Instant::now();
        self.paused = false;
        trace!("timer unpaused");
    }

    /// Discard accumulated time. The pause state is unchanged, so a running
    /// timer restarts from zero immediately.
    pub fn reset(&mut self) {
        self.banked = Duration::ZERO;
        self.segment_start = Instant::now();
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn new_timer_runs() {
        let t = Timer::new();
        assert!(!t.is_paused());
        sleep(Duration::from_millis(5));
        assert!(t.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn paused_timer_is_frozen() {
        let mut t = Timer::new();
        sleep(Duration::from_millis(2));
        t.pause();
        let frozen = t.elapsed();
        sleep(Duration::from_millis(5));
        assert_eq!(t.elapsed(), frozen);
        assert!(t.is_paused());
    }

    #[test]
    fn accumulates_across_pause_cycles() {
        let wall = Instant::now();
        let mut t = Timer::new();
        sleep(Duration::from_millis(3));
        t.pause();
        let first = t.elapsed();
        sleep(Duration::from_millis(10));
        t.unpause();
        sleep(Duration::from_millis(3));
        t.pause();
        let total = t.elapsed();
        assert!(total >= first + Duration::from_millis(3));
        // The paused gap is excluded.
        assert!(wall.elapsed() >= total + Duration::from_millis(10));
    }

    #[test]
    fn double_pause_does_not_double_count() {
        let mut t = Timer::new();
        sleep(Duration::from_millis(2));
        t.pause();
        let once = t.elapsed();
        t.pause();
        assert_eq!(t.elapsed(), once);
    }

    #[test]
    fn reset_while_paused_is_zero_and_stays_paused() {
        let mut t = Timer::new();
        sleep(Duration::from_millis(2));
        t.pause();
        t.reset();
        assert_eq!(t.elapsed(), Duration::ZERO);
        assert_eq!(t.elapsed_time(), 0.0);
        assert!(t.is_paused());
    }

    #[test]
    fn elapsed_time_has_millisecond_precision() {
        let mut t = Timer::new();
        sleep(Duration::from_millis(4));
        t.pause();
        let secs = t.elapsed_time();
        assert!(secs >= 0.004);
        assert_eq!((secs * 1000.0).round() / 1000.0, secs);
    }
}
