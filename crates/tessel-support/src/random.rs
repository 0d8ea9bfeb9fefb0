//! Uniform random sampling over closed ranges.
//!
//! [`Sampler`] owns a seeded ChaCha8 engine and draws scalars or
//! component vectors. Integer types use rand's integer uniform
//! distribution and float types its real one; both ranges are closed
//! (`min..=max`).
//!
//! The free functions ([`integer`], [`real`], [`with_shared`]) share one
//! process-wide engine. It is seeded exactly once, on first use, from OS
//! entropy (or from `TESSEL_SEED`, see [`SamplerConfig::from_env`]) and is
//! never reseeded.

use std::sync::{Mutex, OnceLock, PoisonError};

use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::{Vector2, Vector3, Vector4};
use tracing::debug;

use crate::config::SamplerConfig;

/// Scalar types sampled with an integer uniform distribution.
pub trait UniformInt: SampleUniform + PartialOrd + Copy {}

/// Scalar types sampled with a real uniform distribution.
pub trait UniformReal: SampleUniform + PartialOrd + Copy {}

macro_rules! mark {
    ($marker:ident: $($t:ty),+) => {
        $(impl $marker for $t {})+
    };
}

mark!(UniformInt: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
mark!(UniformReal: f32, f64);

/// A seeded uniform sampler.
///
/// # Panics
///
/// Every sampling method panics if a lower bound exceeds its upper bound,
/// or if a real bound is not finite.
#[derive(Clone, Debug)]
pub struct Sampler {
    rng: ChaCha8Rng,
}

impl Sampler {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seed deterministically. Equal seeds yield equal draw sequences.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed according to `config`.
    pub fn from_config(config: &SamplerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }

    fn draw<T: SampleUniform + PartialOrd>(&mut self, min: T, max: T) -> T {
        self.rng.gen_range(min..=max)
    }

    // ── Integers ────────────────────────────────────────────────

    /// An integer in `min..=max`.
    pub fn integer<T: UniformInt>(&mut self, min: T, max: T) -> T {
        self.draw(min, max)
    }

    /// A 2D integer vector with per-component ranges.
    pub fn integer2<T: UniformInt>(&mut self, min: Vector2<T>, max: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.draw(min.x, max.x), self.draw(min.y, max.y))
    }

    /// A 2D integer vector with one range for every component.
    pub fn integer2_uniform<T: UniformInt>(&mut self, min: T, max: T) -> Vector2<T> {
        let dist = Uniform::new_inclusive(min, max);
        Vector2::new(dist.sample(&mut self.rng), dist.sample(&mut self.rng))
    }

    /// A 3D integer vector with per-component ranges.
    pub fn integer3<T: UniformInt>(&mut self, min: Vector3<T>, max: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.draw(min.x, max.x),
            self.draw(min.y, max.y),
            self.draw(min.z, max.z),
        )
    }

    /// A 3D integer vector with one range for every component.
    pub fn integer3_uniform<T: UniformInt>(&mut self, min: T, max: T) -> Vector3<T> {
        let dist = Uniform::new_inclusive(min, max);
        Vector3::new(
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
        )
    }

    /// A 4D integer vector with per-component ranges.
    pub fn integer4<T: UniformInt>(&mut self, min: Vector4<T>, max: Vector4<T>) -> Vector4<T> {
        Vector4::new(
            self.draw(min.x, max.x),
            self.draw(min.y, max.y),
            self.draw(min.z, max.z),
            self.draw(min.w, max.w),
        )
    }

    /// A 4D integer vector with one range for every component.
    pub fn integer4_uniform<T: UniformInt>(&mut self, min: T, max: T) -> Vector4<T> {
        let dist = Uniform::new_inclusive(min, max);
        Vector4::new(
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
        )
    }

    // ── Reals ───────────────────────────────────────────────────

    /// A real number in `min..=max`.
    pub fn real<T: UniformReal>(&mut self, min: T, max: T) -> T {
        self.draw(min, max)
    }

    /// A 2D real vector with per-component ranges.
    pub fn real2<T: UniformReal>(&mut self, min: Vector2<T>, max: Vector2<T>) -> Vector2<T> {
        Vector2::new(self.draw(min.x, max.x), self.draw(min.y, max.y))
    }

    /// A 2D real vector with one range for every component.
    pub fn real2_uniform<T: UniformReal>(&mut self, min: T, max: T) -> Vector2<T> {
        let dist = Uniform::new_inclusive(min, max);
        Vector2::new(dist.sample(&mut self.rng), dist.sample(&mut self.rng))
    }

    /// A 3D real vector with per-component ranges.
    pub fn real3<T: UniformReal>(&mut self, min: Vector3<T>, max: Vector3<T>) -> Vector3<T> {
        Vector3::new(
            self.draw(min.x, max.x),
            self.draw(min.y, max.y),
            self.draw(min.z, max.z),
        )
    }

    /// A 3D real vector with one range for every component.
    pub fn real3_uniform<T: UniformReal>(&mut self, min: T, max: T) -> Vector3<T> {
        let dist = Uniform::new_inclusive(min, max);
        Vector3::new(
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
        )
    }

    /// A 4D real vector with per-component ranges.
    pub fn real4<T: UniformReal>(&mut self, min: Vector4<T>, max: Vector4<T>) -> Vector4<T> {
        Vector4::new(
            self.draw(min.x, max.x),
            self.draw(min.y, max.y),
            self.draw(min.z, max.z),
            self.draw(min.w, max.w),
        )
    }

    /// A 4D real vector with one range for every component.
    pub fn real4_uniform<T: UniformReal>(&mut self, min: T, max: T) -> Vector4<T> {
        let dist = Uniform::new_inclusive(min, max);
        Vector4::new(
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
            dist.sample(&mut self.rng),
        )
    }
}

static SHARED: OnceLock<Mutex<Sampler>> = OnceLock::new();

/// Run `f` with exclusive access to the process-wide sampler.
///
/// The first call seeds the engine from [`SamplerConfig::from_env`].
pub fn with_shared<R>(f: impl FnOnce(&mut Sampler) -> R) -> R {
    let shared = SHARED.get_or_init(|| {
        let config = SamplerConfig::from_env();
        debug!(fixed_seed = config.seed.is_some(), "seeding shared sampler");
        Mutex::new(Sampler::from_config(&config))
    });
    // A panic inside `f` (e.g. an inverted range) leaves the engine intact.
    let mut sampler = shared.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut sampler)
}

/// An integer in `min..=max` from the shared engine.
pub fn integer<T: UniformInt>(min: T, max: T) -> T {
    with_shared(|s| s.integer(min, max))
}

/// A real number in `min..=max` from the shared engine.
pub fn real<T: UniformReal>(min: T, max: T) -> T {
    with_shared(|s| s.real(min, max))
}
