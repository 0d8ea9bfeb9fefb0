//! Sampler configuration.

use tracing::warn;

/// Configuration for a [`Sampler`](crate::Sampler).
///
/// `seed: None` draws the seed from OS entropy; `Some` makes every draw
/// reproducible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Fixed seed, or `None` for entropy.
    pub seed: Option<u64>,
}

impl SamplerConfig {
    /// Environment variable read by [`from_env`](Self::from_env).
    pub const SEED_ENV: &'static str = "TESSEL_SEED";

    /// A config with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Read the seed from `TESSEL_SEED`.
    ///
    /// Unset means entropy. A value that is not a `u64` is logged and
    /// ignored.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(Self::SEED_ENV).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let Some(raw) = value else {
            return Self::default();
        };
        match raw.trim().parse::<u64>() {
            Ok(seed) => Self::seeded(seed),
            Err(e) => {
                warn!(value = raw, error = %e, "ignoring invalid {}", Self::SEED_ENV);
                Self::default()
            }
        }
    }
}
