//! Reaction-diffusion parameters and named presets.

use tessera_core::{ConfigError, EdgeBehavior};

/// Gray-Scott parameters, immutable once an engine is built.
///
/// The update per cell is
/// ```text
/// A' = A + d_a * lap(A) - A*B^2 + feed * (1 - A)
/// B' = B + d_b * lap(B) + A*B^2 - (kill + feed) * B
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RdParams {
    /// Diffusion rate of `A`.
    pub d_a: f64,
    /// Diffusion rate of `B`.
    pub d_b: f64,
    /// Feed rate `f`.
    pub feed: f64,
    /// Kill rate `k`.
    pub kill: f64,
    /// Stencil boundary handling. Default: [`EdgeBehavior::Wrap`].
    pub pad_mode: EdgeBehavior,
}

impl RdParams {
    /// Dividing spots.
    pub const MITOSIS: Self = Self::with_rates(0.028, 0.062);
    /// Branching coral growth.
    pub const CORAL: Self = Self::with_rates(0.037, 0.060);
    /// Labyrinthine stripes.
    pub const MAZE: Self = Self::with_rates(0.029, 0.057);

    /// Standard diffusion rates (`d_a = 1.0`, `d_b = 0.5`, wrapped edges)
    /// with the given feed and kill rates.
    pub const fn with_rates(feed: f64, kill: f64) -> Self {
        Self {
            d_a: 1.0,
            d_b: 0.5,
            feed,
            kill,
            pad_mode: EdgeBehavior::Wrap,
        }
    }

    /// Same parameters with a different boundary mode.
    pub fn pad_mode(mut self, pad_mode: EdgeBehavior) -> Self {
        self.pad_mode = pad_mode;
        self
    }

    /// Check that every rate is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_non_negative("d_a", self.d_a)?;
        ConfigError::check_non_negative("d_b", self.d_b)?;
        ConfigError::check_non_negative("feed", self.feed)?;
        ConfigError::check_non_negative("kill", self.kill)?;
        Ok(())
    }
}

impl Default for RdParams {
    fn default() -> Self {
        Self::with_rates(0.055, 0.062)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let p = RdParams::default();
        assert_eq!(p.d_a, 1.0);
        assert_eq!(p.d_b, 0.5);
        assert_eq!(p.pad_mode, EdgeBehavior::Wrap);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn presets_are_valid() {
        for p in [RdParams::MITOSIS, RdParams::CORAL, RdParams::MAZE] {
            assert!(p.validate().is_ok());
        }
    }

    #[test]
    fn rejects_negative_diffusion() {
        let p = RdParams {
            d_b: -0.1,
            ..RdParams::default()
        };
        assert!(matches!(
            p.validate(),
            Err(ConfigError::InvalidParameter { name: "d_b", .. })
        ));
    }

    #[test]
    fn rejects_non_finite_rates() {
        let p = RdParams {
            feed: f64::NAN,
            ..RdParams::default()
        };
        assert!(p.validate().is_err());
        let p = RdParams {
            kill: f64::INFINITY,
            ..RdParams::default()
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn pad_mode_override() {
        let p = RdParams::CORAL.pad_mode(EdgeBehavior::Clamp);
        assert_eq!(p.pad_mode, EdgeBehavior::Clamp);
        assert_eq!(p.feed, RdParams::CORAL.feed);
    }
}
