//! Segregation model parameters.

use tessera_core::ConfigError;

/// Population density and tolerance threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SchellingParams {
    /// Fraction of cells occupied at construction. The model places
    /// `floor(cells * density)` agents.
    pub density: f64,
    /// Minimum share of same-group occupied neighbours an agent needs to
    /// stay put.
    pub want_similar: f64,
}

impl Default for SchellingParams {
    fn default() -> Self {
        Self {
            density: 0.5,
            want_similar: 0.5,
        }
    }
}

impl SchellingParams {
    /// Check that both fields lie in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ConfigError::check_unit_interval("density", self.density)?;
        ConfigError::check_unit_interval("want_similar", self.want_similar)?;
        Ok(())
    }
}
