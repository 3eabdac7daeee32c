//! Spatial edge (boundary) behavior for grid neighbour lookup.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// How neighbour lookups behave at the edges of a grid.
///
/// The reaction-diffusion stencil takes this as its padding mode; the
/// segregation model always uses [`EdgeBehavior::Wrap`].
///
/// # Examples
///
/// ```
/// use tessera_core::{EdgeBehavior, GridDims};
///
/// let dims = GridDims::new(4, 4).unwrap();
/// // Wrap: stepping left from column 0 lands on column 3.
/// assert_eq!(dims.neighbour(0, 0, -1, 0, EdgeBehavior::Wrap), (3, 0));
/// // Clamp: the boundary cell is its own neighbour.
/// assert_eq!(dims.neighbour(0, 0, -1, 0, EdgeBehavior::Clamp), (0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour wraps to the opposite side (torus).
    /// Spelled `"circular"` in string form.
    #[default]
    Wrap,
    /// Out-of-bounds neighbour maps to the nearest boundary cell.
    /// Spelled `"constant"` in string form.
    Clamp,
}

impl EdgeBehavior {
    /// The string spelling accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            EdgeBehavior::Wrap => "circular",
            EdgeBehavior::Clamp => "constant",
        }
    }
}

impl fmt::Display for EdgeBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdgeBehavior {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circular" | "wrap" => Ok(EdgeBehavior::Wrap),
            "constant" | "clamp" => Ok(EdgeBehavior::Clamp),
            other => Err(ConfigError::UnknownEdgeBehavior {
                name: other.to_string(),
            }),
        }
    }
}
