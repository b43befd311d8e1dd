//! Gameplay view mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which view the game is in.
///
/// `Planar` pins the body to a single depth plane and uses a side-on
/// orthographic camera. `Chase` frees the depth axis and uses a trailing
/// perspective camera.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Side-scrolling view locked to one depth plane.
    #[default]
    Planar,
    /// Third-person view with free depth movement.
    Chase,
}

impl Mode {
    /// Returns the other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Planar => Self::Chase,
            Self::Chase => Self::Planar,
        }
    }

    /// Returns `true` for [`Mode::Planar`].
    #[must_use]
    pub const fn is_planar(self) -> bool {
        matches!(self, Self::Planar)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Planar => f.write_str("planar"),
            Self::Chase => f.write_str("chase"),
        }
    }
}

/// Error returned when parsing an unknown mode name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}` (expected `planar` or `chase`)")]
pub struct ParseModeError(pub String);

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "planar" | "ortho" | "2d" => Ok(Self::Planar),
            "chase" | "perspective" | "3d" => Ok(Self::Chase),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Mode::Planar.toggled().toggled(), Mode::Planar);
        assert_eq!(Mode::Chase.toggled(), Mode::Planar);
    }

    #[rstest]
    #[case("planar", Mode::Planar)]
    #[case("Ortho", Mode::Planar)]
    #[case("chase", Mode::Chase)]
    #[case("3D", Mode::Chase)]
    fn parses_aliases(#[case] input: &str, #[case] expected: Mode) {
        assert_eq!(input.parse::<Mode>(), Ok(expected));
    }

    #[test]
    fn rejects_unknown_names() {
        assert!("sideways".parse::<Mode>().is_err());
    }
}
