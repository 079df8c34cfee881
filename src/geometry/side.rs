use std::fmt;
use std::str::FromStr;

use crate::error::{CircintError, OperationError};

/// Which intersection point(s) to return.
///
/// Left and right are relative to the directed line from the first circle's
/// center to the second circle's center.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// Both points, left first.
    #[default]
    Both,
    /// The point to the left of the center line.
    Left,
    /// The point to the right of the center line.
    Right,
}

impl Side {
    /// Short code: `"lr"`, `"l"` or `"r"`.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Both => "lr",
            Self::Left => "l",
            Self::Right => "r",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Side {
    type Err = CircintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lr" | "both" => Ok(Self::Both),
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(OperationError::InvalidMode(s.to_owned()).into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_codes() {
        assert_eq!("lr".parse::<Side>().unwrap(), Side::Both);
        assert_eq!("l".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("r".parse::<Side>().unwrap(), Side::Right);
    }

    #[test]
    fn parses_words_case_insensitively() {
        assert_eq!("Both".parse::<Side>().unwrap(), Side::Both);
        assert_eq!("LEFT".parse::<Side>().unwrap(), Side::Left);
        assert_eq!("right".parse::<Side>().unwrap(), Side::Right);
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "x".parse::<Side>().unwrap_err();
        assert!(matches!(
            err,
            CircintError::Operation(OperationError::InvalidMode(ref s)) if s == "x"
        ));
    }

    #[test]
    fn display_round_trips() {
        for side in [Side::Both, Side::Left, Side::Right] {
            assert_eq!(side.to_string().parse::<Side>().unwrap(), side);
        }
    }

    #[test]
    fn default_is_both() {
        assert_eq!(Side::default(), Side::Both);
    }
}
