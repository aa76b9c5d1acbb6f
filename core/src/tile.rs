use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Distance;

/// Player-visible value of a single field cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldCell {
    /// Not revealed yet.
    Unknown,
    /// Revealed, and no mine lies within the discoverable radius.
    Empty,
    /// Revealed after a loss, a mine was here.
    Mine,
    /// Revealed, truncated distance to the nearest mine.
    Distance(Distance),
}

impl FieldCell {
    pub const fn is_unknown(self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub const fn distance(self) -> Option<Distance> {
        match self {
            Self::Distance(distance) => Some(distance),
            _ => None,
        }
    }

    /// Parses the symbol used by [`Display`](fmt::Display): `?`, ` `, `X` or a decimal digit.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '?' => Some(Self::Unknown),
            ' ' => Some(Self::Empty),
            'X' => Some(Self::Mine),
            _ => symbol
                .to_digit(10)
                .map(|digit| Self::Distance(digit as Distance)),
        }
    }
}

impl Default for FieldCell {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for FieldCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => f.write_str("?"),
            Self::Empty => f.write_str(" "),
            Self::Mine => f.write_str("X"),
            Self::Distance(distance) => write!(f, "{distance}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn symbols_parse_back() {
        for cell in [
            FieldCell::Unknown,
            FieldCell::Empty,
            FieldCell::Mine,
            FieldCell::Distance(7),
        ] {
            let symbol = cell.to_string().chars().next().unwrap();
            assert_eq!(FieldCell::from_symbol(symbol), Some(cell));
        }
        assert_eq!(FieldCell::from_symbol('#'), None);
    }

    #[test]
    fn mine_marker_is_not_a_distance() {
        assert_eq!(FieldCell::Mine.distance(), None);
        assert_eq!(FieldCell::Distance(9).distance(), Some(9));
    }
}
