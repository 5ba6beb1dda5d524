//! The [`Marker`] type — what a maze cell holds.

use std::fmt;

use thiserror::Error;

/// A maze cell marker.
///
/// The display vocabulary matches the classic text-maze convention:
/// `0` open floor, `1` wall, `A` start, `B` goal, `*` a path cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Marker {
    /// Traversable floor.
    #[default]
    Open,
    /// Impassable obstacle.
    Wall,
    /// The unique start cell.
    Start,
    /// The unique goal cell.
    Goal,
    /// A cell on a rendered path (only ever produced by overlays).
    Path,
}

/// Error parsing a marker from an unknown symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown maze symbol {0:?}")]
pub struct MarkerError(pub char);

impl Marker {
    /// The display symbol for this marker.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Marker::Open => '0',
            Marker::Wall => '1',
            Marker::Start => 'A',
            Marker::Goal => 'B',
            Marker::Path => '*',
        }
    }

    /// Whether this marker blocks movement. Only walls do; start, goal
    /// and path cells are traversable floor.
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Marker::Wall)
    }
}

impl TryFrom<char> for Marker {
    type Error = MarkerError;

    fn try_from(ch: char) -> Result<Self, MarkerError> {
        match ch {
            '0' => Ok(Marker::Open),
            '1' => Ok(Marker::Wall),
            'A' => Ok(Marker::Start),
            'B' => Ok(Marker::Goal),
            '*' => Ok(Marker::Path),
            other => Err(MarkerError(other)),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
