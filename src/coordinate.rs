//! Grid positions.

use core::fmt;

use serde::Serialize;

use crate::common::GameError;

/// An immutable position on a grid: `x` is the column, `y` the row.
///
/// Both components are zero-based internally. The [`Display`](fmt::Display)
/// form is one-based for people reading the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Build a coordinate from signed components, rejecting negatives.
    pub fn try_new(x: i64, y: i64) -> Result<Self, GameError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(cx), Ok(cy)) => Ok(Self::new(cx, cy)),
            _ => Err(GameError::InvalidCoordinate { x, y }),
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Step by a signed offset. Fails when the result would be negative or
    /// past `usize::MAX`.
    pub fn offset(&self, dx: i64, dy: i64) -> Result<Self, GameError> {
        match (shift(self.x, dx), shift(self.y, dy)) {
            (Some(x), Some(y)) => Ok(Self::new(x, y)),
            _ => Err(GameError::InvalidCoordinate {
                x: saturating_signed(self.x).saturating_add(dx),
                y: saturating_signed(self.y).saturating_add(dy),
            }),
        }
    }
}

fn shift(value: usize, delta: i64) -> Option<usize> {
    let step = usize::try_from(delta.unsigned_abs()).ok()?;
    if delta >= 0 {
        value.checked_add(step)
    } else {
        value.checked_sub(step)
    }
}

/// Signed view of a component for error reports.
pub(crate) fn saturating_signed(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate <{}, {}>", self.x, self.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x + 1, self.y + 1)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
