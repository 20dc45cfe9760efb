//! Common types for the game: errors and shot results.

use thiserror::Error;

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The shot struck an occupied vessel coordinate.
    Hit,
    /// The shot missed all vessels.
    Miss,
}

impl ShotResult {
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit)
    }
}

/// Errors returned by coordinate, vessel, grid and match operations.
#[derive(Debug, Error)]
pub enum GameError {
    /// A coordinate component was negative.
    #[error("invalid coordinate ({x}, {y}): components must be non-negative")]
    InvalidCoordinate { x: i64, y: i64 },
    /// Target or vessel geometry lies outside the grid.
    #[error("target outside board")]
    OutOfBounds,
    /// Vessel margin intersects cells blocked by another vessel.
    #[error("vessel overlaps with another")]
    OverlapConflict,
    /// The target was already fired upon.
    #[error("target already used")]
    AlreadyTargeted,
    /// Vessels must occupy at least one cell.
    #[error("vessel length must be at least 1")]
    InvalidLength,
    #[error("board too small: size {size}, minimum is {min}")]
    GridTooSmall { size: usize, min: usize },
    #[error("margin buffer must be at least 1")]
    InvalidMargin,
    /// Random fleet placement kept failing; the board is too dense.
    #[error("unable to place fleet after {attempts} attempts")]
    UnableToBuildGrid { attempts: usize },
    /// The input stream ended while waiting for a target.
    #[error("input closed")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Errors a player recovers from by choosing another target.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, GameError::OutOfBounds | GameError::AlreadyTargeted)
    }

    /// Errors random placement recovers from by trying another vessel.
    pub fn is_retryable_placement(&self) -> bool {
        matches!(self, GameError::OutOfBounds | GameError::OverlapConflict)
    }
}
