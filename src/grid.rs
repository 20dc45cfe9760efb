//! A player's board: placed vessels, shot history and blocked cells.

use std::collections::HashSet;

use crate::common::{GameError, ShotResult};
use crate::config::{DEFAULT_MARGIN, MIN_GRID_SIZE};
use crate::coordinate::Coordinate;
use crate::vessel::Vessel;

/// What a single board cell shows when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Miss,
    Ship,
    Hit,
}

/// Spatial authority for one fleet.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    margin: usize,
    vessels: Vec<Vessel>,
    fired_upon: HashSet<Coordinate>,
    blocked: HashSet<Coordinate>,
    hidden: bool,
}

impl Grid {
    /// Create an empty `size` x `size` grid with the default margin.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Self::with_margin(size, DEFAULT_MARGIN)
    }

    /// Create an empty grid keeping `margin` cells clear around vessels.
    pub fn with_margin(size: usize, margin: usize) -> Result<Self, GameError> {
        if size < MIN_GRID_SIZE {
            return Err(GameError::GridTooSmall {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        if margin == 0 {
            return Err(GameError::InvalidMargin);
        }
        Ok(Self {
            size,
            margin,
            vessels: Vec::new(),
            fired_upon: HashSet::new(),
            blocked: HashSet::new(),
            hidden: false,
        })
    }

    /// Hide vessel positions when the grid is viewed (opponent's board).
    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn margin(&self) -> usize {
        self.margin
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn fired_upon(&self) -> &HashSet<Coordinate> {
        &self.fired_upon
    }

    pub fn is_outside(&self, coordinate: Coordinate) -> bool {
        coordinate.x() >= self.size || coordinate.y() >= self.size
    }

    /// Add a vessel to the fleet.
    ///
    /// Overlap is checked before bounds, so a vessel that both crowds
    /// another and hangs off the board reports `OverlapConflict`.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), GameError> {
        let margin = vessel.margin_coordinates(self.margin);
        if !self.blocked.is_disjoint(&margin) {
            return Err(GameError::OverlapConflict);
        }
        if vessel
            .occupied_coordinates()
            .iter()
            .any(|&c| self.is_outside(c))
        {
            return Err(GameError::OutOfBounds);
        }
        self.blocked.extend(margin.iter().copied());
        self.vessels.push(vessel);
        Ok(())
    }

    pub fn live_vessel_count(&self) -> usize {
        self.vessels.iter().filter(|v| v.is_alive()).count()
    }

    /// Fire at `target`, marking it as used.
    pub fn shot(&mut self, target: Coordinate) -> Result<ShotResult, GameError> {
        if self.is_outside(target) {
            return Err(GameError::OutOfBounds);
        }
        if self.fired_upon.contains(&target) {
            return Err(GameError::AlreadyTargeted);
        }

        let mut result = ShotResult::Miss;
        for vessel in self.vessels.iter_mut() {
            let was_alive = vessel.is_alive();
            if vessel.register_hit(target).is_hit() {
                result = ShotResult::Hit;
                if was_alive && !vessel.is_alive() {
                    log::info!(
                        "vessel of length {} at {:?} sunk",
                        vessel.len(),
                        vessel.origin()
                    );
                }
            }
        }
        self.fired_upon.insert(target);
        Ok(result)
    }

    /// Rows of cells, top row first.
    ///
    /// Vessel cells show as `Ship` only when `revealed`; damaged vessel
    /// cells always show as `Hit`.
    pub fn render(&self, revealed: bool) -> Vec<Vec<Cell>> {
        let mut cells = vec![vec![Cell::Empty; self.size]; self.size];
        for c in &self.fired_upon {
            cells[c.y()][c.x()] = Cell::Miss;
        }
        for vessel in &self.vessels {
            for &c in vessel.occupied_coordinates() {
                if vessel.is_damaged_at(c) {
                    cells[c.y()][c.x()] = Cell::Hit;
                } else if revealed {
                    cells[c.y()][c.x()] = Cell::Ship;
                }
            }
        }
        cells
    }

    /// Render honoring the grid's own display flag.
    pub fn view(&self) -> Vec<Vec<Cell>> {
        self.render(!self.hidden)
    }
}
