//! Vessel geometry and damage tracking.

use core::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::common::{GameError, ShotResult};
use crate::coordinate::{saturating_signed, Coordinate};

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A contiguous line of cells with independent damage tracking.
///
/// Geometry never changes after construction, so the occupied cells are
/// computed once and margin sets are cached per buffer size.
#[derive(Debug, Clone)]
pub struct Vessel {
    origin: Coordinate,
    orientation: Orientation,
    occupied: Vec<Coordinate>,
    damaged: HashSet<Coordinate>,
    margins: RefCell<HashMap<usize, Rc<HashSet<Coordinate>>>>,
}

impl Vessel {
    /// Build a vessel of `length` cells starting at `origin`.
    pub fn new(
        origin: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        if length == 0 {
            return Err(GameError::InvalidLength);
        }
        let occupied = (0..length)
            .map(|i| {
                let (x, y) = match orientation {
                    Orientation::Horizontal => (origin.x().checked_add(i), Some(origin.y())),
                    Orientation::Vertical => (Some(origin.x()), origin.y().checked_add(i)),
                };
                match (x, y) {
                    (Some(x), Some(y)) => Ok(Coordinate::new(x, y)),
                    _ => Err(GameError::InvalidCoordinate {
                        x: saturating_signed(origin.x()),
                        y: saturating_signed(origin.y()),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            origin,
            orientation,
            occupied,
            damaged: HashSet::new(),
            margins: RefCell::new(HashMap::new()),
        })
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of cells the vessel spans.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }

    /// Cells covered by the vessel, origin first.
    pub fn occupied_coordinates(&self) -> &[Coordinate] {
        &self.occupied
    }

    pub fn occupies(&self, coordinate: Coordinate) -> bool {
        self.occupied.contains(&coordinate)
    }

    /// Occupied cells plus every cell within Chebyshev distance `buffer`,
    /// clipped to non-negative coordinates.
    pub fn margin_coordinates(&self, buffer: usize) -> Rc<HashSet<Coordinate>> {
        if let Some(cached) = self.margins.borrow().get(&buffer) {
            return Rc::clone(cached);
        }
        let reach = buffer as i64;
        let mut margin: HashSet<Coordinate> = self.occupied.iter().copied().collect();
        for cell in &self.occupied {
            for dx in -reach..=reach {
                for dy in -reach..=reach {
                    // neighbours below zero or past usize::MAX are dropped
                    if let Ok(neighbour) = cell.offset(dx, dy) {
                        margin.insert(neighbour);
                    }
                }
            }
        }
        let margin = Rc::new(margin);
        self.margins.borrow_mut().insert(buffer, Rc::clone(&margin));
        margin
    }

    /// Undamaged cells remaining.
    pub fn health(&self) -> usize {
        self.occupied.len() - self.damaged.len()
    }

    pub fn is_alive(&self) -> bool {
        self.health() > 0
    }

    pub fn is_damaged_at(&self, coordinate: Coordinate) -> bool {
        self.damaged.contains(&coordinate)
    }

    /// Record a shot at `coordinate`. Repeated hits on the same cell
    /// report `Hit` again without changing the damage state.
    pub fn register_hit(&mut self, coordinate: Coordinate) -> ShotResult {
        if self.occupies(coordinate) {
            self.damaged.insert(coordinate);
            ShotResult::Hit
        } else {
            ShotResult::Miss
        }
    }
}
