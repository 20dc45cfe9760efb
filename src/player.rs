use crate::{
    common::{GameError, ShotResult},
    coordinate::Coordinate,
    grid::Grid,
};

/// Strategy a player uses to choose where to fire.
pub trait TargetSelector {
    /// Choose the next target on an opponent grid of `grid_size`.
    fn select_target(&mut self, grid_size: usize) -> Result<Coordinate, GameError>;

    /// Inform the selector that the grid refused `target`.
    fn handle_rejected_target(
        &mut self,
        _target: Coordinate,
        _reason: &GameError,
    ) -> Result<(), GameError> {
        Ok(())
    }

    /// Inform the selector of the outcome of an accepted shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}
}

/// One side of a match: its own fleet and the strategy it fires with.
pub struct Player {
    name: &'static str,
    fleet: Grid,
    selector: Box<dyn TargetSelector>,
    last_target: Option<Coordinate>,
}

impl Player {
    pub fn new(name: &'static str, fleet: Grid, selector: Box<dyn TargetSelector>) -> Self {
        Self {
            name,
            fleet,
            selector,
            last_target: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The player's own fleet.
    pub fn fleet(&self) -> &Grid {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Grid {
        &mut self.fleet
    }

    /// Coordinate of the last accepted shot.
    pub fn last_target(&self) -> Option<Coordinate> {
        self.last_target
    }

    /// Keep choosing targets until `opponent` accepts one.
    ///
    /// Out-of-bounds and repeated targets are reported back to the
    /// selector and retried; any other error ends the turn.
    pub fn take_turn(&mut self, opponent: &mut Grid) -> Result<ShotResult, GameError> {
        loop {
            let target = self.selector.select_target(self.fleet.size())?;
            match opponent.shot(target) {
                Ok(result) => {
                    log::debug!("{} fired at {:?}: {:?}", self.name, target, result);
                    self.last_target = Some(target);
                    self.selector.handle_shot_result(target, result);
                    return Ok(result);
                }
                Err(e) if e.is_retryable_shot() => {
                    log::trace!("{} target {:?} rejected: {}", self.name, target, e);
                    self.selector.handle_rejected_target(target, &e)?;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("fleet", &self.fleet)
            .field("last_target", &self.last_target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::{Orientation, Vessel};
    use std::collections::VecDeque;

    /// Replays a fixed list of targets and records rejections.
    struct Scripted {
        targets: VecDeque<Coordinate>,
        rejected: std::rc::Rc<core::cell::RefCell<Vec<Coordinate>>>,
    }

    impl TargetSelector for Scripted {
        fn select_target(&mut self, _grid_size: usize) -> Result<Coordinate, GameError> {
            self.targets.pop_front().ok_or(GameError::InputClosed)
        }

        fn handle_rejected_target(
            &mut self,
            target: Coordinate,
            _reason: &GameError,
        ) -> Result<(), GameError> {
            self.rejected.borrow_mut().push(target);
            Ok(())
        }
    }

    #[test]
    fn retries_until_target_is_accepted() {
        let rejected = std::rc::Rc::new(core::cell::RefCell::new(Vec::new()));
        let selector = Scripted {
            targets: [(12, 0), (0, 0), (0, 0), (1, 0)]
                .into_iter()
                .map(Coordinate::from)
                .collect(),
            rejected: rejected.clone(),
        };
        let mut player = Player::new("Human", Grid::new(10).unwrap(), Box::new(selector));
        let mut opponent = Grid::new(10).unwrap();
        opponent
            .place_vessel(Vessel::new(Coordinate::new(0, 0), 2, Orientation::Horizontal).unwrap())
            .unwrap();

        assert_eq!(player.take_turn(&mut opponent).unwrap(), ShotResult::Hit);
        assert_eq!(player.last_target(), Some(Coordinate::new(0, 0)));

        assert_eq!(player.take_turn(&mut opponent).unwrap(), ShotResult::Hit);
        assert_eq!(player.last_target(), Some(Coordinate::new(1, 0)));
        assert_eq!(
            *rejected.borrow(),
            vec![Coordinate::new(12, 0), Coordinate::new(0, 0)]
        );
        assert_eq!(opponent.live_vessel_count(), 0);
    }

    #[test]
    fn selector_errors_end_the_turn() {
        let selector = Scripted {
            targets: VecDeque::new(),
            rejected: Default::default(),
        };
        let mut player = Player::new("Human", Grid::new(10).unwrap(), Box::new(selector));
        let mut opponent = Grid::new(10).unwrap();
        assert!(matches!(
            player.take_turn(&mut opponent),
            Err(GameError::InputClosed)
        ));
        assert!(player.last_target().is_none());
    }

    /// Fires off the board and cannot report the rejection.
    struct Muted;

    impl TargetSelector for Muted {
        fn select_target(&mut self, grid_size: usize) -> Result<Coordinate, GameError> {
            Ok(Coordinate::new(grid_size, 0))
        }

        fn handle_rejected_target(
            &mut self,
            _target: Coordinate,
            _reason: &GameError,
        ) -> Result<(), GameError> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe).into())
        }
    }

    #[test]
    fn failed_rejection_report_ends_the_turn() {
        let mut player = Player::new("Human", Grid::new(10).unwrap(), Box::new(Muted));
        let mut opponent = Grid::new(10).unwrap();
        assert!(matches!(
            player.take_turn(&mut opponent),
            Err(GameError::Io(_))
        ));
        assert!(opponent.fired_upon().is_empty());
    }
}
