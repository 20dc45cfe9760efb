use rand::Rng;

use crate::{common::GameError, coordinate::Coordinate, player::TargetSelector};

/// Automated player that fires at uniformly random cells.
///
/// Already-used cells are not tracked here; the grid rejects them and the
/// turn loop asks again.
pub struct RandomSelector<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TargetSelector for RandomSelector<R> {
    fn select_target(&mut self, grid_size: usize) -> Result<Coordinate, GameError> {
        let target = Coordinate::new(
            self.rng.random_range(0..grid_size),
            self.rng.random_range(0..grid_size),
        );
        log::info!("random target: {}", target);
        Ok(target)
    }
}
