/// Board size used when none is configured.
pub const DEFAULT_GRID_SIZE: usize = 10;
/// Smallest board the fleet template is designed for.
pub const MIN_GRID_SIZE: usize = 10;
/// Default Chebyshev distance kept clear around each vessel.
pub const DEFAULT_MARGIN: usize = 1;
/// Number of fresh boards tried before random placement gives up.
pub const MAX_GRID_ATTEMPTS: usize = 1_000;

/// Vessel lengths for a board of `size`, longest first.
///
/// Counts scale with the board: a 10x10 board carries one 4-cell, two
/// 3-cell, three 2-cell and four 1-cell vessels.
pub fn fleet_template(size: usize) -> Vec<usize> {
    let mut lengths = Vec::new();
    lengths.extend(core::iter::repeat(4).take(size / 8));
    lengths.extend(core::iter::repeat(3).take(size / 4));
    lengths.extend(core::iter::repeat(2).take(size / 3));
    lengths.extend(core::iter::repeat(1).take((size / 2).saturating_sub(1)));
    lengths
}

/// Settings for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub margin: usize,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            margin: DEFAULT_MARGIN,
            seed: None,
        }
    }
}
