//! Match controller: random fleet construction, turn alternation and win
//! detection.

use core::fmt;
use std::io::Write;

use rand::Rng;
use serde::Serialize;

use crate::{
    common::{GameError, ShotResult},
    config::{fleet_template, GameConfig, MAX_GRID_ATTEMPTS},
    coordinate::Coordinate,
    grid::Grid,
    player::{Player, TargetSelector},
    ui::{format_grid, status_line, Screen},
    vessel::{Orientation, Vessel},
};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::Human => 0,
            Side::Computer => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Human => write!(f, "Human"),
            Side::Computer => write!(f, "AI"),
        }
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    InProgress,
    Won(Side),
}

/// Build a grid with the full fleet for `size` placed at random.
///
/// Gives up with `UnableToBuildGrid` after [`MAX_GRID_ATTEMPTS`] fresh
/// boards.
pub fn build_random_grid<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    hidden: bool,
    margin: usize,
) -> Result<Grid, GameError> {
    build_random_grid_bounded(rng, size, hidden, margin, MAX_GRID_ATTEMPTS)
}

/// [`build_random_grid`] with an explicit limit on fresh boards.
pub fn build_random_grid_bounded<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    hidden: bool,
    margin: usize,
    max_attempts: usize,
) -> Result<Grid, GameError> {
    for attempt in 1..=max_attempts {
        if let Some(grid) = try_place_fleet(rng, size, hidden, margin)? {
            log::debug!("fleet placed on attempt {}", attempt);
            return Ok(grid);
        }
    }
    log::warn!(
        "no fleet layout found for size {} margin {} after {} boards",
        size,
        margin,
        max_attempts
    );
    Err(GameError::UnableToBuildGrid {
        attempts: max_attempts,
    })
}

/// One board's worth of placement. `None` when some vessel could not be
/// placed within `(size + 1)^2` tries.
fn try_place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    size: usize,
    hidden: bool,
    margin: usize,
) -> Result<Option<Grid>, GameError> {
    let mut grid = Grid::with_margin(size, margin)?.hidden(hidden);
    let limit = (size + 1) * (size + 1);
    for length in fleet_template(size) {
        let mut attempts = 0;
        loop {
            attempts += 1;
            if attempts > limit {
                return Ok(None);
            }
            let origin = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match grid.place_vessel(Vessel::new(origin, length, orientation)?) {
                Ok(()) => break,
                Err(e) if e.is_retryable_placement() => continue,
                Err(e) => return Err(e),
            }
        }
    }
    Ok(Some(grid))
}

/// A match between a human side and a computer side. The human fires first.
#[derive(Debug)]
pub struct Match {
    players: [Player; 2],
    current: Side,
    turns: usize,
}

impl Match {
    /// Build both fleets at random and bind the two selectors to them.
    pub fn new<R: Rng + ?Sized>(
        config: &GameConfig,
        human: Box<dyn TargetSelector>,
        computer: Box<dyn TargetSelector>,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let human_grid = build_random_grid(rng, config.size, false, config.margin)?;
        let computer_grid = build_random_grid(rng, config.size, true, config.margin)?;
        Ok(Self::from_players(
            Player::new("Human", human_grid, human),
            Player::new("AI", computer_grid, computer),
        ))
    }

    pub fn from_players(human: Player, computer: Player) -> Self {
        Self {
            players: [human, computer],
            current: Side::Human,
            turns: 0,
        }
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.index()]
    }

    /// Side whose turn is next.
    pub fn current(&self) -> Side {
        self.current
    }

    /// Completed turns so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn status(&self) -> MatchStatus {
        if self.player(Side::Human).fleet().live_vessel_count() == 0 {
            MatchStatus::Won(Side::Computer)
        } else if self.player(Side::Computer).fleet().live_vessel_count() == 0 {
            MatchStatus::Won(Side::Human)
        } else {
            MatchStatus::InProgress
        }
    }

    /// Let the current side fire once, then pass the turn.
    pub fn play_turn(&mut self) -> Result<ShotResult, GameError> {
        let [human, computer] = &mut self.players;
        let result = match self.current {
            Side::Human => human.take_turn(computer.fleet_mut())?,
            Side::Computer => computer.take_turn(human.fleet_mut())?,
        };
        self.current = self.current.opponent();
        self.turns += 1;
        Ok(result)
    }

    /// Write both boards, each headed by its live vessel count and the
    /// opponent's last shot.
    pub fn render<W: Write>(&self, out: &mut W) -> Result<(), GameError> {
        writeln!(out, "{}", "_".repeat(80))?;
        for side in [Side::Human, Side::Computer] {
            let player = self.player(side);
            let last_shot = self.player(side.opponent()).last_target();
            writeln!(
                out,
                "{}",
                status_line(player.name(), player.fleet().live_vessel_count(), last_shot)
            )?;
            writeln!(out, "{}", format_grid(player.fleet()))?;
        }
        Ok(())
    }

    /// Play until one fleet is destroyed and return the winner.
    ///
    /// After each redraw the previous shot is echoed as `"<side> turn: x, y"`
    /// so automated moves stay visible below the boards.
    pub fn run<S: Screen, W: Write>(
        &mut self,
        screen: &mut S,
        out: &mut W,
    ) -> Result<Side, GameError> {
        let mut previous: Option<(Side, Coordinate)> = None;
        loop {
            screen.clear()?;
            self.render(out)?;
            if let Some((side, target)) = previous {
                writeln!(out, "{} turn: {}", side, target)?;
            }
            if let MatchStatus::Won(side) = self.status() {
                log::info!("{} won after {} turns", side, self.turns);
                writeln!(out, "{} Win", side)?;
                return Ok(side);
            }
            let shooter = self.current;
            self.play_turn()?;
            previous = self
                .player(shooter)
                .last_target()
                .map(|target| (shooter, target));
        }
    }
}
