//! Console naval combat: a human fleet against a randomly placed,
//! randomly firing computer fleet.

mod common;
mod config;
mod coordinate;
mod game;
mod grid;
mod logging;
mod player;
mod player_ai;
mod player_cli;
pub mod ui;
mod vessel;

pub use common::*;
pub use config::*;
pub use coordinate::*;
pub use game::*;
pub use grid::*;
pub use logging::init_logging;
pub use player::*;
pub use player_ai::*;
pub use player_cli::*;
pub use ui::{format_grid, status_line, AnsiScreen, NoClear, Screen};
pub use vessel::*;
