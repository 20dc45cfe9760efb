//! Text rendering of grids and the console clear capability.

use core::fmt::Write as _;
use std::io::{self, Write};

use crate::{
    coordinate::Coordinate,
    grid::{Cell, Grid},
};

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Miss => 'o',
            Cell::Ship => 'S',
            Cell::Hit => 'X',
        }
    }
}

/// Render a grid with one-based column and row headers, honoring its
/// hidden flag.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::from("   ");
    for c in 0..grid.size() {
        let _ = write!(out, "{:>3}", c + 1);
    }
    out.push('\n');
    for (r, row) in grid.view().iter().enumerate() {
        let _ = write!(out, "{:>3}", r + 1);
        for cell in row {
            let _ = write!(out, "{:>3}", cell.symbol());
        }
        out.push('\n');
    }
    out
}

/// Status header shown above each side's grid.
pub fn status_line(name: &str, live_vessels: usize, last_shot: Option<Coordinate>) -> String {
    let last = last_shot.map_or_else(|| "-".to_string(), |c| c.to_string());
    format!("{}\t(Ships: {})\tLast shot: {}", name, live_vessels, last)
}

/// Something that can wipe the display before a redraw.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;
}

impl<S: Screen + ?Sized> Screen for Box<S> {
    fn clear(&mut self) -> io::Result<()> {
        (**self).clear()
    }
}

/// Clears a terminal with ANSI escape codes.
pub struct AnsiScreen<W: Write> {
    out: W,
}

impl<W: Write> AnsiScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Screen for AnsiScreen<W> {
    fn clear(&mut self) -> io::Result<()> {
        write!(self.out, "\x1b[2J\x1b[H")?;
        self.out.flush()
    }
}

/// Leaves the display alone, for piped output and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClear;

impl Screen for NoClear {
    fn clear(&mut self) -> io::Result<()> {
        Ok(())
    }
}
