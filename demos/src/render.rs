//! Coloured terminal output for a [`Grid`].

use std::io::{self, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::Point;
use gridpath_map::{CellKind, Grid};

fn cell_style(grid: &Grid, p: Point) -> (Color, Color, char) {
    let kind = grid.kind(p).unwrap_or_default();
    let weight = grid.weight(p).unwrap_or(1);
    match kind {
        CellKind::Empty if weight > 1 => {
            let ch = char::from_digit(weight.min(9), 10).unwrap_or('+');
            (Color::Yellow, Color::Reset, ch)
        }
        CellKind::Empty => (Color::DarkGrey, Color::Reset, '.'),
        CellKind::Obstacle => (Color::Grey, Color::DarkGrey, '#'),
        CellKind::Source => (Color::Black, Color::Green, 'S'),
        CellKind::Destination => (Color::Black, Color::Red, 'D'),
        CellKind::Path => (Color::Black, Color::Yellow, '*'),
        CellKind::Visited => (Color::White, Color::DarkBlue, 'v'),
        CellKind::Current => (Color::Black, Color::Cyan, 'c'),
    }
}

/// Write every row of `grid` at the cursor position.
pub fn draw(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let (fg, bg, ch) = cell_style(grid, Point::new(x, y));
            queue!(
                out,
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(ch),
                Print(' ')
            )?;
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }
    out.flush()
}

/// Alternate screen used while a search is animated. Restores the terminal
/// on drop.
pub struct Screen {
    out: io::Stdout,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        Ok(Self { out })
    }

    pub fn frame(&mut self, grid: &Grid) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        draw(&mut self.out, grid)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
    }
}
