pub mod renderer;
pub mod views;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use std::io::{self, Stdout};

pub use renderer::TankWidget;

/// Rows reserved above the tank for the status and help lines.
pub const STATUS_HEIGHT: u16 = 2;

/// Splits a full frame into the status strip and the tank area.
#[must_use]
pub fn split_frame(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(STATUS_HEIGHT), Constraint::Min(0)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Owns the terminal while the tank is on screen.
///
/// Mouse capture is required: a left click is how food gets dropped.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    /// Takes over the terminal and returns the tank area it will draw into,
    /// so the first tick already sees the real viewport.
    pub fn init(&mut self) -> Result<Rect> {
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide
        )?;
        enable_raw_mode()?;
        self.terminal.clear()?;
        self.tank_area()
    }

    /// Tank area for the current terminal size.
    pub fn tank_area(&self) -> Result<Rect> {
        let size = self.terminal.size()?;
        let (_, tank) = split_frame(Rect::new(0, 0, size.width, size.height));
        Ok(tank)
    }

    pub fn exit(&mut self) -> Result<()> {
        restore_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}
