pub mod audio;
pub mod headless;
pub mod input;
pub mod render;
pub mod shutdown;
pub mod state;

pub use shutdown::ShutdownManager;
pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use fishtank_tui::Tui;

/// Upper bound on how long one input poll may block, so the frame counter
/// and redraws keep moving while paused.
const MAX_POLL: Duration = Duration::from_millis(50);

impl App {
    pub async fn run(&mut self, tui: &mut Tui, shutdown: &ShutdownManager) -> Result<()> {
        self.scheduler.start();

        while self.running && !shutdown.is_shutdown_requested() {
            tui.terminal.draw(|f| {
                self.draw(f);
            })?;
            self.update_fps();

            let timeout = self.scheduler.time_to_next_tick().min(MAX_POLL);
            if event::poll(timeout)? {
                // Drain everything queued, not just the first event.
                loop {
                    match event::read()? {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            self.handle_key(key);
                        }
                        Event::Mouse(mouse) => {
                            self.handle_mouse(mouse);
                        }
                        _ => {}
                    }
                    if !event::poll(Duration::ZERO)? {
                        break;
                    }
                }
            }

            self.update_tank();
            self.audio.process_queue().await;
        }

        self.scheduler.stop();
        Ok(())
    }
}
