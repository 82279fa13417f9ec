use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use fishtank_tui::TankWidget;

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char(' ') => self.toggle_pause(),
            KeyCode::Char('m') => self.toggle_music(),
            KeyCode::Char('s') => self.audio.toggle(),
            KeyCode::Char('+') => {
                let volume = self.audio.volume + 0.1;
                self.audio.set_volume(volume);
            }
            KeyCode::Char('-') => {
                let volume = self.audio.volume - 0.1;
                self.audio.set_volume(volume);
            }
            _ => {}
        }
    }

    /// A left click inside the tank drops a pellet there.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some((x, y)) =
                TankWidget::screen_to_tank(mouse.column, mouse.row, self.last_tank_rect)
            {
                self.drop_food(x, y);
            }
        }
    }
}
