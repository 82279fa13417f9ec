use crate::app::state::App;
use fishtank_tui::views::StatusWidget;
use fishtank_tui::{split_frame, TankWidget};
use ratatui::Frame;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let (status_area, tank_area) = split_frame(f.area());
        self.last_tank_rect = tank_area;

        f.render_widget(
            StatusWidget {
                snapshot: &self.latest_snapshot,
                fps: self.fps,
                music_playing: self.music_playing,
                sound_enabled: self.audio.enabled,
            },
            status_area,
        );
        f.render_widget(TankWidget::new(&self.latest_snapshot, self.paused), tank_area);
    }
}
