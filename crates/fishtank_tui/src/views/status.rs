use fishtank_core::snapshot::TankSnapshot;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

pub struct StatusWidget<'a> {
    pub snapshot: &'a TankSnapshot,
    pub fps: f64,
    pub music_playing: bool,
    pub sound_enabled: bool,
}

impl<'a> Widget for StatusWidget<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let stats = self.snapshot.stats;
        let biggest = self
            .snapshot
            .largest_fish()
            .map(|f| format!("{:.2}", f.size))
            .unwrap_or_else(|| "-".to_string());
        let music = if self.music_playing { "♪ on" } else { "♪ off" };

        let line = Line::from(vec![
            Span::styled(
                format!(" Fish: {} ", self.snapshot.fish.len()),
                Style::default().fg(Color::Rgb(255, 160, 60)),
            ),
            Span::styled(
                format!("| Food: {} ", self.snapshot.food.len()),
                Style::default().fg(Color::Rgb(200, 140, 90)),
            ),
            Span::raw(format!(
                "| Eaten: {} | Spawned: {} | Sunk: {} | Biggest: {} ",
                stats.eaten, stats.spawned, stats.expired, biggest
            )),
            Span::styled(
                format!("| {music} "),
                Style::default().fg(if self.sound_enabled {
                    Color::Cyan
                } else {
                    Color::DarkGray
                }),
            ),
            Span::styled(
                format!("| FPS: {:.0}", self.fps),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        let help = Line::from(Span::styled(
            " click: drop food | space: pause | m: music | s: sound | +/-: volume | q: quit",
            Style::default().fg(Color::DarkGray),
        ));

        Paragraph::new(vec![line, help]).render(area, buf);
    }
}
