use fishtank_core::snapshot::TankSnapshot;
use fishtank_data::{Fish, Food, Viewport};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Widget};

/// Tank units covered by one terminal column.
pub const CELL_WIDTH: f64 = 8.0;
/// Tank units covered by one terminal row.
pub const CELL_HEIGHT: f64 = 16.0;

const WATER: Color = Color::Rgb(8, 24, 48);

pub struct TankWidget<'a> {
    snapshot: &'a TankSnapshot,
    paused: bool,
}

impl<'a> TankWidget<'a> {
    pub fn new(snapshot: &'a TankSnapshot, paused: bool) -> Self {
        Self { snapshot, paused }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    /// Tank viewport matching the drawable part of `area`.
    pub fn viewport_for_area(area: Rect) -> Viewport {
        let inner = Self::get_inner_area(area);
        Viewport::new(
            f64::from(inner.width) * CELL_WIDTH,
            f64::from(inner.height) * CELL_HEIGHT,
        )
    }

    /// Tank coordinate at the centre of a terminal cell, if it is inside the tank.
    pub fn screen_to_tank(screen_x: u16, screen_y: u16, area: Rect) -> Option<(f64, f64)> {
        let inner = Self::get_inner_area(area);
        if screen_x >= inner.left()
            && screen_x < inner.right()
            && screen_y >= inner.top()
            && screen_y < inner.bottom()
        {
            Some((
                (f64::from(screen_x - inner.x) + 0.5) * CELL_WIDTH,
                (f64::from(screen_y - inner.y) + 0.5) * CELL_HEIGHT,
            ))
        } else {
            None
        }
    }

    /// Terminal cell showing a tank coordinate. Points on the far edge map to
    /// the last column/row.
    pub fn tank_to_screen(x: f64, y: f64, area: Rect) -> Option<(u16, u16)> {
        let inner = Self::get_inner_area(area);
        if inner.width == 0 || inner.height == 0 || !x.is_finite() || !y.is_finite() {
            return None;
        }
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / CELL_WIDTH) as u32;
        let row = (y / CELL_HEIGHT) as u32;
        let col = if col == u32::from(inner.width) { col - 1 } else { col };
        let row = if row == u32::from(inner.height) { row - 1 } else { row };
        if col >= u32::from(inner.width) || row >= u32::from(inner.height) {
            return None;
        }
        Some((inner.x + col as u16, inner.y + row as u16))
    }

    pub fn glyph_for_fish(fish: &Fish) -> &'static str {
        if fish.size < 1.4 {
            "><>"
        } else if fish.size < 2.0 {
            "><(>"
        } else {
            "><((°>"
        }
    }

    pub fn color_for_fish(fish: &Fish) -> Color {
        if fish.is_idle() {
            Color::Rgb(255, 160, 60)
        } else {
            Color::Rgb(255, 220, 80)
        }
    }

    fn draw_food(&self, food: &Food, area: Rect, buf: &mut Buffer) {
        if let Some((x, y)) = Self::tank_to_screen(food.x, food.y, area) {
            let style = if food.assigned_fish.is_some() {
                Style::default().fg(Color::Rgb(200, 140, 90)).bg(WATER)
            } else {
                Style::default().fg(Color::Rgb(140, 100, 60)).bg(WATER)
            };
            buf.set_string(x, y, "•", style);
        }
    }

    fn draw_fish(&self, fish: &Fish, area: Rect, buf: &mut Buffer) {
        let inner = Self::get_inner_area(area);
        if let Some((x, y)) = Self::tank_to_screen(fish.position.x, fish.position.y, area) {
            let glyph = Self::glyph_for_fish(fish);
            let len = glyph.chars().count() as u16;
            // keep the whole body inside the frame
            let x = x.min(inner.right().saturating_sub(len)).max(inner.x);
            let mut style = Style::default().fg(Self::color_for_fish(fish)).bg(WATER);
            if fish.size >= 2.0 {
                style = style.add_modifier(Modifier::BOLD);
            }
            buf.set_stringn(x, y, glyph, inner.right().saturating_sub(x) as usize, style);
        }
    }
}

impl<'a> Widget for TankWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.paused {
            format!("Tank (Tick: {}) [paused]", self.snapshot.tick)
        } else {
            format!("Tank (Tick: {})", self.snapshot.tick)
        };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .render(area, buf);

        let inner = Self::get_inner_area(area);
        buf.set_style(inner, Style::default().bg(WATER));

        for food in &self.snapshot.food {
            self.draw_food(food, area, buf);
        }
        for fish in &self.snapshot.fish {
            self.draw_fish(fish, area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fishtank_data::FishId;

    fn area() -> Rect {
        Rect::new(0, 0, 42, 22)
    }

    #[test]
    fn test_viewport_scales_inner_area() {
        let vp = TankWidget::viewport_for_area(area());
        assert_eq!(vp.width, 40.0 * CELL_WIDTH);
        assert_eq!(vp.height, 20.0 * CELL_HEIGHT);
    }

    #[test]
    fn test_border_clicks_are_ignored() {
        assert_eq!(TankWidget::screen_to_tank(0, 5, area()), None);
        assert_eq!(TankWidget::screen_to_tank(41, 5, area()), None);
    }

    #[test]
    fn test_click_round_trips_to_same_cell() {
        let (x, y) = TankWidget::screen_to_tank(10, 7, area()).expect("inside");
        assert_eq!(TankWidget::tank_to_screen(x, y, area()), Some((10, 7)));
    }

    #[test]
    fn test_far_edge_maps_to_last_cell() {
        let vp = TankWidget::viewport_for_area(area());
        assert_eq!(
            TankWidget::tank_to_screen(vp.width, vp.height, area()),
            Some((40, 20))
        );
        assert_eq!(TankWidget::tank_to_screen(-1.0, 0.0, area()), None);
    }

    #[test]
    fn test_glyph_grows_with_size() {
        let mut fish = Fish::new(FishId(1), 0.0, 0.0);
        assert_eq!(TankWidget::glyph_for_fish(&fish), "><>");
        fish.size = 2.2;
        assert_eq!(TankWidget::glyph_for_fish(&fish), "><((°>");
    }
}
