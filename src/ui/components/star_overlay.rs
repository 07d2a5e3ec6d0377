use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::session::celebration::Star;
use crate::ui::theme::Theme;

/// Celebration stars, drawn over the whole lesson area. Star positions are
/// percentages; this scales them to the current terminal size.
pub struct StarOverlay<'a> {
    pub stars: &'a [Star],
    pub theme: &'a Theme,
}

impl<'a> StarOverlay<'a> {
    pub fn new(stars: &'a [Star], theme: &'a Theme) -> Self {
        Self { stars, theme }
    }
}

impl Widget for StarOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default()
            .fg(self.theme.colors.star())
            .add_modifier(Modifier::BOLD);

        for star in self.stars {
            let x = area.x + (star.x / 100.0 * f64::from(area.width.saturating_sub(1))) as u16;
            let y = area.y + (star.y / 100.0 * f64::from(area.height.saturating_sub(1))) as u16;
            if x < area.right() && y < area.bottom() {
                buf.set_string(x, y, "★", style);
            }
        }
    }
}
