use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::keyboard::{OnScreenKeyboard, PanelKey};
use crate::settings::LearningMode;
use crate::ui::theme::Theme;

/// The on-screen keyboard, rendered as rows of key caps. When focused, the
/// highlight cursor shows which key Enter/Space will press.
pub struct KeyboardPanel<'a> {
    pub keyboard: &'a OnScreenKeyboard,
    pub learning_mode: LearningMode,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> KeyboardPanel<'a> {
    pub fn new(
        keyboard: &'a OnScreenKeyboard,
        learning_mode: LearningMode,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            keyboard,
            learning_mode,
            focused,
            theme,
        }
    }

    fn cap_text(&self, key: PanelKey) -> String {
        match key {
            PanelKey::Char(c) => format!("[ {} ]", self.keyboard.label(c, self.learning_mode)),
            PanelKey::Shift => {
                if self.keyboard.shift_latched {
                    "[ ⇧ Shift ON ]".to_string()
                } else {
                    "[ ⇧ Shift ]".to_string()
                }
            }
            PanelKey::Backspace => "[ ⌫ Clear ]".to_string(),
            PanelKey::Enter => "[ Enter ↵ ]".to_string(),
        }
    }
}

impl Widget for KeyboardPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let title = if self.focused {
            " Keyboard (arrows + Enter) "
        } else {
            " Keyboard (Tab to use) "
        };
        let border = if self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(title)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        for (row_idx, row) in self.keyboard.rows().iter().enumerate() {
            let y = inner.y + row_idx as u16;
            if y >= inner.bottom() {
                break;
            }

            let row_width: u16 = row
                .iter()
                .map(|&k| self.cap_text(k).chars().count() as u16 + 1)
                .sum();
            let mut x = inner.x + inner.width.saturating_sub(row_width) / 2;

            for (col_idx, &key) in row.iter().enumerate() {
                let cap = self.cap_text(key);
                let width = cap.chars().count() as u16;
                if x + width > inner.right() {
                    break;
                }

                let is_cursor =
                    self.focused && self.keyboard.row == row_idx && self.keyboard.col == col_idx;
                let is_latched_shift = key == PanelKey::Shift && self.keyboard.shift_latched;

                let style = if is_cursor {
                    Style::default()
                        .fg(colors.bg())
                        .bg(colors.accent())
                        .add_modifier(Modifier::BOLD)
                } else if is_latched_shift {
                    Style::default()
                        .fg(colors.bg())
                        .bg(colors.border_focused())
                } else {
                    Style::default().fg(colors.fg()).bg(colors.bg())
                };

                buf.set_string(x, y, &cap, style);
                x += width + 1;
            }
        }
    }
}
