use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// The card showing the character the learner has to reproduce, with a Shift
/// hint when the current mode demands it.
pub struct PromptCard<'a> {
    pub target: &'a str,
    pub requires_shift: bool,
    pub theme: &'a Theme,
}

impl<'a> PromptCard<'a> {
    pub fn new(target: &'a str, requires_shift: bool, theme: &'a Theme) -> Self {
        Self {
            target,
            requires_shift,
            theme,
        }
    }
}

impl Widget for PromptCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Type this! ")
            .border_style(Style::default().fg(colors.border()))
            .style(Style::default().bg(colors.card_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let pad = inner.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
        lines.push(Line::from(Span::styled(
            self.target,
            Style::default()
                .fg(colors.accent())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        if self.requires_shift {
            lines.push(Line::from(Span::styled(
                "Hold ⇧ Shift!",
                Style::default()
                    .fg(colors.fg())
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
