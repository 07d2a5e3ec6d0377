use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::AUTO_SUBMIT_DELAY;
use crate::session::lesson::Feedback;
use crate::ui::theme::Theme;

/// The card showing the learner's pending input and, once evaluated, the
/// pass/fail feedback.
pub struct AnswerCard<'a> {
    pub pending_input: &'a str,
    pub feedback: Option<Feedback>,
    pub require_enter: bool,
    pub theme: &'a Theme,
}

impl<'a> AnswerCard<'a> {
    pub fn new(
        pending_input: &'a str,
        feedback: Option<Feedback>,
        require_enter: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            pending_input,
            feedback,
            require_enter,
            theme,
        }
    }
}

impl Widget for AnswerCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let border = match self.feedback {
            Some(Feedback::Correct) => colors.correct(),
            Some(Feedback::Incorrect) => colors.incorrect(),
            None => colors.border(),
        };
        let block = Block::bordered()
            .title(" Your answer ")
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(colors.card_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let pad = inner.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();

        let shown = if self.pending_input.is_empty() {
            "_"
        } else {
            self.pending_input
        };
        lines.push(Line::from(Span::styled(
            shown,
            Style::default()
                .fg(colors.fg())
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));

        match self.feedback {
            Some(Feedback::Correct) => lines.push(Line::from(Span::styled(
                "✓ Great job!",
                Style::default()
                    .fg(colors.correct())
                    .add_modifier(Modifier::BOLD),
            ))),
            Some(Feedback::Incorrect) => lines.push(Line::from(Span::styled(
                "✗ Try again",
                Style::default()
                    .fg(colors.incorrect())
                    .add_modifier(Modifier::BOLD),
            ))),
            None => {
                if self.require_enter {
                    lines.push(Line::from(Span::styled(
                        "Press Enter to check",
                        Style::default().fg(colors.hint()),
                    )));
                } else if !self.pending_input.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("Checking in {} second...", AUTO_SUBMIT_DELAY.as_secs()),
                        Style::default().fg(colors.hint()),
                    )));
                }
            }
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
