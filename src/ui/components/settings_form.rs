use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::settings::{Settings, SettingsError};
use crate::ui::theme::Theme;

/// Menu rows, in display order. `Start` is the action row at the bottom.
pub const ROW_CATEGORY: usize = 0;
pub const ROW_LEARNING_MODE: usize = 1;
pub const ROW_LETTER_CASE: usize = 2;
pub const ROW_ORDER: usize = 3;
pub const ROW_LANGUAGE: usize = 4;
pub const ROW_NUMBER_MIN: usize = 5;
pub const ROW_NUMBER_MAX: usize = 6;
pub const ROW_REQUIRE_ENTER: usize = 7;
pub const ROW_START: usize = 8;
pub const ROW_COUNT: usize = 9;

/// The settings menu: one row per option, arrow navigation, left/right
/// cycling, Start at the bottom. Mirrors the original menu's selectors.
pub struct SettingsForm<'a> {
    pub settings: &'a Settings,
    pub selected: usize,
    pub error: Option<&'a SettingsError>,
    pub theme: &'a Theme,
}

impl<'a> SettingsForm<'a> {
    pub fn new(
        settings: &'a Settings,
        selected: usize,
        error: Option<&'a SettingsError>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            settings,
            selected,
            error,
            theme,
        }
    }

    fn value_text(&self, row: usize) -> String {
        let s = self.settings;
        match row {
            ROW_CATEGORY => format!("< {} >", s.category.label()),
            ROW_LEARNING_MODE => format!("< {} >", s.learning_mode.label()),
            ROW_LETTER_CASE => {
                if s.letter_case_pinned() {
                    format!("{} (pinned)", s.effective_letter_case().label())
                } else {
                    format!("< {} >", s.letter_case.label())
                }
            }
            ROW_ORDER => format!("< {} >", s.order.label()),
            ROW_LANGUAGE => format!("< {} >", s.language.label()),
            ROW_NUMBER_MIN => format!("< {} >", s.number_min),
            ROW_NUMBER_MAX => format!("< {} >", s.number_max),
            ROW_REQUIRE_ENTER => format!("< {} >", if s.require_enter { "On" } else { "Off" }),
            _ => String::new(),
        }
    }

    fn label_text(row: usize) -> &'static str {
        match row {
            ROW_CATEGORY => "What to learn",
            ROW_LEARNING_MODE => "Learning mode",
            ROW_LETTER_CASE => "Letter case",
            ROW_ORDER => "Order",
            ROW_LANGUAGE => "Language",
            ROW_NUMBER_MIN => "Numbers from",
            ROW_NUMBER_MAX => "Numbers to",
            ROW_REQUIRE_ENTER => "Check with Enter",
            ROW_START => "Start Learning!",
            _ => "",
        }
    }

    /// Rows that do nothing for the current settings are shown dimmed: the
    /// number range only matters when numbers are active, letter rows only
    /// when letters are.
    fn row_active(&self, row: usize) -> bool {
        let s = self.settings;
        match row {
            ROW_LETTER_CASE => s.category.includes_letters() && !s.letter_case_pinned(),
            ROW_LEARNING_MODE | ROW_LANGUAGE => s.category.includes_letters(),
            ROW_NUMBER_MIN | ROW_NUMBER_MAX => s.category.includes_numbers(),
            _ => true,
        }
    }
}

impl Widget for SettingsForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Keyboard Fun! ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.card_bg()));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(ROW_COUNT as u16 * 2),
                Constraint::Min(0),
                Constraint::Length(2),
            ])
            .split(inner);

        let header = Paragraph::new(Line::from(Span::styled(
            "Learn letters & numbers",
            Style::default().fg(colors.hint()),
        )))
        .alignment(Alignment::Center);
        header.render(layout[0], buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2); ROW_COUNT])
            .split(layout[1]);

        for row in 0..ROW_COUNT {
            let is_selected = row == self.selected;
            let active = self.row_active(row);
            let indicator = if is_selected { " > " } else { "   " };

            let label_style = Style::default()
                .fg(if is_selected {
                    colors.accent()
                } else if active {
                    colors.fg()
                } else {
                    colors.hint()
                })
                .add_modifier(if is_selected {
                    Modifier::BOLD
                } else {
                    Modifier::empty()
                });

            let line = if row == ROW_START {
                Line::from(Span::styled(
                    format!("{indicator}✦ {} ✦", Self::label_text(row)),
                    label_style,
                ))
            } else {
                Line::from(vec![
                    Span::styled(format!("{indicator}{:<18}", Self::label_text(row)), label_style),
                    Span::styled(
                        self.value_text(row),
                        Style::default().fg(if active { colors.fg() } else { colors.hint() }),
                    ),
                ])
            };

            Paragraph::new(line).render(rows[row], buf);
        }

        if let Some(error) = self.error {
            let msg = Paragraph::new(Line::from(Span::styled(
                format!("  {error}"),
                Style::default()
                    .fg(colors.error())
                    .add_modifier(Modifier::BOLD),
            )));
            msg.render(layout[2], buf);
        }

        let footer = Paragraph::new(Line::from(Span::styled(
            "  [↑↓] Choose  [←→] Change  [Enter] Start  [q] Quit",
            Style::default().fg(colors.hint()),
        )));
        footer.render(layout[3], buf);
    }
}
