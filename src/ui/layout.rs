use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutTier {
    Wide,   // ≥80 cols: prompt and answer cards side by side
    Narrow, // <80 cols: cards stacked
}

impl LayoutTier {
    pub fn from_area(area: Rect) -> Self {
        if area.width >= 80 {
            LayoutTier::Wide
        } else {
            LayoutTier::Narrow
        }
    }

    pub fn show_keyboard(&self, height: u16) -> bool {
        height >= 22
    }
}

pub struct LessonLayout {
    pub header: Rect,
    pub prompt: Rect,
    pub answer: Rect,
    pub keyboard: Option<Rect>,
    pub footer: Rect,
    pub tier: LayoutTier,
}

impl LessonLayout {
    pub fn new(area: Rect) -> Self {
        let tier = LayoutTier::from_area(area);
        let show_kbd = tier.show_keyboard(area.height);

        let mut constraints = vec![Constraint::Length(1), Constraint::Min(8)];
        if show_kbd {
            constraints.push(Constraint::Length(8));
        }
        constraints.push(Constraint::Length(1));

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        let (prompt, answer) = match tier {
            LayoutTier::Wide => {
                let cards = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(vertical[1]);
                (cards[0], cards[1])
            }
            LayoutTier::Narrow => {
                let cards = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(vertical[1]);
                (cards[0], cards[1])
            }
        };

        let (keyboard, footer) = if show_kbd {
            (Some(vertical[2]), vertical[3])
        } else {
            (None, vertical[2])
        };

        Self {
            header: vertical[0],
            prompt,
            answer,
            keyboard,
            footer,
            tier,
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let target_w = (area.width.saturating_mul(percent_x.min(100)) / 100).min(area.width);
    let target_h = (area.height.saturating_mul(percent_y.min(100)) / 100).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}
