use crate::session::input::KeyPress;
use crate::settings::{LearningMode, Settings};

/// Character rows of the on-screen keyboard, mirroring the key caps a young
/// learner sees: digits on top, letters below, Ñ on the home row.
pub const KEY_ROWS: &[&[char]] = &[
    &['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'],
    &['Q', 'W', 'E', 'R', 'T', 'Y', 'U', 'I', 'O', 'P'],
    &['A', 'S', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'Ñ'],
    &['Z', 'X', 'C', 'V', 'B', 'N', 'M'],
];

/// One pressable key on the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelKey {
    Char(char),
    Shift,
    Backspace,
    Enter,
}

/// State of the on-screen keyboard: which rows are visible for the current
/// settings, where the highlight cursor sits, and whether Shift is latched.
///
/// Shift is a persistent toggle: it stays on until pressed again rather than
/// releasing after one character.
pub struct OnScreenKeyboard {
    rows: Vec<Vec<PanelKey>>,
    pub row: usize,
    pub col: usize,
    pub shift_latched: bool,
}

impl OnScreenKeyboard {
    /// Build the panel for a lesson. The number row appears only when the
    /// category includes numbers, letter rows only when it includes letters;
    /// the control row (Shift, Backspace, Enter) is always present.
    pub fn new(settings: &Settings) -> Self {
        let mut rows: Vec<Vec<PanelKey>> = Vec::new();
        for (i, row) in KEY_ROWS.iter().enumerate() {
            let visible = if i == 0 {
                settings.category.includes_numbers()
            } else {
                settings.category.includes_letters()
            };
            if visible {
                rows.push(row.iter().map(|&c| PanelKey::Char(c)).collect());
            }
        }
        rows.push(vec![PanelKey::Shift, PanelKey::Backspace, PanelKey::Enter]);

        Self {
            rows,
            row: 0,
            col: 0,
            shift_latched: false,
        }
    }

    pub fn rows(&self) -> &[Vec<PanelKey>] {
        &self.rows
    }

    pub fn selected(&self) -> PanelKey {
        self.rows[self.row][self.col]
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_col();
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.rows.len() {
            self.row += 1;
            self.clamp_col();
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.col + 1 < self.rows[self.row].len() {
            self.col += 1;
        }
    }

    fn clamp_col(&mut self) {
        let len = self.rows[self.row].len();
        if self.col >= len {
            self.col = len - 1;
        }
    }

    /// Press the highlighted key. Shift only toggles the latch; every other
    /// key emits the same `(key, shift)` pair a physical keystroke would.
    pub fn press(&mut self) -> Option<(KeyPress, bool)> {
        match self.selected() {
            PanelKey::Shift => {
                self.shift_latched = !self.shift_latched;
                None
            }
            PanelKey::Backspace => Some((KeyPress::Backspace, false)),
            PanelKey::Enter => Some((KeyPress::Enter, false)),
            PanelKey::Char(c) => Some((KeyPress::Char(c), self.shift_latched)),
        }
    }

    /// Cap label for a character key under the current latch state.
    /// Just-starting caps print uppercase and flip to lowercase under Shift;
    /// keyboard-lessons caps show what the key would actually produce.
    pub fn label(&self, key: char, mode: LearningMode) -> String {
        match mode {
            LearningMode::JustStarting => {
                if self.shift_latched {
                    key.to_lowercase().to_string()
                } else {
                    key.to_string()
                }
            }
            LearningMode::KeyboardLessons => {
                if self.shift_latched {
                    key.to_string()
                } else {
                    key.to_lowercase().to_string()
                }
            }
        }
    }
}
