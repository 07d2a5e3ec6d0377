use clap::ValueEnum;
use thiserror::Error;

use crate::session::pool;

/// Which character pools feed the lesson.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Letters,
    Numbers,
    Both,
}

impl Category {
    pub fn includes_letters(self) -> bool {
        matches!(self, Category::Letters | Category::Both)
    }

    pub fn includes_numbers(self) -> bool {
        matches!(self, Category::Numbers | Category::Both)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Letters => "Letters",
            Category::Numbers => "Numbers",
            Category::Both => "Both",
        }
    }
}

/// Target selection policy.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    Random,
    Sequence,
}

impl Order {
    pub fn label(self) -> &'static str {
        match self {
            Order::Random => "Random",
            Order::Sequence => "In order",
        }
    }
}

/// Alphabet source. Spanish adds "Ñ" directly after "N".
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    English,
    Spanish,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
    Both,
}

impl LetterCase {
    pub fn label(self) -> &'static str {
        match self {
            LetterCase::Upper => "ABC",
            LetterCase::Lower => "abc",
            LetterCase::Both => "ABC + abc",
        }
    }
}

/// How Shift is interpreted during a lesson.
///
/// `JustStarting` mirrors what is printed on the keycaps: a bare press gives
/// the uppercase letter, Shift gives lowercase when the target is lowercase.
/// `KeyboardLessons` uses real keyboard semantics.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LearningMode {
    JustStarting,
    KeyboardLessons,
}

impl LearningMode {
    pub fn label(self) -> &'static str {
        match self {
            LearningMode::JustStarting => "Just starting",
            LearningMode::KeyboardLessons => "Keyboard lessons",
        }
    }
}

/// Bounds for the number-range fields on the menu.
pub const NUMBER_BOUND_MIN: i32 = -999;
pub const NUMBER_BOUND_MAX: i32 = 999;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("nothing to practice: number range {min} to {max} is empty and letters are off")]
    EmptyPool { min: i32, max: i32 },
}

/// One lesson run's configuration. Mutable on the menu screen, left untouched
/// while a lesson is running (the lesson screen never writes back to it).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub category: Category,
    pub order: Order,
    pub language: Language,
    pub letter_case: LetterCase,
    pub learning_mode: LearningMode,
    pub number_min: i32,
    pub number_max: i32,
    pub require_enter: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: Category::Letters,
            order: Order::Random,
            language: Language::English,
            letter_case: LetterCase::Upper,
            learning_mode: LearningMode::JustStarting,
            number_min: 1,
            number_max: 10,
            require_enter: false,
        }
    }
}

impl Settings {
    /// Letter case with the just-starting pin applied. The menu keeps the
    /// stored value pinned too; this is the value the rest of the app reads.
    pub fn effective_letter_case(&self) -> LetterCase {
        if self.learning_mode == LearningMode::JustStarting {
            LetterCase::Upper
        } else {
            self.letter_case
        }
    }

    /// Whether the letter-case row on the menu can be changed at all.
    pub fn letter_case_pinned(&self) -> bool {
        self.learning_mode == LearningMode::JustStarting
    }

    /// Checked before a lesson starts. Drawing from an empty pool is never
    /// allowed to happen mid-lesson.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if pool::generate(self).is_empty() {
            return Err(SettingsError::EmptyPool {
                min: self.number_min,
                max: self.number_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_menu_initial_state() {
        let s = Settings::default();
        assert_eq!(s.category, Category::Letters);
        assert_eq!(s.order, Order::Random);
        assert_eq!(s.language, Language::English);
        assert_eq!(s.letter_case, LetterCase::Upper);
        assert_eq!(s.learning_mode, LearningMode::JustStarting);
        assert_eq!((s.number_min, s.number_max), (1, 10));
        assert!(!s.require_enter);
    }

    #[test]
    fn test_letter_case_pinned_while_just_starting() {
        let mut s = Settings {
            letter_case: LetterCase::Both,
            ..Settings::default()
        };
        assert!(s.letter_case_pinned());
        assert_eq!(s.effective_letter_case(), LetterCase::Upper);

        s.learning_mode = LearningMode::KeyboardLessons;
        assert!(!s.letter_case_pinned());
        assert_eq!(s.effective_letter_case(), LetterCase::Both);
    }

    #[test]
    fn test_validate_rejects_empty_number_range_without_letters() {
        let s = Settings {
            category: Category::Numbers,
            number_min: 5,
            number_max: 2,
            ..Settings::default()
        };
        assert_eq!(
            s.validate(),
            Err(SettingsError::EmptyPool { min: 5, max: 2 })
        );
    }

    #[test]
    fn test_validate_accepts_inverted_range_when_letters_active() {
        // Letters alone still give a playable pool.
        let s = Settings {
            category: Category::Both,
            number_min: 5,
            number_max: 2,
            ..Settings::default()
        };
        assert!(s.validate().is_ok());
    }
}
