use crate::settings::LearningMode;

/// Classification of the current target, computed once per draw instead of
/// re-checking string prefixes on every keystroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Letter,
    Number,
    NegativeNumber,
}

impl TargetKind {
    pub fn classify(target: &str) -> Self {
        if target.starts_with('-') {
            TargetKind::NegativeNumber
        } else if !target.is_empty() && target.chars().all(|c| c.is_ascii_digit()) {
            TargetKind::Number
        } else {
            TargetKind::Letter
        }
    }

    pub fn is_negative(self) -> bool {
        self == TargetKind::NegativeNumber
    }
}

/// Whether the learner must hold Shift to reproduce `target`.
///
/// Just-starting keycaps print uppercase, so Shift is what unlocks lowercase;
/// keyboard-lessons follows real keyboard case behavior.
pub fn requires_shift(target: &str, mode: LearningMode) -> bool {
    match mode {
        LearningMode::JustStarting => target.chars().any(is_lowercase_letter),
        LearningMode::KeyboardLessons => {
            target.chars().any(|c| c.is_ascii_uppercase() || c == 'Ñ')
        }
    }
}

pub(crate) fn is_lowercase_letter(c: char) -> bool {
    c.is_ascii_lowercase() || c == 'ñ'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(TargetKind::classify("A"), TargetKind::Letter);
        assert_eq!(TargetKind::classify("ñ"), TargetKind::Letter);
        assert_eq!(TargetKind::classify("7"), TargetKind::Number);
        assert_eq!(TargetKind::classify("42"), TargetKind::Number);
        assert_eq!(TargetKind::classify("-3"), TargetKind::NegativeNumber);
        assert!(TargetKind::classify("-12").is_negative());
    }

    #[test]
    fn test_just_starting_needs_shift_for_lowercase_only() {
        assert!(requires_shift("a", LearningMode::JustStarting));
        assert!(requires_shift("ñ", LearningMode::JustStarting));
        assert!(!requires_shift("A", LearningMode::JustStarting));
        assert!(!requires_shift("Ñ", LearningMode::JustStarting));
        assert!(!requires_shift("5", LearningMode::JustStarting));
    }

    #[test]
    fn test_keyboard_lessons_needs_shift_for_uppercase_only() {
        assert!(requires_shift("A", LearningMode::KeyboardLessons));
        assert!(requires_shift("Ñ", LearningMode::KeyboardLessons));
        assert!(!requires_shift("a", LearningMode::KeyboardLessons));
        assert!(!requires_shift("ñ", LearningMode::KeyboardLessons));
        assert!(!requires_shift("5", LearningMode::KeyboardLessons));
    }
}
