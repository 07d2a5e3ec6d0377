use crate::session::target::{self, TargetKind};
use crate::settings::{LearningMode, Settings};

/// A key press after the interaction surface has filtered it: a single
/// character, or one of the two special actions. Bare modifier presses and
/// multi-character keys never get this far.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPress {
    Char(char),
    Backspace,
    Enter,
}

/// Result of interpreting one character key against the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interpretation {
    /// The new pending input, replacing the old one.
    pub pending: String,
    /// Whether an auto-submit deadline should be armed for this input.
    pub arm_auto_submit: bool,
}

/// Map a raw key plus shift state to the canonical displayed character for a
/// non-negative target. This is the whole shift policy in one place.
pub fn canonicalize(key: char, shift: bool, target: &str, mode: LearningMode) -> String {
    match mode {
        LearningMode::JustStarting => {
            // Keycaps print uppercase. Only a lowercase target makes Shift
            // meaningful; anything else always lands uppercase.
            if target.chars().any(target::is_lowercase_letter) {
                if shift {
                    key.to_lowercase().to_string()
                } else {
                    key.to_uppercase().to_string()
                }
            } else {
                key.to_uppercase().to_string()
            }
        }
        LearningMode::KeyboardLessons => {
            if shift {
                key.to_uppercase().to_string()
            } else {
                key.to_lowercase().to_string()
            }
        }
    }
}

/// Interpret a single character key.
///
/// With `require_enter` the key is recorded literally and evaluation waits
/// for an explicit Enter. In auto-submit mode a negative target accepts a
/// leading `-` without arming the deadline (the digit is still to come);
/// every other path arms it.
pub fn interpret_char(
    key: char,
    shift: bool,
    target: &str,
    kind: TargetKind,
    pending: &str,
    settings: &Settings,
) -> Interpretation {
    if settings.require_enter {
        return Interpretation {
            pending: key.to_string(),
            arm_auto_submit: false,
        };
    }

    if kind.is_negative() {
        if key == '-' {
            return Interpretation {
                pending: "-".to_string(),
                arm_auto_submit: false,
            };
        }
        let pending = if pending == "-" {
            format!("-{key}")
        } else {
            key.to_string()
        };
        return Interpretation {
            pending,
            arm_auto_submit: true,
        };
    }

    Interpretation {
        pending: canonicalize(key, shift, target, settings.learning_mode),
        arm_auto_submit: true,
    }
}
