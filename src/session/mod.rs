use std::time::Duration;

pub mod celebration;
pub mod input;
pub mod lesson;
pub mod pool;
pub mod target;

/// Idle delay before a typed answer is evaluated automatically.
pub const AUTO_SUBMIT_DELAY: Duration = Duration::from_millis(1000);
/// How long the "correct" feedback stays up before the next target appears.
pub const CORRECT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);
/// How long the "incorrect" feedback stays up before the retry.
pub const INCORRECT_FEEDBACK_DELAY: Duration = Duration::from_millis(1000);
/// How long celebration stars stay on screen.
pub const STARS_DISPLAY_DURATION: Duration = Duration::from_millis(2000);
