use std::time::Instant;

use crate::keyboard::OnScreenKeyboard;
use crate::session::input::KeyPress;
use crate::session::lesson::LessonState;
use crate::settings::{
    Category, Language, LearningMode, LetterCase, NUMBER_BOUND_MAX, NUMBER_BOUND_MIN, Order,
    Settings, SettingsError,
};
use crate::ui::components::settings_form;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Lesson,
}

pub struct App {
    pub screen: Screen,
    pub settings: Settings,
    pub lesson: Option<LessonState>,
    pub keyboard: OnScreenKeyboard,
    pub keyboard_focused: bool,
    pub menu_selected: usize,
    pub settings_error: Option<SettingsError>,
    pub theme: &'static Theme,
    pub should_quit: bool,
    seed: Option<u64>,
}

impl App {
    pub fn new(theme: &'static Theme, settings: Settings, seed: Option<u64>) -> Self {
        let keyboard = OnScreenKeyboard::new(&settings);
        Self {
            screen: Screen::Menu,
            settings,
            lesson: None,
            keyboard,
            keyboard_focused: false,
            menu_selected: 0,
            settings_error: None,
            theme,
            should_quit: false,
            seed,
        }
    }

    /// Validate the settings and enter the lesson screen. An empty pool is
    /// reported on the menu instead of starting.
    pub fn start_lesson(&mut self) {
        match LessonState::new(&self.settings, self.seed) {
            Ok(lesson) => {
                self.lesson = Some(lesson);
                self.keyboard = OnScreenKeyboard::new(&self.settings);
                self.keyboard_focused = false;
                self.settings_error = None;
                self.screen = Screen::Lesson;
            }
            Err(err) => {
                self.settings_error = Some(err);
            }
        }
    }

    /// Drop all lesson state (pending input, feedback, stars, deadlines) and
    /// return to the menu. Stored settings are untouched.
    pub fn exit_lesson(&mut self) {
        self.lesson = None;
        self.keyboard_focused = false;
        self.screen = Screen::Menu;
    }

    pub fn lesson_key(&mut self, press: KeyPress, shift: bool, now: Instant) {
        if let Some(ref mut lesson) = self.lesson {
            lesson.key(press, shift, &self.settings, now);
        }
    }

    /// Press the highlighted on-screen key, feeding it through the same
    /// interpreter as physical input.
    pub fn press_on_screen_key(&mut self, now: Instant) {
        if let Some((press, shift)) = self.keyboard.press() {
            self.lesson_key(press, shift, now);
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        if let Some(ref mut lesson) = self.lesson {
            lesson.tick(&self.settings, now);
        }
    }

    pub fn menu_up(&mut self) {
        if self.menu_selected > 0 {
            self.menu_selected -= 1;
        } else {
            self.menu_selected = settings_form::ROW_COUNT - 1;
        }
    }

    pub fn menu_down(&mut self) {
        self.menu_selected = (self.menu_selected + 1) % settings_form::ROW_COUNT;
    }

    pub fn menu_cycle_forward(&mut self) {
        self.cycle(true);
    }

    pub fn menu_cycle_backward(&mut self) {
        self.cycle(false);
    }

    fn cycle(&mut self, forward: bool) {
        self.settings_error = None;
        let s = &mut self.settings;
        match self.menu_selected {
            settings_form::ROW_CATEGORY => {
                s.category = match (s.category, forward) {
                    (Category::Letters, true) => Category::Numbers,
                    (Category::Numbers, true) => Category::Both,
                    (Category::Both, true) => Category::Letters,
                    (Category::Letters, false) => Category::Both,
                    (Category::Numbers, false) => Category::Letters,
                    (Category::Both, false) => Category::Numbers,
                };
            }
            settings_form::ROW_LEARNING_MODE => {
                s.learning_mode = match s.learning_mode {
                    LearningMode::JustStarting => LearningMode::KeyboardLessons,
                    LearningMode::KeyboardLessons => LearningMode::JustStarting,
                };
                // The just-starting pin is enforced here, on the surface,
                // not inside the evaluator.
                if s.learning_mode == LearningMode::JustStarting {
                    s.letter_case = LetterCase::Upper;
                }
            }
            settings_form::ROW_LETTER_CASE => {
                if !s.letter_case_pinned() {
                    s.letter_case = match (s.letter_case, forward) {
                        (LetterCase::Upper, true) => LetterCase::Lower,
                        (LetterCase::Lower, true) => LetterCase::Both,
                        (LetterCase::Both, true) => LetterCase::Upper,
                        (LetterCase::Upper, false) => LetterCase::Both,
                        (LetterCase::Lower, false) => LetterCase::Upper,
                        (LetterCase::Both, false) => LetterCase::Lower,
                    };
                }
            }
            settings_form::ROW_ORDER => {
                s.order = match s.order {
                    Order::Random => Order::Sequence,
                    Order::Sequence => Order::Random,
                };
            }
            settings_form::ROW_LANGUAGE => {
                s.language = match s.language {
                    Language::English => Language::Spanish,
                    Language::Spanish => Language::English,
                };
            }
            settings_form::ROW_NUMBER_MIN => {
                s.number_min = step(s.number_min, forward);
            }
            settings_form::ROW_NUMBER_MAX => {
                s.number_max = step(s.number_max, forward);
            }
            settings_form::ROW_REQUIRE_ENTER => {
                s.require_enter = !s.require_enter;
            }
            _ => {}
        }
    }
}

fn step(value: i32, forward: bool) -> i32 {
    let next = if forward { value + 1 } else { value - 1 };
    next.clamp(NUMBER_BOUND_MIN, NUMBER_BOUND_MAX)
}
