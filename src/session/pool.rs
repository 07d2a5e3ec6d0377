use rand::Rng;

use crate::settings::{Language, LetterCase, Order, Settings};

pub const ENGLISH_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Ñ sits directly after N, as on Spanish alphabet charts.
pub const SPANISH_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Build the full ordered pool of valid targets for a configuration.
///
/// Letters come first (base case, then the lowercased run for `Both`), numbers
/// follow in ascending order. An inverted number range contributes nothing.
/// Duplicates are not removed; they only affect random-draw weighting.
pub fn generate(settings: &Settings) -> Vec<String> {
    let mut chars: Vec<String> = Vec::new();

    if settings.category.includes_letters() {
        let alphabet = match settings.language {
            Language::English => ENGLISH_ALPHABET,
            Language::Spanish => SPANISH_ALPHABET,
        };
        match settings.letter_case {
            LetterCase::Upper => chars.extend(alphabet.iter().map(char::to_string)),
            LetterCase::Lower => {
                chars.extend(alphabet.iter().map(|c| c.to_lowercase().to_string()));
            }
            LetterCase::Both => {
                chars.extend(alphabet.iter().map(char::to_string));
                chars.extend(alphabet.iter().map(|c| c.to_lowercase().to_string()));
            }
        }
    }

    if settings.category.includes_numbers() {
        for i in settings.number_min..=settings.number_max {
            chars.push(i.to_string());
        }
    }

    chars
}

/// Draws targets from a pool rebuilt fresh on every call.
///
/// `Sequence` keeps a session-scoped cursor that wraps around the pool;
/// `Random` draws independently each time. The cursor is reset exactly once,
/// when the lesson starts.
#[derive(Clone, Debug, Default)]
pub struct Picker {
    cursor: usize,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Returns `None` only for an empty pool, which `Settings::validate`
    /// rules out before a lesson begins.
    pub fn next<R: Rng>(&mut self, settings: &Settings, rng: &mut R) -> Option<String> {
        let pool = generate(settings);
        if pool.is_empty() {
            return None;
        }
        let index = match settings.order {
            Order::Random => rng.gen_range(0..pool.len()),
            Order::Sequence => {
                let index = self.cursor % pool.len();
                self.cursor = index + 1;
                index
            }
        };
        Some(pool[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Category;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn letters(language: Language, letter_case: LetterCase) -> Settings {
        Settings {
            category: Category::Letters,
            language,
            letter_case,
            ..Settings::default()
        }
    }

    #[test]
    fn test_english_uppercase_pool_is_the_26_latin_letters() {
        let pool = generate(&letters(Language::English, LetterCase::Upper));
        assert_eq!(pool.len(), 26);
        assert_eq!(pool.first().map(String::as_str), Some("A"));
        assert_eq!(pool.last().map(String::as_str), Some("Z"));
        let expected: Vec<String> = ('A'..='Z').map(|c| c.to_string()).collect();
        assert_eq!(pool, expected);
    }

    #[test]
    fn test_spanish_pool_places_enye_after_n() {
        let pool = generate(&letters(Language::Spanish, LetterCase::Upper));
        assert_eq!(pool.len(), 27);
        let n = pool.iter().position(|c| c == "N").unwrap();
        assert_eq!(pool[n + 1], "Ñ");
        assert_eq!(pool.iter().filter(|c| c.as_str() == "Ñ").count(), 1);
    }

    #[test]
    fn test_spanish_both_cases_keeps_lowercase_enye_after_lowercase_n() {
        let pool = generate(&letters(Language::Spanish, LetterCase::Both));
        assert_eq!(pool.len(), 54);
        let n = pool.iter().position(|c| c == "n").unwrap();
        assert_eq!(pool[n + 1], "ñ");
    }

    #[test]
    fn test_both_cases_lists_uppercase_run_then_lowercase_run() {
        let pool = generate(&letters(Language::English, LetterCase::Both));
        assert_eq!(pool.len(), 52);
        assert_eq!(pool[0], "A");
        assert_eq!(pool[26], "a");
        assert_eq!(pool[51], "z");
    }

    #[test]
    fn test_number_suffix_is_ascending_and_sized_by_range() {
        let settings = Settings {
            category: Category::Numbers,
            number_min: -3,
            number_max: 4,
            ..Settings::default()
        };
        let pool = generate(&settings);
        assert_eq!(pool.len(), 8);
        let values: Vec<i32> = pool.iter().map(|s| s.parse().unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(values[0], -3);
        assert_eq!(values[7], 4);
    }

    #[test]
    fn test_inverted_number_range_contributes_nothing() {
        let settings = Settings {
            category: Category::Numbers,
            number_min: 10,
            number_max: 1,
            ..Settings::default()
        };
        assert!(generate(&settings).is_empty());
    }

    #[test]
    fn test_both_categories_concatenate_letters_then_numbers() {
        let settings = Settings {
            category: Category::Both,
            number_min: 1,
            number_max: 2,
            ..Settings::default()
        };
        let pool = generate(&settings);
        assert_eq!(pool.len(), 28);
        assert_eq!(pool[25], "Z");
        assert_eq!(pool[26], "1");
        assert_eq!(pool[27], "2");
    }

    #[test]
    fn test_sequence_draws_are_a_cyclic_walk() {
        let settings = Settings {
            category: Category::Numbers,
            order: Order::Sequence,
            number_min: 1,
            number_max: 3,
            ..Settings::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let mut picker = Picker::new();
        let drawn: Vec<String> = (0..7)
            .map(|_| picker.next(&settings, &mut rng).unwrap())
            .collect();
        assert_eq!(drawn, ["1", "2", "3", "1", "2", "3", "1"]);
    }

    #[test]
    fn test_sequence_cursor_resets_at_lesson_start() {
        let settings = Settings {
            category: Category::Numbers,
            order: Order::Sequence,
            number_min: 1,
            number_max: 3,
            ..Settings::default()
        };
        let mut rng = SmallRng::seed_from_u64(7);
        let mut picker = Picker::new();
        picker.next(&settings, &mut rng);
        picker.next(&settings, &mut rng);
        picker.reset();
        assert_eq!(picker.next(&settings, &mut rng).as_deref(), Some("1"));
    }

    #[test]
    fn test_random_draws_stay_inside_the_pool() {
        let settings = Settings {
            category: Category::Numbers,
            number_min: 1,
            number_max: 5,
            ..Settings::default()
        };
        let mut rng = SmallRng::seed_from_u64(42);
        let mut picker = Picker::new();
        for _ in 0..50 {
            let drawn = picker.next(&settings, &mut rng).unwrap();
            let value: i32 = drawn.parse().unwrap();
            assert!((1..=5).contains(&value));
        }
    }

    #[test]
    fn test_empty_pool_is_reported_not_drawn_from() {
        let settings = Settings {
            category: Category::Numbers,
            number_min: 2,
            number_max: 1,
            ..Settings::default()
        };
        let mut rng = SmallRng::seed_from_u64(0);
        assert_eq!(Picker::new().next(&settings, &mut rng), None);
    }
}
