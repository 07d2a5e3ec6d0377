pub mod answer_card;
pub mod keyboard_panel;
pub mod prompt_card;
pub mod settings_form;
pub mod star_overlay;
