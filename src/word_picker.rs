pub mod error;
pub mod random_word_picker;
pub mod word_picker;
