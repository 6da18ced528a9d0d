pub mod catalog;
pub mod tts;
