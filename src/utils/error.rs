use crate::core::data::Word;
use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Unsupported character {character:?} at index {index} of {word} word")]
    UnsupportedCharacter {
        character: char,
        word: Word,
        index: usize,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the crate
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Whether this error comes from input outside the letter table
    pub fn is_unsupported_character(&self) -> bool {
        matches!(self, AppError::UnsupportedCharacter { .. })
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

pub fn report_error(err: &AppError) {
    match err {
        AppError::UnsupportedCharacter { .. } => {
            eprintln!("⚠️  {}", OutputStyle::warning(&err.to_string()));
        }
        AppError::Config(msg) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Config: {}", msg)));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}
