//! Error types for bylines

use crate::domain::ids::{AuthorId, MagazineId};
use std::path::PathBuf;
use thiserror::Error;

/// A value broke one of the model's validation rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Article title must be between 5 and 50 characters, inclusive (got {length})")]
    TitleLength { length: usize },

    #[error("Author name must be a non-empty string")]
    EmptyAuthorName,

    #[error("Magazine name must be between 2 and 16 characters, inclusive (got {length})")]
    MagazineNameLength { length: usize },

    #[error("Magazine category cannot be empty")]
    EmptyCategory,
}

/// Main error type for bylines
#[derive(Debug, Error)]
pub enum BylinesError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown author id: {0}")]
    UnknownAuthor(AuthorId),

    #[error("Unknown magazine id: {0}")]
    UnknownMagazine(MagazineId),

    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    #[error("Magazine not found: {0}")]
    MagazineNotFound(String),

    #[error("No seed file found: {0}")]
    SeedNotFound(PathBuf),

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl BylinesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BylinesError::SeedNotFound(_) => 2,
            BylinesError::Validation(_) => 3,
            BylinesError::AuthorNotFound(_) | BylinesError::MagazineNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BylinesError::SeedNotFound(path) => {
                format!(
                    "No seed file found: {}\n\n\
                    Suggestions:\n\
                    • Pass a seed file explicitly: bylines --seed catalog.toml check\n\
                    • Create a bylines.toml in this directory or a parent\n\
                    • Set BYLINES_SEED environment variable to your seed path",
                    path.display()
                )
            }
            BylinesError::Validation(err) => {
                format!(
                    "Validation error: {}\n\n\
                    Rules:\n\
                    • Author names must not be empty\n\
                    • Magazine names are 2 to 16 characters, categories must not be empty\n\
                    • Article titles are 5 to 50 characters",
                    err
                )
            }
            BylinesError::AuthorNotFound(name) => {
                format!(
                    "Author not found: '{}'\n\n\
                    Suggestions:\n\
                    • Names are matched exactly, including case\n\
                    • Use 'bylines authors' to see known authors",
                    name
                )
            }
            BylinesError::MagazineNotFound(name) => {
                format!(
                    "Magazine not found: '{}'\n\n\
                    Suggestions:\n\
                    • Names are matched exactly, including case\n\
                    • Use 'bylines magazines' to see known magazines",
                    name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BylinesError
pub type Result<T> = std::result::Result<T, BylinesError>;
