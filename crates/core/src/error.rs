//! Statement error model.

use thiserror::Error;

/// Result type used across the statement pipeline.
pub type StatementResult<T> = Result<T, StatementError>;

/// Reasons a statement cannot be produced.
///
/// Both variants abort the whole statement: no component downgrades them to a
/// partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatementError {
    /// A performance references a play id absent from the catalog.
    #[error("play not found in catalog: {0}")]
    MissingPlay(String),

    /// The pricing rules have no entry for the play's genre.
    #[error("unknown genre: {0}")]
    UnknownGenre(String),
}

impl StatementError {
    pub fn missing_play(play_id: impl Into<String>) -> Self {
        Self::MissingPlay(play_id.into())
    }

    pub fn unknown_genre(genre: impl Into<String>) -> Self {
        Self::UnknownGenre(genre.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_value() {
        assert_eq!(
            StatementError::missing_play("hamlet").to_string(),
            "play not found in catalog: hamlet"
        );
        assert_eq!(
            StatementError::unknown_genre("history").to_string(),
            "unknown genre: history"
        );
    }
}
