use thiserror::Error;

/// Errors raised by the suggestion engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No word in the candidate set is consistent with the feedback received.
    /// The session cannot continue once this is returned.
    #[error("no candidates remain after applying {feedback} for guess {guess}")]
    ExhaustedCandidates { guess: String, feedback: String },

    #[error("expected {expected} letters, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("invalid feedback symbol {0:?} (use G, Y or N)")]
    InvalidFeedbackSymbol(char),

    #[error("dictionary contains no words")]
    EmptyDictionary,

    #[error("word {word:?} does not have {expected} letters")]
    InconsistentWordLength { word: String, expected: usize },
}
