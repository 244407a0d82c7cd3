//! Error types for character selection

use thiserror::Error;

/// Input that matched none of the selection tokens
///
/// Always recoverable: the selector reports it and asks again. The display
/// text is the exact line shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown character")]
pub struct UnrecognizedSelection {
    /// The normalized input that was rejected
    pub input: String,
}

/// Failure of the selector's console, not of the player's choice
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("console IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before a character was chosen")]
    InputClosed,
}
