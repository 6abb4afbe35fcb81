//! Error types shared by the game core and the word-service client.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong during a round. All variants are recoverable:
/// the caller is expected to surface the message and let the player try again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess input was not exactly one ASCII letter.
    #[error("guess must be a single letter a-z")]
    InvalidGuess,

    /// The letter (after lowercasing) was already guessed this round.
    #[error("letter '{0}' was already guessed")]
    DuplicateGuess(char),

    /// The round has ended; start a new one before guessing again.
    #[error("the round is already over")]
    RoundOver,

    /// No round has been successfully started yet.
    #[error("no round in progress")]
    NotStarted,

    /// The word service call failed or returned no usable word.
    #[error("word fetch failed: {0}")]
    WordFetch(String),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> JsValue {
        JsValue::from_str(&err.to_string())
    }
}
