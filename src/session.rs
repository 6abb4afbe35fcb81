//! Round state machine: secret word, guess history, win/loss detection.
//!
//! A session is constructed once around a drawing surface; each round is
//! started by committing a fetched word via [`GameSession::begin_round`],
//! which fully resets the guess state and redraws the gallows. The async word
//! fetch itself lives in [`crate::words`] and the wasm wrapper in the crate
//! root, so everything here runs under native `cargo test`.

use crate::error::GameError;
use crate::figure::{self, BodyPart, DrawSurface};

const MAX_WRONG: u8 = 6;

/// Result of an accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Letter is in the word; round continues.
    Hit,
    /// Letter is in the word and completed it; round won.
    Won,
    /// Letter is not in the word; the segment for the new wrong count was drawn.
    Miss(BodyPart),
    /// Sixth wrong guess; round lost after drawing the final segment.
    Lost(BodyPart),
}

pub struct GameSession<S> {
    surface: S,
    word: Option<String>,
    guesses: Vec<char>,
    wrong_count: u8,
    is_over: bool,
    did_win: bool,
}

impl<S: DrawSurface> GameSession<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            word: None,
            guesses: Vec::new(),
            wrong_count: 0,
            is_over: false,
            did_win: false,
        }
    }

    /// Commit a fetched word and begin a fresh round: validate, lowercase,
    /// reset all guess state, clear the surface and draw the gallows.
    ///
    /// Rejecting the word leaves the previous state untouched, so a failed
    /// fetch can never strand the session mid-round with no word.
    pub fn begin_round(&mut self, word: &str) -> Result<(), GameError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(GameError::WordFetch("empty word".into()));
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::WordFetch(format!(
                "unusable word '{word}' from service"
            )));
        }
        self.word = Some(word.to_ascii_lowercase());
        self.guesses.clear();
        self.wrong_count = 0;
        self.is_over = false;
        self.did_win = false;
        figure::clear(&self.surface);
        figure::draw_gallows(&self.surface);
        Ok(())
    }

    /// Record one letter guess. Errors never mutate state; an accepted wrong
    /// guess draws exactly one new stick-figure segment.
    pub fn guess(&mut self, input: &str) -> Result<GuessOutcome, GameError> {
        let word = self.word.as_ref().ok_or(GameError::NotStarted)?;
        if self.is_over {
            return Err(GameError::RoundOver);
        }

        let mut chars = input.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_lowercase(),
            _ => return Err(GameError::InvalidGuess),
        };
        if self.guesses.contains(&letter) {
            return Err(GameError::DuplicateGuess(letter));
        }

        self.guesses.push(letter);

        if word.contains(letter) {
            // Win check scans the word against the full guess set; word length
            // and guess count are unrelated.
            let won = word.chars().all(|c| self.guesses.contains(&c));
            if won {
                self.is_over = true;
                self.did_win = true;
                return Ok(GuessOutcome::Won);
            }
            return Ok(GuessOutcome::Hit);
        }

        self.wrong_count += 1;
        let part = BodyPart::for_wrong_count(self.wrong_count)
            .unwrap_or(BodyPart::LeftLeg);
        figure::draw_part(&self.surface, part);
        if self.wrong_count >= MAX_WRONG {
            self.is_over = true;
            self.did_win = false;
            return Ok(GuessOutcome::Lost(part));
        }
        Ok(GuessOutcome::Miss(part))
    }

    /// Masked word display: one token per character, `_` for unguessed
    /// letters, single-space separated. Empty before the first round.
    pub fn word_holder_text(&self) -> String {
        let Some(word) = &self.word else {
            return String::new();
        };
        let tokens: Vec<String> = word
            .chars()
            .map(|c| {
                if self.guesses.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        tokens.join(" ")
    }

    /// Guess history display, e.g. `"Guesses: a, c"`. The prefix is emitted
    /// even with no guesses yet.
    pub fn guesses_text(&self) -> String {
        let joined: Vec<String> = self.guesses.iter().map(|c| c.to_string()).collect();
        format!("Guesses: {}", joined.join(", "))
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }

    pub fn did_win(&self) -> bool {
        self.did_win
    }

    pub fn wrong_count(&self) -> u8 {
        self.wrong_count
    }

    pub fn remaining_attempts(&self) -> u8 {
        MAX_WRONG - self.wrong_count
    }

    /// The secret word, for the end-of-round reveal. Empty until a round has
    /// been started.
    pub fn word(&self) -> &str {
        self.word.as_deref().unwrap_or("")
    }

    pub fn guessed_letters(&self) -> &[char] {
        &self.guesses
    }
}
