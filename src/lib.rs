//! Hangman Canvas core crate.
//!
//! A browser word-guessing game compiled to WASM: the page hands over a
//! canvas element and a word-service URL, calls [`Hangman::start`] to fetch a
//! word and draw the gallows, then feeds letter guesses through
//! [`Hangman::guess`]. Wrong guesses reveal the stick figure piece by piece;
//! six of them lose the round. The round state machine itself is pure Rust
//! ([`GameSession`]) and runs under native `cargo test`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlCanvasElement;

mod canvas;
mod error;
mod figure;
mod session;
mod words;

pub use canvas::CanvasSurface;
pub use error::GameError;
pub use figure::{BodyPart, DrawSurface};
pub use session::{GameSession, GuessOutcome};
pub use words::{parse_word_reply, WordReply, WordService};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// -----------------------------------------------------------------------------
// JS-facing wrapper
// -----------------------------------------------------------------------------

/// One game instance bound to a canvas. Construct once per page; call
/// `start()` for each new round.
#[wasm_bindgen]
pub struct Hangman {
    session: Rc<RefCell<GameSession<CanvasSurface>>>,
    words: Rc<WordService>,
    // Round-generation token: a later start() supersedes an earlier in-flight
    // fetch, whose result is dropped without committing.
    generation: Rc<Cell<u64>>,
}

#[wasm_bindgen]
impl Hangman {
    /// `word_service_url` is the base URL of the word endpoint; the
    /// difficulty is appended as a query parameter per round.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, word_service_url: String) -> Result<Hangman, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        Ok(Hangman {
            session: Rc::new(RefCell::new(GameSession::new(surface))),
            words: Rc::new(WordService::new(word_service_url)),
            generation: Rc::new(Cell::new(0)),
        })
    }

    /// Begin a new round: fetch a word for `difficulty`, reset state, draw
    /// the gallows, then invoke `on_ready` with `null` on success or an error
    /// message string on failure. On failure the previous state is kept, so
    /// guessing against a half-started round is impossible.
    pub fn start(&self, difficulty: String, on_ready: js_sys::Function) {
        let round = self.generation.get() + 1;
        self.generation.set(round);

        let generation = Rc::clone(&self.generation);
        let session = Rc::clone(&self.session);
        let words = Rc::clone(&self.words);
        spawn_local(async move {
            web_sys::console::log_1(
                &format!(
                    "[hangman] fetching '{difficulty}' word from {}",
                    words.base_url()
                )
                .into(),
            );
            let fetched = words.random_word(&difficulty).await;
            if generation.get() != round {
                web_sys::console::log_1(
                    &format!("[hangman] round {round} superseded, dropping fetch result").into(),
                );
                return;
            }
            let committed = fetched.and_then(|word| session.borrow_mut().begin_round(&word));
            let arg = match committed {
                Ok(()) => JsValue::NULL,
                Err(err) => {
                    web_sys::console::warn_1(&format!("[hangman] start failed: {err}").into());
                    JsValue::from_str(&err.to_string())
                }
            };
            let _ = on_ready.call1(&JsValue::NULL, &arg);
        });
    }

    /// Record one letter guess. Throws (as a JS string) on invalid input,
    /// duplicates, guessing before `start()` or after the round ended.
    pub fn guess(&self, letter: &str) -> Result<(), JsValue> {
        self.session.borrow_mut().guess(letter)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = getWordHolderText)]
    pub fn get_word_holder_text(&self) -> String {
        self.session.borrow().word_holder_text()
    }

    #[wasm_bindgen(js_name = getGuessesText)]
    pub fn get_guesses_text(&self) -> String {
        self.session.borrow().guesses_text()
    }

    #[wasm_bindgen(getter, js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.session.borrow().is_over()
    }

    #[wasm_bindgen(getter, js_name = didWin)]
    pub fn did_win(&self) -> bool {
        self.session.borrow().did_win()
    }

    #[wasm_bindgen(getter, js_name = wrongCount)]
    pub fn wrong_count(&self) -> u8 {
        self.session.borrow().wrong_count()
    }

    /// The secret word, for the end-of-round reveal.
    pub fn word(&self) -> String {
        self.session.borrow().word().to_string()
    }
}
