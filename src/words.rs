//! Word-service client over the browser `fetch` API.
//!
//! The service is a plain GET endpoint taking a `difficulty` query parameter
//! and answering `{ "word": "<string>" }`. The base URL is injected at
//! construction so pages (and tests) can point at their own stub.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::GameError;

/// Reply body of the word service.
#[derive(Debug, Deserialize)]
pub struct WordReply {
    pub word: String,
}

pub struct WordService {
    base_url: String,
}

impl WordService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one random word for the given difficulty, lowercased. Any
    /// network failure, non-2xx status, malformed body or empty word maps to
    /// [`GameError::WordFetch`].
    pub async fn random_word(&self, difficulty: &str) -> Result<String, GameError> {
        let url = format!("{}?difficulty={}", self.base_url, difficulty);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request =
            Request::new_with_str_and_init(&url, &opts).map_err(|e| fetch_err("request", &e))?;

        let window = web_sys::window()
            .ok_or_else(|| GameError::WordFetch("no window available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| fetch_err("network", &e))?;
        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| fetch_err("response", &e))?;
        if !resp.ok() {
            return Err(GameError::WordFetch(format!("status {}", resp.status())));
        }

        let text_promise = resp.text().map_err(|e| fetch_err("body", &e))?;
        let text_value = JsFuture::from(text_promise)
            .await
            .map_err(|e| fetch_err("body", &e))?;
        let text = text_value.as_string().unwrap_or_default();

        parse_word_reply(&text)
    }
}

/// Decode the service reply and extract a usable word.
pub fn parse_word_reply(body: &str) -> Result<String, GameError> {
    let reply: WordReply = serde_json::from_str(body)
        .map_err(|e| GameError::WordFetch(format!("malformed reply: {e}")))?;
    let word = reply.word.trim().to_ascii_lowercase();
    if word.is_empty() {
        return Err(GameError::WordFetch("service returned no word".into()));
    }
    Ok(word)
}

fn fetch_err(stage: &str, err: &JsValue) -> GameError {
    let detail = err
        .as_string()
        .unwrap_or_else(|| format!("{err:?}"));
    GameError::WordFetch(format!("{stage}: {detail}"))
}
