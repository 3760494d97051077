//! Outgoing reply accumulator.
//!
//! A [`Reply`] is owned exclusively by one turn. States write into it
//! through the setters; a later `set_text` overwrites an earlier one,
//! which the dialog engine relies on in a few places.

use serde::{Deserialize, Serialize};

/// A suggestion chip shown under the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    /// Hide the chip after the user taps it.
    pub hide: bool,
}

impl Suggestion {
    pub fn new(title: impl Into<String>, hide: bool) -> Self {
        Self {
            title: title.into(),
            hide,
        }
    }
}

/// A large image card attached to the reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCard {
    pub image_id: String,
    pub title: String,
}

/// Mutable accumulator for one outgoing turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reply {
    pub text: Option<String>,
    pub end_session: bool,
    pub suggestions: Vec<Suggestion>,
    pub image: Option<ImageCard>,
}

impl Reply {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply text, replacing any earlier text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn end_session(&mut self) {
        self.end_session = true;
    }

    pub fn add_suggestion(&mut self, suggestion: Suggestion) {
        self.suggestions.push(suggestion);
    }

    pub fn set_image(&mut self, image: ImageCard) {
        self.image = Some(image);
    }
}
