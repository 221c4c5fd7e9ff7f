//! Card payloads and the deck they form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from deck construction and the stored-deck loader.
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck must contain at least one card")]
    EmptyDeck,
    #[error("stored deck parse error: {0}")]
    Parse(String),
}

/// Static display payload for one card (asset reference plus copy).
/// Owned by the deck, created at construction, never mutated by the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardItem {
    /// Asset reference the host resolves (URL, bundle key, ...).
    pub image: String,
    pub title: String,
    pub description: String,
}

/// Fixed ordered list of cards supplied at engine construction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub name: String,
    pub cards: Vec<CardItem>,
}

impl Deck {
    pub fn new(cards: Vec<CardItem>) -> Self {
        Self {
            name: String::new(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.cards.get(index)
    }

    /// Validate basic invariants (at least one card).
    pub fn validate_basic(&self) -> Result<(), DeckError> {
        if self.cards.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        Ok(())
    }
}
