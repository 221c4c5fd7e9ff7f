use serde::Deserialize;

use crate::data::{CardItem, Deck, DeckError};

/// Public API: parse stored-deck JSON (the host format:
/// `{ "name"?, "cards": [{ "image", "title"?, "description"? }, ...] }`)
/// into the core [`Deck`].
///
/// Notes:
/// - `name` is optional and defaults to empty.
/// - `title` and `description` default to empty strings; `image` is required.
/// - The parsed deck is validated (at least one card) before returning.
pub fn parse_stored_deck_json(s: &str) -> Result<Deck, DeckError> {
    let sd: StoredDeck = serde_json::from_str(s).map_err(|e| DeckError::Parse(e.to_string()))?;

    let cards: Vec<CardItem> = sd
        .cards
        .into_iter()
        .map(|c| CardItem {
            image: c.image,
            title: c.title,
            description: c.description,
        })
        .collect();

    let deck = Deck {
        name: sd.name.unwrap_or_default(),
        cards,
    };
    deck.validate_basic()?;
    Ok(deck)
}

#[derive(Deserialize)]
struct StoredDeck {
    #[serde(default)]
    name: Option<String>,
    cards: Vec<StoredCard>,
}

#[derive(Deserialize)]
struct StoredCard {
    image: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}
