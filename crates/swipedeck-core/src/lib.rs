//! Swipedeck Core (engine-agnostic)
//!
//! Gesture-to-animation-state engine for a vertically swipeable card stack.
//! The crate owns the stack state (active index, measured card height) and,
//! for each drag sample, computes a sparse visual target (offset, scale) per
//! card plus the discrete index-transition decision. Spring interpolation,
//! rendering, and pointer capture belong to the host; adapters pass
//! [`inputs::GestureSample`]s in and apply [`outputs::Outputs`] patches.

pub mod bounds;
pub mod config;
pub mod data;
pub mod engine;
pub mod inputs;
pub mod interp;
pub mod outputs;
pub mod stored_deck;

// Re-exports for consumers (adapters)
pub use bounds::{rubberband, rubberband_if_out_of_bounds, DragBounds};
pub use config::Config;
pub use data::{CardItem, Deck, DeckError};
pub use engine::Engine;
pub use inputs::GestureSample;
pub use outputs::{CardTarget, Change, Outputs, StackEvent};
pub use stored_deck::parse_stored_deck_json;
