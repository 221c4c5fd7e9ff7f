//! Core configuration for swipedeck-core.

use serde::{Deserialize, Serialize};

/// Tunables for scale interpolation, commit detection, and drag bounds.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scale of a fully backgrounded card.
    pub min_scale: f32,
    /// Scale of the active card at rest.
    pub max_scale: f32,
    /// Release velocity at or above which a gesture commits a transition.
    pub release_velocity: f32,
    /// Fraction of the card height the drag may travel upward before the
    /// rubberband engages (`top = -card_height * top_bound_factor`).
    pub top_bound_factor: f32,
    /// Elastic constant for out-of-bounds overshoot.
    pub rubberband: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_scale: 0.9,
            max_scale: 1.0,
            release_velocity: 0.2,
            top_bound_factor: 0.9,
            rubberband: 0.15,
        }
    }
}
