//! Input contracts for the core engine.
//!
//! The gesture layer (pointer/touch capture) builds one `GestureSample` per
//! drag update and passes it into `Engine::on_gesture()`, both while the
//! pointer is down and on release. Samples arrive as a serialized stream on
//! the UI thread; the engine never sees raw pointer events.

use serde::{Deserialize, Serialize};

/// One drag update, pre-clamped/rubberbanded by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureSample {
    /// Index of the card the pointer landed on at gesture start.
    pub card_index: usize,
    /// Whether the pointer is currently down; `false` marks the release tick.
    pub down: bool,
    /// Cumulative (dx, dy) since gesture start, in pixels.
    pub movement: [f32; 2],
    /// Scalar velocity magnitude of the drag.
    pub velocity: f32,
    /// Clamped/rubberbanded (dx, dy) from the input layer.
    #[serde(default)]
    pub offset: [f32; 2],
}

impl GestureSample {
    /// Vertical component of the cumulative movement.
    #[inline]
    pub fn movement_y(&self) -> f32 {
        self.movement[1]
    }
}
