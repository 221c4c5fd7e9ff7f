//! Output contracts from the core engine.
//!
//! Outputs carry only the per-card target patches for this tick, plus a
//! separate list of semantic events. The host animation runtime springs each
//! card toward its patched fields; a `None` field keeps the runtime's
//! current interpolated value (sparse patch, not a full overwrite).

use serde::{Deserialize, Serialize};

/// Sparse visual target for one card.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CardTarget {
    /// Target vertical translation in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f32>,
    /// Target scale, within `[min_scale, max_scale]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

impl CardTarget {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset_y.is_none() && self.scale.is_none()
    }
}

/// One card's target patch for this tick.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Change {
    pub index: usize,
    pub target: CardTarget,
}

/// Discrete semantic signals emitted during a tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum StackEvent {
    /// A released gesture met the velocity threshold and moved the active
    /// index.
    TransitionCommitted { from: usize, to: usize },
}

/// Outputs returned by `Engine::on_gesture()`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub changes: Vec<Change>,
    #[serde(default)]
    pub events: Vec<StackEvent>,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.changes.clear();
        self.events.clear();
    }

    #[inline]
    pub fn push_change(&mut self, change: Change) {
        self.changes.push(change);
    }

    #[inline]
    pub fn push_event(&mut self, event: StackEvent) {
        self.events.push(event);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.events.is_empty()
    }

    /// Target patch for a given card index, if this tick produced one.
    pub fn target_for(&self, index: usize) -> Option<&CardTarget> {
        self.changes
            .iter()
            .find(|c| c.index == index)
            .map(|c| &c.target)
    }
}
