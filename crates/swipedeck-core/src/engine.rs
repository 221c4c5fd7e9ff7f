//! Engine: stack state ownership and the per-tick gesture decision.
//!
//! Methods:
//! - new, set_card_height, initial_targets, increase_scale, decrease_scale,
//!   on_gesture (the decision table), drag_bounds, constrain_offset,
//!   show_shadow

use crate::bounds::{rubberband_if_out_of_bounds, DragBounds};
use crate::config::Config;
use crate::data::{CardItem, Deck, DeckError};
use crate::inputs::GestureSample;
use crate::interp::range;
use crate::outputs::{CardTarget, Change, Outputs, StackEvent};

/// Where a card sits relative to the active index this tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Relation {
    Before,
    Active,
    After,
}

/// Vertical direction of the cumulative movement. Zero movement counts as
/// `Down`, so a motionless release lands in the revert-to-rest arm.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Direction {
    Up,
    Down,
}

/// Whether the pointer is still down or this tick is the release.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Phase {
    Dragging,
    Released,
}

/// Index transition decided by a release tick.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Commit {
    Decrement,
    Increment,
}

/// The stack engine. Owns the active index and the measured card height;
/// consumes drag samples and produces sparse per-card targets. The host
/// animation runtime owns the actual interpolated values and is never read
/// back.
#[derive(Debug)]
pub struct Engine {
    cfg: Config,
    deck: Deck,
    active_index: usize,
    card_height: f32,

    // Per-tick outputs
    outputs: Outputs,
}

impl Engine {
    /// Create an engine over a fixed deck. Rejects an empty deck.
    pub fn new(cfg: Config, deck: Deck) -> Result<Self, DeckError> {
        deck.validate_basic()?;
        Ok(Self {
            cfg,
            deck,
            active_index: 0,
            card_height: 0.0,
            outputs: Outputs::default(),
        })
    }

    #[inline]
    pub fn card_count(&self) -> usize {
        self.deck.len()
    }

    #[inline]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[inline]
    pub fn card_height(&self) -> f32 {
        self.card_height
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Display payload for a card index.
    pub fn card(&self, index: usize) -> Option<&CardItem> {
        self.deck.get(index)
    }

    /// Record the post-layout card height. Idempotent; layout measurement
    /// may fire more than once. Non-finite or non-positive heights mean
    /// "not ready" and are ignored.
    pub fn set_card_height(&mut self, height: f32) {
        if height.is_finite() && height > 0.0 {
            self.card_height = height;
        }
    }

    /// Whether a positive height has been measured yet.
    #[inline]
    pub fn is_measured(&self) -> bool {
        self.card_height > 0.0
    }

    /// At-rest targets the host seeds its springs with: every card on the
    /// track rest offset, only the active card at full scale.
    pub fn initial_targets(&mut self) -> &Outputs {
        self.outputs.clear();
        let rest = self.rest_offset();
        for i in 0..self.card_count() {
            let scale = if i == self.active_index {
                self.cfg.max_scale
            } else {
                self.cfg.min_scale
            };
            self.outputs.push_change(Change {
                index: i,
                target: CardTarget {
                    offset_y: Some(rest),
                    scale: Some(scale),
                },
            });
        }
        &self.outputs
    }

    /// Scale a backgrounded card approaches as the drag pulls it toward
    /// active. `None` means "the dragged card itself"; otherwise only the
    /// card immediately following the active one previews the transition,
    /// every other card stays pinned at `min_scale`.
    pub fn increase_scale(&self, drag_distance: f32, card_index: Option<usize>) -> f32 {
        match card_index {
            Some(i) if i != self.active_index + 1 => self.cfg.min_scale,
            _ => range(
                0.0,
                self.card_height,
                self.cfg.min_scale,
                self.cfg.max_scale,
                drag_distance.abs(),
            ),
        }
    }

    /// Scale the active card approaches as the drag pushes it away.
    pub fn decrease_scale(&self, drag_distance: f32) -> f32 {
        range(
            0.0,
            self.card_height,
            self.cfg.max_scale,
            self.cfg.min_scale,
            drag_distance.abs(),
        )
    }

    /// Vertical bound for the gesture layer; zero until height is measured.
    pub fn drag_bounds(&self) -> DragBounds {
        DragBounds {
            top: -self.card_height * self.cfg.top_bound_factor,
        }
    }

    /// Constrain a raw vertical drag offset to the drag bounds, with elastic
    /// overshoot past the top limit instead of a hard stop. The gesture
    /// layer calls this per pointer move; the result is what lands in
    /// `GestureSample::offset`. Passthrough until a height is measured.
    pub fn constrain_offset(&self, offset_y: f32) -> f32 {
        if !self.is_measured() {
            return offset_y;
        }
        let bounds = self.drag_bounds();
        rubberband_if_out_of_bounds(offset_y, bounds.top, f32::INFINITY, self.cfg.rubberband)
    }

    /// Only the active card and its immediate neighbors cast a shadow; the
    /// rest are fully covered by the stack.
    pub fn show_shadow(&self, index: usize) -> bool {
        index + 1 >= self.active_index && index <= self.active_index + 1
    }

    /// The per-tick decision function, called on every drag update (pointer
    /// down and on release). Computes a sparse target patch for every card
    /// and, on a qualifying release, commits the index transition.
    ///
    /// Every patch is computed against the pre-tick active index; the index
    /// mutation lands after the per-card loop, and the commit is reported
    /// once as [`StackEvent::TransitionCommitted`].
    pub fn on_gesture(&mut self, sample: &GestureSample) -> &Outputs {
        self.outputs.clear();

        if !self.accepts(sample) {
            return &self.outputs;
        }

        let mv = sample.movement_y();
        let direction = if mv >= 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        let phase = if sample.down {
            Phase::Dragging
        } else {
            Phase::Released
        };
        let trigger = sample.velocity >= self.cfg.release_velocity;

        let commit = match (phase, direction) {
            (Phase::Released, Direction::Down) if trigger && self.active_index > 0 => {
                Some(Commit::Decrement)
            }
            (Phase::Released, Direction::Up)
                if trigger && self.active_index + 1 < self.card_count() =>
            {
                Some(Commit::Increment)
            }
            _ => None,
        };

        for i in 0..self.card_count() {
            let relation = match i.cmp(&self.active_index) {
                std::cmp::Ordering::Less => Relation::Before,
                std::cmp::Ordering::Equal => Relation::Active,
                std::cmp::Ordering::Greater => Relation::After,
            };
            let target = self.card_target(relation, direction, phase, i, mv, trigger, commit);
            if !target.is_empty() {
                self.outputs.push_change(Change { index: i, target });
            }
        }

        if let Some(c) = commit {
            let from = self.active_index;
            self.active_index = match c {
                Commit::Decrement => from - 1,
                Commit::Increment => from + 1,
            };
            self.outputs.push_event(StackEvent::TransitionCommitted {
                from,
                to: self.active_index,
            });
        }

        &self.outputs
    }

    /// Samples landing outside the deck, arriving before a height is
    /// measured, or carrying non-finite numbers are ignored rather than
    /// treated as errors.
    fn accepts(&self, sample: &GestureSample) -> bool {
        sample.card_index < self.card_count()
            && self.is_measured()
            && sample.movement_y().is_finite()
            && sample.velocity.is_finite()
    }

    #[inline]
    fn rest_offset(&self) -> f32 {
        -self.card_height * self.active_index as f32
    }

    /// The decision table: one arm per (relation, direction, phase) cell,
    /// each a pure function of the pre-tick state and this tick's commit.
    #[allow(clippy::too_many_arguments)]
    fn card_target(
        &self,
        relation: Relation,
        direction: Direction,
        phase: Phase,
        index: usize,
        mv: f32,
        trigger: bool,
        commit: Option<Commit>,
    ) -> CardTarget {
        let h = self.card_height;
        let a = self.active_index;
        let rest = self.rest_offset();

        match (relation, direction, phase) {
            // Active card pushed down: follows the pointer 1:1 and shrinks.
            (Relation::Active, Direction::Down, Phase::Dragging) => CardTarget {
                offset_y: Some(rest + mv),
                scale: Some(self.decrease_scale(mv)),
            },
            (Relation::Active, Direction::Down, Phase::Released) => {
                if commit == Some(Commit::Decrement) {
                    // Snap onto the previous card's rest position.
                    CardTarget {
                        offset_y: Some(-h * (a as f32 - 1.0)),
                        scale: Some(self.cfg.min_scale),
                    }
                } else {
                    CardTarget {
                        offset_y: Some(rest),
                        scale: Some(self.cfg.max_scale),
                    }
                }
            }
            // Active card dragged up only shrinks; the next card slides over
            // it (After arm). Offset holds its last commanded value.
            (Relation::Active, Direction::Up, Phase::Dragging) => CardTarget {
                offset_y: None,
                scale: Some(self.decrease_scale(mv)),
            },
            (Relation::Active, Direction::Up, Phase::Released) => CardTarget {
                offset_y: None,
                scale: Some(if commit == Some(Commit::Increment) {
                    self.cfg.min_scale
                } else {
                    self.cfg.max_scale
                }),
            },

            // Passed cards react only while being revealed by a downward
            // drag; a fast release leaves them preview-ready at full scale.
            (Relation::Before, Direction::Down, Phase::Dragging) => CardTarget {
                offset_y: None,
                scale: Some(self.increase_scale(mv, None)),
            },
            (Relation::Before, Direction::Down, Phase::Released) => CardTarget {
                offset_y: None,
                scale: Some(if trigger {
                    self.cfg.max_scale
                } else {
                    self.cfg.min_scale
                }),
            },
            (Relation::Before, Direction::Up, _) => CardTarget::default(),

            // Upcoming cards ride the track under the drag; only the
            // immediately-next card previews the full scale.
            (Relation::After, Direction::Up, Phase::Dragging)
            | (Relation::After, Direction::Down, Phase::Dragging) => CardTarget {
                offset_y: Some(rest + mv),
                scale: Some(self.increase_scale(mv, Some(index))),
            },
            (Relation::After, Direction::Up, Phase::Released) => {
                if commit == Some(Commit::Increment) {
                    CardTarget {
                        offset_y: Some(-h * (a as f32 + 1.0)),
                        scale: Some(if index == a + 1 {
                            self.cfg.max_scale
                        } else {
                            self.cfg.min_scale
                        }),
                    }
                } else {
                    CardTarget {
                        offset_y: Some(rest),
                        scale: Some(self.cfg.min_scale),
                    }
                }
            }
            (Relation::After, Direction::Down, Phase::Released) => {
                if commit == Some(Commit::Decrement) {
                    // Follow the track back onto the previous card.
                    CardTarget {
                        offset_y: Some(-h * (a as f32 - 1.0)),
                        scale: None,
                    }
                } else {
                    CardTarget {
                        offset_y: Some(rest),
                        scale: Some(self.cfg.min_scale),
                    }
                }
            }
        }
    }
}
