//! Drag bounds and rubberband resistance.
//!
//! The engine does not capture pointer events; it publishes the vertical
//! bound the gesture layer should constrain against, and the elastic
//! overshoot applied past it. The last card can be pulled beyond the bound
//! but with growing resistance, never a hard stop.

use serde::{Deserialize, Serialize};

/// Vertical drag bound handed to the gesture layer. `top` is the most
/// negative offset the drag may reach before rubberbanding engages.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DragBounds {
    pub top: f32,
}

/// Elastic resistance past a bound: sub-linear in the overshoot distance.
/// A degenerate dimension falls back to a pure power curve.
#[inline]
pub fn rubberband(distance: f32, dimension: f32, constant: f32) -> f32 {
    if dimension <= 0.0 || !dimension.is_finite() {
        return distance.powf(constant * 5.0);
    }
    (distance * dimension * constant) / (dimension + constant * distance)
}

/// Apply rubberband resistance outside `[min, max]`; passthrough inside.
#[inline]
pub fn rubberband_if_out_of_bounds(position: f32, min: f32, max: f32, constant: f32) -> f32 {
    if position < min {
        return min - rubberband(min - position, max - min, constant);
    }
    if position > max {
        return max + rubberband(position - max, max - min, constant);
    }
    position
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passthrough_inside_bounds() {
        assert_eq!(rubberband_if_out_of_bounds(-300.0, -720.0, 0.0, 0.15), -300.0);
        assert_eq!(rubberband_if_out_of_bounds(0.0, -720.0, 0.0, 0.15), 0.0);
        assert_eq!(rubberband_if_out_of_bounds(-720.0, -720.0, 0.0, 0.15), -720.0);
    }

    #[test]
    fn overshoot_is_resisted_and_monotone() {
        let a = rubberband_if_out_of_bounds(-800.0, -720.0, 0.0, 0.15);
        let b = rubberband_if_out_of_bounds(-900.0, -720.0, 0.0, 0.15);
        // Past the bound, but by less than the raw excess.
        assert!(a < -720.0 && a > -800.0);
        assert!(b < -720.0 && b > -900.0);
        assert!(b < a);
    }

    #[test]
    fn degenerate_dimension_still_total() {
        let v = rubberband(50.0, 0.0, 0.15);
        assert!(v.is_finite() && v > 0.0);
    }
}
