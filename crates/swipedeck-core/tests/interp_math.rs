use swipedeck_core::interp::{clamp, clamp01, invlerp, lerp, range};

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

#[test]
fn clamp_is_identity_inside_the_interval() {
    assert_eq!(clamp01(0.0), 0.0);
    assert_eq!(clamp01(0.25), 0.25);
    assert_eq!(clamp01(1.0), 1.0);
}

#[test]
fn clamp_saturates_outside_the_interval() {
    assert_eq!(clamp01(-0.5), 0.0);
    assert_eq!(clamp01(2.5), 1.0);
    assert_eq!(clamp(-3.0, -1.0, 4.0), -1.0);
    assert_eq!(clamp(9.0, -1.0, 4.0), 4.0);
}

#[test]
fn lerp_is_unclamped() {
    approx(lerp(0.0, 10.0, 0.5), 5.0, 1e-6);
    // No bounds check on `a`: extrapolation is allowed.
    approx(lerp(0.0, 10.0, 1.5), 15.0, 1e-6);
    approx(lerp(0.0, 10.0, -0.5), -5.0, 1e-6);
}

#[test]
fn invlerp_normalizes_and_saturates() {
    approx(invlerp(0.0, 100.0, 50.0), 0.5, 1e-6);
    approx(invlerp(0.0, 100.0, -10.0), 0.0, 1e-6);
    approx(invlerp(0.0, 100.0, 200.0), 1.0, 1e-6);
}

#[test]
fn invlerp_zero_width_domain_is_total() {
    // Degenerate domain must not produce NaN/Infinity; it pins to the min end.
    let v = invlerp(42.0, 42.0, 42.0);
    assert!(v.is_finite());
    assert_eq!(v, 0.0);
    assert_eq!(invlerp(0.0, 0.0, 500.0), 0.0);
}

#[test]
fn range_remaps_drag_distance() {
    approx(range(0.0, 100.0, 0.9, 1.0, 50.0), 0.95, 1e-6);
    approx(range(0.0, 800.0, 1.0, 0.9, 400.0), 0.95, 1e-6);
    // Saturation at both ends of the domain.
    approx(range(0.0, 100.0, 0.9, 1.0, -20.0), 0.9, 1e-6);
    approx(range(0.0, 100.0, 0.9, 1.0, 400.0), 1.0, 1e-6);
}

#[test]
fn range_degenerate_domain_collapses_to_lower_output_bound() {
    // The "card height not measured yet" path: a zero-width domain makes
    // every remap an identity toward x2.
    approx(range(0.0, 0.0, 0.9, 1.0, 300.0), 0.9, 1e-6);
    approx(range(0.0, 0.0, 1.0, 0.9, 300.0), 1.0, 1e-6);
}
