use super::*;

fn within(v: f64, (lo, hi): (f64, f64)) -> bool {
    v >= lo - 1e-9 && v <= hi + 1e-9
}

#[test]
fn no_declines_is_the_resting_layout() {
    let f = ConsentFeedback::for_declines(0);
    assert_eq!(f.accept_scale, 1.0);
    assert_eq!(f.accept_shift_px, 0.0);
    assert_eq!(f.decline_shift_px, 20.0);
    assert_eq!(f.decline_scale, 1.0);
    assert_eq!(f.decline_rotation_deg, 0.0);
}

#[test]
fn parameters_stay_clamped() {
    for n in [0, 1, 5, 100] {
        let f = ConsentFeedback::for_declines(n);
        assert!(within(f.accept_scale, ACCEPT_SCALE_RANGE), "n = {n}");
        assert!(within(f.accept_shift_px, ACCEPT_SHIFT_RANGE), "n = {n}");
        assert!(within(f.decline_shift_px, DECLINE_SHIFT_RANGE), "n = {n}");
        assert!(within(f.decline_scale, DECLINE_SCALE_RANGE), "n = {n}");
    }
    let far = ConsentFeedback::for_declines(100);
    assert_eq!(far.decline_shift_px, 220.0);
    assert_eq!(far.decline_scale, 0.55);
    assert_eq!(far.decline_rotation_deg, 600.0);
}

#[test]
fn parameters_are_monotonic() {
    let mut prev = ConsentFeedback::for_declines(0);
    for n in 1..=40 {
        let f = ConsentFeedback::for_declines(n);
        assert!(f.accept_scale >= prev.accept_scale);
        assert!(f.accept_shift_px >= prev.accept_shift_px);
        assert!(f.decline_shift_px >= prev.decline_shift_px);
        assert!(f.decline_scale <= prev.decline_scale);
        assert!(f.decline_rotation_deg > prev.decline_rotation_deg);
        prev = f;
    }
}

#[test]
fn transforms_render_to_css() {
    let f = ConsentFeedback::for_declines(1);
    assert_eq!(f.accept_transform().to_css(), "translateX(8px) scale(1.06)");
    assert_eq!(
        f.decline_transform().to_css(),
        "translateX(56px) scale(0.92) rotate(6deg)"
    );
}
