use super::*;

#[test]
fn field_sizes_match_layers() {
    assert_eq!(floating_hearts().len(), FLOATING_HEART_COUNT);
    assert_eq!(sparkles().len(), SPARKLE_COUNT);
    assert_eq!(dialog_hearts().len(), DIALOG_HEART_COUNT);
}

#[test]
fn fields_are_deterministic() {
    assert_eq!(floating_hearts(), floating_hearts());
    assert_eq!(sparkles(), sparkles());
}

#[test]
fn heart_formulas_for_known_indices() {
    let hearts = floating_hearts();
    let h1 = hearts[1];
    assert_eq!(h1.left_pct, 97.0);
    assert_eq!(h1.size_px, 19.0);
    assert_eq!(h1.drift_px, -11.0);
    assert_eq!(h1.color, Some("#FFB3C1"));
    assert_eq!(hearts[3].color, Some("#FF6B6B"));
}

#[test]
fn values_stay_in_sane_ranges() {
    for p in floating_hearts().into_iter().chain(sparkles()).chain(dialog_hearts()) {
        assert!((0.0..=102.0).contains(&p.left_pct));
        assert!((0.0..=102.0).contains(&p.top_pct));
        assert!(p.duration_s > 0.0);
        assert!(p.size_px >= 6.0);
        assert!(p.opacity > 0.0 && p.opacity <= 1.0);
    }
}
