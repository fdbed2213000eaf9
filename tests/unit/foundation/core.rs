use super::*;

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(5) - Millis(9), Millis::ZERO);
    assert_eq!(Millis(u64::MAX) + Millis(1), Millis(u64::MAX));
    assert_eq!(Millis(20).to_string(), "20ms");
}

#[test]
fn transform_to_affine_identity_and_translation() {
    assert_eq!(Transform2D::default().to_affine(), Affine::IDENTITY);
    assert_eq!(
        Transform2D::translate_x(12.0).to_affine(),
        Affine::translate(Vec2::new(12.0, 0.0))
    );
}

#[test]
fn css_omits_identity_parts() {
    assert_eq!(Transform2D::translate_x(20.0).to_css(), "translateX(20px)");
    assert_eq!(
        Transform2D::translate_x(56.0)
            .with_scale(0.92)
            .with_rotation_deg(6.0)
            .to_css(),
        "translateX(56px) scale(0.92) rotate(6deg)"
    );
    assert_eq!(
        Transform2D {
            translate: Vec2::new(0.0, -8.0),
            ..Transform2D::default()
        }
        .to_css(),
        "translate3d(0px, -8px, 0)"
    );
}
