use super::*;

#[test]
fn color_from_rgba8_normalizes_channels() {
    let c = Color::from_rgba8(255, 0, 51, 255);
    assert_eq!(c.r, 1.0);
    assert_eq!(c.g, 0.0);
    assert!((c.b - 0.2).abs() < 1e-12);
    assert_eq!(c.a, 1.0);
    assert_eq!(Color::from_components(c.components()), c);
}

#[test]
fn default_color_is_clear() {
    assert_eq!(Color::default(), Color::CLEAR);
    assert_eq!(Color::CLEAR.a, 0.0);
}

#[test]
fn transform_rows_roundtrip_and_helpers() {
    let t = Transform3D::scale(2.0, 3.0, 4.0);
    assert_eq!(t.m11, 2.0);
    assert_eq!(t.m22, 3.0);
    assert_eq!(t.m33, 4.0);
    assert_eq!(t.m44, 1.0);
    assert_eq!(Transform3D::from_rows(t.rows()), t);

    let tr = Transform3D::translation(5.0, 6.0, 7.0);
    assert_eq!((tr.m41, tr.m42, tr.m43), (5.0, 6.0, 7.0));
    assert!(!tr.is_identity());
    assert!(Transform3D::default().is_identity());
}
