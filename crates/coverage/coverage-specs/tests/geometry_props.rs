//! Property-based checks for drawable-area geometry.

use coverage_specs::{DisplayGeometry, DisplayShape};

proptest::proptest! {
    /// A disc never covers more than its square bounding box.
    #[test]
    fn circular_area_never_exceeds_bounding_box(d in 1u32..=4096u32) {
        let round = DisplayGeometry::circular(d);
        let square = DisplayGeometry::rectangular(d, d);
        assert!(round.total_area() <= square.total_area(),
            "circle {} > square {} for diameter {}", round.total_area(), square.total_area(), d);
    }

    /// Growing the diameter never shrinks the drawable area.
    #[test]
    fn circular_area_is_monotone(a in 1u32..=4096u32, b in 1u32..=4096u32) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        assert!(DisplayGeometry::circular(small).total_area()
            <= DisplayGeometry::circular(large).total_area());
    }

    /// Validated construction accepts every non-zero rectangle.
    #[test]
    fn checked_accepts_non_zero_rectangles(w in 1u32..=u32::MAX, h in 1u32..=u32::MAX) {
        assert!(DisplayGeometry::checked(w, h, DisplayShape::Rectangular).is_ok());
    }
}

#[cfg(feature = "serde")]
#[test]
fn geometry_json_round_trip() {
    let geometry = DisplayGeometry::circular(392);
    let json = serde_json::to_string(&geometry).unwrap();
    assert_eq!(json, r#"{"width":392,"height":392,"shape":"circular"}"#);
    let back: DisplayGeometry = serde_json::from_str(&json).unwrap();
    assert_eq!(back, geometry);
}
