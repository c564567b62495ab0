use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn canvas_contains_is_inclusive() {
    let c = Canvas::new(100, 50).unwrap();
    assert!(c.contains(Point::new(0.0, 0.0)));
    assert!(c.contains(Point::new(100.0, 50.0)));
    assert!(!c.contains(Point::new(100.5, 10.0)));
    assert!(!c.contains(Point::new(-1.0, 10.0)));
}

#[test]
fn millis_arithmetic_saturates() {
    assert_eq!(Millis(500).times(3), Millis(1500));
    assert_eq!(Millis(u64::MAX).times(2), Millis(u64::MAX));
    assert_eq!(Millis(10).saturating_sub(Millis(20)), Millis::ZERO);
    assert_eq!(Millis(10).saturating_add(Millis(5)), Millis(15));
    assert_eq!(Millis(250).to_string(), "250ms");
}
