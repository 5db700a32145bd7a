use super::*;

#[test]
fn scale_rejects_zero() {
    assert!(Scale::new(0).is_err());
    assert_eq!(Scale::new(3).unwrap(), Scale(3));
}

#[test]
fn scale_default_is_four() {
    assert_eq!(Scale::default(), Scale(4));
    assert_eq!(Scale::DEFAULT.0, 4);
}
