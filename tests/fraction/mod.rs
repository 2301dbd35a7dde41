use std::cmp::Ordering;

use proptest::prelude::*;

use platnum::{Fraction, FR};

#[test]
fn mixed_component_types() {
    let mut speed = FR!(3_u8, 4);
    speed += 1;
    assert_eq!(speed.into_parts(), (7, 4));
    assert_eq!(speed.evaluate(), 1.75);

    let mut offset = FR!(-3_i16, 8);
    offset *= FR!(2, 3);
    assert_eq!(offset.into_parts(), (-6, 24));
    assert_eq!(offset, -0.25);
}

#[test]
fn fraction_as_coordinate() {
    // Distance between two points with fractional coordinates, as the geometry types compute it
    let (x1, y1) = (FR!(1, 2), FR!(1, 4));
    let (x2, y2) = (FR!(7, 2), FR!(17, 4));
    let dx = x2.evaluate() - x1.evaluate();
    let dy = y2.evaluate() - y1.evaluate();
    assert_eq!((dx * dx + dy * dy).sqrt(), 5f64);

    assert_eq!(2f64 * x1, 1f64);
}

#[test]
fn invalid_fraction_degrades_silently() {
    let mut x = FR!(5, 2);
    x /= 0;
    assert!(!x.is_valid());
    assert!(x.evaluate().is_infinite());

    x.increment();
    assert!(x.evaluate().is_infinite());
    assert_eq!(x.compare_value(1e300), Ordering::Greater);
}

proptest! {
    #[test]
    fn evaluate_is_quotient(numerator in any::<i32>(), denominator in any::<i32>()) {
        prop_assume!(denominator != 0);
        let x = Fraction::new(numerator, denominator);
        prop_assert_eq!(x.evaluate(), numerator as f64 / denominator as f64);
    }

    #[test]
    fn valid_iff_nonzero_denominator(numerator in any::<i64>(), denominator in any::<i64>()) {
        prop_assert_eq!(Fraction::new(numerator, denominator).is_valid(), denominator != 0);
    }

    #[test]
    fn increment_decrement_round_trip(numerator in any::<i64>(), denominator in any::<i64>()) {
        prop_assume!(denominator != 0);
        let original = Fraction::new(numerator, denominator);

        let mut x = original;
        x.post_increment();
        x.post_decrement();
        prop_assert_eq!(x.into_parts(), original.into_parts());

        x.increment().decrement();
        prop_assert_eq!(x.into_parts(), original.into_parts());
    }

    #[test]
    fn increment_decrement_round_trip_u8(numerator in any::<u8>(), denominator in any::<u8>()) {
        prop_assume!(denominator != 0);
        let original = Fraction::new(numerator, denominator);

        let mut x = original;
        x.increment().decrement();
        prop_assert_eq!(x.into_parts(), original.into_parts());

        let previous = x.post_decrement();
        prop_assert_eq!(previous.into_parts(), original.into_parts());
        x.post_increment();
        prop_assert_eq!(x.into_parts(), original.into_parts());
    }

    #[test]
    fn increment_decrement_round_trip_i8(numerator in any::<i8>(), denominator in any::<i8>()) {
        prop_assume!(denominator != 0);
        let original = Fraction::new(numerator, denominator);

        let mut x = original;
        x.decrement().increment();
        prop_assert_eq!(x.into_parts(), original.into_parts());

        x += 3;
        x -= 3;
        prop_assert_eq!(x.into_parts(), original.into_parts());
    }

    #[test]
    fn equal_when_scaled(numerator in -1_000_i32..1_000, denominator in 1_i32..1_000, factor in 1_i32..1_000) {
        let x = Fraction::new(numerator, denominator);
        let y = Fraction::new(numerator * factor, denominator * factor);
        prop_assert_eq!(x, y);
        prop_assert_eq!(x.compare(&y), Ordering::Equal);
    }

    #[test]
    fn compare_agrees_with_partial_cmp(a in -1_000_i32..1_000, b in 1_i32..1_000, c in -1_000_i32..1_000, d in 1_i32..1_000) {
        let x = Fraction::new(a, b);
        let y = Fraction::new(c, d);
        prop_assert_eq!(Some(x.compare(&y)), x.partial_cmp(&y));
    }
}
