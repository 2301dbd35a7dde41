//! # Comparing fractions
//!
//! All comparisons go through `Fraction::evaluate`. Two fractions are equal when their quotients
//! are, regardless of the stored components, so `1 / 2 == 2 / 4`.
use std::cmp::Ordering;

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::traits::Component;

/// Three-way classification of two floats that never fails.
///
/// Unordered values (`NaN`) are classified as equal.
fn classify(left: f64, right: f64) -> Ordering {
    if left < right {
        Ordering::Less
    } else if left > right {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T: Component> Fraction<T> {
    /// Three-way comparison of the evaluated values.
    ///
    /// Unlike `partial_cmp`, this always returns an ordering: when either side is not a number,
    /// the result is `Ordering::Equal`.
    pub fn compare(&self, other: &Self) -> Ordering {
        classify(self.evaluate(), other.evaluate())
    }

    /// Three-way comparison of the evaluated value against a float.
    pub fn compare_value(&self, value: f64) -> Ordering {
        classify(self.evaluate(), value)
    }
}

impl<T: Component> PartialEq for Fraction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.evaluate() == other.evaluate()
    }
}

impl<T: Component> PartialEq<f64> for Fraction<T> {
    fn eq(&self, other: &f64) -> bool {
        self.evaluate() == *other
    }
}

impl<T: Component> PartialEq<Fraction<T>> for f64 {
    fn eq(&self, other: &Fraction<T>) -> bool {
        *self == other.evaluate()
    }
}

impl<T: Component> PartialOrd for Fraction<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.evaluate().partial_cmp(&other.evaluate())
    }
}

impl<T: Component> PartialOrd<f64> for Fraction<T> {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.evaluate().partial_cmp(other)
    }
}

impl<T: Component> PartialOrd<Fraction<T>> for f64 {
    fn partial_cmp(&self, other: &Fraction<T>) -> Option<Ordering> {
        self.partial_cmp(&other.evaluate())
    }
}
