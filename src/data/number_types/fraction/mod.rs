//! # Fractions
//!
//! A numerator and a denominator of the same integer type, kept apart. Nothing is ever reduced:
//! `2 / 4` and `1 / 2` are different representations of the same value. Whenever a value is
//! needed, for comparisons or by the geometry types, the fraction is evaluated to an `f64`.
//!
//! A zero denominator is allowed. Such a fraction is invalid, which can be queried with
//! `Fraction::is_valid`; operations on it don't panic but evaluate to a non-finite value.
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::data::number_types::traits::Component;

mod ops;
mod cmp;
mod macros;

/// Ratio of two integers.
///
/// The default value is `0 / 0`, which is invalid.
#[derive(Copy, Clone, Default, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction<T> {
    numerator: T,
    denominator: T,
}

impl<T: Component> Fraction<T> {
    /// Create a new fraction without reducing it.
    ///
    /// # Arguments
    ///
    /// * `numerator`: Value above the line.
    /// * `denominator`: Value below the line, may be zero.
    pub fn new(numerator: T, denominator: T) -> Self {
        Self { numerator, denominator }
    }

    /// Create a fraction representing a whole number, that is, with denominator `1`.
    pub fn whole(numerator: T) -> Self {
        Self::new(numerator, T::one())
    }

    /// The value above the line.
    pub fn numerator(&self) -> T {
        self.numerator
    }

    /// The value below the line.
    pub fn denominator(&self) -> T {
        self.denominator
    }

    /// Replace the numerator.
    pub fn set_numerator(&mut self, numerator: T) {
        self.numerator = numerator;
    }

    /// Replace the denominator.
    ///
    /// No validation happens: setting it to zero makes the fraction invalid.
    pub fn set_denominator(&mut self, denominator: T) {
        self.denominator = denominator;
    }

    /// Replace both components.
    pub fn set_all(&mut self, numerator: T, denominator: T) {
        self.numerator = numerator;
        self.denominator = denominator;
    }

    /// Raise both the numerator and the denominator to a power.
    ///
    /// The components are not reduced first, so this overflows easily for larger exponents. Each
    /// component wraps around independently when it does.
    pub fn raise_to_power(&mut self, exponent: u32) {
        self.numerator = self.numerator.wrapping_power(exponent);
        self.denominator = self.denominator.wrapping_power(exponent);
    }

    /// Divide the numerator by the denominator in floating point.
    ///
    /// # Return value
    ///
    /// The quotient. When the denominator is zero, this is `inf`, `-inf` or `NaN` following
    /// IEEE-754 rather than a panic.
    pub fn evaluate(&self) -> f64 {
        self.numerator.to_f64_lossy() / self.denominator.to_f64_lossy()
    }

    /// Whether the denominator is not zero.
    pub fn is_valid(&self) -> bool {
        !self.denominator.is_zero()
    }

    /// Split into the numerator and the denominator.
    pub fn into_parts(self) -> (T, T) {
        (self.numerator, self.denominator)
    }
}

impl<T: Component> From<T> for Fraction<T> {
    fn from(numerator: T) -> Self {
        Self::whole(numerator)
    }
}

impl<T: Component> From<(T, T)> for Fraction<T> {
    fn from((numerator, denominator): (T, T)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl<T: fmt::Display> fmt::Display for Fraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}
