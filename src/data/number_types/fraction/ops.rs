//! # Fraction arithmetic
//!
//! The compound assignment operators carry the logic; the binary operators copy the left operand
//! and apply the compound form to the copy.
//!
//! All component arithmetic wraps around on overflow, so `200_u8 / 100` incremented and then
//! decremented is `200 / 100` again.
//!
//! Adding or subtracting a fraction with a different denominator uses a cross-multiplication that
//! scales the right-hand numerator by the already updated denominator. This is not the textbook
//! sum: `1 / 2 + 1 / 3` gives `9 / 6`. Callers that need the textbook result use
//! `Fraction::exact_sum` and `Fraction::exact_difference`.
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::data::number_types::fraction::Fraction;
use crate::data::number_types::traits::Component;

impl<T: Component> Fraction<T> {
    /// Add one whole unit, that is, add the denominator to the numerator.
    pub fn increment(&mut self) -> &mut Self {
        self.numerator = self.numerator.wrapping_add(&self.denominator);
        self
    }

    /// Subtract one whole unit, that is, subtract the denominator from the numerator.
    pub fn decrement(&mut self) -> &mut Self {
        self.numerator = self.numerator.wrapping_sub(&self.denominator);
        self
    }

    /// Add one whole unit and return the value from before the change.
    pub fn post_increment(&mut self) -> Self {
        let previous = *self;
        self.increment();
        previous
    }

    /// Subtract one whole unit and return the value from before the change.
    pub fn post_decrement(&mut self) -> Self {
        let previous = *self;
        self.decrement();
        previous
    }

    /// Textbook sum `(n1 * d2 + n2 * d1) / (d1 * d2)`, not reduced.
    ///
    /// Equal denominators are kept as they are.
    pub fn exact_sum(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            Self::new(self.numerator.wrapping_add(&other.numerator), self.denominator)
        } else {
            Self::new(
                self.numerator.wrapping_mul(&other.denominator)
                    .wrapping_add(&other.numerator.wrapping_mul(&self.denominator)),
                self.denominator.wrapping_mul(&other.denominator),
            )
        }
    }

    /// Textbook difference `(n1 * d2 - n2 * d1) / (d1 * d2)`, not reduced.
    ///
    /// Equal denominators are kept as they are.
    pub fn exact_difference(&self, other: &Self) -> Self {
        if self.denominator == other.denominator {
            Self::new(self.numerator.wrapping_sub(&other.numerator), self.denominator)
        } else {
            Self::new(
                self.numerator.wrapping_mul(&other.denominator)
                    .wrapping_sub(&other.numerator.wrapping_mul(&self.denominator)),
                self.denominator.wrapping_mul(&other.denominator),
            )
        }
    }
}

impl<T: Component> AddAssign for Fraction<T> {
    fn add_assign(&mut self, rhs: Self) {
        if self.denominator == rhs.denominator {
            self.numerator = self.numerator.wrapping_add(&rhs.numerator);
            return;
        }

        self.numerator = self.numerator.wrapping_mul(&rhs.denominator);
        self.denominator = self.denominator.wrapping_mul(&rhs.denominator);
        self.numerator = self.numerator.wrapping_add(&rhs.numerator.wrapping_mul(&self.denominator));
    }
}

impl<T: Component> AddAssign<T> for Fraction<T> {
    fn add_assign(&mut self, rhs: T) {
        self.numerator = self.numerator.wrapping_add(&rhs.wrapping_mul(&self.denominator));
    }
}

impl<T: Component> SubAssign for Fraction<T> {
    fn sub_assign(&mut self, rhs: Self) {
        if self.denominator == rhs.denominator {
            self.numerator = self.numerator.wrapping_sub(&rhs.numerator);
            return;
        }

        self.numerator = self.numerator.wrapping_mul(&rhs.denominator);
        self.denominator = self.denominator.wrapping_mul(&rhs.denominator);
        self.numerator = self.numerator.wrapping_sub(&rhs.numerator.wrapping_mul(&self.denominator));
    }
}

impl<T: Component> SubAssign<T> for Fraction<T> {
    fn sub_assign(&mut self, rhs: T) {
        self.numerator = self.numerator.wrapping_sub(&rhs.wrapping_mul(&self.denominator));
    }
}

impl<T: Component> MulAssign for Fraction<T> {
    fn mul_assign(&mut self, rhs: Self) {
        self.numerator = self.numerator.wrapping_mul(&rhs.numerator);
        self.denominator = self.denominator.wrapping_mul(&rhs.denominator);
    }
}

impl<T: Component> MulAssign<T> for Fraction<T> {
    /// Scales only the numerator.
    fn mul_assign(&mut self, rhs: T) {
        self.numerator = self.numerator.wrapping_mul(&rhs);
    }
}

impl<T: Component> DivAssign for Fraction<T> {
    /// Multiply by the reciprocal.
    fn div_assign(&mut self, rhs: Self) {
        self.numerator = self.numerator.wrapping_mul(&rhs.denominator);
        self.denominator = self.denominator.wrapping_mul(&rhs.numerator);
    }
}

impl<T: Component> DivAssign<T> for Fraction<T> {
    /// Scales only the denominator.
    fn div_assign(&mut self, rhs: T) {
        self.denominator = self.denominator.wrapping_mul(&rhs);
    }
}

macro_rules! binary_from_compound {
    ($op:ident, $method:ident, $assign_method:ident) => {
        impl<T: Component> $op for Fraction<T> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }

        impl<T: Component> $op<T> for Fraction<T> {
            type Output = Self;

            fn $method(mut self, rhs: T) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

binary_from_compound!(Add, add, add_assign);
binary_from_compound!(Sub, sub, sub_assign);
binary_from_compound!(Mul, mul, mul_assign);
binary_from_compound!(Div, div, div_assign);

impl<T: Component> Mul<Fraction<T>> for f64 {
    type Output = f64;

    /// Scale a float by the evaluated fraction.
    fn mul(self, rhs: Fraction<T>) -> Self::Output {
        self * rhs.evaluate()
    }
}

impl<T: Component> Div<Fraction<T>> for f64 {
    type Output = f64;

    /// Divide a float by the evaluated fraction.
    fn div(self, rhs: Fraction<T>) -> Self::Output {
        self / rhs.evaluate()
    }
}

macro_rules! float_operand {
    ($($t:ty),*) => {
        $(
            impl Mul<f64> for Fraction<$t> {
                type Output = f64;

                /// Scale a float by the evaluated fraction.
                fn mul(self, rhs: f64) -> Self::Output {
                    rhs * self.evaluate()
                }
            }

            impl Div<f64> for Fraction<$t> {
                type Output = f64;

                /// Divide the float by the evaluated fraction, not the other way around.
                fn div(self, rhs: f64) -> Self::Output {
                    rhs / self.evaluate()
                }
            }
        )*
    };
}

float_operand!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
