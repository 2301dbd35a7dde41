//! # Traits
//!
//! The component types a `Fraction` can be built from. Any fixed-width integer, signed or not,
//! qualifies; floating point types don't.
//!
//! Component arithmetic wraps around on overflow, in debug and release builds alike.
use std::fmt::{Debug, Display};

use num_traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingMul, WrappingSub};

/// Numerator and denominator type of a fraction.
///
/// Automatically implemented for all primitive integers.
pub trait Component:
    PrimInt +
    WrappingAdd +
    WrappingSub +
    WrappingMul +
    AsPrimitive<f64> +
    Default +
    Display +
    Debug
{
    /// Lossy conversion used to evaluate a fraction.
    fn to_f64_lossy(self) -> f64 {
        self.as_()
    }

    /// Raise to a power by squaring, wrapping around on overflow.
    ///
    /// The result is the true power modulo `2^bits`, like the other wrapping operations.
    fn wrapping_power(self, mut exponent: u32) -> Self {
        let mut base = self;
        let mut result = Self::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.wrapping_mul(&base);
            }
            base = base.wrapping_mul(&base);
            exponent >>= 1;
        }

        result
    }
}
impl<T> Component for T
where
    T: PrimInt + WrappingAdd + WrappingSub + WrappingMul + AsPrimitive<f64> + Default + Display + Debug,
{
}
