/// Shorthand for creating a fraction.
///
/// With one argument, the fraction is a whole number. The component type is inferred, so it can be
/// fixed with a suffix like `FR!(3_u8, 4)`.
#[macro_export]
macro_rules! FR {
    ($value:expr) => {
        $crate::Fraction::whole($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::Fraction::new($numerator, $denominator)
    };
}
