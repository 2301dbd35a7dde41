//! # Number types
//!
//! Fractions over fixed-width integers. The fraction is exact in intent: it keeps both components
//! and defers the lossy division to the caller, who decides when a floating point value is needed.
pub mod traits;
pub mod fraction;
