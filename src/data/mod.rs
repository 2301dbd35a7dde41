//! # Numeric data structures
//!
//! This module provides the value types used by the geometry and the level grid of the game.
//! Neither of them depends on the other: the matrix is generic over any element, and fractions are
//! one possible coordinate type.

pub mod linear_algebra;
pub mod number_types;
