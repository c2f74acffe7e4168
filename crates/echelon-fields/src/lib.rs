//! # echelon-fields
//!
//! Scalar fields for the echelon linear algebra kit.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `Field`
//! - Concrete implementations: `Q` (rationals), `FiniteField<P>` (Z/p), `R64` (f64)
//!
//! Every matrix algorithm in `echelon-linalg` is generic over [`Field`],
//! so the same elimination code runs over floating-point scalars and
//! exact finite fields.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod finite_field;
pub mod rational;
pub mod real;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use finite_field::{FiniteField, GF2};
pub use rational::Q;
pub use real::R64;
pub use traits::{Field, Ring};
