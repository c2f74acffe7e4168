//! # Echelon
//!
//! A dense-matrix linear algebra kit generic over an abstract field of
//! scalars: the same elimination engine serves floating-point matrices
//! and exact finite fields.
//!
//! ## Quick Start
//!
//! ```rust
//! use echelon::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![Q::from_integer(4), Q::from_integer(7)],
//!     vec![Q::from_integer(2), Q::from_integer(6)],
//! ])
//! .unwrap();
//!
//! let inv = m.inverse().unwrap();
//! assert_eq!(m.mm(&inv).unwrap(), Matrix::identity(2));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use echelon_fields as fields;
pub use echelon_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use echelon_fields::{Field, FiniteField, Ring, GF2, Q, R64};
    pub use echelon_linalg::{
        ElementaryOperation, LinalgError, LuDecomposition, Matrix, PivotMap, ScalarBytes,
    };
}
