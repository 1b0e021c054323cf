//! # normalis
//!
//! Closed-form linear regression via the normal equation, built on a
//! self-contained dense-matrix core. No-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use normalis::regress;
//!
//! // Two features per observation; the first column is a constant 1
//! // supplied by the caller, so theta[0] acts as the intercept.
//! let rows: [&[f64]; 4] = [
//!     &[1.0, 1.0],
//!     &[1.0, 2.0],
//!     &[1.0, 3.0],
//!     &[1.0, 4.0],
//! ];
//! let targets = [3.0, 5.0, 7.0, 9.0]; // y = 1 + 2x
//!
//! let theta = regress::fit(&rows, &targets).unwrap();
//! let y = regress::predict(&[1.0, 5.0], &theta).unwrap();
//! assert!((y - 11.0).abs() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated [`Matrix<T>`] with runtime dimensions.
//!   `Vec<T>` row-major storage. Constructors, indexing, element-wise
//!   arithmetic, [`transpose`](Matrix::transpose) and the fallible
//!   [`matmul`](Matrix::matmul). Every operation returns a freshly
//!   allocated result and leaves its operands untouched.
//!
//! - [`linalg`] — LU factorization with partial pivoting ([`Lu`]), giving
//!   `solve()`, `inverse()`, and `det()`. Convenience methods on `Matrix`:
//!   `a.solve(&b)`, `a.inverse()`. Failures surface as [`LinalgError`]
//!   (`DimensionMismatch`, `NotSquare`, `Singular`) — a near-singular or
//!   non-finite system is reported, never silently approximated.
//!
//! - [`regress`] — Normal-equation least squares:
//!   [`fit`](regress::fit) computes `theta = (XᵗX)⁻¹XᵗY` for a dataset of
//!   feature rows and targets, [`predict`](regress::predict) applies the
//!   fitted weight column to a new row. No intercept column is added
//!   implicitly and no feature scaling is performed; feature engineering
//!   belongs to the caller.
//!
//! - [`traits`] — Element traits: [`Scalar`] for all matrix elements,
//!   [`FloatScalar`] for the floating-point operations (factorization,
//!   fitting).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std targets |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod linalg;
pub mod matrix;
pub mod regress;
pub mod traits;

pub use linalg::{LinalgError, Lu};
pub use matrix::Matrix;
pub use traits::{FloatScalar, Scalar};
