//! Dynamically-sized vectors for the `linsys` solver.
//!
//! # Motivation
//!
//! The solver works on systems whose dimension is only known at run time (lines, planes, and the
//! occasional 4-dimensional system), so the vectors in this crate store their coordinates on the
//! heap and check dimensions when two of them are combined. Every operation returns a new
//! [`Vector`]; vectors are never mutated in place.
//!
//! # Goals & Non-Goals
//!
//! - Only `f64` coordinates. There is no generic element type and no symbolic arithmetic.
//! - Near-zero decisions are made against a single, named tolerance ([`approx::EPSILON`]) instead
//!   of exact comparisons with `0.0`.
//! - Operations that can fail because of mismatched dimensions or degenerate (zero) vectors return
//!   a [`LinalgError`] instead of panicking.
//! - No sparse representations and no performance work beyond the obvious; inputs are tiny.

pub mod approx;
mod error;
mod vector;

pub use error::LinalgError;
pub use vector::*;
