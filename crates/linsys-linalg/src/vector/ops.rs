//! Implementations of `std::ops`.
//!
//! Only operations that cannot fail are exposed as operators. Adding or subtracting two vectors
//! requires a dimension check, so those are the [`Vector::add`] and [`Vector::subtract`] methods.

use std::ops::{Div, Index, Mul, Neg};

use crate::approx::ApproxEq;

use super::Vector;

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl PartialEq<[f64]> for Vector {
    fn eq(&self, other: &[f64]) -> bool {
        self.0 == other
    }
}

impl PartialEq<&[f64]> for Vector {
    fn eq(&self, other: &&[f64]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> PartialEq<[f64; N]> for Vector {
    fn eq(&self, other: &[f64; N]) -> bool {
        self.0 == other
    }
}

impl ApproxEq for Vector {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }
}

/// Coordinate-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Coordinate-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(f64::neg)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

/// Vector-Scalar division (scaling).
impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}

/// Vector-Scalar division (scaling).
impl Div<f64> for &Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Self::Output {
        self.map(|elem| elem / rhs)
    }
}
