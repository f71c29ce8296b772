//! Lines, planes and their higher-dimensional relatives.
//!
//! A [`Hyperplane`] is the solution set of a single linear equation `n · x = k`, where `n` is its
//! *normal vector* and `k` its *constant term*. In 2 dimensions this describes a line, in 3
//! dimensions a plane.

use std::fmt;

use linsys_linalg::{
    approx::{is_near_zero, is_near_zero_within, ApproxEq, EPSILON},
    vec2, vec3, LinalgError, Vector,
};

use crate::{format, Error};

/// A hyperplane `normal_vector · x = constant_term`.
///
/// Hyperplanes are immutable values. Operations that change the equation (such as
/// [`Hyperplane::scaled`]) return a new hyperplane with a freshly computed basepoint.
///
/// # Equality
///
/// [`PartialEq`] compares the *sets of points* described by two hyperplanes, not their
/// coefficients: `x + y = 1` and `2x + 2y = 2` are equal. Two hyperplanes with a zero normal
/// vector (no coefficient of magnitude [`EPSILON`] or more) are equal if their constant terms
/// are (so `0 = 0` equals `0 = 0`, but not `0 = 1`). Use [`ApproxEq`] to compare the
/// coefficients themselves.
#[derive(Debug, Clone)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: f64,
    basepoint: Option<Vector>,
}

/// The result of intersecting two lines (see [`Hyperplane::intersection`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// Both lines are the same line, which is returned.
    Coincident(Hyperplane),
    /// The lines are parallel and distinct, so they never meet.
    Parallel,
    /// The lines cross in exactly one point.
    Point(Vector),
}

impl Hyperplane {
    /// Creates the hyperplane `normal_vector · x = constant_term`.
    ///
    /// The dimension of the hyperplane is the dimension of `normal_vector`.
    pub fn new(normal_vector: Vector, constant_term: f64) -> Self {
        let basepoint = basepoint_of(&normal_vector, constant_term);
        Self {
            normal_vector,
            constant_term,
            basepoint,
        }
    }

    /// Creates an equation with a zero normal vector, `0 = constant_term`.
    ///
    /// For a nonzero `constant_term`, this is a contradiction that no point satisfies.
    pub fn from_constant(dimension: usize, constant_term: f64) -> Result<Self, Error> {
        Ok(Self::new(Vector::zeros(dimension)?, constant_term))
    }

    /// Creates the trivial equation `0 = 0`, which every point satisfies.
    pub fn trivial(dimension: usize) -> Result<Self, Error> {
        Self::from_constant(dimension, 0.0)
    }

    /// Creates the line `a x + b y = constant_term`.
    pub fn line(a: f64, b: f64, constant_term: f64) -> Self {
        Self::new(vec2(a, b), constant_term)
    }

    /// Creates the plane `a x + b y + c z = constant_term`.
    pub fn plane(a: f64, b: f64, c: f64, constant_term: f64) -> Self {
        Self::new(vec3(a, b, c), constant_term)
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    #[inline]
    pub fn constant_term(&self) -> f64 {
        self.constant_term
    }

    /// Returns a point on this hyperplane, or [`None`] if the normal vector is (near) zero.
    ///
    /// The basepoint is zero everywhere except at the first coordinate whose coefficient is
    /// nonzero, where it is `constant_term / coefficient`.
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns the smallest index whose coefficient's absolute value is at least [`EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::Hyperplane;
    /// assert_eq!(Hyperplane::first_nonzero_index(&[0.0, 1e-12, -2.0]), Some(2));
    /// assert_eq!(Hyperplane::first_nonzero_index(&[0.0, 0.0]), None);
    /// ```
    pub fn first_nonzero_index(coefficients: &[f64]) -> Option<usize> {
        Self::first_nonzero_index_within(coefficients, EPSILON)
    }

    pub(crate) fn first_nonzero_index_within(coefficients: &[f64], epsilon: f64) -> Option<usize> {
        coefficients
            .iter()
            .position(|&c| !is_near_zero_within(c, epsilon))
    }

    /// Returns whether the normal vectors of `self` and `other` are parallel.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool, Error> {
        Ok(self.normal_vector.is_parallel_to(&other.normal_vector)?)
    }

    /// Returns whether `point` satisfies this equation (within [`EPSILON`]).
    pub fn contains_point(&self, point: &Vector) -> Result<bool, Error> {
        let lhs = self.normal_vector.inner_product(point)?;
        Ok(is_near_zero(lhs - self.constant_term))
    }

    /// Multiplies both sides of the equation by `coefficient`.
    ///
    /// Scaling by 0 is allowed and collapses the equation to `0 = 0`.
    pub fn scaled(&self, coefficient: f64) -> Self {
        Self::new(
            self.normal_vector.scale(coefficient),
            self.constant_term * coefficient,
        )
    }

    /// Returns the equation `self + coefficient * other`.
    pub fn add_scaled(&self, coefficient: f64, other: &Self) -> Result<Self, Error> {
        let normal_vector = self
            .normal_vector
            .add_scaled(coefficient, &other.normal_vector)?;
        Ok(Self::new(
            normal_vector,
            self.constant_term + coefficient * other.constant_term,
        ))
    }

    /// Intersects two lines.
    ///
    /// Both hyperplanes must be 2-dimensional, otherwise [`LinalgError::DimensionMismatch`] is
    /// returned. If the lines are not parallel but the determinant of their normal vectors is
    /// still within [`EPSILON`] of zero, [`Error::NumericalInstability`] is returned instead of
    /// dividing by it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Hyperplane, Intersection};
    /// # use linsys::linalg::vec2;
    /// let a = Hyperplane::line(1.0, 1.0, 2.0);
    /// let b = Hyperplane::line(1.0, -1.0, 0.0);
    /// assert_eq!(a.intersection(&b).unwrap(), Intersection::Point(vec2(1.0, 1.0)));
    /// assert_eq!(
    ///     a.intersection(&Hyperplane::line(2.0, 2.0, 1.0)).unwrap(),
    ///     Intersection::Parallel,
    /// );
    /// ```
    pub fn intersection(&self, other: &Self) -> Result<Intersection, Error> {
        LinalgError::check_dimension(2, self.dimension())?;
        LinalgError::check_dimension(2, other.dimension())?;

        if self == other {
            return Ok(Intersection::Coincident(self.clone()));
        }
        if self.is_parallel_to(other)? {
            return Ok(Intersection::Parallel);
        }

        let [a, b] = [self.normal_vector[0], self.normal_vector[1]];
        let [c, d] = [other.normal_vector[0], other.normal_vector[1]];
        let k1 = self.constant_term;
        let k2 = other.constant_term;

        let determinant = a * d - b * c;
        if is_near_zero(determinant) {
            return Err(Error::NumericalInstability { determinant });
        }

        let x = d * k1 - b * k2;
        let y = -c * k1 + a * k2;
        Ok(Intersection::Point(vec2(x, y) / determinant))
    }
}

fn basepoint_of(normal_vector: &Vector, constant_term: f64) -> Option<Vector> {
    let index = Hyperplane::first_nonzero_index(normal_vector.coordinates())?;
    let mut coordinates = vec![0.0; normal_vector.dimension()];
    coordinates[index] = constant_term / normal_vector[index];
    Vector::new(coordinates).ok()
}

impl PartialEq for Hyperplane {
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        // A hyperplane has a basepoint iff some coefficient reaches `EPSILON`.
        match (&self.basepoint, &other.basepoint) {
            (None, None) => is_near_zero(self.constant_term - other.constant_term),
            (None, Some(_)) | (Some(_), None) => false,
            (Some(own), Some(theirs)) => {
                if !matches!(self.is_parallel_to(other), Ok(true)) {
                    return false;
                }
                // Parallel hyperplanes coincide iff the vector connecting their basepoints is
                // orthogonal to the normal vector.
                theirs
                    .subtract(own)
                    .and_then(|connecting| connecting.is_orthogonal_to(&self.normal_vector))
                    .unwrap_or(false)
            }
        }
    }
}

impl ApproxEq for Hyperplane {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.normal_vector
            .abs_diff_eq(&other.normal_vector, tolerance)
            && self
                .constant_term
                .abs_diff_eq(&other.constant_term, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.normal_vector
            .rel_diff_eq(&other.normal_vector, tolerance)
            && self
                .constant_term
                .rel_diff_eq(&other.constant_term, tolerance)
    }
}

/// Renders the equation as `x_1 - 2x_2 + 0.5x_3 = 4`.
///
/// Coefficients are rounded to 3 decimal places; terms that round to zero are left out, and an
/// equation without any remaining terms renders as `0 = k`.
impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut is_leading = true;
        for (i, &coefficient) in self.normal_vector.iter().enumerate() {
            if format::round(coefficient) == 0.0 {
                continue;
            }
            if !is_leading {
                f.write_str(" ")?;
            }
            format::write_term(f, coefficient, format_args!("x_{}", i + 1), is_leading)?;
            is_leading = false;
        }
        if is_leading {
            f.write_str("0")?;
        }
        write!(f, " = {}", format::round(self.constant_term))
    }
}
