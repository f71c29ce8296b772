use std::{f64::consts::PI, fmt, slice};

use crate::{
    approx::{is_near_zero, is_near_zero_within, EPSILON},
    LinalgError,
};

mod ops;

/// An `n`-dimensional vector of `f64` coordinates.
///
/// The dimension is fixed when the vector is created and is always at least 1. Equality via
/// [`PartialEq`] is exact and coordinate-wise; use [`ApproxEq`][crate::approx::ApproxEq] for
/// tolerant comparisons.
///
/// # Construction
///
/// - [`Vector::new`] takes ownership of a coordinate list and rejects empty ones.
/// - [`vec2`], [`vec3`] and [`vec4`] create vectors of a known dimension without a [`Result`].
/// - [`Vector::zeros`] and [`Vector::from_fn`] create vectors of a run-time dimension.
/// - [`TryFrom`] is implemented for `Vec<f64>` and `&[f64]`.
///
/// # Arithmetic
///
/// Operations combining two vectors ([`Vector::add`], [`Vector::inner_product`], ...) check that
/// both operands have the same dimension and fail with [`LinalgError::DimensionMismatch`]
/// otherwise. Scaling by a scalar cannot fail and is also available via the `*` and `/`
/// operators.
#[derive(Clone, PartialEq)]
pub struct Vector(Vec<f64>);

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// Returns [`LinalgError::InvalidVector`] if `coordinates` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::new(vec![1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(v.dimension(), 3);
    /// assert_eq!(Vector::new(vec![]), Err(LinalgError::InvalidVector));
    /// ```
    pub fn new(coordinates: Vec<f64>) -> Result<Self, LinalgError> {
        if coordinates.is_empty() {
            return Err(LinalgError::InvalidVector);
        }
        Ok(Self(coordinates))
    }

    /// Creates the zero vector of the given dimension.
    pub fn zeros(dimension: usize) -> Result<Self, LinalgError> {
        Self::new(vec![0.0; dimension])
    }

    /// Creates a vector where each coordinate is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::from_fn(3, |i| i as f64 * 10.0).unwrap();
    /// assert_eq!(v, vec3(0.0, 10.0, 20.0));
    /// ```
    pub fn from_fn<F>(dimension: usize, f: F) -> Result<Self, LinalgError>
    where
        F: FnMut(usize) -> f64,
    {
        Self::new((0..dimension).map(f).collect())
    }

    /// Returns the number of coordinates.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Applies a closure to each coordinate, returning a new vector of the same dimension.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self(self.0.iter().copied().map(f).collect())
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self, LinalgError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        LinalgError::check_dimension(self.dimension(), other.dimension())?;
        Ok(Self(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        ))
    }

    /// Returns `self + other`.
    pub fn add(&self, other: &Self) -> Result<Self, LinalgError> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Returns `self - other`.
    pub fn subtract(&self, other: &Self) -> Result<Self, LinalgError> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Returns `self + coefficient * other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = vec2(1.0, 1.0).add_scaled(-2.0, &vec2(0.0, 1.0)).unwrap();
    /// assert_eq!(v, vec2(1.0, -1.0));
    /// ```
    pub fn add_scaled(&self, coefficient: f64, other: &Self) -> Result<Self, LinalgError> {
        self.zip_with(other, |a, b| a + coefficient * b)
    }

    /// Multiplies every coordinate by `scalar`.
    pub fn scale(&self, scalar: f64) -> Self {
        self.map(|c| c * scalar)
    }

    /// Returns the Euclidean length of this vector.
    pub fn magnitude(&self) -> f64 {
        self.0.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Divides this vector by its magnitude, resulting in a unit vector.
    ///
    /// Fails with [`LinalgError::ZeroVector`] if the magnitude is below [`EPSILON`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize().unwrap();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// assert_eq!(vec2(0.0, 0.0).normalize(), Err(LinalgError::ZeroVector));
    /// ```
    pub fn normalize(&self) -> Result<Self, LinalgError> {
        if self.is_zero() {
            return Err(LinalgError::ZeroVector);
        }
        Ok(self.scale(1.0 / self.magnitude()))
    }

    /// Computes the inner (dot) product of `self` and `other`.
    pub fn inner_product(&self, other: &Self) -> Result<f64, LinalgError> {
        LinalgError::check_dimension(self.dimension(), other.dimension())?;
        Ok(self.0.iter().zip(&other.0).map(|(a, b)| a * b).sum())
    }

    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// The inner product of the normalized vectors is rounded to 3 decimal places before taking
    /// the arccosine, so that round-off cannot push it outside of `[-1, 1]`.
    ///
    /// Fails with [`LinalgError::ZeroVectorAngle`] if either vector is (near) zero.
    pub fn angle_with(&self, other: &Self) -> Result<f64, LinalgError> {
        LinalgError::check_dimension(self.dimension(), other.dimension())?;
        let u1 = self.normalize().map_err(|_| LinalgError::ZeroVectorAngle)?;
        let u2 = other.normalize().map_err(|_| LinalgError::ZeroVectorAngle)?;
        let cos = round_to_thousandths(u1.inner_product(&u2)?);
        Ok(cos.acos())
    }

    /// Computes the angle between `self` and `other`, in degrees.
    ///
    /// See [`Vector::angle_with`].
    pub fn angle_with_in_degrees(&self, other: &Self) -> Result<f64, LinalgError> {
        self.angle_with(other).map(f64::to_degrees)
    }

    /// Returns whether `self` and `other` point in the same or in opposite directions.
    ///
    /// The zero vector is parallel to every vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// assert!(vec2(-7.579, -7.88).is_parallel_to(&vec2(22.737, 23.64)).unwrap());
    /// assert!(vec2(0.0, 0.0).is_parallel_to(&vec2(1.0, 5.0)).unwrap());
    /// assert!(!vec2(1.0, 0.0).is_parallel_to(&vec2(1.0, 1.0)).unwrap());
    /// ```
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool, LinalgError> {
        LinalgError::check_dimension(self.dimension(), other.dimension())?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(other)?;
        Ok(is_near_zero(angle) || is_near_zero(angle - PI))
    }

    /// Returns whether the magnitude of this vector is below [`EPSILON`].
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(EPSILON)
    }

    /// Returns whether the magnitude of this vector is below `tolerance`.
    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    /// Returns whether the inner product of `self` and `other` is within [`EPSILON`] of zero.
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool, LinalgError> {
        self.is_orthogonal_to_within(other, EPSILON)
    }

    /// Returns whether the inner product of `self` and `other` is within `tolerance` of zero.
    pub fn is_orthogonal_to_within(&self, other: &Self, tolerance: f64) -> Result<bool, LinalgError> {
        Ok(is_near_zero_within(self.inner_product(other)?, tolerance))
    }

    /// Projects `self` onto `basis`.
    ///
    /// Fails with [`LinalgError::NoUniqueParallelComponent`] if `basis` is (near) zero.
    pub fn component_parallel_to(&self, basis: &Self) -> Result<Self, LinalgError> {
        LinalgError::check_dimension(self.dimension(), basis.dimension())?;
        let unit_basis = basis
            .normalize()
            .map_err(|_| LinalgError::NoUniqueParallelComponent)?;
        let weight = self.inner_product(&unit_basis)?;
        Ok(unit_basis.scale(weight))
    }

    /// Returns the part of `self` that is orthogonal to `basis`.
    ///
    /// `self` is the sum of this and [`Vector::component_parallel_to`].
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self, LinalgError> {
        let parallel = self.component_parallel_to(basis)?;
        self.subtract(&parallel)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// Only defined for 3-dimensional vectors; any other dimension fails with
    /// [`LinalgError::DimensionMismatch`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let x = vec3(1.0, 0.0, 0.0);
    /// let y = vec3(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross_product(&y).unwrap(), vec3(0.0, 0.0, 1.0));
    /// assert!(vec2(1.0, 0.0).cross_product(&vec2(0.0, 1.0)).is_err());
    /// ```
    pub fn cross_product(&self, other: &Self) -> Result<Self, LinalgError> {
        LinalgError::check_dimension(3, self.dimension())?;
        LinalgError::check_dimension(3, other.dimension())?;

        let [a1, a2, a3] = [self[0], self[1], self[2]];
        let [b1, b2, b3] = [other[0], other[1], other[2]];

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        Ok(cross)
    }

    /// Area of the parallelogram spanned by `self` and `other` (3-dimensional vectors only).
    pub fn area_of_parallelogram_with(&self, other: &Self) -> Result<f64, LinalgError> {
        Ok(self.cross_product(other)?.magnitude())
    }

    /// Area of the triangle spanned by `self` and `other` (3-dimensional vectors only).
    pub fn area_of_triangle_with(&self, other: &Self) -> Result<f64, LinalgError> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }
}

fn round_to_thousandths(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = LinalgError;

    fn try_from(value: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = LinalgError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        Self::new(value.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.0
    }
}

impl AsRef<[f64]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct DebugViaDisplay<D>(D);
        impl<D: fmt::Display> fmt::Debug for DebugViaDisplay<D> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(&DebugViaDisplay(elem));
        }
        tup.finish()
    }
}

/// Constructs a 2-dimensional [`Vector`].
#[inline]
pub fn vec2(x: f64, y: f64) -> Vector {
    Vector(vec![x, y])
}

/// Constructs a 3-dimensional [`Vector`].
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vector {
    Vector(vec![x, y, z])
}

/// Constructs a 4-dimensional [`Vector`].
#[inline]
pub fn vec4(x: f64, y: f64, z: f64, w: f64) -> Vector {
    Vector(vec![x, y, z, w])
}
