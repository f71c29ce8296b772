//! Tolerances and approximate equality.
//!
//! Row reduction divides and subtracts floating-point numbers, so "is this coefficient zero?" is
//! always answered against [`EPSILON`] rather than with `== 0.0`.

mod impls;

use std::{fmt, panic::Location};

/// The tolerance below which a value is treated as zero.
///
/// This is the tie-break threshold used for pivot selection, zero-vector checks, orthogonality,
/// and hyperplane equality.
pub const EPSILON: f64 = 1e-10;

/// Returns whether `value` is within [`EPSILON`] of zero.
#[inline]
pub fn is_near_zero(value: f64) -> bool {
    is_near_zero_within(value, EPSILON)
}

/// Returns whether the absolute value of `value` is strictly less than `epsilon`.
#[inline]
pub fn is_near_zero_within(value: f64, epsilon: f64) -> bool {
    value.abs() < epsilon
}

/// Types that can be compared for *approximate equality*.
///
/// Compound types implementing this trait are considered *equal* if all of their components are.
/// Comparing values of different dimension always yields `false`.
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Performs an *absolute comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to `tolerance`,
    /// the values are considered to be equal.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: f64) -> bool;

    /// Performs a *relative comparison* of `self` and `other`.
    ///
    /// If the absolute difference of the compared values is less than or equal to the largest of
    /// the two values times `tolerance`, the values are considered to be equal.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: f64) -> bool;
}

/// Assertion guard returned by the [`assert_approx_eq!`][crate::assert_approx_eq]
/// and [`assert_approx_ne!`][crate::assert_approx_ne] macros.
///
/// The assertion is checked when the guard is dropped. [`Asserter::abs`] and [`Asserter::rel`]
/// select the comparisons to perform; if both are called, the values are equal if *either*
/// comparison considers them equal.
///
/// Without any configuration, the values compare equal if an absolute *or* a relative comparison
/// with a tolerance of [`EPSILON`] considers them equal.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<f64>,
    rel: Option<f64>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
        }
    }

    /// Perform an *absolute comparison* of the values with the given tolerance.
    pub fn abs(&mut self, abs: f64) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Perform a *relative comparison* of the values with the given tolerance.
    ///
    /// Values close to zero need a very large relative tolerance to compare equal; prefer
    /// [`Asserter::abs`] for those.
    pub fn rel(&mut self, rel: f64) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    fn equal(&mut self) -> bool {
        if let Some(abs) = self.abs.take() {
            if self.left.abs_diff_eq(self.right, abs) {
                return true;
            }
        }
        if let Some(rel) = self.rel.take() {
            if self.left.rel_diff_eq(self.right, rel) {
                return true;
            }
        }
        false
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug + ?Sized,
{
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() {
            self.abs = Some(EPSILON);
            self.rel = Some(EPSILON);
        }

        let equal = self.equal();
        if (!equal && self.kind == AssertionKind::Eq) || (equal && self.kind == AssertionKind::Ne) {
            assert_failed_inner(&self.left, &self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // `#[track_caller]` has no effect on `drop`, so the location is printed manually.
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal to each other (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that can be used to configure the
/// comparison and its tolerance.
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(vec2(1.0, 2.0), vec2(1.0, 2.0 + 1e-12));
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(&$lhs, &$rhs, $crate::approx::AssertionKind::Eq, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two expressions are *not* approximately equal to each other (using [`ApproxEq`]).
///
/// Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use linsys_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(vec2(1.0, 2.0), vec3(1.0, 2.0, 0.0));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+))
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "my message")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "my message");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn default_tolerance() {
        assert_approx_eq!(1.0, 1.0 + 1e-12);
        assert_approx_eq!(0.0, -1e-11);
        assert_approx_ne!(0.0, 1e-9);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, 0.0).rel(1.0);
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(f64::MAX);
    }

    #[test]
    fn near_zero() {
        assert!(is_near_zero(0.0));
        assert!(is_near_zero(-9e-11));
        assert!(!is_near_zero(1e-10));
        assert!(!is_near_zero(f64::NAN));
        assert!(is_near_zero_within(0.05, 0.1));
        assert!(!is_near_zero_within(-0.1, 0.1));
    }
}
