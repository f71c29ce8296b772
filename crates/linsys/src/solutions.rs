use std::fmt;

use linsys_linalg::{approx::ApproxEq, Vector};

use crate::{format, Parametrization};

/// The solution set of a [`LinearSystem`][crate::LinearSystem].
#[derive(Debug, Clone, PartialEq)]
pub enum Solutions {
    /// The system is inconsistent.
    NoSolution,
    /// Exactly one point satisfies every equation.
    Unique(Vector),
    /// The solutions form an affine subspace with at least one free variable.
    Infinite(Parametrization),
}

impl Solutions {
    /// Returns whether at least one solution exists.
    pub fn is_consistent(&self) -> bool {
        !matches!(self, Self::NoSolution)
    }

    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }

    pub fn unique(&self) -> Option<&Vector> {
        match self {
            Self::Unique(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn parametrization(&self) -> Option<&Parametrization> {
        match self {
            Self::Infinite(parametrization) => Some(parametrization),
            _ => None,
        }
    }

    /// Returns the number of free variables, or [`None`] if there are no solutions.
    pub fn free_variable_count(&self) -> Option<usize> {
        match self {
            Self::NoSolution => None,
            Self::Unique(_) => Some(0),
            Self::Infinite(parametrization) => Some(parametrization.free_variable_count()),
        }
    }
}

impl ApproxEq for Solutions {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Self::NoSolution, Self::NoSolution) => true,
            (Self::Unique(a), Self::Unique(b)) => a.abs_diff_eq(b, tolerance),
            (Self::Infinite(a), Self::Infinite(b)) => a.abs_diff_eq(b, tolerance),
            _ => false,
        }
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        match (self, other) {
            (Self::NoSolution, Self::NoSolution) => true,
            (Self::Unique(a), Self::Unique(b)) => a.rel_diff_eq(b, tolerance),
            (Self::Infinite(a), Self::Infinite(b)) => a.rel_diff_eq(b, tolerance),
            _ => false,
        }
    }
}

/// Coordinates are rounded to 3 decimal places.
impl fmt::Display for Solutions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSolution => f.write_str("No solutions"),
            Self::Unique(solution) => {
                write!(f, "Unique solution: {}", solution.map(format::round))
            }
            Self::Infinite(parametrization) => {
                write!(f, "Infinitely many solutions:\n{parametrization}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_ne, vec2};

    use super::*;

    #[test]
    fn accessors() {
        let none = Solutions::NoSolution;
        assert!(!none.is_consistent());
        assert!(!none.is_unique());
        assert_eq!(none.free_variable_count(), None);
        assert_eq!(none.to_string(), "No solutions");

        let unique = Solutions::Unique(vec2(1.0, -0.5));
        assert!(unique.is_consistent());
        assert!(unique.is_unique());
        assert_eq!(unique.unique(), Some(&vec2(1.0, -0.5)));
        assert_eq!(unique.parametrization(), None);
        assert_eq!(unique.free_variable_count(), Some(0));
        assert_eq!(unique.to_string(), "Unique solution: (1, -0.5)");
        assert_eq!(
            Solutions::Unique(vec2(-1e-17, 2.0 / 3.0)).to_string(),
            "Unique solution: (0, 0.667)"
        );

        let line = Parametrization::new(vec2(1.0, 0.0), vec![vec2(-1.0, 1.0)]).unwrap();
        let infinite = Solutions::Infinite(line.clone());
        assert!(infinite.is_consistent());
        assert!(!infinite.is_unique());
        assert_eq!(infinite.unique(), None);
        assert_eq!(infinite.parametrization(), Some(&line));
        assert_eq!(infinite.free_variable_count(), Some(1));
        assert_eq!(
            infinite.to_string(),
            "Infinitely many solutions:\nx_1 = 1 - t_1\nx_2 = t_1"
        );

        assert_approx_ne!(unique, none);
        assert_approx_ne!(infinite, unique);
    }
}
