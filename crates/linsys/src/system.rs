//! Systems of linear equations.

mod reduce;

use std::{fmt, ops::Index, slice};

use itertools::Itertools;
use linsys_linalg::{
    approx::{ApproxEq, EPSILON},
    LinalgError,
};

use crate::{Error, Hyperplane};

/// An ordered, non-empty list of [`Hyperplane`]s of a common dimension.
///
/// Rows are addressed by zero-based index. The row operations ([`LinearSystem::swap_rows`],
/// [`LinearSystem::multiply_row`], ...) mutate the system in place; the reductions
/// ([`LinearSystem::compute_triangular_form`], [`LinearSystem::compute_rref`] and
/// [`LinearSystem::find_solutions`]) work on a private copy and leave `self` untouched.
///
/// # Tolerance
///
/// Coefficients whose absolute value is below the system's tolerance are treated as zero while
/// searching for pivots and classifying solutions. The tolerance defaults to [`EPSILON`] and can
/// be changed with [`LinearSystem::with_epsilon`].
#[derive(Debug, Clone)]
pub struct LinearSystem {
    rows: Vec<Hyperplane>,
    dimension: usize,
    epsilon: f64,
}

impl LinearSystem {
    /// Creates a system from its rows.
    ///
    /// Fails with [`Error::EmptySystem`] if `rows` is empty, with
    /// [`LinalgError::DimensionMismatch`] if the rows don't all have the dimension of the first,
    /// and with [`Error::NonFiniteCoefficient`] if a row contains a NaN or an infinity.
    pub fn new(rows: Vec<Hyperplane>) -> Result<Self, Error> {
        let dimension = rows.first().ok_or(Error::EmptySystem)?.dimension();
        for (index, row) in rows.iter().enumerate() {
            check_row(dimension, index, row)?;
        }
        Ok(Self {
            rows,
            dimension,
            epsilon: EPSILON,
        })
    }

    /// Sets the tolerance below which coefficients count as zero.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns the number of equations (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `false`; a system always has at least one row.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of variables.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    pub fn rows(&self) -> &[Hyperplane] {
        &self.rows
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Hyperplane> {
        self.rows.iter()
    }

    #[inline]
    pub fn get(&self, row: usize) -> Option<&Hyperplane> {
        self.rows.get(row)
    }

    /// Replaces the equation at index `row`.
    ///
    /// `hyperplane` is checked like the rows passed to [`LinearSystem::new`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[track_caller]
    pub fn set_row(&mut self, row: usize, hyperplane: Hyperplane) -> Result<(), Error> {
        check_row(self.dimension, row, &hyperplane)?;
        self.rows[row] = hyperplane;
        Ok(())
    }

    /// Appends an equation to the system.
    ///
    /// `hyperplane` is checked like the rows passed to [`LinearSystem::new`].
    pub fn push(&mut self, hyperplane: Hyperplane) -> Result<(), Error> {
        check_row(self.dimension, self.len(), &hyperplane)?;
        self.rows.push(hyperplane);
        Ok(())
    }

    /// Swaps two rows.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[track_caller]
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        log::trace!("swap rows {row1} and {row2}");
        self.rows.swap(row1, row2);
    }

    /// Multiplies both sides of the equation at index `row` by `coefficient`.
    ///
    /// A `coefficient` of 0 turns the row into the trivial equation `0 = 0`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[track_caller]
    pub fn multiply_row(&mut self, coefficient: f64, row: usize) {
        log::trace!("multiply row {row} by {coefficient}");
        self.rows[row] = self.rows[row].scaled(coefficient);
    }

    /// Adds `coefficient` times the row `row_to_add` to the row `row_to_be_added_to`.
    ///
    /// The row `row_to_add` is not modified.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[track_caller]
    pub fn add_multiple_of_row_to_row(
        &mut self,
        coefficient: f64,
        row_to_add: usize,
        row_to_be_added_to: usize,
    ) -> Result<(), Error> {
        log::trace!("add {coefficient} * row {row_to_add} to row {row_to_be_added_to}");
        let sum = self.rows[row_to_be_added_to].add_scaled(coefficient, &self.rows[row_to_add])?;
        self.rows[row_to_be_added_to] = sum;
        Ok(())
    }

    /// Scales the row at index `row` so that its leading coefficient becomes 1.
    ///
    /// Returns the column of the leading coefficient, or [`Error::NoNonzeroElements`] if the row
    /// has no coefficient above the system's tolerance.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[track_caller]
    pub fn normalize_pivot(&mut self, row: usize) -> Result<usize, Error> {
        let column = self
            .leading_index(row)
            .ok_or(Error::NoNonzeroElements)?;
        let pivot = self.rows[row].normal_vector()[column];
        self.multiply_row(1.0 / pivot, row);
        Ok(column)
    }

    /// Returns, for every row, the column of its first coefficient above the system's
    /// tolerance, or [`None`] if the row has none.
    pub fn first_nonzero_indices(&self) -> Vec<Option<usize>> {
        (0..self.len()).map(|row| self.leading_index(row)).collect()
    }

    fn leading_index(&self, row: usize) -> Option<usize> {
        Hyperplane::first_nonzero_index_within(
            self.rows[row].normal_vector().coordinates(),
            self.epsilon,
        )
    }
}

fn check_row(dimension: usize, index: usize, row: &Hyperplane) -> Result<(), Error> {
    LinalgError::check_dimension(dimension, row.dimension())?;
    let finite = row.normal_vector().iter().all(|c| c.is_finite()) && row.constant_term().is_finite();
    if !finite {
        return Err(Error::NonFiniteCoefficient { row: index });
    }
    Ok(())
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = slice::Iter<'a, Hyperplane>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Row-wise equality using [`Hyperplane`]'s geometric equality. The tolerance is not compared.
impl PartialEq for LinearSystem {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl ApproxEq for LinearSystem {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows.abs_diff_eq(&other.rows, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.rows.rel_diff_eq(&other.rows, tolerance)
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let equations = self
            .iter()
            .enumerate()
            .map(|(i, row)| format!("Equation {}: {}", i + 1, row))
            .join("\n");
        write!(f, "Linear System:\n{equations}")
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, assert_approx_ne, vec3, vec4};

    use super::*;

    fn example_system() -> LinearSystem {
        LinearSystem::new(vec![
            Hyperplane::plane(1.0, 1.0, 1.0, 1.0),
            Hyperplane::plane(0.0, 1.0, 0.0, 2.0),
            Hyperplane::plane(1.0, 1.0, -1.0, 3.0),
            Hyperplane::plane(1.0, 0.0, -2.0, 2.0),
        ])
        .unwrap()
    }

    #[test]
    fn construction() {
        assert_eq!(LinearSystem::new(Vec::new()).unwrap_err(), Error::EmptySystem);
        assert_eq!(
            LinearSystem::new(vec![
                Hyperplane::plane(1.0, 1.0, 1.0, 1.0),
                Hyperplane::line(1.0, 1.0, 1.0),
            ])
            .unwrap_err(),
            Error::Linalg(LinalgError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );

        let mut s = example_system();
        assert_eq!(s.len(), 4);
        assert!(!s.is_empty());
        assert_eq!(s.dimension(), 3);
        assert_eq!(s.epsilon(), EPSILON);
        assert_eq!(s.clone().with_epsilon(1e-6).epsilon(), 1e-6);
        assert!(s.get(4).is_none());

        assert!(s.set_row(0, Hyperplane::line(1.0, 0.0, 0.0)).is_err());
        assert!(s.push(Hyperplane::new(vec4(1.0, 0.0, 0.0, 0.0), 0.0)).is_err());
        s.push(Hyperplane::trivial(3).unwrap()).unwrap();
        s.set_row(0, Hyperplane::plane(0.0, 0.0, 1.0, 5.0)).unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s[0].constant_term(), 5.0);
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        assert_eq!(
            LinearSystem::new(vec![
                Hyperplane::line(1.0, 0.0, 1.0),
                Hyperplane::line(f64::NAN, 1.0, 0.0),
            ])
            .unwrap_err(),
            Error::NonFiniteCoefficient { row: 1 }
        );
        assert_eq!(
            LinearSystem::new(vec![Hyperplane::line(1.0, 1.0, f64::INFINITY)]).unwrap_err(),
            Error::NonFiniteCoefficient { row: 0 }
        );

        let mut s = example_system();
        assert_eq!(
            s.set_row(2, Hyperplane::plane(1.0, f64::NEG_INFINITY, 0.0, 0.0)),
            Err(Error::NonFiniteCoefficient { row: 2 })
        );
        assert_eq!(
            s.push(Hyperplane::plane(0.0, 0.0, 0.0, f64::NAN)),
            Err(Error::NonFiniteCoefficient { row: 4 })
        );
        assert_eq!(s.len(), 4);
        assert_approx_eq!(s[2], Hyperplane::plane(1.0, 1.0, -1.0, 3.0));
    }

    #[test]
    fn row_operations() {
        let p0 = Hyperplane::plane(1.0, 1.0, 1.0, 1.0);
        let p1 = Hyperplane::plane(0.0, 1.0, 0.0, 2.0);
        let p2 = Hyperplane::plane(1.0, 1.0, -1.0, 3.0);
        let p3 = Hyperplane::plane(1.0, 0.0, -2.0, 2.0);
        let mut s = LinearSystem::new(vec![p0.clone(), p1.clone(), p2.clone(), p3.clone()]).unwrap();

        s.swap_rows(0, 1);
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()][..]);

        s.swap_rows(1, 3);
        assert_eq!(s.rows(), &[p1.clone(), p3.clone(), p2.clone(), p0.clone()][..]);

        s.swap_rows(3, 1);
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()][..]);

        s.multiply_row(1.0, 0);
        assert_eq!(s.rows(), &[p1.clone(), p0.clone(), p2.clone(), p3.clone()][..]);

        s.multiply_row(-1.0, 2);
        let p2_negated = Hyperplane::plane(-1.0, -1.0, 1.0, -3.0);
        assert_approx_eq!(s[2], p2_negated);

        s.multiply_row(10.0, 1);
        let p0_scaled = Hyperplane::plane(10.0, 10.0, 10.0, 10.0);
        assert_approx_eq!(s[1], p0_scaled);

        s.add_multiple_of_row_to_row(0.0, 0, 1).unwrap();
        assert_approx_eq!(s[1], p0_scaled);

        s.add_multiple_of_row_to_row(1.0, 0, 1).unwrap();
        assert_approx_eq!(s[1], Hyperplane::plane(10.0, 11.0, 10.0, 12.0));

        s.add_multiple_of_row_to_row(-1.0, 1, 0).unwrap();
        assert_approx_eq!(s[0], Hyperplane::plane(-10.0, -10.0, -10.0, -10.0));
        assert_approx_eq!(s[1], Hyperplane::plane(10.0, 11.0, 10.0, 12.0));
        assert_approx_eq!(s[2], p2_negated);
        assert_approx_eq!(s[3], p3);
    }

    #[test]
    fn multiply_by_zero_collapses_row() {
        let mut s = example_system();
        s.multiply_row(0.0, 3);
        assert_eq!(s[3], Hyperplane::trivial(3).unwrap());
        assert_eq!(s.first_nonzero_indices()[3], None);
    }

    #[test]
    fn pivots() {
        let mut s = LinearSystem::new(vec![
            Hyperplane::plane(0.0, 2.0, 4.0, 6.0),
            Hyperplane::plane(1e-12, 0.0, 0.0, 1.0),
            Hyperplane::plane(0.0, 0.0, -0.5, 1.0),
        ])
        .unwrap();
        assert_eq!(s.first_nonzero_indices(), vec![Some(1), None, Some(2)]);

        assert_eq!(s.normalize_pivot(0), Ok(1));
        assert_approx_eq!(s[0], Hyperplane::plane(0.0, 1.0, 2.0, 3.0));
        assert_eq!(s.normalize_pivot(1), Err(Error::NoNonzeroElements));
        assert_eq!(s.normalize_pivot(2), Ok(2));
        assert_approx_eq!(s[2], Hyperplane::plane(0.0, 0.0, 1.0, -2.0));

        let loose = s.clone().with_epsilon(1e-15);
        assert_eq!(loose.first_nonzero_indices(), vec![Some(1), Some(0), Some(2)]);
    }

    #[test]
    #[should_panic]
    fn row_index_out_of_bounds() {
        example_system().swap_rows(0, 4);
    }

    #[test]
    fn display() {
        let s = LinearSystem::new(vec![
            Hyperplane::plane(1.0, 1.0, 1.0, 1.0),
            Hyperplane::plane(0.0, 1.0, 0.0, 2.0),
        ])
        .unwrap();
        assert_eq!(
            s.to_string(),
            "Linear System:\nEquation 1: x_1 + x_2 + x_3 = 1\nEquation 2: x_2 = 2"
        );
    }

    #[test]
    fn equality() {
        let s = example_system();
        let mut t = s.clone();
        t.multiply_row(-2.0, 0);
        assert_eq!(s, t);
        assert_approx_ne!(s, t);

        t.set_row(3, Hyperplane::new(vec3(1.0, 0.0, -2.0), 2.5)).unwrap();
        assert_ne!(s, t);
    }
}
