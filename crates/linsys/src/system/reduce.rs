//! Gaussian elimination.

use itertools::Itertools;
use linsys_linalg::{approx::is_near_zero_within, Vector};

use crate::{Error, LinearSystem, Parametrization, Solutions};

impl LinearSystem {
    /// Brings a copy of the system into triangular (row echelon) form.
    ///
    /// Every row's leading variable comes strictly after the leading variable of the row above
    /// it. Rows without any coefficient above the tolerance end up at the bottom, either as
    /// `0 = 0` or as a contradiction `0 = k`.
    ///
    /// `self` is not modified.
    pub fn compute_triangular_form(&self) -> Result<Self, Error> {
        let mut system = self.clone();
        let mut column = 0;

        for row in 0..system.len() {
            while column < system.dimension() {
                if system.is_near_zero(row, column) {
                    match system.first_row_below_with_nonzero(row, column) {
                        Some(below) => system.swap_rows(row, below),
                        None => {
                            column += 1;
                            continue;
                        }
                    }
                }

                system.clear_coefficients_below(row, column)?;
                column += 1;
                break;
            }
        }

        Ok(system)
    }

    /// Brings a copy of the system into reduced row echelon form (RREF).
    ///
    /// Starting from [`LinearSystem::compute_triangular_form`], every leading coefficient is
    /// scaled to 1 and its variable is eliminated from all rows above.
    pub fn compute_rref(&self) -> Result<Self, Error> {
        let mut system = self.compute_triangular_form()?;
        let pivots = system.first_nonzero_indices();

        for (row, pivot) in pivots.into_iter().enumerate().rev() {
            let Some(column) = pivot else { continue };
            let coefficient = system[row].normal_vector()[column];
            system.multiply_row(1.0 / coefficient, row);
            system.clear_coefficients_above(row, column)?;
        }

        Ok(system)
    }

    /// Computes the set of solutions of the system.
    ///
    /// The result is [`Solutions::NoSolution`] if the reduced system contains a contradiction
    /// `0 = k` with `k` nonzero, [`Solutions::Unique`] if every variable is a pivot variable, and
    /// [`Solutions::Infinite`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Hyperplane, LinearSystem, Solutions};
    /// let system = LinearSystem::new(vec![
    ///     Hyperplane::line(1.0, 1.0, 3.0),
    ///     Hyperplane::line(1.0, -1.0, 1.0),
    /// ])?;
    /// let solutions = system.find_solutions()?;
    /// assert_eq!(solutions.unique().unwrap().coordinates(), &[2.0, 1.0]);
    /// # Ok::<_, linsys::Error>(())
    /// ```
    pub fn find_solutions(&self) -> Result<Solutions, Error> {
        let rref = self.compute_rref()?;
        let pivots = rref.first_nonzero_indices();
        log::debug!("pivot columns: {pivots:?}");

        let contradiction = rref
            .iter()
            .zip(&pivots)
            .position(|(row, pivot)| {
                pivot.is_none() && !is_near_zero_within(row.constant_term(), rref.epsilon())
            });
        if let Some(row) = contradiction {
            log::debug!("no solutions, row {row} is contradictory: {}", rref[row]);
            return Ok(Solutions::NoSolution);
        }

        let mut pivot_row_of = vec![None; rref.dimension()];
        for (row, pivot) in pivots.iter().enumerate() {
            if let Some(column) = *pivot {
                pivot_row_of[column].get_or_insert(row);
            }
        }

        let pivot_count = pivot_row_of.iter().flatten().count();
        if pivot_count == rref.dimension() {
            log::debug!("unique solution ({pivot_count} pivots)");
            let solution = Vector::from_fn(rref.dimension(), |column| {
                pivot_row_of[column].map_or(0.0, |row| rref[row].constant_term())
            })?;
            return Ok(Solutions::Unique(solution));
        }

        log::debug!(
            "infinitely many solutions ({} free variables)",
            rref.dimension() - pivot_count
        );
        Ok(Solutions::Infinite(rref.parametrize(&pivot_row_of)?))
    }

    /// Expresses the pivot variables of a system in RREF in terms of its free variables.
    ///
    /// `pivot_row_of[column]` is the row whose leading variable is `column`, if any.
    fn parametrize(&self, pivot_row_of: &[Option<usize>]) -> Result<Parametrization, Error> {
        let dimension = self.dimension();

        let basepoint = Vector::from_fn(dimension, |column| {
            pivot_row_of[column].map_or(0.0, |row| self[row].constant_term())
        })?;

        let direction_vectors = pivot_row_of
            .iter()
            .positions(Option::is_none)
            .map(|free| {
                Vector::from_fn(dimension, |column| match pivot_row_of[column] {
                    _ if column == free => 1.0,
                    Some(row) => -self[row].normal_vector()[free],
                    None => 0.0,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Parametrization::new(basepoint, direction_vectors)
    }

    fn is_near_zero(&self, row: usize, column: usize) -> bool {
        is_near_zero_within(self[row].normal_vector()[column], self.epsilon())
    }

    fn first_row_below_with_nonzero(&self, row: usize, column: usize) -> Option<usize> {
        (row + 1..self.len()).find(|&below| !self.is_near_zero(below, column))
    }

    fn clear_coefficients_below(&mut self, row: usize, column: usize) -> Result<(), Error> {
        let pivot = self[row].normal_vector()[column];
        for below in row + 1..self.len() {
            let coefficient = self[below].normal_vector()[column];
            if coefficient != 0.0 {
                self.add_multiple_of_row_to_row(-coefficient / pivot, row, below)?;
            }
        }
        Ok(())
    }

    fn clear_coefficients_above(&mut self, row: usize, column: usize) -> Result<(), Error> {
        for above in (0..row).rev() {
            let coefficient = self[above].normal_vector()[column];
            if coefficient != 0.0 {
                self.add_multiple_of_row_to_row(-coefficient, row, above)?;
            }
        }
        Ok(())
    }
}
