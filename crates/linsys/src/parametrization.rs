use std::fmt;

use linsys_linalg::{approx::ApproxEq, LinalgError, Vector};

use crate::{format, Error};

/// An affine solution set `basepoint + t_1 d_1 + ... + t_n d_n`, with one direction vector `d_i`
/// per free variable.
#[derive(Debug, Clone, PartialEq)]
pub struct Parametrization {
    basepoint: Vector,
    direction_vectors: Vec<Vector>,
}

impl Parametrization {
    /// Creates a parametrization.
    ///
    /// Every direction vector must have the dimension of `basepoint`, otherwise
    /// [`LinalgError::DimensionMismatch`] is returned. An empty list of direction vectors
    /// describes the single point `basepoint`.
    pub fn new(basepoint: Vector, direction_vectors: Vec<Vector>) -> Result<Self, Error> {
        for direction in &direction_vectors {
            LinalgError::check_dimension(basepoint.dimension(), direction.dimension())?;
        }
        Ok(Self {
            basepoint,
            direction_vectors,
        })
    }

    #[inline]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    #[inline]
    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    /// Returns the dimension of the space the solution set lives in.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// Returns the number of free variables (parameters).
    #[inline]
    pub fn free_variable_count(&self) -> usize {
        self.direction_vectors.len()
    }

    /// Evaluates the parametrization, returning `basepoint + Σ parameters[i] * direction_vectors[i]`.
    ///
    /// `parameters` must contain one value per free variable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::Parametrization;
    /// # use linsys::linalg::vec2;
    /// let p = Parametrization::new(vec2(1.0, 0.0), vec![vec2(-1.0, 1.0)])?;
    /// assert_eq!(p.point_at(&[3.0])?, vec2(-2.0, 3.0));
    /// assert!(p.point_at(&[1.0, 2.0]).is_err());
    /// # Ok::<_, linsys::Error>(())
    /// ```
    pub fn point_at(&self, parameters: &[f64]) -> Result<Vector, Error> {
        LinalgError::check_dimension(self.free_variable_count(), parameters.len())?;
        let mut point = self.basepoint.clone();
        for (&t, direction) in parameters.iter().zip(&self.direction_vectors) {
            point = point.add_scaled(t, direction)?;
        }
        Ok(point)
    }
}

impl ApproxEq for Parametrization {
    fn abs_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.basepoint.abs_diff_eq(&other.basepoint, tolerance)
            && self
                .direction_vectors
                .abs_diff_eq(&other.direction_vectors, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.basepoint.rel_diff_eq(&other.basepoint, tolerance)
            && self
                .direction_vectors
                .rel_diff_eq(&other.direction_vectors, tolerance)
    }
}

/// Renders one line per coordinate, such as `x_1 = 2 - t_1 + 0.5t_2`.
impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dimension() {
            if i != 0 {
                f.write_str("\n")?;
            }
            write!(f, "x_{} = ", i + 1)?;

            let base = format::round(self.basepoint[i]);
            let mut is_leading = base == 0.0;
            if !is_leading {
                write!(f, "{base}")?;
            }

            for (j, direction) in self.direction_vectors.iter().enumerate() {
                if format::round(direction[i]) == 0.0 {
                    continue;
                }
                if !is_leading {
                    f.write_str(" ")?;
                }
                format::write_term(f, direction[i], format_args!("t_{}", j + 1), is_leading)?;
                is_leading = false;
            }

            if is_leading {
                f.write_str("0")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, vec2, vec3};

    use super::*;

    #[test]
    fn construction() {
        let p = Parametrization::new(vec3(1.0, 2.0, 0.0), vec![vec3(0.0, -1.0, 1.0)]).unwrap();
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.free_variable_count(), 1);
        assert_eq!(p.basepoint(), &vec3(1.0, 2.0, 0.0));

        assert_eq!(
            Parametrization::new(vec3(1.0, 2.0, 0.0), vec![vec2(0.0, 1.0)]),
            Err(Error::Linalg(LinalgError::DimensionMismatch {
                expected: 3,
                found: 2
            }))
        );
    }

    #[test]
    fn evaluation() {
        let p = Parametrization::new(
            vec3(-1.0, 2.0, 0.0),
            vec![vec3(0.0, -1.0, 1.0), vec3(2.0, 0.0, 0.0)],
        )
        .unwrap();
        assert_approx_eq!(p.point_at(&[0.0, 0.0]).unwrap(), vec3(-1.0, 2.0, 0.0));
        assert_approx_eq!(p.point_at(&[2.0, 0.5]).unwrap(), vec3(0.0, 0.0, 2.0));
        assert_eq!(
            p.point_at(&[1.0]),
            Err(Error::Linalg(LinalgError::DimensionMismatch {
                expected: 2,
                found: 1
            }))
        );

        let point = Parametrization::new(vec2(1.0, 1.0), Vec::new()).unwrap();
        assert_eq!(point.point_at(&[]).unwrap(), vec2(1.0, 1.0));
    }

    #[test]
    fn display() {
        let p = Parametrization::new(
            vec3(-1.0, 2.0, 0.0),
            vec![vec3(0.0, -1.0, 1.0), vec3(0.5, 0.0, 0.0)],
        )
        .unwrap();
        assert_eq!(p.to_string(), "x_1 = -1 + 0.5t_2\nx_2 = 2 - t_1\nx_3 = t_1");

        let p = Parametrization::new(vec2(0.0, 0.0), vec![vec2(0.0, -2.0)]).unwrap();
        assert_eq!(p.to_string(), "x_1 = 0\nx_2 = -2t_1");
    }
}
