//! Parsing equations from text.
//!
//! An equation lists its coefficients, separated by whitespace or commas, followed by `=` and the
//! constant term:
//!
//! ```text
//! 1, 1, 1 = 1
//! 0 1 0   = 2
//! ```
//!
//! A system is one equation per line. Blank lines are skipped and `#` starts a comment.

use std::str::FromStr;

use linsys_linalg::Vector;

use crate::{Error, Hyperplane, LinearSystem};

fn invalid(input: &str, reason: impl Into<String>) -> Error {
    Error::InvalidEquation {
        input: input.trim().to_string(),
        reason: reason.into(),
    }
}

fn parse_number(input: &str, token: &str) -> Result<f64, Error> {
    token
        .parse::<f64>()
        .map_err(|e| invalid(input, format!("`{token}` is not a number ({e})")))
}

impl FromStr for Hyperplane {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((lhs, rhs)) = s.split_once('=') else {
            return Err(invalid(s, "missing `=`"));
        };

        let coefficients = lhs
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| parse_number(s, token))
            .collect::<Result<Vec<_>, _>>()?;
        if coefficients.is_empty() {
            return Err(invalid(s, "no coefficients"));
        }

        let constant_term = parse_number(s, rhs.trim())?;
        Ok(Hyperplane::new(Vector::new(coefficients)?, constant_term))
    }
}

impl FromStr for LinearSystem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.split_once('#').map_or(line, |(code, _)| code))
            .filter(|line| !line.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Hyperplane>, _>>()?;
        LinearSystem::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{vec3, LinalgError};

    use super::*;

    #[test]
    fn parse_hyperplane() {
        let p: Hyperplane = "1, -2.5, 0 = 4".parse().unwrap();
        assert_eq!(p.normal_vector(), &vec3(1.0, -2.5, 0.0));
        assert_eq!(p.constant_term(), 4.0);

        let p: Hyperplane = "  1 2 3=-1 ".parse().unwrap();
        assert_eq!(p.normal_vector(), &vec3(1.0, 2.0, 3.0));
        assert_eq!(p.constant_term(), -1.0);
    }

    #[test]
    fn parse_hyperplane_errors() {
        let err = "1 2 3".parse::<Hyperplane>().unwrap_err();
        assert_eq!(
            err,
            Error::InvalidEquation {
                input: "1 2 3".into(),
                reason: "missing `=`".into()
            }
        );

        let err = " = 3".parse::<Hyperplane>().unwrap_err();
        assert!(matches!(err, Error::InvalidEquation { reason, .. } if reason == "no coefficients"));

        let err = "1 x = 3".parse::<Hyperplane>().unwrap_err();
        assert!(matches!(err, Error::InvalidEquation { reason, .. } if reason.contains("`x`")));

        let err = "1 1 = ".parse::<Hyperplane>().unwrap_err();
        assert!(matches!(err, Error::InvalidEquation { .. }));

        assert!("1 1 = 2 = 3".parse::<Hyperplane>().is_err());
    }

    #[test]
    fn parse_system() {
        let system: LinearSystem = "
            # x + y + z = 1
            1 1 1 = 1
            0 1 0 = 2   # y = 2

            1 1 -1 = 3
        "
        .parse()
        .unwrap();
        assert_eq!(system.len(), 3);
        assert_eq!(system.dimension(), 3);
        assert_eq!(system[1], Hyperplane::plane(0.0, 1.0, 0.0, 2.0));
    }

    #[test]
    fn parse_system_errors() {
        assert_eq!("# nothing\n\n".parse::<LinearSystem>(), Err(Error::EmptySystem));
        assert_eq!(
            "1 1 = 1\n1 1 1 = 1".parse::<LinearSystem>(),
            Err(Error::Linalg(LinalgError::DimensionMismatch {
                expected: 2,
                found: 3
            }))
        );
        assert_eq!(
            "1 1 = 1\nnan 1 = 2".parse::<LinearSystem>(),
            Err(Error::NonFiniteCoefficient { row: 1 })
        );
    }
}
