//! Solving systems of linear equations by Gaussian elimination.
//!
//! A [`LinearSystem`] is a list of [`Hyperplane`]s (equations `n · x = k`) of a common dimension.
//! [`LinearSystem::find_solutions`] reduces a copy of the system to reduced row echelon form and
//! classifies its [`Solutions`]: there are either none, exactly one, or infinitely many, in which
//! case they are described by a [`Parametrization`].
//!
//! ```
//! use linsys::{LinearSystem, Solutions};
//!
//! let system: LinearSystem = "
//!     1 1 1 = 1
//!     0 1 1 = 2
//! ".parse()?;
//!
//! let Solutions::Infinite(parametrization) = system.find_solutions()? else {
//!     unreachable!()
//! };
//! assert_eq!(parametrization.free_variable_count(), 1);
//!
//! let point = parametrization.point_at(&[5.0])?;
//! assert!(system.iter().all(|row| row.contains_point(&point).unwrap()));
//! # Ok::<_, linsys::Error>(())
//! ```
//!
//! # Tolerance
//!
//! Floating-point coefficients are never compared against `0.0` directly. Anything whose absolute
//! value is below [`EPSILON`][linalg::approx::EPSILON] (`1e-10`) counts as zero; the tolerance
//! used during reduction can be changed per system with [`LinearSystem::with_epsilon`].
//!
//! # Logging
//!
//! Row operations are logged at *trace* level and pivot selection and solution classification
//! at *debug* level, through the [`log`] crate. Use [`init_logger!`] to print them to *stderr*.

mod error;
mod format;
mod hyperplane;
mod parametrization;
mod parse;
mod solutions;
mod system;

use log::LevelFilter;

pub use error::Error;
pub use hyperplane::{Hyperplane, Intersection};
pub use linsys_linalg as linalg;
pub use parametrization::Parametrization;
pub use solutions::Solutions;
pub use system::LinearSystem;

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str, log_level: LevelFilter) {
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `linsys` log at *debug* level, or at the [`log::LevelFilter`] passed as
/// an argument. `RUST_LOG` takes precedence over both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"), $crate::__log::LevelFilter::Debug)
    };
    ($level:expr) => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"), $level)
    };
}

#[doc(hidden)]
pub use log as __log;
