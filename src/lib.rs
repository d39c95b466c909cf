//! Numeric solvers for two small but fiddly problems:
//!
//! - all roots of a real polynomial of degree up to four, found with a
//!   multi-start Newton iteration, deflation and the closed forms of Cardano
//!   and Vieta ([`solve_quartic`]);
//! - diagonally dominant linear systems, solved with Gauss-Southwell
//!   relaxation after a strict well-posedness check ([`linalg::solve`]).
//!
//! # Examples
//!
//! ```
//! use rust_solve::{solve_quartic, Solutions};
//!
//! // (x - 1)(x - 2)(x - 3)(x - 4)
//! let solutions = solve_quartic(1.0, -10.0, 35.0, -50.0, 24.0);
//! let mut roots: Vec<f64> = solutions.roots().iter().map(|r| r.re()).collect();
//! roots.sort_by(f64::total_cmp);
//! for (got, expected) in roots.iter().zip([1.0, 2.0, 3.0, 4.0]) {
//!     assert!((got - expected).abs() < 1E-6);
//! }
//!
//! assert_eq!(solve_quartic(0.0, 0.0, 0.0, 0.0, 0.0), Solutions::AllReals);
//! ```
//!
//! ```
//! use rust_solve::linalg;
//!
//! let a: Vec<Vec<f64>> = vec![vec![4.0, 1.0], vec![2.0, 3.0]];
//! let b = vec![9.0, 13.0];
//! let solution = linalg::solve(&a, &b, None, None).unwrap();
//! assert!((solution.x[0] - 1.4).abs() < 1E-6);
//! assert!((solution.x[1] - 3.4).abs() < 1E-6);
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::many_single_char_names)]

/// A more ergonomic constructor for [`num::Complex`].
///
/// ```
/// # use rust_solve::complex;
/// use num::Complex;
///
/// assert_eq!(complex!(1.0), Complex::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, 2.0), Complex::new(1.0, 2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::Complex::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::Complex::new($re, $im)
    };
}

pub use num;

mod scalar;
pub use scalar::RealScalar;

mod poly;
pub use poly::{
    roots::{
        self, cardano, dedup_roots, newton_single, solve_quartic, vieta, Root, Solutions,
        StartPoints,
    },
    Cubic, Quartic,
};

pub mod linalg;

mod util;

// re-exported for integration tests and benches, not part of the public API
#[doc(hidden)]
pub use util::__testing;
