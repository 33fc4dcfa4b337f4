//! # Finite Difference
//!
//! Numerical derivatives of orders 1 through 4 using forward, centered and backward
//! finite-difference stencils.
//!
//! Two modes share the same stencil tables:
//!
//! - **Callable mode** evaluates a function `f: f64 -> f64` at `x + k·h`.
//! - **Sample mode** reads `samples[index + k]` from a pre-sampled series, with the
//!   step size estimated as the mean of consecutive differences.
//!
//! Centered stencils are the most accurate and need points on both sides; forward
//! and backward stencils are meant for the left and right edges of a domain.
//!
//! ## Example
//!
//! ```rust
//! use finite_difference::{centered_differential, forward_differential_samples};
//!
//! let d = centered_differential(|x: f64| x * x, 3.0, 1e-2, 1).unwrap();
//! assert!((d - 6.0).abs() < 1e-9);
//!
//! let samples = [0.0, 1.0, 2.0, 3.0, 4.0];
//! let slope = forward_differential_samples(&samples, 0, 1).unwrap();
//! assert_eq!(slope, 1.0);
//! ```

mod coefficients;
mod differentiator;
mod error;
mod evaluator;
mod step;

pub use coefficients::{
    compute_weights, compute_weights_with_delta, stencil, DerivativeOrder, Direction, Stencil,
};
pub use differentiator::{Differentiator, DifferentiatorConfig, StepSize};
pub use error::{DifferentiationError, Result};
pub use evaluator::{evaluate, evaluate_samples, evaluate_samples_with_step, select_direction};
pub use step::estimate_step;

/// Forward-difference derivative of `f` at `x` with step `h`.
///
/// # Arguments
///
/// * `f` - The function to differentiate
/// * `x` - Evaluation point
/// * `h` - Step size (finite and nonzero)
/// * `order` - Derivative order, 1 through 4
pub fn forward_differential<F>(f: F, x: f64, h: f64, order: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    evaluate(Direction::Forward, order, f, x, h)
}

/// Centered-difference derivative of `f` at `x` with step `h`.
pub fn centered_differential<F>(f: F, x: f64, h: f64, order: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    evaluate(Direction::Centered, order, f, x, h)
}

/// Backward-difference derivative of `f` at `x` with step `h`.
pub fn backward_differential<F>(f: F, x: f64, h: f64, order: usize) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    evaluate(Direction::Backward, order, f, x, h)
}

/// Forward-difference derivative of a sampled series at `samples[index]`.
///
/// The step size is estimated from the series; see [`estimate_step`].
pub fn forward_differential_samples(samples: &[f64], index: usize, order: usize) -> Result<f64> {
    evaluate_samples(Direction::Forward, order, samples, index)
}

/// Centered-difference derivative of a sampled series at `samples[index]`.
pub fn centered_differential_samples(samples: &[f64], index: usize, order: usize) -> Result<f64> {
    evaluate_samples(Direction::Centered, order, samples, index)
}

/// Backward-difference derivative of a sampled series at `samples[index]`.
pub fn backward_differential_samples(samples: &[f64], index: usize, order: usize) -> Result<f64> {
    evaluate_samples(Direction::Backward, order, samples, index)
}

/// Computes the derivative at every point of a sampled series.
///
/// Interior points use centered stencils; points too close to an edge fall back to
/// forward or backward stencils.
///
/// # Arguments
///
/// * `samples` - The input series
/// * `order` - Derivative order, 1 through 4
///
/// # Returns
///
/// A Result containing one derivative per sample or an error
pub fn derivative_series(samples: &[f64], order: usize) -> Result<Vec<f64>> {
    Differentiator::new(order)?.apply(samples)
}
