use crate::error::{DifferentiationError, Result};

/// Estimates the step size of a sample sequence as the mean of its consecutive
/// first differences, `(1/(n-1)) · Σ (samples[i+1] - samples[i])`.
///
/// The mean is the maximum-likelihood estimate of a constant step under
/// independent per-sample noise.
///
/// # Example
///
/// ```rust
/// use finite_difference::estimate_step;
///
/// let h = estimate_step(&[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap();
/// assert_eq!(h, 4.0);
/// ```
pub fn estimate_step(samples: &[f64]) -> Result<f64> {
    let n = samples.len();
    if n < 2 {
        return Err(DifferentiationError::InsufficientData { len: n, required: 2 });
    }

    let total: f64 = samples.windows(2).map(|w| w[1] - w[0]).sum();
    let h = total / (n - 1) as f64;
    tracing::debug!(target: "finite_difference", samples = n, step = h, "estimated step size");
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean_of_differences() {
        // Differences 1, 3, 5, 7
        assert_eq!(estimate_step(&[0.0, 1.0, 4.0, 9.0, 16.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_evenly_spaced() {
        let samples: Vec<f64> = (0..10).map(|i| i as f64 * 0.25).collect();
        assert_abs_diff_eq!(estimate_step(&samples).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_decreasing_sequence() {
        assert_eq!(estimate_step(&[3.0, 2.0, 1.0]).unwrap(), -1.0);
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            estimate_step(&[1.0]),
            Err(DifferentiationError::InsufficientData { len: 1, required: 2 })
        );
        assert!(estimate_step(&[]).is_err());
    }
}
