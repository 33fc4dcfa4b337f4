use crate::coefficients::{DerivativeOrder, Direction};
use crate::error::{DifferentiationError, Result};
use crate::evaluator::{apply_to_samples, checked_stencil, evaluate_with_order, select_direction};
use crate::step::estimate_step;

/// How the step size is obtained in sample mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepSize {
    /// Mean of consecutive differences of the samples
    Estimated,
    /// Known spacing between samples
    Fixed(f64),
}

/// Configuration for a [`Differentiator`].
#[derive(Debug, Clone, PartialEq)]
pub struct DifferentiatorConfig {
    /// Order of the derivative to compute
    pub order: DerivativeOrder,
    /// Stencil direction; `None` selects it per point (centered where possible)
    pub direction: Option<Direction>,
    /// Step size used in sample mode
    pub step: StepSize,
}

impl DifferentiatorConfig {
    /// Creates a new configuration with validation
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self {
            order: DerivativeOrder::try_from(order)?,
            direction: None,
            step: StepSize::Estimated,
        })
    }

    /// Fixes the stencil direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Sets the sample-mode step size
    pub fn with_step(mut self, step: StepSize) -> Self {
        self.step = step;
        self
    }
}

/// A reusable finite-difference differentiator for callables and sampled series.
#[derive(Debug, Clone)]
pub struct Differentiator {
    config: DifferentiatorConfig,
}

impl Differentiator {
    /// Creates a differentiator for the given derivative order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_difference::Differentiator;
    ///
    /// let diff = Differentiator::new(2).expect("Valid order");
    /// ```
    pub fn new(order: usize) -> Result<Self> {
        Ok(Self::with_config(DifferentiatorConfig::new(order)?))
    }

    /// Creates a differentiator with custom configuration
    pub fn with_config(config: DifferentiatorConfig) -> Self {
        Self { config }
    }

    /// Fixes the stencil direction
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.config.direction = Some(direction);
        self
    }

    /// Sets the sample-mode step size
    pub fn with_step(mut self, step: StepSize) -> Self {
        self.config.step = step;
        self
    }

    /// Differentiates `f` at `x` with step `h`. Uses the centered stencil unless a
    /// direction is configured.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_difference::Differentiator;
    ///
    /// let diff = Differentiator::new(1).unwrap();
    /// let d = diff.eval(|x: f64| x.sin(), 0.0, 1e-3).unwrap();
    /// assert!((d - 1.0).abs() < 1e-10);
    /// ```
    pub fn eval<F>(&self, f: F, x: f64, h: f64) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        let direction = self.config.direction.unwrap_or(Direction::Centered);
        evaluate_with_order(direction, self.config.order, f, x, h)
    }

    /// Differentiates the series at `samples[index]`.
    pub fn at(&self, samples: &[f64], index: usize) -> Result<f64> {
        let order = self.config.order;
        let direction = self.direction_at(samples.len(), index)?;
        let s = checked_stencil(direction, order, samples.len(), index)?;
        let h = self.step(samples)?;
        apply_to_samples(direction, s, order, samples, index, h)
    }

    /// Differentiates every point of the series.
    ///
    /// Without a configured direction, interior points use the centered stencil and
    /// points near the edges fall back to forward or backward stencils. The step size
    /// is resolved once for the whole series.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finite_difference::{Differentiator, StepSize};
    ///
    /// let data: Vec<f64> = (0..10).map(|i| (i as f64).powi(2)).collect();
    /// let diff = Differentiator::new(1).unwrap().with_step(StepSize::Fixed(1.0));
    /// let d = diff.apply(&data).unwrap();
    /// assert_eq!(d.len(), data.len());
    /// ```
    pub fn apply(&self, samples: &[f64]) -> Result<Vec<f64>> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        let order = self.config.order;
        let n = samples.len();
        let h = self.step(samples)?;

        (0..n)
            .map(|index| {
                let direction = self.direction_at(n, index)?;
                let s = checked_stencil(direction, order, n, index)?;
                apply_to_samples(direction, s, order, samples, index, h)
            })
            .collect()
    }

    fn direction_at(&self, len: usize, index: usize) -> Result<Direction> {
        if let Some(direction) = self.config.direction {
            return Ok(direction);
        }
        let order = self.config.order;
        let direction = select_direction(len, index, order).ok_or(
            DifferentiationError::NoStencilFits {
                index,
                order: order.as_usize(),
                len,
            },
        )?;
        if direction != Direction::Centered {
            tracing::debug!(target: "finite_difference", index, %direction, "boundary stencil selected");
        }
        Ok(direction)
    }

    fn step(&self, samples: &[f64]) -> Result<f64> {
        match self.config.step {
            StepSize::Estimated => estimate_step(samples),
            StepSize::Fixed(h) => Ok(h),
        }
    }

    /// Returns the differentiator configuration
    pub fn config(&self) -> &DifferentiatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_config_validation() {
        assert!(DifferentiatorConfig::new(0).is_err());
        assert!(DifferentiatorConfig::new(5).is_err());
        let config = DifferentiatorConfig::new(3)
            .unwrap()
            .with_direction(Direction::Backward)
            .with_step(StepSize::Fixed(0.5));
        assert_eq!(config.order, DerivativeOrder::Third);
        assert_eq!(config.direction, Some(Direction::Backward));
        assert_eq!(config.step, StepSize::Fixed(0.5));
    }

    #[test]
    fn test_eval_defaults_to_centered() {
        let diff = Differentiator::new(1).unwrap();
        let f = |x: f64| x.powi(3);
        let centered = crate::evaluate(Direction::Centered, 1, f, 2.0, 0.1).unwrap();
        assert_eq!(diff.eval(f, 2.0, 0.1).unwrap(), centered);
    }

    #[test]
    fn test_apply_derivative_of_quadratic() {
        let h = 0.5;
        let data: Vec<f64> = (0..20).map(|i| (i as f64 * h).powi(2)).collect();
        let diff = Differentiator::new(1).unwrap().with_step(StepSize::Fixed(h));
        let derivative = diff.apply(&data).unwrap();

        assert_eq!(derivative.len(), data.len());
        for (i, d) in derivative.iter().enumerate() {
            assert_abs_diff_eq!(*d, 2.0 * i as f64 * h, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_apply_fixed_direction_fails_at_edge() {
        let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let diff = Differentiator::new(1)
            .unwrap()
            .with_direction(Direction::Centered);
        assert!(matches!(
            diff.apply(&data),
            Err(DifferentiationError::IndexOutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_apply_too_short_series() {
        let diff = Differentiator::new(1).unwrap();
        assert_eq!(
            diff.apply(&[0.0, 1.0, 2.0]),
            Err(DifferentiationError::NoStencilFits { index: 1, order: 1, len: 3 })
        );
        assert_eq!(diff.apply(&[]), Ok(Vec::new()));
    }

    #[test]
    fn test_at_matches_apply() {
        let data: Vec<f64> = (0..12).map(|i| (i as f64 * 0.3).sin()).collect();
        let diff = Differentiator::new(2).unwrap();
        let all = diff.apply(&data).unwrap();
        for i in 0..data.len() {
            assert_eq!(diff.at(&data, i).unwrap(), all[i]);
        }
    }
}
