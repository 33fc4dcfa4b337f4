use crate::coefficients::{stencil, DerivativeOrder, Direction, Stencil};
use crate::error::{DifferentiationError, Result};
use crate::step::estimate_step;

/// Evaluates a derivative of `f` at `x` by sampling it at stencil offsets `x + k·h`.
///
/// # Arguments
///
/// * `direction` - Forward, centered or backward stencil
/// * `order` - Derivative order, 1 through 4
/// * `f` - The function to differentiate
/// * `x` - Evaluation point
/// * `h` - Step size (finite and nonzero)
///
/// # Example
///
/// ```rust
/// use finite_difference::{evaluate, Direction};
///
/// let d = evaluate(Direction::Centered, 1, |x: f64| x * x * x, 2.0, 1.0).unwrap();
/// assert_eq!(d, 12.0);
/// ```
pub fn evaluate<F>(direction: Direction, order: usize, f: F, x: f64, h: f64) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let order = DerivativeOrder::try_from(order)?;
    evaluate_with_order(direction, order, f, x, h)
}

pub(crate) fn evaluate_with_order<F>(
    direction: Direction,
    order: DerivativeOrder,
    f: F,
    x: f64,
    h: f64,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    check_step(h)?;
    tracing::trace!(target: "finite_difference", %direction, order = order.as_usize(), x, h, "evaluating callable");
    Ok(stencil(direction, order).apply(order, h, |k| f(x + k as f64 * h)))
}

/// Evaluates a derivative at `samples[index]` using a step size estimated from the
/// whole sequence (see [`estimate_step`]).
///
/// Fails with [`DifferentiationError::IndexOutOfRange`] if any stencil point would
/// fall outside the sequence.
pub fn evaluate_samples(
    direction: Direction,
    order: usize,
    samples: &[f64],
    index: usize,
) -> Result<f64> {
    let order = DerivativeOrder::try_from(order)?;
    let s = checked_stencil(direction, order, samples.len(), index)?;
    let h = estimate_step(samples)?;
    apply_to_samples(direction, s, order, samples, index, h)
}

/// As [`evaluate_samples`], with an explicit sample spacing `h`.
pub fn evaluate_samples_with_step(
    direction: Direction,
    order: usize,
    samples: &[f64],
    index: usize,
    h: f64,
) -> Result<f64> {
    let order = DerivativeOrder::try_from(order)?;
    let s = checked_stencil(direction, order, samples.len(), index)?;
    apply_to_samples(direction, s, order, samples, index, h)
}

/// Picks the stencil direction for `index` in a series of length `len`: centered when
/// both sides are available, forward near the left edge, backward near the right edge.
///
/// Returns `None` when no stencil of this order fits.
pub fn select_direction(len: usize, index: usize, order: DerivativeOrder) -> Option<Direction> {
    [Direction::Centered, Direction::Forward, Direction::Backward]
        .into_iter()
        .find(|&direction| fits(stencil(direction, order), len, index))
}

fn fits(s: &Stencil, len: usize, index: usize) -> bool {
    let (left, right) = s.reach();
    index >= left && index.checked_add(right).map_or(false, |end| end < len)
}

pub(crate) fn checked_stencil(
    direction: Direction,
    order: DerivativeOrder,
    len: usize,
    index: usize,
) -> Result<&'static Stencil> {
    let s = stencil(direction, order);
    if !fits(s, len, index) {
        return Err(DifferentiationError::IndexOutOfRange {
            direction,
            order: order.as_usize(),
            index,
            len,
        });
    }
    Ok(s)
}

/// Applies an already range-checked stencil to the sequence.
pub(crate) fn apply_to_samples(
    direction: Direction,
    s: &Stencil,
    order: DerivativeOrder,
    samples: &[f64],
    index: usize,
    h: f64,
) -> Result<f64> {
    check_step(h)?;
    tracing::trace!(target: "finite_difference", %direction, order = order.as_usize(), index, h, "evaluating samples");
    Ok(s.apply(order, h, |k| samples[(index as isize + k) as usize]))
}

pub(crate) fn check_step(h: f64) -> Result<()> {
    if h == 0.0 || !h.is_finite() {
        return Err(DifferentiationError::InvalidStep(h));
    }
    Ok(())
}
