use std::fmt;

use nalgebra::{DMatrix, DVector};

use crate::error::{DifferentiationError, Result};

/// Side of the evaluation point a stencil samples from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Points at x, x+h, x+2h, ... (left boundary of a domain)
    Forward,
    /// Points symmetric around x
    Centered,
    /// Points at x, x-h, x-2h, ... (right boundary of a domain)
    Backward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Forward => "forward",
            Direction::Centered => "centered",
            Direction::Backward => "backward",
        };
        f.write_str(name)
    }
}

/// Order of the derivative being approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DerivativeOrder {
    First,
    Second,
    Third,
    Fourth,
}

impl DerivativeOrder {
    pub fn as_usize(self) -> usize {
        match self {
            DerivativeOrder::First => 1,
            DerivativeOrder::Second => 2,
            DerivativeOrder::Third => 3,
            DerivativeOrder::Fourth => 4,
        }
    }
}

impl TryFrom<usize> for DerivativeOrder {
    type Error = DifferentiationError;

    fn try_from(order: usize) -> Result<Self> {
        match order {
            1 => Ok(DerivativeOrder::First),
            2 => Ok(DerivativeOrder::Second),
            3 => Ok(DerivativeOrder::Third),
            4 => Ok(DerivativeOrder::Fourth),
            other => Err(DifferentiationError::UnsupportedOrder(other)),
        }
    }
}

/// A finite-difference stencil: integer offsets from the evaluation point and
/// their weights, scaled by `1 / (denominator * h^order)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stencil {
    pub offsets: &'static [isize],
    pub weights: &'static [f64],
    pub denominator: f64,
}

impl Stencil {
    /// Number of points reached on the left and on the right of the evaluation point.
    pub fn reach(&self) -> (usize, usize) {
        let min = self.offsets.iter().copied().min().unwrap_or(0);
        let max = self.offsets.iter().copied().max().unwrap_or(0);
        (min.min(0).unsigned_abs(), max.max(0) as usize)
    }

    /// Applies the stencil given a lookup for the value at each offset.
    ///
    /// `value` is called once per offset, in table order.
    pub fn apply<F>(&self, order: DerivativeOrder, h: f64, mut value: F) -> f64
    where
        F: FnMut(isize) -> f64,
    {
        let sum = self
            .offsets
            .iter()
            .zip(self.weights.iter())
            .fold(0.0, |acc, (&k, &w)| acc + w * value(k));
        sum / (self.denominator * h.powi(order.as_usize() as i32))
    }
}

static FORWARD: [Stencil; 4] = [
    Stencil { offsets: &[0, 1, 2], weights: &[-3.0, 4.0, -1.0], denominator: 2.0 },
    Stencil { offsets: &[0, 1, 2, 3], weights: &[2.0, -5.0, 4.0, -1.0], denominator: 1.0 },
    Stencil {
        offsets: &[0, 1, 2, 3, 4],
        weights: &[-5.0, 18.0, -24.0, 14.0, -3.0],
        denominator: 2.0,
    },
    Stencil {
        offsets: &[0, 1, 2, 3, 4, 5],
        weights: &[3.0, -14.0, 26.0, -24.0, 11.0, -2.0],
        denominator: 1.0,
    },
];

// Zero-weight centre points are left out of the odd-order tables.
static CENTERED: [Stencil; 4] = [
    Stencil { offsets: &[-2, -1, 1, 2], weights: &[1.0, -8.0, 8.0, -1.0], denominator: 12.0 },
    Stencil {
        offsets: &[-2, -1, 0, 1, 2],
        weights: &[-1.0, 16.0, -30.0, 16.0, -1.0],
        denominator: 12.0,
    },
    Stencil {
        offsets: &[-3, -2, -1, 1, 2, 3],
        weights: &[1.0, -8.0, 13.0, -13.0, 8.0, -1.0],
        denominator: 8.0,
    },
    // The whole sum is divided by 6h^4, not just the centre term.
    Stencil {
        offsets: &[-3, -2, -1, 0, 1, 2, 3],
        weights: &[-1.0, 12.0, -39.0, 56.0, -39.0, 12.0, -1.0],
        denominator: 6.0,
    },
];

static BACKWARD: [Stencil; 4] = [
    Stencil { offsets: &[-2, -1, 0], weights: &[1.0, -4.0, 3.0], denominator: 2.0 },
    Stencil { offsets: &[-3, -2, -1, 0], weights: &[-1.0, 4.0, -5.0, 2.0], denominator: 1.0 },
    Stencil {
        offsets: &[-4, -3, -2, -1, 0],
        weights: &[3.0, -14.0, 24.0, -18.0, 5.0],
        denominator: 2.0,
    },
    Stencil {
        offsets: &[-5, -4, -3, -2, -1, 0],
        weights: &[-2.0, 11.0, -24.0, 26.0, -14.0, 3.0],
        denominator: 1.0,
    },
];

/// Returns the stencil for the given direction and derivative order.
pub fn stencil(direction: Direction, order: DerivativeOrder) -> &'static Stencil {
    let table = match direction {
        Direction::Forward => &FORWARD,
        Direction::Centered => &CENTERED,
        Direction::Backward => &BACKWARD,
    };
    &table[order.as_usize() - 1]
}

/// Computes finite-difference weights for arbitrary sample offsets.
///
/// The weights `w` satisfy `Σ w_i · p(offset_i) = p^(derivative)(0)` for every
/// polynomial `p` of degree below `offsets.len()`, i.e. they are obtained by
/// Taylor-expansion elimination. Offsets must be distinct.
///
/// # Arguments
///
/// * `offsets` - Sample positions relative to the evaluation point, in units of `h`
/// * `derivative` - Order of derivative to approximate
///
/// # Returns
///
/// Weights for unit spacing; divide the weighted sum by `h^derivative`.
pub fn compute_weights(offsets: &[isize], derivative: usize) -> Result<Vec<f64>> {
    compute_weights_with_delta(offsets, derivative, 1.0)
}

/// As [`compute_weights`], with offsets expressed in physical units `offset * delta`
/// so the weighted sum is the derivative directly.
pub fn compute_weights_with_delta(
    offsets: &[isize],
    derivative: usize,
    delta: f64,
) -> Result<Vec<f64>> {
    let n = offsets.len();
    if derivative >= n {
        return Err(DifferentiationError::InsufficientData {
            len: n,
            required: derivative + 1,
        });
    }
    if delta == 0.0 || !delta.is_finite() {
        return Err(DifferentiationError::InvalidStep(delta));
    }

    // Row j holds x_i^j: moment equations of the Taylor expansion
    let mut moments = DMatrix::<f64>::zeros(n, n);
    for (i, &off) in offsets.iter().enumerate() {
        let x = off as f64 * delta;
        for j in 0..n {
            moments[(j, i)] = x.powi(j as i32);
        }
    }

    let mut rhs = DVector::<f64>::zeros(n);
    rhs[derivative] = (1..=derivative).fold(1.0, |acc, k| acc * k as f64);

    let weights = moments.lu().solve(&rhs).ok_or_else(|| {
        DifferentiationError::ComputationError(
            "Failed to solve moment system (offsets must be distinct)".to_string(),
        )
    })?;

    Ok(weights.iter().copied().collect())
}
