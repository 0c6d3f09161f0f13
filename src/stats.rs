//! Numeric primitives shared by the wellness calculators
//!
//! All estimators follow the same degenerate-input convention: an empty (or
//! too short) series yields `0.0` instead of an error or `NaN`, so the
//! calculators built on top of them never have to branch on length.

use rust_decimal::{Decimal, RoundingStrategy};

/// Clamp a value into `[lo, hi]`
pub fn clamp(x: f64, lo: f64, hi: f64) -> f64 {
    lo.max(hi.min(x))
}

/// Arithmetic mean `Σx / n`, `0.0` for an empty series
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// Population standard deviation (divides by `n`), `0.0` for an empty series
pub fn stddev(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }

    let m = mean(xs);
    let variance = xs.iter().map(|x| (x - m).powi(2)).sum::<f64>() / xs.len() as f64;
    variance.sqrt()
}

/// Average absolute day-to-day change
///
/// Returns `0.0` when fewer than two points are available.
pub fn avg_abs_delta(xs: &[f64]) -> f64 {
    if xs.len() < 2 {
        return 0.0;
    }

    let total: f64 = xs.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
    total / (xs.len() - 1) as f64
}

/// Ordinary-least-squares slope of `xs` against the day index `0..n-1`
///
/// Uses the centered-sums form `Σ(t−t̄)(x−x̄) / Σ(t−t̄)²`. A positive slope is an
/// upward trend, a negative slope a downward one.
pub fn linear_trend_slope(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 {
        return 0.0;
    }

    let t_mean = (n - 1) as f64 / 2.0;
    let x_mean = mean(xs);

    let (num, den) = xs
        .iter()
        .enumerate()
        .fold((0.0, 0.0), |(num, den), (t, x)| {
            let dt = t as f64 - t_mean;
            let dx = x - x_mean;
            (num + dt * dx, den + dt * dt)
        });

    if den != 0.0 {
        num / den
    } else {
        0.0
    }
}

/// Affine map of `x` from `[lo, hi]` onto `[0, 100]`, clamped at both ends
///
/// A degenerate range (`hi <= lo`) always maps to `0.0`.
pub fn normalize_0_100(x: f64, lo: f64, hi: f64) -> f64 {
    if hi <= lo {
        return 0.0;
    }
    clamp((x - lo) / (hi - lo) * 100.0, 0.0, 100.0)
}

/// Round to a fixed number of decimal places for display
///
/// Rounds the exact binary value of `x`, ties to even, then returns the
/// nearest `f64` to the decimal result. `0.125` rounds to `0.12`, while the
/// literal `2.675` (stored just below the tie) rounds to `2.67`.
pub fn round_dp(x: f64, dp: u32) -> f64 {
    if !x.is_finite() {
        return x;
    }

    let rounded = Decimal::from_f64_retain(x)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(x);

    // Keep the sign of values that round to zero
    if rounded == 0.0 {
        0.0f64.copysign(x)
    } else {
        rounded
    }
}
