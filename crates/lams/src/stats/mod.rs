//! Probability distributions.
//!
//! Each distribution is a small parameter struct whose `new` validates its
//! parameters. Summary statistics come from [`Moments`]; point probabilities
//! come from [`DiscreteDistribution`] (probability mass over `u64`) or
//! [`ContinuousDistribution`] (density over `f64`).
//!
//! ```text
//! Moments
//! ├── DiscreteDistribution:   Bernoulli, Binomial, DiscreteUniform, Geometric,
//! │                           Hypergeometric, NegativeBinomial, Poisson
//! └── ContinuousDistribution: ContinuousUniform, Normal
//! ```
//!
//! Geometric and negative binomial count failures before the first (r-th)
//! success, so their support starts at 0.
//!
//! # Example
//!
//! ```
//! use lams::stats::{Binomial, DiscreteDistribution, Moments};
//!
//! let b = Binomial::new(10, 0.5).unwrap();
//! assert_eq!(b.mean(), 5.0);
//! assert!((b.pmf(5) - 0.24609375).abs() < 1e-12);
//! ```

mod continuous;
mod discrete;
pub mod special;

use thiserror::Error;

pub use continuous::{ContinuousUniform, Normal};
pub use discrete::{
    Bernoulli, Binomial, DiscreteUniform, Geometric, Hypergeometric, NegativeBinomial, Poisson,
};

/// Error type for distribution construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// A parameter is outside the distribution's domain.
    #[error("invalid parameter for {distribution}: {reason}")]
    InvalidParameter {
        distribution: &'static str,
        reason: &'static str,
    },
}

impl DistributionError {
    pub(crate) fn invalid(distribution: &'static str, reason: &'static str) -> Self {
        Self::InvalidParameter {
            distribution,
            reason,
        }
    }
}

pub(crate) fn check_probability(
    distribution: &'static str,
    p: f64,
) -> Result<(), DistributionError> {
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(DistributionError::invalid(
            distribution,
            "probability must lie in [0, 1]",
        ))
    }
}

/// Summary statistics shared by all distributions.
pub trait Moments {
    fn mean(&self) -> f64;

    fn variance(&self) -> f64;

    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Third standardized moment.
    ///
    /// Not finite when the variance is zero.
    fn skewness(&self) -> f64;

    fn median(&self) -> f64;
}

/// A distribution over the non-negative integers.
pub trait DiscreteDistribution: Moments {
    /// Probability mass `P(X = k)`.
    fn pmf(&self, k: u64) -> f64;

    /// Cumulative probability `P(X <= k)`.
    fn cdf(&self, k: u64) -> f64 {
        (0..=k).map(|i| self.pmf(i)).sum::<f64>().min(1.0)
    }
}

/// A distribution over the reals.
pub trait ContinuousDistribution: Moments {
    /// Probability density at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative probability `P(X <= x)`.
    fn cdf(&self, x: f64) -> f64;
}

/// Smallest `k` in `start..=end` with `P(X <= k) >= 1/2`.
///
/// Mass below `start` must be negligible (see [`lower_tail_start`]).
pub(crate) fn median_by_search<D>(dist: &D, start: u64, end: u64) -> f64
where
    D: DiscreteDistribution + ?Sized,
{
    let mut cumulative = 0.0;
    for k in start..=end {
        cumulative += dist.pmf(k);
        if cumulative >= 0.5 {
            return k as f64;
        }
    }
    end as f64
}

/// `P(X <= k)` summed over `start..=k`.
///
/// Mass below `start` must be negligible. The sum stops early once it is past
/// `mean` and the terms no longer change it, so a huge `k` costs no more than
/// the bulk of the distribution.
pub(crate) fn cumulative_mass<D>(dist: &D, start: u64, mean: f64, k: u64) -> f64
where
    D: DiscreteDistribution + ?Sized,
{
    let mut total = 0.0;
    for i in start..=k {
        let term = dist.pmf(i);
        total += term;
        if i as f64 > mean && term <= total * TAIL_CUTOFF {
            break;
        }
    }
    total.min(1.0)
}

/// Relative size below which a tail term is dropped.
const TAIL_CUTOFF: f64 = 1e-20;

/// Standard deviations below the mean where summation may start.
const LOWER_TAIL_SIGMAS: f64 = 16.0;

/// First `k` worth summing: the mass below `mean - 16 sd` is far under
/// double precision for the unimodal distributions here.
pub(crate) fn lower_tail_start(mean: f64, std_dev: f64) -> u64 {
    let start = (mean - LOWER_TAIL_SIGMAS * std_dev).floor();
    // `as` saturates; NaN and negatives fall to 0
    if start > 0.0 { start as u64 } else { 0 }
}

/// Upper end of a CDF search: far enough in the tail that the remaining mass
/// cannot hold the median.
pub(crate) fn search_limit(mean: f64, std_dev: f64) -> u64 {
    let limit = mean + 64.0 * std_dev + 64.0;
    if limit >= u64::MAX as f64 {
        u64::MAX
    } else {
        limit.ceil() as u64
    }
}
