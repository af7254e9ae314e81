//! Continuous distributions over the reals.

use std::f64::consts::{PI, SQRT_2};

use super::special::erf;
use super::{ContinuousDistribution, DistributionError, Moments};

/// Uniform density on the interval `[a, b]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinuousUniform {
    a: f64,
    b: f64,
}

impl ContinuousUniform {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless both bounds are
    /// finite and `a < b`.
    pub fn new(a: f64, b: f64) -> Result<Self, DistributionError> {
        if !(a.is_finite() && b.is_finite()) {
            return Err(DistributionError::invalid(
                "continuous uniform",
                "bounds must be finite",
            ));
        }
        if a >= b {
            return Err(DistributionError::invalid(
                "continuous uniform",
                "lower bound must be below upper bound",
            ));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }
}

impl Moments for ContinuousUniform {
    fn mean(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    fn variance(&self) -> f64 {
        let width = self.b - self.a;
        width * width / 12.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        self.mean()
    }
}

impl ContinuousDistribution for ContinuousUniform {
    fn pdf(&self, x: f64) -> f64 {
        if (self.a..=self.b).contains(&x) {
            (self.b - self.a).recip()
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= self.a {
            0.0
        } else if x >= self.b {
            1.0
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }
}

/// Gaussian with mean `mu` and standard deviation `sigma`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal {
    mu: f64,
    sigma: f64,
}

impl Normal {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `mu` is finite
    /// and `sigma` is positive and finite.
    pub fn new(mu: f64, sigma: f64) -> Result<Self, DistributionError> {
        if !mu.is_finite() {
            return Err(DistributionError::invalid("normal", "mean must be finite"));
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(DistributionError::invalid(
                "normal",
                "standard deviation must be positive and finite",
            ));
        }
        Ok(Self { mu, sigma })
    }

    /// The standard normal, `N(0, 1)`.
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

impl Moments for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn variance(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std_dev(&self) -> f64 {
        self.sigma
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        self.mu
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.mu) / self.sigma;
        (-0.5 * z * z).exp() / ((2.0 * PI).sqrt() * self.sigma)
    }

    fn cdf(&self, x: f64) -> f64 {
        0.5 * (1.0 + erf((x - self.mu) / (self.sigma * SQRT_2)))
    }
}
