//! Discrete distributions over the non-negative integers.

use std::f64::consts::LN_2;

use super::special::{ln_binomial_coefficient, ln_factorial};
use super::{
    DiscreteDistribution, DistributionError, Moments, check_probability, cumulative_mass,
    lower_tail_start, median_by_search, search_limit,
};

/// A single trial succeeding with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bernoulli {
    p: f64,
}

impl Bernoulli {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `0 <= p <= 1`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        check_probability("bernoulli", p)?;
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Moments for Bernoulli {
    fn mean(&self) -> f64 {
        self.p
    }

    fn variance(&self) -> f64 {
        self.p * (1.0 - self.p)
    }

    fn skewness(&self) -> f64 {
        (1.0 - 2.0 * self.p) / self.std_dev()
    }

    /// Any value in `[0, 1]` is a median when `p = 1/2`; the midpoint is returned.
    fn median(&self) -> f64 {
        if self.p < 0.5 {
            0.0
        } else if self.p > 0.5 {
            1.0
        } else {
            0.5
        }
    }
}

impl DiscreteDistribution for Bernoulli {
    fn pmf(&self, k: u64) -> f64 {
        match k {
            0 => 1.0 - self.p,
            1 => self.p,
            _ => 0.0,
        }
    }

    fn cdf(&self, k: u64) -> f64 {
        if k == 0 { 1.0 - self.p } else { 1.0 }
    }
}

/// Number of successes in `n` independent trials with success probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `0 <= p <= 1`.
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        check_probability("binomial", p)?;
        Ok(Self { n, p })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Moments for Binomial {
    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    fn skewness(&self) -> f64 {
        (1.0 - 2.0 * self.p) / self.std_dev()
    }

    fn median(&self) -> f64 {
        median_by_search(self, lower_tail_start(self.mean(), self.std_dev()), self.n)
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }
        let ln_pmf = ln_binomial_coefficient(self.n, k)
            + k as f64 * self.p.ln()
            + (self.n - k) as f64 * (1.0 - self.p).ln();
        ln_pmf.exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 1.0;
        }
        let start = lower_tail_start(self.mean(), self.std_dev());
        cumulative_mass(self, start, self.mean(), k)
    }
}

/// Equally likely integers in `a..=b`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteUniform {
    a: u64,
    b: u64,
}

impl DiscreteUniform {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` if `a > b`.
    pub fn new(a: u64, b: u64) -> Result<Self, DistributionError> {
        if a > b {
            return Err(DistributionError::invalid(
                "discrete uniform",
                "lower bound exceeds upper bound",
            ));
        }
        Ok(Self { a, b })
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    fn count(&self) -> f64 {
        (self.b - self.a) as f64 + 1.0
    }
}

impl Moments for DiscreteUniform {
    fn mean(&self) -> f64 {
        (self.a as f64 + self.b as f64) / 2.0
    }

    fn variance(&self) -> f64 {
        let n = self.count();
        (n * n - 1.0) / 12.0
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn median(&self) -> f64 {
        self.mean()
    }
}

impl DiscreteDistribution for DiscreteUniform {
    fn pmf(&self, k: u64) -> f64 {
        if (self.a..=self.b).contains(&k) {
            self.count().recip()
        } else {
            0.0
        }
    }

    fn cdf(&self, k: u64) -> f64 {
        if k < self.a {
            0.0
        } else if k >= self.b {
            1.0
        } else {
            ((k - self.a) as f64 + 1.0) / self.count()
        }
    }
}

/// Number of failures before the first success.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometric {
    p: f64,
}

impl Geometric {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `0 < p <= 1`.
    pub fn new(p: f64) -> Result<Self, DistributionError> {
        check_probability("geometric", p)?;
        if p == 0.0 {
            return Err(DistributionError::invalid(
                "geometric",
                "success probability must be positive",
            ));
        }
        Ok(Self { p })
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Moments for Geometric {
    fn mean(&self) -> f64 {
        (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        (1.0 - self.p) / (self.p * self.p)
    }

    fn skewness(&self) -> f64 {
        (2.0 - self.p) / (1.0 - self.p).sqrt()
    }

    /// Smallest `k` with `1 - (1-p)^(k+1) >= 1/2`, i.e. `ceil(ln 2 / -ln(1-p)) - 1`.
    fn median(&self) -> f64 {
        let guess = (LN_2 / -(-self.p).ln_1p()).ceil() - 1.0;
        let k = guess.max(0.0) as u64;
        // the rounded guess can be one off either way
        if k > 0 && self.cdf(k - 1) >= 0.5 {
            (k - 1) as f64
        } else if self.cdf(k) < 0.5 {
            k.saturating_add(1) as f64
        } else {
            k as f64
        }
    }
}

impl DiscreteDistribution for Geometric {
    fn pmf(&self, k: u64) -> f64 {
        if self.p == 1.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        (k as f64 * (-self.p).ln_1p()).exp() * self.p
    }

    fn cdf(&self, k: u64) -> f64 {
        -((k as f64 + 1.0) * (-self.p).ln_1p()).exp_m1()
    }
}

/// Successes in `n` draws without replacement from a population of `N`
/// items holding `K` successes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hypergeometric {
    population: u64,
    successes: u64,
    draws: u64,
}

impl Hypergeometric {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` if the population is
    /// empty or either `successes` or `draws` exceeds it.
    pub fn new(population: u64, successes: u64, draws: u64) -> Result<Self, DistributionError> {
        if population == 0 {
            return Err(DistributionError::invalid(
                "hypergeometric",
                "population must be non-empty",
            ));
        }
        if successes > population || draws > population {
            return Err(DistributionError::invalid(
                "hypergeometric",
                "successes and draws cannot exceed the population",
            ));
        }
        Ok(Self {
            population,
            successes,
            draws,
        })
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Smallest and largest attainable number of successes.
    pub fn support(&self) -> (u64, u64) {
        let lo = (self.draws + self.successes).saturating_sub(self.population);
        (lo, self.draws.min(self.successes))
    }
}

impl Moments for Hypergeometric {
    fn mean(&self) -> f64 {
        self.draws as f64 * self.successes as f64 / self.population as f64
    }

    fn variance(&self) -> f64 {
        if self.population == 1 {
            return 0.0;
        }
        let (big_n, k, n) = (
            self.population as f64,
            self.successes as f64,
            self.draws as f64,
        );
        n * (k / big_n) * ((big_n - k) / big_n) * ((big_n - n) / (big_n - 1.0))
    }

    /// Not finite when the variance is zero (no draws, no successes, or the
    /// whole population drawn). A population of two with positive variance
    /// is one draw from one success and one failure, which is symmetric.
    fn skewness(&self) -> f64 {
        if self.population == 2 && self.variance() > 0.0 {
            return 0.0;
        }
        let (big_n, k, n) = (
            self.population as f64,
            self.successes as f64,
            self.draws as f64,
        );
        (big_n - 2.0 * k) * (big_n - 1.0).sqrt() * (big_n - 2.0 * n)
            / ((n * k * (big_n - k) * (big_n - n)).sqrt() * (big_n - 2.0))
    }

    fn median(&self) -> f64 {
        let (lo, hi) = self.support();
        median_by_search(self, lo, hi)
    }
}

impl DiscreteDistribution for Hypergeometric {
    fn pmf(&self, k: u64) -> f64 {
        let (lo, hi) = self.support();
        if k < lo || k > hi {
            return 0.0;
        }
        let ln_pmf = ln_binomial_coefficient(self.successes, k)
            + ln_binomial_coefficient(self.population - self.successes, self.draws - k)
            - ln_binomial_coefficient(self.population, self.draws);
        ln_pmf.exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        let (lo, hi) = self.support();
        if k < lo {
            return 0.0;
        }
        if k >= hi {
            return 1.0;
        }
        (lo..=k).map(|i| self.pmf(i)).sum::<f64>().min(1.0)
    }
}

/// Number of failures before the `r`-th success.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeBinomial {
    r: u64,
    p: f64,
}

impl NegativeBinomial {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `r >= 1` and
    /// `0 < p <= 1`.
    pub fn new(r: u64, p: f64) -> Result<Self, DistributionError> {
        if r == 0 {
            return Err(DistributionError::invalid(
                "negative binomial",
                "number of successes must be at least 1",
            ));
        }
        check_probability("negative binomial", p)?;
        if p == 0.0 {
            return Err(DistributionError::invalid(
                "negative binomial",
                "success probability must be positive",
            ));
        }
        Ok(Self { r, p })
    }

    pub fn r(&self) -> u64 {
        self.r
    }

    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Moments for NegativeBinomial {
    fn mean(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / self.p
    }

    fn variance(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / (self.p * self.p)
    }

    fn skewness(&self) -> f64 {
        (2.0 - self.p) / (self.r as f64 * (1.0 - self.p)).sqrt()
    }

    fn median(&self) -> f64 {
        let (mean, std_dev) = (self.mean(), self.std_dev());
        median_by_search(
            self,
            lower_tail_start(mean, std_dev),
            search_limit(mean, std_dev),
        )
    }
}

impl DiscreteDistribution for NegativeBinomial {
    /// Zero when `k + r - 1` does not fit in a `u64`.
    fn pmf(&self, k: u64) -> f64 {
        if self.p == 1.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        let Some(trials) = k.checked_add(self.r - 1) else {
            return 0.0;
        };
        let ln_pmf = ln_binomial_coefficient(trials, k)
            + self.r as f64 * self.p.ln()
            + k as f64 * (-self.p).ln_1p();
        ln_pmf.exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        let start = lower_tail_start(self.mean(), self.std_dev());
        cumulative_mass(self, start, self.mean(), k)
    }
}

/// Count of events at constant rate `lambda`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// # Errors
    ///
    /// Returns `DistributionError::InvalidParameter` unless `lambda` is
    /// positive and finite.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        if !(lambda > 0.0 && lambda.is_finite()) {
            return Err(DistributionError::invalid(
                "poisson",
                "rate must be positive and finite",
            ));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Moments for Poisson {
    fn mean(&self) -> f64 {
        self.lambda
    }

    fn variance(&self) -> f64 {
        self.lambda
    }

    fn skewness(&self) -> f64 {
        self.lambda.sqrt().recip()
    }

    fn median(&self) -> f64 {
        let (mean, std_dev) = (self.mean(), self.std_dev());
        median_by_search(
            self,
            lower_tail_start(mean, std_dev),
            search_limit(mean, std_dev),
        )
    }
}

impl DiscreteDistribution for Poisson {
    fn pmf(&self, k: u64) -> f64 {
        (k as f64 * self.lambda.ln() - self.lambda - ln_factorial(k)).exp()
    }

    fn cdf(&self, k: u64) -> f64 {
        let start = lower_tail_start(self.lambda, self.lambda.sqrt());
        cumulative_mass(self, start, self.lambda, k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bernoulli() {
        let b = Bernoulli::new(0.3).unwrap();
        assert_relative_eq!(b.variance(), 0.21, epsilon = 1e-12);
        assert_eq!(b.median(), 0.0);
        assert_relative_eq!(b.pmf(0), 0.7, epsilon = 1e-12);
        assert_eq!(b.pmf(2), 0.0);
        assert_eq!(b.cdf(1), 1.0);
        assert_eq!(Bernoulli::new(0.5).unwrap().median(), 0.5);
        assert!(Bernoulli::new(-0.1).is_err());
    }

    #[test]
    fn test_binomial_pmf_and_cdf() {
        let b = Binomial::new(10, 0.5).unwrap();
        assert_relative_eq!(b.pmf(5), 0.246_093_75, epsilon = 1e-12);
        assert_eq!(b.pmf(11), 0.0);
        assert_relative_eq!(b.cdf(10), 1.0, epsilon = 1e-12);
        assert_relative_eq!(b.cdf(4), 386.0 / 1024.0, epsilon = 1e-12);
        assert_eq!(b.median(), 5.0);
    }

    #[test]
    fn test_binomial_degenerate_p() {
        let never = Binomial::new(4, 0.0).unwrap();
        assert_eq!(never.pmf(0), 1.0);
        assert_eq!(never.pmf(1), 0.0);
        let always = Binomial::new(4, 1.0).unwrap();
        assert_eq!(always.pmf(4), 1.0);
        assert_eq!(always.pmf(3), 0.0);
    }

    #[test]
    fn test_discrete_uniform() {
        let d = DiscreteUniform::new(1, 6).unwrap();
        assert_eq!(d.mean(), 3.5);
        assert_relative_eq!(d.variance(), 35.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(d.cdf(3), 0.5, epsilon = 1e-12);
        assert_eq!(d.cdf(0), 0.0);
        assert_eq!(d.pmf(7), 0.0);
        assert!(DiscreteUniform::new(6, 1).is_err());
    }

    #[test]
    fn test_geometric_counts_failures() {
        let g = Geometric::new(0.5).unwrap();
        assert_eq!(g.mean(), 1.0);
        assert_eq!(g.variance(), 2.0);
        assert_eq!(g.median(), 0.0);
        assert_relative_eq!(g.pmf(0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(g.cdf(1), 0.75, epsilon = 1e-12);
        assert!(Geometric::new(0.0).is_err());
    }

    #[test]
    fn test_hypergeometric_mass_sums_to_one() {
        let h = Hypergeometric::new(50, 5, 10).unwrap();
        let (lo, hi) = h.support();
        assert_eq!((lo, hi), (0, 5));
        let total: f64 = (lo..=hi).map(|k| h.pmf(k)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
        assert_relative_eq!(h.mean(), 1.0, epsilon = 1e-12);
        assert_eq!(h.pmf(6), 0.0);
        assert_eq!(h.cdf(5), 1.0);
    }

    #[test]
    fn test_hypergeometric_rejects_bad_counts() {
        assert!(Hypergeometric::new(0, 0, 0).is_err());
        assert!(Hypergeometric::new(10, 11, 2).is_err());
        assert!(Hypergeometric::new(10, 2, 11).is_err());
    }

    #[test]
    fn test_negative_binomial() {
        let nb = NegativeBinomial::new(3, 0.5).unwrap();
        assert_relative_eq!(nb.pmf(0), 0.125, epsilon = 1e-12);
        assert_relative_eq!(nb.pmf(1), 0.1875, epsilon = 1e-12);
        assert_eq!(nb.mean(), 3.0);
        assert_eq!(nb.variance(), 6.0);
        assert_relative_eq!(nb.cdf(1), 0.3125, epsilon = 1e-12);
        assert!(NegativeBinomial::new(0, 0.5).is_err());
    }

    #[test]
    fn test_poisson() {
        let p = Poisson::new(2.0).unwrap();
        let e2 = (-2.0_f64).exp();
        assert_relative_eq!(p.pmf(0), e2, epsilon = 1e-12);
        assert_relative_eq!(p.cdf(2), 5.0 * e2, epsilon = 1e-12);
        assert_eq!(p.median(), 2.0);
        assert_relative_eq!(p.skewness(), 0.5_f64.sqrt(), epsilon = 1e-12);
        assert!(Poisson::new(0.0).is_err());
    }

    #[test]
    fn test_poisson_large_rate() {
        let p = Poisson::new(1000.0).unwrap();
        let summed: f64 = (0..=1000).map(|k| p.pmf(k)).sum();
        assert!(summed > 0.5 && summed < 0.52);
        assert_relative_eq!(p.cdf(1000), summed, max_relative = 1e-12);
        assert_relative_eq!(p.cdf(u64::MAX), 1.0, epsilon = 1e-12);
        assert_eq!(p.median(), 1000.0);
    }

    #[test]
    fn test_negative_binomial_many_successes() {
        let nb = NegativeBinomial::new(2000, 0.5).unwrap();
        let summed: f64 = (0..=2000).map(|k| nb.pmf(k)).sum();
        assert!(summed > 0.5 && summed < 0.52);
        assert_relative_eq!(nb.cdf(2000), summed, max_relative = 1e-12);
        let median = nb.median() as u64;
        assert!(nb.cdf(median) >= 0.5 && nb.cdf(median - 1) < 0.5);
    }

    #[test]
    fn test_negative_binomial_pmf_at_u64_max() {
        let nb = NegativeBinomial::new(3, 0.5).unwrap();
        assert_eq!(nb.pmf(u64::MAX), 0.0);
        assert_eq!(nb.pmf(u64::MAX - 2), 0.0);
        assert_relative_eq!(nb.cdf(u64::MAX), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_geometric_median_closed_form() {
        for &p in &[1.0, 0.5, 0.3, 0.1, 1e-3, 1e-9, 1e-12] {
            let g = Geometric::new(p).unwrap();
            let median = g.median() as u64;
            assert!(g.cdf(median) >= 0.5, "p = {p}");
            assert!(median == 0 || g.cdf(median - 1) < 0.5, "p = {p}");
        }
        assert_eq!(Geometric::new(1.0).unwrap().median(), 0.0);
    }

    #[test]
    fn test_hypergeometric_population_of_two() {
        assert_eq!(Hypergeometric::new(2, 1, 1).unwrap().skewness(), 0.0);
        assert!(!Hypergeometric::new(2, 1, 2).unwrap().skewness().is_finite());
        assert!(!Hypergeometric::new(10, 0, 3).unwrap().skewness().is_finite());
    }

    #[test]
    fn test_default_cdf_matches_closed_form() {
        let g = Geometric::new(0.3).unwrap();
        let summed: f64 = (0..=6).map(|k| g.pmf(k)).sum();
        assert_relative_eq!(g.cdf(6), summed, epsilon = 1e-12);
    }
}
