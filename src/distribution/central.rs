//! Upper-tail critical values of the central t, F and chi-square
//! distributions.

use crate::distribution::error::DistributionErr;
use crate::error::SsComputeErr;
use crate::util::root_find::root_find_monotonic;
use statrs::distribution::{ChiSquared, ContinuousCDF, FisherSnedecor, StudentsT};

/// Accepted gap between sf(x) and the tail probability, relative to it
const CRITICAL_REL_TOL: f64 = 1e-12;
/// Bracket width at which the search stops, relative to x
const CRITICAL_X_TOL: f64 = 1e-13;
const CRITICAL_MAX_ITERATIONS: usize = 500;

/// x such that P(T > x) = tail_prob for T ~ t(df)
pub fn t_upper_critical(tail_prob: f64, df: f64) -> Result<f64, SsComputeErr> {
    check_tail_prob(tail_prob)?;
    check_freedom(df)?;
    if tail_prob == 0.5 {
        return Ok(0.);
    }
    if tail_prob > 0.5 {
        // Symmetric about zero
        return t_upper_critical(1. - tail_prob, df).map(|x| -x);
    }
    let dist = StudentsT::new(0., 1., df).map_err(|e| DistributionErr::Construction {
        name: "Student's t",
        reason: e.to_string(),
    })?;
    upper_quantile(&dist, "Student's t", tail_prob, CRITICAL_MAX_ITERATIONS)
}

/// x such that P(F > x) = alpha for F ~ F(d1, d2)
pub fn f_upper_critical(alpha: f64, d1: f64, d2: f64) -> Result<f64, SsComputeErr> {
    check_tail_prob(alpha)?;
    check_freedom(d1)?;
    check_freedom(d2)?;
    let dist = FisherSnedecor::new(d1, d2).map_err(|e| DistributionErr::Construction {
        name: "F",
        reason: e.to_string(),
    })?;
    upper_quantile(&dist, "F", alpha, CRITICAL_MAX_ITERATIONS)
}

/// x such that P(X > x) = alpha for X ~ chi-square(df)
pub fn chi_sq_upper_critical(alpha: f64, df: f64) -> Result<f64, SsComputeErr> {
    check_tail_prob(alpha)?;
    check_freedom(df)?;
    let dist = ChiSquared::new(df).map_err(|e| DistributionErr::Construction {
        name: "chi-square",
        reason: e.to_string(),
    })?;
    upper_quantile(&dist, "chi-square", alpha, CRITICAL_MAX_ITERATIONS)
}

// Support of every caller starts at or below zero with sf(0) > tail_prob.
// Searching on -sf rather than cdf keeps small tail probabilities exact.
// A failed search is a distribution error: it has no bearing on the
// quantity the caller is solving for.
fn upper_quantile<D>(
    dist: &D,
    name: &'static str,
    tail_prob: f64,
    max_iterations: usize,
) -> Result<f64, SsComputeErr>
where
    D: ContinuousCDF<f64, f64>,
{
    let root = root_find_monotonic(
        |x| Ok(-dist.sf(x)),
        0.,
        1.,
        f64::MAX,
        -tail_prob,
        tail_prob * CRITICAL_REL_TOL,
        CRITICAL_X_TOL,
        max_iterations,
    )
    .map_err(|e| DistributionErr::CriticalValue {
        name,
        tail_prob,
        reason: e.to_string(),
    })?;
    Ok(root.x)
}

fn check_tail_prob(p: f64) -> Result<(), DistributionErr> {
    if p > 0. && p < 1. {
        Ok(())
    } else {
        Err(DistributionErr::TailProbabilityOutOfBounds(p))
    }
}

pub(crate) fn check_freedom(df: f64) -> Result<(), DistributionErr> {
    if df.is_finite() && df > 0. {
        Ok(())
    } else {
        Err(DistributionErr::BadFreedom(df))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn t_critical_values() {
        assert_abs_diff_eq!(t_upper_critical(0.025, 10.).unwrap(), 2.228138852, epsilon = 1e-8);
        assert_abs_diff_eq!(t_upper_critical(0.05, 30.).unwrap(), 1.697260887, epsilon = 1e-8);
        assert_abs_diff_eq!(t_upper_critical(0.025, 1.).unwrap(), 12.70620474, epsilon = 1e-6);
    }

    #[test]
    fn t_critical_is_symmetric() {
        let upper = t_upper_critical(0.1, 7.).unwrap();
        let lower = t_upper_critical(0.9, 7.).unwrap();
        assert_abs_diff_eq!(upper, -lower, epsilon = 1e-12);
        assert_eq!(t_upper_critical(0.5, 7.).unwrap(), 0.);
    }

    #[test]
    fn f_critical_values() {
        assert_abs_diff_eq!(f_upper_critical(0.05, 2., 156.).unwrap(), 3.0540, epsilon = 1e-3);
        assert_abs_diff_eq!(f_upper_critical(0.05, 1., 1e6).unwrap(), 3.8415, epsilon = 1e-3);
    }

    #[test]
    fn chi_sq_critical_values() {
        assert_abs_diff_eq!(chi_sq_upper_critical(0.05, 4.).unwrap(), 9.487729037, epsilon = 1e-8);
        assert_abs_diff_eq!(chi_sq_upper_critical(0.05, 1.).unwrap(), 3.841458821, epsilon = 1e-8);
        assert_abs_diff_eq!(chi_sq_upper_critical(0.01, 10.).unwrap(), 23.20925116, epsilon = 1e-7);
    }

    #[test]
    fn small_tail_probabilities() {
        // F(3, 1): sf(x) ~ (4 / pi) sqrt(1 / 3x) far out in the tail
        let f_crit = f_upper_critical(1e-8, 3., 1.).unwrap();
        assert_abs_diff_eq!(f_crit / 5.403796460924714e15, 1., epsilon = 1e-6);
        let f_crit = f_upper_critical(5e-8, 3., 1.).unwrap();
        assert_abs_diff_eq!(f_crit / 2.1615185843698703e14, 1., epsilon = 1e-6);
        // t(1) is Cauchy: x = cot(pi p)
        let t_crit = t_upper_critical(5e-10, 1.).unwrap();
        assert_abs_diff_eq!(t_crit / 636619772.3675814, 1., epsilon = 1e-6);
    }

    #[test]
    fn large_degrees_of_freedom() {
        assert_abs_diff_eq!(chi_sq_upper_critical(0.05, 1e5).unwrap(), 100736.736, epsilon = 1e-2);
        assert_abs_diff_eq!(f_upper_critical(0.05, 200., 1e5).unwrap(), 1.170182, epsilon = 1e-5);
    }

    #[test]
    fn failed_search_carries_no_estimate() {
        let dist = ChiSquared::new(4.).unwrap();
        if let Err(e) = upper_quantile(&dist, "chi-square", 1e-6, 3) {
            assert!(!e.is_non_convergence());
            assert_eq!(e.best_estimate(), None);
            assert!(matches!(
                e,
                SsComputeErr::Distribution(DistributionErr::CriticalValue { tail_prob, .. })
                    if tail_prob == 1e-6
            ));
        } else {
            panic!();
        }
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(t_upper_critical(0., 10.).is_err());
        assert!(f_upper_critical(0.05, 0., 10.).is_err());
        assert!(chi_sq_upper_critical(1.2, 3.).is_err());
    }
}
