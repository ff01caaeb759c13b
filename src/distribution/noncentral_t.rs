use crate::distribution::central::check_freedom;
use crate::distribution::error::DistributionErr;
use crate::distribution::poisson_mixture::mode_outward_sum;
use crate::distribution::std_normal::std_normal_cdf;
use crate::error::SsComputeErr;
use statrs::function::beta::beta_reg;
use statrs::function::gamma::ln_gamma;
use std::f64::consts::SQRT_2;

/// P(T' <= t) for the non-central t distribution with `df` degrees of
/// freedom and non-centrality `delta`.
///
/// For t >= 0 this is the series of Lenth (1989):
///
/// F(t) = Phi(-delta) + 1/2 sum_j [p_j I_x(j + 1/2, df/2) + q_j I_x(j + 1, df/2)]
///
/// with x = t^2 / (t^2 + df), p_j the Poisson(delta^2 / 2) weights and
/// q_j = delta / sqrt(2) * exp(-delta^2/2) (delta^2/2)^j / Gamma(j + 3/2).
/// Negative t uses F(t; df, delta) = 1 - F(-t; df, -delta).
pub fn noncentral_t_cdf(t: f64, df: f64, delta: f64) -> Result<f64, SsComputeErr> {
    check_freedom(df)?;
    if !delta.is_finite() {
        return Err(DistributionErr::BadNoncentrality(delta).into());
    }
    if t.is_nan() {
        return Err(DistributionErr::Construction {
            name: "non-central t",
            reason: String::from("evaluation point is NaN"),
        }
        .into());
    }
    if t < 0. {
        return Ok((1. - upper_half_cdf(-t, df, -delta)).clamp(0., 1.));
    }
    Ok(upper_half_cdf(t, df, delta).clamp(0., 1.))
}

/// P(T' > t)
pub fn noncentral_t_sf(t: f64, df: f64, delta: f64) -> Result<f64, SsComputeErr> {
    Ok((1. - noncentral_t_cdf(t, df, delta)?).clamp(0., 1.))
}

// t >= 0
fn upper_half_cdf(t: f64, df: f64, delta: f64) -> f64 {
    if t.is_infinite() {
        return 1.;
    }
    let base = std_normal_cdf(-delta);
    if t == 0. {
        return base;
    }
    let x = t * t / (t * t + df);
    let half_lambda = delta * delta / 2.;
    let series = mode_outward_sum(half_lambda, |j, ln_weight| {
        let j = j as f64;
        let p = ln_weight.exp();
        let q = delta / SQRT_2 * (ln_weight + ln_gamma(j + 1.) - ln_gamma(j + 1.5)).exp();
        p * beta_reg(j + 0.5, df / 2., x) + q * beta_reg(j + 1., df / 2., x)
    });
    base + 0.5 * series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::central::t_upper_critical;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{ContinuousCDF, StudentsT};

    #[test]
    fn zero_noncentrality_matches_central() {
        let central = StudentsT::new(0., 1., 5.).unwrap();
        for t in [-3., -0.4, 0., 0.7, 2., 6.] {
            assert_abs_diff_eq!(
                noncentral_t_cdf(t, 5., 0.).unwrap(),
                central.cdf(t),
                epsilon = 1e-10
            );
        }
    }

    #[test]
    fn reference_values() {
        assert_abs_diff_eq!(noncentral_t_cdf(1., 10., 1.5).unwrap(), 0.3041093289, epsilon = 1e-8);
        assert_abs_diff_eq!(noncentral_t_cdf(-1., 10., 1.5).unwrap(), 0.0077790954, epsilon = 1e-8);
        assert_abs_diff_eq!(noncentral_t_cdf(0., 10., 1.5).unwrap(), std_normal_cdf(-1.5), epsilon = 1e-14);
    }

    #[test]
    fn two_sample_power_reference() {
        // d = 0.5, n = 64 per group
        let df = 126.;
        let delta = 0.5 * 32f64.sqrt();
        let crit = t_upper_critical(0.025, df).unwrap();
        let power = noncentral_t_sf(crit, df, delta).unwrap()
            + noncentral_t_cdf(-crit, df, delta).unwrap();
        assert_abs_diff_eq!(power, 0.8014596, epsilon = 1e-6);
    }

    #[test]
    fn increasing_in_delta() {
        let mut previous = 0.;
        for delta in [-2., 0., 0.5, 1.5, 3., 8.] {
            let sf = noncentral_t_sf(1.7, 20., delta).unwrap();
            assert!(sf > previous);
            previous = sf;
        }
    }

    #[test]
    fn large_delta_is_bounded() {
        assert_abs_diff_eq!(noncentral_t_sf(2., 500., 40.).unwrap(), 1., epsilon = 1e-12);
    }

    #[test]
    fn rejects_bad_inputs() {
        assert!(noncentral_t_cdf(1., 0., 1.).is_err());
        assert!(noncentral_t_cdf(1., 5., f64::NAN).is_err());
        assert!(noncentral_t_cdf(f64::NAN, 5., 1.).is_err());
    }
}
