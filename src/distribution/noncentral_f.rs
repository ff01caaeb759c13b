use crate::distribution::central::check_freedom;
use crate::distribution::error::DistributionErr;
use crate::distribution::poisson_mixture::mode_outward_sum;
use crate::error::SsComputeErr;
use statrs::function::beta::beta_reg;

/// P(F' <= x) for the non-central F distribution with (d1, d2) degrees of
/// freedom and non-centrality `lambda`, as a Poisson(lambda / 2) mixture
/// of regularized incomplete beta functions.
pub fn noncentral_f_cdf(x: f64, d1: f64, d2: f64, lambda: f64) -> Result<f64, SsComputeErr> {
    check_freedom(d1)?;
    check_freedom(d2)?;
    check_noncentrality(lambda)?;
    if x <= 0. {
        return Ok(0.);
    }
    if x.is_infinite() {
        return Ok(1.);
    }
    let y = d1 * x / (d1 * x + d2);
    let cdf = mode_outward_sum(lambda / 2., |j, ln_weight| {
        ln_weight.exp() * beta_reg(d1 / 2. + j as f64, d2 / 2., y)
    });
    Ok(cdf.clamp(0., 1.))
}

/// P(F' > x); the power of an F test whose critical value is x
pub fn noncentral_f_sf(x: f64, d1: f64, d2: f64, lambda: f64) -> Result<f64, SsComputeErr> {
    Ok((1. - noncentral_f_cdf(x, d1, d2, lambda)?).clamp(0., 1.))
}

pub(crate) fn check_noncentrality(lambda: f64) -> Result<(), DistributionErr> {
    if lambda.is_finite() && lambda >= 0. {
        Ok(())
    } else {
        Err(DistributionErr::BadNoncentrality(lambda))
    }
}
