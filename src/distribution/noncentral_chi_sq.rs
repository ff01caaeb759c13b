use crate::distribution::central::check_freedom;
use crate::distribution::noncentral_f::check_noncentrality;
use crate::distribution::poisson_mixture::mode_outward_sum;
use crate::error::SsComputeErr;
use statrs::function::gamma::gamma_lr;

/// P(X <= x) for the non-central chi-square distribution with `df`
/// degrees of freedom and non-centrality `lambda`: a Poisson(lambda / 2)
/// mixture of central chi-square CDFs with df + 2j degrees of freedom.
pub fn noncentral_chi_sq_cdf(x: f64, df: f64, lambda: f64) -> Result<f64, SsComputeErr> {
    check_freedom(df)?;
    check_noncentrality(lambda)?;
    if x <= 0. {
        return Ok(0.);
    }
    if x.is_infinite() {
        return Ok(1.);
    }
    let cdf = mode_outward_sum(lambda / 2., |j, ln_weight| {
        ln_weight.exp() * gamma_lr(df / 2. + j as f64, x / 2.)
    });
    Ok(cdf.clamp(0., 1.))
}

pub fn noncentral_chi_sq_sf(x: f64, df: f64, lambda: f64) -> Result<f64, SsComputeErr> {
    Ok((1. - noncentral_chi_sq_cdf(x, df, lambda)?).clamp(0., 1.))
}
