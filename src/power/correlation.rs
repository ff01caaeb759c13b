use crate::analysis::types::Tails;
use crate::critical_value::resolve;
use crate::distribution::std_normal::std_normal_cdf;
use crate::error::SsComputeErr;

/// Power of the test of rho = 0 via Fisher's z, with the small-sample bias
/// correction r / (2(N - 1)) applied to the transformed correlation.
/// `r` is the magnitude of the correlation, `n` the total sample size
/// (at least 4).
pub fn fisher_z_power(r: f64, n: u64, alpha: f64, tails: Tails) -> Result<f64, SsComputeErr> {
    let z_alpha = resolve(alpha, tails)?;
    let n = n as f64;
    let z = r.atanh() + r / (2. * (n - 1.));
    let shift = z * (n - 3.).sqrt();
    let power = match tails {
        Tails::One => std_normal_cdf(shift - z_alpha),
        Tails::Two => std_normal_cdf(shift - z_alpha) + std_normal_cdf(-shift - z_alpha),
    };
    Ok(power.min(1.))
}
