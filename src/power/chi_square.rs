use crate::distribution::central::chi_sq_upper_critical;
use crate::distribution::noncentral_chi_sq::noncentral_chi_sq_sf;
use crate::error::SsComputeErr;

/// Power of a chi-square test with `df` degrees of freedom at Cohen's w
/// and total sample size `n`: lambda = w² N
pub fn chi_square_power(w: f64, df: u32, n: u64, alpha: f64) -> Result<f64, SsComputeErr> {
    let df = df as f64;
    let crit = chi_sq_upper_critical(alpha, df)?;
    noncentral_chi_sq_sf(crit, df, w * w * n as f64)
}
