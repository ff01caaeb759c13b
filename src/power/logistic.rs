use crate::analysis::types::Tails;
use crate::critical_value::resolve;
use crate::distribution::std_normal::std_normal_cdf;
use crate::error::SsComputeErr;

/// Variance of the log odds ratio estimate per subject, up to the factor
/// 1/N: p1 (1 - p1) (1 - R²)
pub fn information_per_subject(baseline_prob: f64, r2_other: f64) -> f64 {
    baseline_prob * (1. - baseline_prob) * (1. - r2_other)
}

/// Power for a standardized continuous predictor in logistic regression
/// following Hsieh, Bloch & Larsen (1998):
/// Phi(|ln OR| sqrt(N p1 (1 - p1) (1 - R²)) - z_alpha).
/// The lower rejection region is ignored.
pub fn hsieh_power(
    ln_odds_ratio: f64,
    baseline_prob: f64,
    r2_other: f64,
    n: u64,
    alpha: f64,
    tails: Tails,
) -> Result<f64, SsComputeErr> {
    let z_alpha = resolve(alpha, tails)?;
    let info = n as f64 * information_per_subject(baseline_prob, r2_other);
    Ok(std_normal_cdf(ln_odds_ratio.abs() * info.sqrt() - z_alpha))
}
