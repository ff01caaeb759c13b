//----------------------------------------
// Critical-value resolver
//----------------------------------------
use crate::analysis::parameters::check_open_unit;
use crate::analysis::types::Tails;
use crate::distribution::std_normal::std_normal_quantile;
use crate::error::SsComputeErr;

/// z_alpha: the standard normal quantile at 1 - alpha / 2 (two-tailed) or
/// 1 - alpha (one-tailed)
pub fn resolve(alpha: f64, tails: Tails) -> Result<f64, SsComputeErr> {
    let alpha = check_open_unit("alpha", alpha)?;
    Ok(std_normal_quantile(1. - alpha / tails.divisor())?)
}

/// z_beta: the standard normal quantile at the target power
pub fn resolve_power(power: f64) -> Result<f64, SsComputeErr> {
    let power = check_open_unit("power", power)?;
    Ok(std_normal_quantile(power)?)
}
