use crate::analysis::design::Design;
use crate::analysis::parameters::DesignParameters;
use crate::analysis::types::AnalysisSpec;
use crate::error::SsComputeErr;
use crate::inverse::types::PowerResult;
use crate::power::power_at;

/// Power of the design at the fixed sample size `params.n`, in the
/// family's unit (per group for the independent t-test and one-way ANOVA).
///
/// Needs `alpha`, `effect_size` and `n`; `power` is ignored.
pub fn solve_achieved_power(
    spec: AnalysisSpec,
    params: &DesignParameters,
) -> Result<PowerResult, SsComputeErr> {
    let alpha = params.checked_alpha()?;
    let design = Design::from_params(spec, params)?;
    let n = design.check_n(params.checked_n()?)?;
    let magnitude = design.effect_magnitude(params.checked_effect()?)?;
    let method = spec.method();
    if method.is_approximation() {
        log::info!("{spec}: using approximation ({})", method.citation());
    }

    let power = power_at(&design, magnitude, n, alpha, params.tails)?;
    log::debug!("{spec}: power at n = {n} is {power}");
    Ok(PowerResult {
        analysis: spec,
        n,
        power,
        method,
    })
}
