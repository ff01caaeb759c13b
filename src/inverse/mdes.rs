use crate::analysis::design::Design;
use crate::analysis::parameters::DesignParameters;
use crate::analysis::types::{AnalysisSpec, Tails};
use crate::critical_value::{resolve, resolve_power};
use crate::error::SsComputeErr;
use crate::inverse::types::EffectSizeResult;
use crate::power::logistic::information_per_subject;
use crate::power::power_at;
use crate::settings::SolverSettings;
use crate::util::root_find::root_find_monotonic;

/// Smallest effect size detectable with the requested power at the fixed
/// sample size `params.n`.
///
/// Needs `alpha`, `power` and `n`; `effect_size` is ignored. Logistic
/// regression inverts its closed form directly; every other family bisects
/// over the effect magnitude, starting from the normal-approximation
/// inverse, and reports the upper end of the final bracket so that the
/// returned effect always reaches the requested power.
pub fn solve_mdes(
    spec: AnalysisSpec,
    params: &DesignParameters,
    settings: &SolverSettings,
) -> Result<EffectSizeResult, SsComputeErr> {
    let alpha = params.checked_alpha()?;
    let power = params.checked_power()?;
    let design = Design::from_params(spec, params)?;
    let n = design.check_n(params.checked_n()?)?;
    let method = spec.method();
    if method.is_approximation() {
        log::info!("{spec}: using approximation ({})", method.citation());
    }

    let z_beta = resolve_power(power)?;
    let tails = params.tails;

    if let Design::LogisticRegression {
        baseline_prob,
        r2_other,
    } = design
    {
        let info = n as f64 * information_per_subject(baseline_prob, r2_other);
        let ln_odds_ratio = (resolve(alpha, tails)? + z_beta) / info.sqrt();
        let achieved_power = power_at(&design, ln_odds_ratio, n, alpha, tails)?;
        return Ok(EffectSizeResult {
            analysis: spec,
            effect_size: design.effect_from_magnitude(ln_odds_ratio),
            achieved_power,
            iterations: 0,
            method,
        });
    }

    let seed = approximate_mdes(&design, n, alpha, z_beta, tails)?;
    log::debug!("{spec}: normal-approximation effect at n = {n} is {seed}");
    let root = root_find_monotonic(
        |magnitude| power_at(&design, magnitude, n, alpha, tails),
        0.,
        seed,
        design.effect_cap().unwrap_or(f64::MAX),
        power,
        settings.power_tolerance,
        settings.effect_tolerance,
        settings.max_iterations,
    )?;
    log::debug!(
        "{spec}: effect {} reaches power {} after {} iterations",
        root.x,
        root.value,
        root.iterations
    );
    Ok(EffectSizeResult {
        analysis: spec,
        effect_size: design.effect_from_magnitude(root.x),
        achieved_power: root.value,
        iterations: root.iterations,
        method,
    })
}

// Normal-approximation inverse of each family's power function
fn approximate_mdes(
    design: &Design,
    n: u64,
    alpha: f64,
    z_beta: f64,
    tails: Tails,
) -> Result<f64, SsComputeErr> {
    let n = n as f64;
    let z = resolve(alpha, tails)? + z_beta;
    let z_two = resolve(alpha, Tails::Two)? + z_beta;
    let magnitude = match *design {
        Design::IndependentT => z * (2. / n).sqrt(),
        Design::PairedT | Design::OneSampleT => z / n.sqrt(),
        Design::PearsonCorrelation => (z / (n - 3.).sqrt()).tanh(),
        Design::OneWayAnova { groups } => z_two / (groups as f64 * n).sqrt(),
        Design::FactorialAnova { .. } | Design::ChiSquare { .. } => z_two / n.sqrt(),
        Design::LinearRegression { .. } => z_two * z_two / n,
        Design::LogisticRegression {
            baseline_prob,
            r2_other,
        } => z / (n * information_per_subject(baseline_prob, r2_other)).sqrt(),
    };
    Ok(magnitude)
}
