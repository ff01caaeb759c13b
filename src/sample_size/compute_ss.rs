use crate::analysis::design::Design;
use crate::analysis::parameters::DesignParameters;
use crate::analysis::types::AnalysisSpec;
use crate::error::SsComputeErr;
use crate::power::power_at;
use crate::sample_size::seed::{closed_form_n, seed_n};
use crate::sample_size::types::{SampleSize, SampleSizeResult};
use crate::settings::SolverSettings;
use crate::util::root_find::smallest_sufficient_n;

/// Smallest sample size at which the design reaches the requested power.
///
/// Needs `alpha`, `power` and `effect_size`, plus the structural fields of
/// the family. The closed-form estimate seeds an integer search over the
/// family's power function, so the returned size always delivers at least
/// the requested power.
pub fn compute_ss(
    spec: AnalysisSpec,
    params: &DesignParameters,
    settings: &SolverSettings,
) -> Result<SampleSizeResult, SsComputeErr> {
    //----------------------------------------
    // Validation
    //----------------------------------------
    let alpha = params.checked_alpha()?;
    let power = params.checked_power()?;
    let design = Design::from_params(spec, params)?;
    let magnitude = design.effect_magnitude(params.checked_effect()?)?;
    let method = spec.method();
    if method.is_approximation() {
        log::info!("{spec}: using approximation ({})", method.citation());
    }

    //----------------------------------------
    // Closed-form seed
    //----------------------------------------
    let closed_form = closed_form_n(&design, magnitude, alpha, power, params.tails)?;
    let seed = seed_n(closed_form, settings.max_sample_size);
    log::debug!("{spec}: closed-form n = {closed_form}, seed = {seed}");

    //----------------------------------------
    // Smallest sufficient n
    //----------------------------------------
    let root = smallest_sufficient_n(
        |n| power_at(&design, magnitude, n, alpha, params.tails),
        design.minimum_n(),
        seed,
        power,
        settings.max_sample_size,
        settings.max_iterations,
    )?;
    log::debug!(
        "{spec}: n = {} reaches power {} after {} iterations",
        root.x,
        root.value,
        root.iterations
    );

    let size = match design.groups() {
        Some(groups) => SampleSize::PerGroup { n: root.x, groups },
        None => SampleSize::Total(root.x),
    };
    Ok(SampleSizeResult {
        analysis: spec,
        size,
        seed,
        achieved_power: root.value,
        method,
    })
}

/// Cohen's d, per-group n
pub fn independent_t(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::IndependentT, params, &SolverSettings::default())
}

/// Cohen's dz, number of pairs
pub fn paired_t(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::PairedT, params, &SolverSettings::default())
}

pub fn one_sample_t(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::OneSampleT, params, &SolverSettings::default())
}

/// Cohen's f with `groups`, per-group n
pub fn one_way_anova(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::OneWayAnova, params, &SolverSettings::default())
}

/// Cohen's f for one effect with numerator `df` (and optionally `cells`)
pub fn factorial_anova(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::FactorialAnova, params, &SolverSettings::default())
}

pub fn pearson_correlation(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::PearsonCorrelation, params, &SolverSettings::default())
}

/// Cohen's f² with `predictors`
pub fn linear_regression(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::LinearRegression, params, &SolverSettings::default())
}

/// Odds ratio per standard deviation of the predictor, with
/// `baseline_prob` and optionally `r2_other`
pub fn logistic_regression(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::LogisticRegression, params, &SolverSettings::default())
}

/// Cohen's w with `df`
pub fn chi_square(params: &DesignParameters) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(AnalysisSpec::ChiSquare, params, &SolverSettings::default())
}
