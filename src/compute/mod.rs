//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::analysis::parameters::DesignParameters;
pub use crate::analysis::types::{AnalysisSpec, Method, Tails};
pub use crate::critical_value::{resolve, resolve_power};
pub use crate::inverse::achieved_power::solve_achieved_power;
pub use crate::inverse::mdes::solve_mdes;
pub use crate::inverse::types::{EffectSizeResult, PowerResult};
pub use crate::sample_size::compute_ss::{
    chi_square, compute_ss, factorial_anova, independent_t, linear_regression,
    logistic_regression, one_sample_t, one_way_anova, paired_t, pearson_correlation,
};
pub use crate::sample_size::types::{SampleSize, SampleSizeResult};
pub use crate::settings::SolverSettings;
pub use types::{ComputationTarget, Solution};

use crate::error::SsComputeErr;

/// Solves for `target` with default solver settings
pub fn compute(
    target: ComputationTarget,
    spec: AnalysisSpec,
    params: &DesignParameters,
) -> Result<Solution, SsComputeErr> {
    compute_with(target, spec, params, &SolverSettings::default())
}

/// Solves for `target`. `params` must hold the other two of sample size,
/// power and effect size, plus `alpha` and the family's structural fields.
pub fn compute_with(
    target: ComputationTarget,
    spec: AnalysisSpec,
    params: &DesignParameters,
    settings: &SolverSettings,
) -> Result<Solution, SsComputeErr> {
    match target {
        ComputationTarget::SampleSize => compute_ss(spec, params, settings).map(Solution::SampleSize),
        ComputationTarget::Power => solve_achieved_power(spec, params).map(Solution::Power),
        ComputationTarget::EffectSize => solve_mdes(spec, params, settings).map(Solution::EffectSize),
    }
}

/// Smallest sample size reaching `params.power`
pub fn sample_size(
    spec: AnalysisSpec,
    params: &DesignParameters,
) -> Result<SampleSizeResult, SsComputeErr> {
    compute_ss(spec, params, &SolverSettings::default())
}

/// Minimum detectable effect at `params.n`
pub fn mdes(spec: AnalysisSpec, params: &DesignParameters) -> Result<EffectSizeResult, SsComputeErr> {
    solve_mdes(spec, params, &SolverSettings::default())
}
