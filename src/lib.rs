//----------------------------------------
// Root lib
//----------------------------------------
//! Sample size, achieved power and minimum detectable effect size for the
//! common fixed-design tests: t-tests, one-way and single-effect factorial
//! ANOVA, Pearson correlation, linear and logistic regression, and
//! chi-square tests.
//!
//! Every calculation is a pure function of an `AnalysisSpec` and a
//! `DesignParameters` record. Iterative searches are bounded by
//! `SolverSettings` and report non-convergence with a best estimate.

/// Validated design parameters and the closed set of test families
mod analysis;
/// This module houses the public API for sample size, power and effect
/// size calculations
pub mod compute;
mod critical_value;
mod distribution;
/// Crate error and the module errors it wraps
pub mod error;
mod inverse;
mod power;
mod sample_size;
mod settings;
mod util;

pub use compute::{
    AnalysisSpec, ComputationTarget, DesignParameters, EffectSizeResult, Method, PowerResult,
    SampleSize, SampleSizeResult, Solution, SolverSettings, Tails, compute, compute_with,
};
pub use error::SsComputeErr;
