//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::analysis::error::ParameterErr;
pub use crate::distribution::error::{DistributionErr, NormalDistErr};
pub use crate::util::error::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SsComputeErr {
    #[error("while validating design parameters: {0}")]
    Parameter(ParameterErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while evaluating reference distribution: {0}")]
    Distribution(DistributionErr),
    #[error("while solving for a root: {0}")]
    RootFind(RootFindErr),
}

impl SsComputeErr {
    /// True for every parameter problem other than a zero effect size:
    /// missing fields, out-of-range values and sample sizes too small for
    /// the design.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SsComputeErr::Parameter(e) if !e.is_degenerate())
            || matches!(self, SsComputeErr::NormalDist(_))
    }

    pub fn is_degenerate_effect_size(&self) -> bool {
        matches!(self, SsComputeErr::Parameter(e) if e.is_degenerate())
    }

    pub fn is_non_convergence(&self) -> bool {
        matches!(self, SsComputeErr::RootFind(RootFindErr::NonConvergence { .. }))
    }

    /// Approximate answer carried by a non-convergence, if any.
    pub fn best_estimate(&self) -> Option<f64> {
        match self {
            SsComputeErr::RootFind(RootFindErr::NonConvergence { best_estimate, .. }) => {
                Some(*best_estimate)
            }
            _ => None,
        }
    }
}
