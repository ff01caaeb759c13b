//----------------------------------------
// root finding errors
//----------------------------------------
use crate::error::SsComputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RootFindErr {
    #[error("f(lower_bound) is larger than target; use smaller lower bound")]
    BadLowerBound,
    #[error(
        "failed to converge after {iterations} iterations (best estimate: {best_estimate}, \
        value there: {achieved})"
    )]
    NonConvergence {
        best_estimate: f64,
        achieved: f64,
        iterations: usize,
    },
}

impl From<RootFindErr> for SsComputeErr {
    fn from(e: RootFindErr) -> Self {
        SsComputeErr::RootFind(e)
    }
}
