//----------------------------------------
// Design parameter errors
//----------------------------------------
use crate::error::SsComputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterErr {
    #[error("required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("{name} must be {expected}; got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },
    #[error("odds ratio must be greater than 1; got {0}")]
    OddsRatioNotIncreasing(f64),
    #[error("sample size {n} is too small for this design (minimum {minimum})")]
    InsufficientSampleSize { n: u64, minimum: u64 },
    #[error("an effect size ({0}) of zero requires an infinite sample size")]
    DegenerateEffectSize(&'static str),
}

impl ParameterErr {
    pub fn is_degenerate(&self) -> bool {
        matches!(self, ParameterErr::DegenerateEffectSize(_))
    }
}

impl From<ParameterErr> for SsComputeErr {
    fn from(e: ParameterErr) -> Self {
        SsComputeErr::Parameter(e)
    }
}
