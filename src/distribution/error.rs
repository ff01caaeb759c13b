//----------------------------------------
// distribution errors
//----------------------------------------
use crate::error::SsComputeErr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
}

impl From<NormalDistErr> for SsComputeErr {
    fn from(e: NormalDistErr) -> Self {
        SsComputeErr::NormalDist(e)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionErr {
    #[error("could not construct {name} distribution: {reason}")]
    Construction { name: &'static str, reason: String },
    #[error("degrees of freedom must be positive; got {0}")]
    BadFreedom(f64),
    #[error("non-centrality parameter must be finite and non-negative; got {0}")]
    BadNoncentrality(f64),
    #[error("no {name} critical value found for tail probability {tail_prob}: {reason}")]
    CriticalValue {
        name: &'static str,
        tail_prob: f64,
        reason: String,
    },
    #[error("tail probability should be in (0, 1); got {0}")]
    TailProbabilityOutOfBounds(f64),
}

impl From<DistributionErr> for SsComputeErr {
    fn from(e: DistributionErr) -> Self {
        SsComputeErr::Distribution(e)
    }
}
