//----------------------------------------
// compute mod types
//----------------------------------------
use crate::inverse::types::{EffectSizeResult, PowerResult};
use crate::sample_size::types::SampleSizeResult;
use std::fmt;

/// Which quantity a calculation solves for; the other two are inputs
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ComputationTarget {
    #[default]
    SampleSize,
    Power,
    EffectSize,
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Solution {
    SampleSize(SampleSizeResult),
    Power(PowerResult),
    EffectSize(EffectSizeResult),
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::SampleSize(res) => res.fmt(f),
            Solution::Power(res) => res.fmt(f),
            Solution::EffectSize(res) => res.fmt(f),
        }
    }
}
