//----------------------------------------
// inverse mod types
//----------------------------------------
use crate::analysis::types::{AnalysisSpec, Method};
use std::fmt;

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct PowerResult {
    pub analysis: AnalysisSpec,
    /// Sample size the power was evaluated at, in the family's unit
    pub n: u64,
    pub power: f64,
    pub method: Method,
}

impl fmt::Display for PowerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Achieved Power (1-β): {:.3}", self.power)
    }
}

/// Minimum detectable effect, reported in the family's own unit (d, dz,
/// r, f, f², w or odds ratio)
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct EffectSizeResult {
    pub analysis: AnalysisSpec,
    pub effect_size: f64,
    /// Power at `effect_size`; at least the requested power
    pub achieved_power: f64,
    pub iterations: usize,
    pub method: Method,
}

impl fmt::Display for EffectSizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Min Detectable Effect ({}): {:.3}",
            self.analysis.effect_label(),
            self.effect_size
        )
    }
}
