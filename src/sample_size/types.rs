//----------------------------------------
// sample_size mod types
//----------------------------------------
use crate::analysis::types::{AnalysisSpec, Method};
use std::fmt;

/// A required sample size, in the unit the design is planned in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SampleSize {
    /// `n` subjects in each of `groups` equally sized groups
    PerGroup { n: u64, groups: u32 },
    Total(u64),
}

impl SampleSize {
    /// The searched quantity: per-group n or total N
    pub fn n(&self) -> u64 {
        match self {
            SampleSize::PerGroup { n, .. } => *n,
            SampleSize::Total(n) => *n,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            SampleSize::PerGroup { n, groups } => n.saturating_mul(*groups as u64),
            SampleSize::Total(n) => *n,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SampleSizeResult {
    pub analysis: AnalysisSpec,
    pub size: SampleSize,
    /// Rounded-up closed-form estimate the search started from
    pub seed: u64,
    /// Power at `size`; never below the requested power
    pub achieved_power: f64,
    pub method: Method,
}

impl SampleSizeResult {
    pub fn is_approximation(&self) -> bool {
        self.method.is_approximation()
    }
}

impl fmt::Display for SampleSizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.analysis, self.size) {
            (_, SampleSize::PerGroup { n, .. }) => write!(
                f,
                "Sample size per group: {} (Total N = {})",
                n,
                self.size.total()
            ),
            (AnalysisSpec::PairedT, SampleSize::Total(n)) => write!(f, "Number of pairs: {n}"),
            (AnalysisSpec::LogisticRegression, SampleSize::Total(n)) => {
                write!(f, "Sample size (approx): {n}")
            }
            (
                AnalysisSpec::FactorialAnova
                | AnalysisSpec::LinearRegression
                | AnalysisSpec::ChiSquare,
                SampleSize::Total(n),
            ) => write!(f, "Total sample size: {n}"),
            (_, SampleSize::Total(n)) => write!(f, "Sample size: {n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(analysis: AnalysisSpec, size: SampleSize) -> SampleSizeResult {
        SampleSizeResult {
            analysis,
            size,
            seed: 0,
            achieved_power: 0.8,
            method: analysis.method(),
        }
    }

    #[test]
    fn per_group_summary() {
        let res = result(
            AnalysisSpec::IndependentT,
            SampleSize::PerGroup { n: 64, groups: 2 },
        );
        assert_eq!(
            String::from("Sample size per group: 64 (Total N = 128)"),
            format!("{}", res)
        );
        assert_eq!(res.size.n(), 64);
    }

    #[test]
    fn total_summaries() {
        assert_eq!(
            format!("{}", result(AnalysisSpec::PairedT, SampleSize::Total(34))),
            "Number of pairs: 34"
        );
        assert_eq!(
            format!("{}", result(AnalysisSpec::PearsonCorrelation, SampleSize::Total(84))),
            "Sample size: 84"
        );
        assert_eq!(
            format!("{}", result(AnalysisSpec::LinearRegression, SampleSize::Total(77))),
            "Total sample size: 77"
        );
        let logistic = result(AnalysisSpec::LogisticRegression, SampleSize::Total(301));
        assert_eq!(format!("{}", logistic), "Sample size (approx): 301");
        assert!(logistic.is_approximation());
    }
}
