//----------------------------------------
// analysis mod types
//----------------------------------------
use std::fmt;

/// The supported test families. Each one fixes which formula is used and
/// which structural fields of `DesignParameters` are required.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum AnalysisSpec {
    IndependentT,
    PairedT,
    OneSampleT,
    OneWayAnova,
    FactorialAnova,
    PearsonCorrelation,
    LinearRegression,
    LogisticRegression,
    ChiSquare,
}

impl AnalysisSpec {
    pub const ALL: [AnalysisSpec; 9] = [
        AnalysisSpec::IndependentT,
        AnalysisSpec::PairedT,
        AnalysisSpec::OneSampleT,
        AnalysisSpec::OneWayAnova,
        AnalysisSpec::FactorialAnova,
        AnalysisSpec::PearsonCorrelation,
        AnalysisSpec::LinearRegression,
        AnalysisSpec::LogisticRegression,
        AnalysisSpec::ChiSquare,
    ];

    /// Conventional symbol of the effect size this family takes
    pub fn effect_label(&self) -> &'static str {
        match self {
            AnalysisSpec::IndependentT | AnalysisSpec::OneSampleT => "d",
            AnalysisSpec::PairedT => "dz",
            AnalysisSpec::OneWayAnova | AnalysisSpec::FactorialAnova => "f",
            AnalysisSpec::PearsonCorrelation => "r",
            AnalysisSpec::LinearRegression => "f²",
            AnalysisSpec::LogisticRegression => "OR",
            AnalysisSpec::ChiSquare => "w",
        }
    }

    /// Formula used for power and sample size
    pub fn method(&self) -> Method {
        match self {
            AnalysisSpec::IndependentT | AnalysisSpec::PairedT | AnalysisSpec::OneSampleT => {
                Method::NoncentralT
            }
            AnalysisSpec::OneWayAnova | AnalysisSpec::LinearRegression => Method::NoncentralF,
            AnalysisSpec::FactorialAnova => Method::SingleEffectFactorial,
            AnalysisSpec::PearsonCorrelation => Method::FisherZBiasCorrected,
            AnalysisSpec::LogisticRegression => Method::HsiehContinuousPredictor,
            AnalysisSpec::ChiSquare => Method::NoncentralChiSquare,
        }
    }
}

impl fmt::Display for AnalysisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AnalysisSpec::IndependentT => "independent samples t-test",
            AnalysisSpec::PairedT => "paired samples t-test",
            AnalysisSpec::OneSampleT => "one sample t-test",
            AnalysisSpec::OneWayAnova => "one-way ANOVA",
            AnalysisSpec::FactorialAnova => "factorial ANOVA (single effect)",
            AnalysisSpec::PearsonCorrelation => "Pearson correlation",
            AnalysisSpec::LinearRegression => "multiple linear regression",
            AnalysisSpec::LogisticRegression => "logistic regression",
            AnalysisSpec::ChiSquare => "chi-square test",
        };
        write!(f, "{name}")
    }
}

#[derive(Default, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Tails {
    One,
    #[default]
    Two,
}

impl Tails {
    /// How many rejection regions alpha is split over
    pub fn divisor(&self) -> f64 {
        match self {
            Tails::One => 1.,
            Tails::Two => 2.,
        }
    }
}

/// Named formula behind a result. Some of these are published
/// approximations rather than exact distributions; callers can tell via
/// `is_approximation`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Method {
    NoncentralT,
    FisherZBiasCorrected,
    NoncentralF,
    SingleEffectFactorial,
    NoncentralChiSquare,
    HsiehContinuousPredictor,
}

impl Method {
    pub fn is_approximation(&self) -> bool {
        matches!(
            self,
            Method::FisherZBiasCorrected
                | Method::SingleEffectFactorial
                | Method::HsiehContinuousPredictor
        )
    }

    pub fn citation(&self) -> &'static str {
        match self {
            Method::NoncentralT => "exact non-central t power (Cohen 1988, ch. 2)",
            Method::FisherZBiasCorrected => {
                "Fisher z transformation with bias correction r/(2(N-1)) (Lachin 1981)"
            }
            Method::NoncentralF => "exact non-central F power (Cohen 1988, ch. 8-9)",
            Method::SingleEffectFactorial => {
                "non-central F for one effect with caller-supplied numerator df; \
                 no full factorial decomposition"
            }
            Method::NoncentralChiSquare => "exact non-central chi-square power (Cohen 1988, ch. 7)",
            Method::HsiehContinuousPredictor => {
                "Hsieh, Bloch & Larsen (1998) continuous-predictor formula with 1/(1-R²) \
                 variance inflation"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_two_tailed() {
        assert_eq!(Tails::default(), Tails::Two);
        assert_eq!(Tails::Two.divisor(), 2.);
    }

    #[test]
    fn approximations_are_flagged() {
        assert!(AnalysisSpec::LogisticRegression.method().is_approximation());
        assert!(AnalysisSpec::FactorialAnova.method().is_approximation());
        assert!(!AnalysisSpec::IndependentT.method().is_approximation());
        assert!(!AnalysisSpec::ChiSquare.method().is_approximation());
    }

    #[test]
    fn all_lists_each_family_once() {
        let mut seen = std::collections::HashSet::new();
        for spec in AnalysisSpec::ALL {
            assert!(seen.insert(spec));
        }
        assert_eq!(seen.len(), 9);
    }
}
