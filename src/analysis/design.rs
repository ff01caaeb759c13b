use crate::analysis::error::ParameterErr;
use crate::analysis::parameters::{DesignParameters, check_at_least, check_open_unit, require};
use crate::analysis::types::AnalysisSpec;

/// Validated structural description of one test family. Built once per
/// call from `DesignParameters`; the effect size is validated separately
/// because the inverse solvers search over it.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Design {
    IndependentT,
    PairedT,
    OneSampleT,
    OneWayAnova { groups: u32 },
    FactorialAnova { df_num: u32, cells: u32 },
    PearsonCorrelation,
    LinearRegression { predictors: u32 },
    LogisticRegression { baseline_prob: f64, r2_other: f64 },
    ChiSquare { df: u32 },
}

impl Design {
    pub fn from_params(
        spec: AnalysisSpec,
        params: &DesignParameters,
    ) -> Result<Design, ParameterErr> {
        let design = match spec {
            AnalysisSpec::IndependentT => Design::IndependentT,
            AnalysisSpec::PairedT => Design::PairedT,
            AnalysisSpec::OneSampleT => Design::OneSampleT,
            AnalysisSpec::OneWayAnova => {
                let groups = require("groups", params.groups)?;
                Design::OneWayAnova {
                    groups: check_at_least("groups", groups, 2, "at least 2")?,
                }
            }
            AnalysisSpec::FactorialAnova => {
                let df_num = check_at_least("df", require("df", params.df)?, 1, "at least 1")?;
                let min_cells = df_num.checked_add(1).ok_or(ParameterErr::OutOfRange {
                    name: "df",
                    value: df_num as f64,
                    expected: "less than u32::MAX",
                })?;
                let cells = match params.cells {
                    Some(cells) => {
                        check_at_least("cells", cells, min_cells, "greater than the numerator df")?
                    }
                    None => min_cells,
                };
                Design::FactorialAnova { df_num, cells }
            }
            AnalysisSpec::PearsonCorrelation => Design::PearsonCorrelation,
            AnalysisSpec::LinearRegression => {
                let predictors = require("predictors", params.predictors)?;
                Design::LinearRegression {
                    predictors: check_at_least("predictors", predictors, 1, "at least 1")?,
                }
            }
            AnalysisSpec::LogisticRegression => {
                let baseline_prob =
                    check_open_unit("baseline_prob", require("baseline_prob", params.baseline_prob)?)?;
                // No other predictors unless stated
                let r2_other = params.r2_other.unwrap_or(0.);
                if !(r2_other.is_finite() && (0. ..1.).contains(&r2_other)) {
                    return Err(ParameterErr::OutOfRange {
                        name: "r2_other",
                        value: r2_other,
                        expected: "in [0, 1)",
                    });
                }
                Design::LogisticRegression {
                    baseline_prob,
                    r2_other,
                }
            }
            AnalysisSpec::ChiSquare => {
                let df = require("df", params.df)?;
                Design::ChiSquare {
                    df: check_at_least("df", df, 1, "at least 1")?,
                }
            }
        };
        Ok(design)
    }

    pub fn spec(&self) -> AnalysisSpec {
        match self {
            Design::IndependentT => AnalysisSpec::IndependentT,
            Design::PairedT => AnalysisSpec::PairedT,
            Design::OneSampleT => AnalysisSpec::OneSampleT,
            Design::OneWayAnova { .. } => AnalysisSpec::OneWayAnova,
            Design::FactorialAnova { .. } => AnalysisSpec::FactorialAnova,
            Design::PearsonCorrelation => AnalysisSpec::PearsonCorrelation,
            Design::LinearRegression { .. } => AnalysisSpec::LinearRegression,
            Design::LogisticRegression { .. } => AnalysisSpec::LogisticRegression,
            Design::ChiSquare { .. } => AnalysisSpec::ChiSquare,
        }
    }

    /// Validates a raw effect size and maps it to the non-negative
    /// magnitude the power functions take. For logistic regression this is
    /// ln(OR).
    pub fn effect_magnitude(&self, effect: f64) -> Result<f64, ParameterErr> {
        let label = self.spec().effect_label();
        match self {
            Design::LogisticRegression { .. } => {
                if effect <= 1. {
                    return Err(ParameterErr::OddsRatioNotIncreasing(effect));
                }
                Ok(effect.ln())
            }
            Design::IndependentT | Design::PairedT | Design::OneSampleT => {
                if effect == 0. {
                    return Err(ParameterErr::DegenerateEffectSize(label));
                }
                Ok(effect.abs())
            }
            Design::PearsonCorrelation => {
                if effect.abs() >= 1. {
                    return Err(ParameterErr::OutOfRange {
                        name: "effect_size",
                        value: effect,
                        expected: "strictly between -1 and 1",
                    });
                }
                if effect == 0. {
                    return Err(ParameterErr::DegenerateEffectSize(label));
                }
                Ok(effect.abs())
            }
            Design::OneWayAnova { .. }
            | Design::FactorialAnova { .. }
            | Design::LinearRegression { .. }
            | Design::ChiSquare { .. } => {
                if effect < 0. {
                    return Err(ParameterErr::OutOfRange {
                        name: "effect_size",
                        value: effect,
                        expected: "non-negative",
                    });
                }
                if effect == 0. {
                    return Err(ParameterErr::DegenerateEffectSize(label));
                }
                Ok(effect)
            }
        }
    }

    /// Maps a magnitude back into the family's reporting unit
    pub fn effect_from_magnitude(&self, magnitude: f64) -> f64 {
        match self {
            Design::LogisticRegression { .. } => magnitude.exp(),
            _ => magnitude,
        }
    }

    /// Smallest n (in the family's unit) with positive error degrees of
    /// freedom
    pub fn minimum_n(&self) -> u64 {
        match self {
            Design::IndependentT | Design::PairedT | Design::OneSampleT => 2,
            Design::OneWayAnova { .. } => 2,
            Design::FactorialAnova { cells, .. } => *cells as u64 + 1,
            Design::PearsonCorrelation => 4,
            Design::LinearRegression { predictors } => *predictors as u64 + 2,
            Design::LogisticRegression { .. } | Design::ChiSquare { .. } => 1,
        }
    }

    pub fn check_n(&self, n: u64) -> Result<u64, ParameterErr> {
        let minimum = self.minimum_n();
        if n < minimum {
            Err(ParameterErr::InsufficientSampleSize { n, minimum })
        } else {
            Ok(n)
        }
    }

    /// Number of equally sized groups when n is reported per group
    pub fn groups(&self) -> Option<u32> {
        match self {
            Design::IndependentT => Some(2),
            Design::OneWayAnova { groups } => Some(*groups),
            _ => None,
        }
    }

    /// Largest admissible magnitude, where one exists
    pub fn effect_cap(&self) -> Option<f64> {
        match self {
            Design::PearsonCorrelation => Some(1. - 1e-12),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anova_requires_groups() {
        let params = DesignParameters::new(0.05);
        let err = Design::from_params(AnalysisSpec::OneWayAnova, &params).unwrap_err();
        assert_eq!(err, ParameterErr::MissingField("groups"));
    }

    #[test]
    fn anova_rejects_single_group() {
        let params = DesignParameters::new(0.05).with_groups(1);
        let err = Design::from_params(AnalysisSpec::OneWayAnova, &params).unwrap_err();
        assert_eq!(
            String::from("groups must be at least 2; got 1"),
            format!("{}", err)
        );
    }

    #[test]
    fn factorial_cells_default_to_df_plus_one() {
        let params = DesignParameters::new(0.05).with_df(3);
        let design = Design::from_params(AnalysisSpec::FactorialAnova, &params).unwrap();
        assert_eq!(design, Design::FactorialAnova { df_num: 3, cells: 4 });
        assert_eq!(design.minimum_n(), 5);
    }

    #[test]
    fn factorial_cells_must_exceed_df() {
        let params = DesignParameters::new(0.05).with_df(3).with_cells(3);
        assert!(Design::from_params(AnalysisSpec::FactorialAnova, &params).is_err());
    }

    #[test]
    fn factorial_df_at_integer_limit() {
        let params = DesignParameters::new(0.05).with_df(u32::MAX);
        let err = Design::from_params(AnalysisSpec::FactorialAnova, &params).unwrap_err();
        assert_eq!(
            String::from("df must be less than u32::MAX; got 4294967295"),
            format!("{}", err)
        );
    }

    #[test]
    fn logistic_r2_defaults_to_zero() {
        let params = DesignParameters::new(0.05).with_baseline_prob(0.3);
        let design = Design::from_params(AnalysisSpec::LogisticRegression, &params).unwrap();
        assert_eq!(
            design,
            Design::LogisticRegression {
                baseline_prob: 0.3,
                r2_other: 0.
            }
        );
    }

    #[test]
    fn logistic_rejects_bad_nuisance_r2() {
        let params = DesignParameters::new(0.05)
            .with_baseline_prob(0.3)
            .with_r2_other(1.0);
        let err = Design::from_params(AnalysisSpec::LogisticRegression, &params).unwrap_err();
        assert!(matches!(err, ParameterErr::OutOfRange { name: "r2_other", .. }));
    }

    #[test]
    fn odds_ratio_must_increase_risk() {
        let design = Design::LogisticRegression {
            baseline_prob: 0.3,
            r2_other: 0.,
        };
        for or in [1.0, 0.5, 0.] {
            assert_eq!(
                design.effect_magnitude(or),
                Err(ParameterErr::OddsRatioNotIncreasing(or))
            );
        }
        assert!((design.effect_magnitude(2.).unwrap() - 2f64.ln()).abs() < 1e-15);
    }

    #[test]
    fn zero_effect_is_degenerate() {
        for design in [
            Design::IndependentT,
            Design::PearsonCorrelation,
            Design::ChiSquare { df: 1 },
            Design::LinearRegression { predictors: 2 },
        ] {
            assert!(design.effect_magnitude(0.).unwrap_err().is_degenerate());
        }
    }

    #[test]
    fn negative_d_uses_magnitude() {
        assert_eq!(Design::PairedT.effect_magnitude(-0.4), Ok(0.4));
        assert!(Design::ChiSquare { df: 2 }.effect_magnitude(-0.4).is_err());
    }

    #[test]
    fn correlation_bounds() {
        assert!(Design::PearsonCorrelation.effect_magnitude(1.).is_err());
        assert!(Design::PearsonCorrelation.effect_magnitude(-1.).is_err());
        assert_eq!(Design::PearsonCorrelation.effect_magnitude(-0.3), Ok(0.3));
    }

    #[test]
    fn regression_minimum_n_leaves_residual_df() {
        let design = Design::LinearRegression { predictors: 5 };
        assert_eq!(
            design.check_n(6),
            Err(ParameterErr::InsufficientSampleSize { n: 6, minimum: 7 })
        );
        assert_eq!(design.check_n(7), Ok(7));
    }
}
