use crate::analysis::error::ParameterErr;
use crate::analysis::types::Tails;

/// Inputs for one calculation. `alpha` is always required; which of the
/// optional fields must be present depends on the `AnalysisSpec` and on
/// what is being solved for.
///
/// `n` is in the family's own unit: per group for the independent t-test
/// and one-way ANOVA, pairs for the paired t-test, total otherwise.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DesignParameters {
    pub alpha: f64,
    pub power: Option<f64>,
    pub effect_size: Option<f64>,
    pub tails: Tails,
    /// Number of groups k (one-way ANOVA)
    pub groups: Option<u32>,
    /// Degrees of freedom: chi-square df, or numerator df of the effect of
    /// interest for factorial ANOVA
    pub df: Option<u32>,
    /// Number of design cells (factorial ANOVA); defaults to df + 1
    pub cells: Option<u32>,
    /// Number of predictors p (linear regression)
    pub predictors: Option<u32>,
    /// P(Y = 1) at the predictor mean (logistic regression)
    pub baseline_prob: Option<f64>,
    /// R² of the predictor of interest on the other predictors
    /// (logistic regression)
    pub r2_other: Option<f64>,
    pub n: Option<u64>,
}

impl DesignParameters {
    pub fn new(alpha: f64) -> Self {
        DesignParameters {
            alpha,
            power: None,
            effect_size: None,
            tails: Tails::default(),
            groups: None,
            df: None,
            cells: None,
            predictors: None,
            baseline_prob: None,
            r2_other: None,
            n: None,
        }
    }

    pub fn with_power(mut self, power: f64) -> Self {
        self.power = Some(power);
        self
    }

    pub fn with_effect_size(mut self, effect_size: f64) -> Self {
        self.effect_size = Some(effect_size);
        self
    }

    pub fn with_tails(mut self, tails: Tails) -> Self {
        self.tails = tails;
        self
    }

    pub fn with_groups(mut self, groups: u32) -> Self {
        self.groups = Some(groups);
        self
    }

    pub fn with_df(mut self, df: u32) -> Self {
        self.df = Some(df);
        self
    }

    pub fn with_cells(mut self, cells: u32) -> Self {
        self.cells = Some(cells);
        self
    }

    pub fn with_predictors(mut self, predictors: u32) -> Self {
        self.predictors = Some(predictors);
        self
    }

    pub fn with_baseline_prob(mut self, p1: f64) -> Self {
        self.baseline_prob = Some(p1);
        self
    }

    pub fn with_r2_other(mut self, r2_other: f64) -> Self {
        self.r2_other = Some(r2_other);
        self
    }

    pub fn with_n(mut self, n: u64) -> Self {
        self.n = Some(n);
        self
    }

    /// Checks alpha and returns it
    pub(crate) fn checked_alpha(&self) -> Result<f64, ParameterErr> {
        check_open_unit("alpha", self.alpha)
    }

    /// Target power; must lie in (0, 1) and exceed alpha, since the power
    /// of any of these tests at zero effect is alpha itself
    pub(crate) fn checked_power(&self) -> Result<f64, ParameterErr> {
        let power = check_open_unit("power", require("power", self.power)?)?;
        if power <= self.alpha {
            return Err(ParameterErr::OutOfRange {
                name: "power",
                value: power,
                expected: "greater than alpha",
            });
        }
        Ok(power)
    }

    pub(crate) fn checked_effect(&self) -> Result<f64, ParameterErr> {
        let effect = require("effect_size", self.effect_size)?;
        if !effect.is_finite() {
            return Err(ParameterErr::OutOfRange {
                name: "effect_size",
                value: effect,
                expected: "finite",
            });
        }
        Ok(effect)
    }

    pub(crate) fn checked_n(&self) -> Result<u64, ParameterErr> {
        require("n", self.n)
    }
}

pub(crate) fn require<T>(name: &'static str, maybe_value: Option<T>) -> Result<T, ParameterErr> {
    maybe_value.ok_or(ParameterErr::MissingField(name))
}

/// Value strictly inside (0, 1)
pub(crate) fn check_open_unit(name: &'static str, value: f64) -> Result<f64, ParameterErr> {
    if value.is_finite() && value > 0. && value < 1. {
        Ok(value)
    } else {
        Err(ParameterErr::OutOfRange {
            name,
            value,
            expected: "strictly between 0 and 1",
        })
    }
}

pub(crate) fn check_at_least(
    name: &'static str,
    value: u32,
    minimum: u32,
    expected: &'static str,
) -> Result<u32, ParameterErr> {
    if value < minimum {
        Err(ParameterErr::OutOfRange {
            name,
            value: value as f64,
            expected,
        })
    } else {
        Ok(value)
    }
}
