//----------------------------------------
// power mod
//----------------------------------------
//! Power functions for each family, evaluated at an effect magnitude and a
//! sample size in the family's own unit. Forward and inverse solvers are
//! all searches over these.
pub mod chi_square;
pub mod correlation;
pub mod f_test;
pub mod logistic;

use crate::analysis::design::Design;
use crate::analysis::types::Tails;
use crate::error::SsComputeErr;

/// Power of the design at effect magnitude `magnitude` (as returned by
/// `Design::effect_magnitude`) and sample size `n`.
///
/// `n` must already satisfy `Design::check_n`.
pub fn power_at(
    design: &Design,
    magnitude: f64,
    n: u64,
    alpha: f64,
    tails: Tails,
) -> Result<f64, SsComputeErr> {
    match *design {
        Design::IndependentT => t_test::two_sample_power(magnitude, n, alpha, tails),
        Design::PairedT | Design::OneSampleT => {
            t_test::one_sample_power(magnitude, n, alpha, tails)
        }
        Design::PearsonCorrelation => correlation::fisher_z_power(magnitude, n, alpha, tails),
        Design::OneWayAnova { groups } => f_test::anova_power(magnitude, groups, n, alpha),
        Design::FactorialAnova { df_num, cells } => {
            f_test::factorial_power(magnitude, df_num, cells, n, alpha)
        }
        Design::LinearRegression { predictors } => {
            f_test::regression_power(magnitude, predictors, n, alpha)
        }
        Design::LogisticRegression {
            baseline_prob,
            r2_other,
        } => logistic::hsieh_power(magnitude, baseline_prob, r2_other, n, alpha, tails),
        Design::ChiSquare { df } => chi_square::chi_square_power(magnitude, df, n, alpha),
    }
}
