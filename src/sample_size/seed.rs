//! Closed-form starting points for the sample-size search. These are the
//! textbook normal-approximation formulas; the search then moves to the
//! smallest n whose exact power reaches the target.

use crate::analysis::design::Design;
use crate::analysis::types::Tails;
use crate::critical_value::{resolve, resolve_power};
use crate::error::SsComputeErr;
use crate::power::logistic::information_per_subject;

/// Continuous closed-form sample size in the design's unit. `magnitude`
/// is the validated, strictly positive effect magnitude.
pub fn closed_form_n(
    design: &Design,
    magnitude: f64,
    alpha: f64,
    power: f64,
    tails: Tails,
) -> Result<f64, SsComputeErr> {
    let z_beta = resolve_power(power)?;
    // F and chi-square tests have no direction; their seeds use the
    // two-sided normal quantile
    let z_two = resolve(alpha, Tails::Two)? + z_beta;
    let z = resolve(alpha, tails)? + z_beta;

    let n = match *design {
        Design::IndependentT => 2. * (z / magnitude).powi(2),
        // "+1" for the t correction is applied after rounding
        Design::PairedT | Design::OneSampleT => (z / magnitude).powi(2).ceil() + 1.,
        Design::PearsonCorrelation => (z / magnitude.atanh()).powi(2) + 3.,
        Design::OneWayAnova { groups } => {
            let k = groups as f64;
            (z_two * z_two / (magnitude * magnitude) + k) / k
        }
        Design::FactorialAnova { cells, .. } => {
            z_two * z_two / (magnitude * magnitude) + cells as f64
        }
        Design::LinearRegression { predictors } => {
            z_two * z_two / magnitude + predictors as f64 + 1.
        }
        Design::LogisticRegression {
            baseline_prob,
            r2_other,
        } => z * z / (information_per_subject(baseline_prob, r2_other) * magnitude * magnitude),
        Design::ChiSquare { .. } => z_two * z_two / (magnitude * magnitude),
    };
    Ok(n)
}

/// Rounds a closed-form size up to an integer no larger than `ceiling`
pub fn seed_n(closed_form: f64, ceiling: u64) -> u64 {
    if closed_form.is_finite() && closed_form < ceiling as f64 {
        closed_form.ceil().max(0.) as u64
    } else {
        ceiling
    }
}
