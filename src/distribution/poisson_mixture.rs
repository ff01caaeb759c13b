use statrs::function::gamma::ln_gamma;

/// Poisson weights below this no longer change a probability in f64
const WEIGHT_EPS: f64 = 1e-17;
/// Hard cap on terms summed on each side of the mode
const MAX_TERMS: u64 = 200_000;

/// Sums `term(j, ln_weight_j)` over j >= 0, where weight_j is the
/// Poisson(half_lambda) probability of j. Summation starts at the mode and
/// walks outward in both directions until the weights are negligible, so
/// the number of terms grows with sqrt(half_lambda) rather than
/// half_lambda.
pub(crate) fn mode_outward_sum<F>(half_lambda: f64, term: F) -> f64
where
    F: Fn(u64, f64) -> f64,
{
    if half_lambda <= 0. {
        return term(0, 0.);
    }
    let ln_half_lambda = half_lambda.ln();
    let ln_weight = |j: u64| -half_lambda + j as f64 * ln_half_lambda - ln_gamma(j as f64 + 1.);

    let mode = half_lambda.floor() as u64;
    let mut sum = 0.;

    // Upward from the mode
    let mut j = mode;
    loop {
        let lw = ln_weight(j);
        sum += term(j, lw);
        if lw.exp() < WEIGHT_EPS || j - mode >= MAX_TERMS {
            break;
        }
        j += 1;
    }

    // Downward from just below the mode
    let mut j = mode;
    while j > 0 && mode - j < MAX_TERMS {
        j -= 1;
        let lw = ln_weight(j);
        sum += term(j, lw);
        if lw.exp() < WEIGHT_EPS {
            break;
        }
    }
    sum
}
