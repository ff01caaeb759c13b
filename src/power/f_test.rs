use crate::distribution::central::f_upper_critical;
use crate::distribution::noncentral_f::noncentral_f_sf;
use crate::error::SsComputeErr;

/// P(F' > F_crit) for a level-`alpha` F test with (df1, df2) degrees of
/// freedom and non-centrality `lambda`
pub fn noncentral_f_power(
    df1: f64,
    df2: f64,
    lambda: f64,
    alpha: f64,
) -> Result<f64, SsComputeErr> {
    let crit = f_upper_critical(alpha, df1, df2)?;
    noncentral_f_sf(crit, df1, df2, lambda)
}

/// One-way ANOVA with `groups` equal groups of `n_per_group`:
/// df1 = k - 1, df2 = kn - k, lambda = f² kn
pub fn anova_power(
    f: f64,
    groups: u32,
    n_per_group: u64,
    alpha: f64,
) -> Result<f64, SsComputeErr> {
    let k = groups as f64;
    let total = k * n_per_group as f64;
    noncentral_f_power(k - 1., total - k, f * f * total, alpha)
}

/// A single factorial effect with numerator df u in a design with `cells`
/// cells and `n` subjects in total: df2 = N - cells, lambda = f² N
pub fn factorial_power(
    f: f64,
    df_num: u32,
    cells: u32,
    n: u64,
    alpha: f64,
) -> Result<f64, SsComputeErr> {
    let n = n as f64;
    noncentral_f_power(df_num as f64, n - cells as f64, f * f * n, alpha)
}

/// Test of R² = 0 with p predictors: df1 = p, df2 = N - p - 1,
/// lambda = f² N
pub fn regression_power(
    f2: f64,
    predictors: u32,
    n: u64,
    alpha: f64,
) -> Result<f64, SsComputeErr> {
    let p = predictors as f64;
    let n = n as f64;
    noncentral_f_power(p, n - p - 1., f2 * n, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn anova_reference() {
        // k = 3, f = 0.25 (Cohen's medium effect)
        assert_abs_diff_eq!(anova_power(0.25, 3, 53, 0.05).unwrap(), 0.80489, epsilon = 1e-4);
        assert!(anova_power(0.25, 3, 52, 0.05).unwrap() < 0.8);
    }

    #[test]
    fn one_way_matches_factorial_with_k_cells() {
        let one_way = anova_power(0.3, 4, 20, 0.05).unwrap();
        let factorial = factorial_power(0.3, 3, 4, 80, 0.05).unwrap();
        assert_abs_diff_eq!(one_way, factorial, epsilon = 1e-12);
    }

    #[test]
    fn regression_zero_effect_gives_alpha() {
        assert_abs_diff_eq!(regression_power(0., 3, 40, 0.05).unwrap(), 0.05, epsilon = 1e-10);
    }

    #[test]
    fn residual_df_must_be_positive() {
        assert!(regression_power(0.15, 3, 4, 0.05).is_err());
    }
}
