use crate::error::SsComputeErr;
use crate::util::error::RootFindErr;

/// Result of a bracketing search: `x` is the end of the final bracket at
/// which f(x) >= target, and `value` is f(x)
#[derive(Debug, Clone, Copy)]
pub struct Root<T> {
    pub x: T,
    pub value: f64,
    pub iterations: usize,
}

/// Given a monotonically increasing function f(x) and lower bound, finds
/// value x' to the right of the lower bound such that f(x') >= target and
/// f(x') is within `tol` of the target (or the bracket around x' is
/// narrower than `x_tol`, scaled by |x'| when that exceeds 1).
///
/// The search window starts at `upper_guess` and is doubled, but never
/// past `upper_cap`, until it contains the target.
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    upper_guess: f64,
    upper_cap: f64,
    target: f64,
    tol: f64,
    x_tol: f64,
    max_iterations: usize,
) -> Result<Root<f64>, SsComputeErr>
where
    F: Fn(f64) -> Result<f64, SsComputeErr>,
{
    if f(lower_bound)? >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }
    // Set window for search
    let mut lower_bound = lower_bound;
    let mut upper_bound = upper_guess.max(lower_bound + x_tol).min(upper_cap);
    let mut f_upper_bound = f(upper_bound)?;
    let mut iterations = 0;
    while f_upper_bound < target {
        if iterations >= max_iterations || upper_bound >= upper_cap {
            log::warn!(
                "root find: target {target} not bracketed after {iterations} expansions \
                (f({upper_bound}) = {f_upper_bound})"
            );
            return Err(RootFindErr::NonConvergence {
                best_estimate: upper_bound,
                achieved: f_upper_bound,
                iterations,
            }
            .into());
        }
        lower_bound = upper_bound;
        upper_bound = (upper_bound * 2. + 1.).min(upper_cap);
        f_upper_bound = f(upper_bound)?;
        iterations += 1;
    }

    // Perform search; the bracket width is relative once |x| exceeds 1
    while (upper_bound - lower_bound) > x_tol * upper_bound.abs().max(1.)
        && (f_upper_bound - target) > tol
    {
        if iterations >= max_iterations {
            log::warn!(
                "root find: stopped after {iterations} iterations at x = {upper_bound} \
                (f = {f_upper_bound}, target {target})"
            );
            return Err(RootFindErr::NonConvergence {
                best_estimate: upper_bound,
                achieved: f_upper_bound,
                iterations,
            }
            .into());
        }
        let x = lower_bound + (upper_bound - lower_bound) / 2.;
        let y = f(x)?;
        log::trace!("root find: f({x}) = {y}");
        if y >= target {
            upper_bound = x;
            f_upper_bound = y;
        } else {
            lower_bound = x;
        }
        iterations += 1;
    }
    Ok(Root {
        x: upper_bound,
        value: f_upper_bound,
        iterations,
    })
}

/// Integer counterpart of `root_find_monotonic`: the smallest n >= minimum
/// with f(n) >= target, for f increasing in n. `seed` is the first upper
/// end tried.
pub fn smallest_sufficient_n<F>(
    f: F,
    minimum: u64,
    seed: u64,
    target: f64,
    max_n: u64,
    max_iterations: usize,
) -> Result<Root<u64>, SsComputeErr>
where
    F: Fn(u64) -> Result<f64, SsComputeErr>,
{
    let f_minimum = f(minimum)?;
    if f_minimum >= target {
        return Ok(Root {
            x: minimum,
            value: f_minimum,
            iterations: 0,
        });
    }

    let mut lower = minimum;
    let mut upper = seed.clamp(minimum + 1, max_n.max(minimum + 1));
    let mut f_upper = f(upper)?;
    let mut iterations = 0;
    while f_upper < target {
        if iterations >= max_iterations || upper >= max_n {
            log::warn!(
                "sample size search: target power {target} not reached by n = {upper} \
                (power {f_upper})"
            );
            return Err(RootFindErr::NonConvergence {
                best_estimate: upper as f64,
                achieved: f_upper,
                iterations,
            }
            .into());
        }
        lower = upper;
        upper = upper.saturating_mul(2).min(max_n);
        f_upper = f(upper)?;
        iterations += 1;
    }

    // f(lower) < target <= f(upper)
    while upper - lower > 1 {
        if iterations >= max_iterations {
            log::warn!("sample size search: stopped after {iterations} iterations at n = {upper}");
            return Err(RootFindErr::NonConvergence {
                best_estimate: upper as f64,
                achieved: f_upper,
                iterations,
            }
            .into());
        }
        let mid = lower + (upper - lower) / 2;
        let y = f(mid)?;
        log::trace!("sample size search: power({mid}) = {y}");
        if y >= target {
            upper = mid;
            f_upper = y;
        } else {
            lower = mid;
        }
        iterations += 1;
    }
    Ok(Root {
        x: upper,
        value: f_upper,
        iterations,
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    fn ok(x: f64) -> Result<f64, SsComputeErr> {
        Ok(x)
    }

    #[test]
    fn basic_linear_root_find() {
        let res = root_find_monotonic(ok, 0.0, 1.0, f64::MAX, 3., 0.001, 1e-12, 200)
            .expect("failed to perform linear root find");
        assert!((res.x - 3.0).abs() < 0.001);
        assert!(res.value >= 3.0);
    }

    #[test]
    fn basic_quadratic_root_find() {
        let res = root_find_monotonic(|x| ok(x * x), 0.0, 1.0, f64::MAX, 9., 0.001, 1e-12, 200)
            .expect("failed to perform quadratic root find");
        assert!((res.x - 3.0).abs() < 0.001);
    }

    #[test]
    fn bad_lower_bound() {
        let res = root_find_monotonic(ok, 5.0, 10.0, f64::MAX, 3., 0.001, 1e-12, 200);
        assert_eq!(
            res.unwrap_err(),
            SsComputeErr::RootFind(RootFindErr::BadLowerBound)
        );
    }

    #[test]
    fn cap_prevents_unbounded_expansion() {
        // Never reaches the target below the cap
        let res = root_find_monotonic(|x| ok(x.min(0.5)), 0.0, 0.1, 1.0, 0.9, 1e-4, 1e-12, 200);
        let err = res.unwrap_err();
        assert!(err.is_non_convergence());
        assert_eq!(err.best_estimate(), Some(1.0));
    }

    #[test]
    fn iteration_budget_is_respected() {
        let res = root_find_monotonic(ok, 0.0, 1e6, f64::MAX, 3.3, 0.0, 0.0, 5);
        let err = res.unwrap_err();
        assert!(err.is_non_convergence());
        assert!(err.best_estimate().unwrap() >= 3.3);
    }

    #[test]
    fn large_roots_stop_on_relative_width() {
        // Spacing of f64 near 1e15 is far above any absolute x_tol
        let res = root_find_monotonic(ok, 0.0, 1.0, f64::MAX, 2.5e15, 0.0, 1e-12, 500).unwrap();
        assert!((res.x / 2.5e15 - 1.).abs() < 1e-11);
        assert!(res.iterations < 200);
    }

    #[test]
    fn smallest_n_for_step() {
        let f = |n: u64| ok(if n >= 37 { 1.0 } else { 0.0 });
        for seed in [1, 10, 37, 100, 10_000] {
            let res = smallest_sufficient_n(f, 2, seed, 0.5, 1_000_000, 200).unwrap();
            assert_eq!(res.x, 37);
        }
    }

    #[test]
    fn smallest_n_returns_minimum_when_already_sufficient() {
        let res = smallest_sufficient_n(|_| ok(0.9), 4, 50, 0.8, 1_000, 200).unwrap();
        assert_eq!(res.x, 4);
        assert_eq!(res.iterations, 0);
    }

    #[test]
    fn smallest_n_gives_up_at_ceiling() {
        let err = smallest_sufficient_n(|_| ok(0.1), 2, 10, 0.8, 1_000, 200).unwrap_err();
        assert!(err.is_non_convergence());
        assert_eq!(err.best_estimate(), Some(1_000.));
    }
}
