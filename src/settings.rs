//----------------------------------------
// Solver settings
//----------------------------------------

/// Numerical limits shared by every iterative solve.
///
/// All searches are bounded by `max_iterations`; running out of budget
/// yields a non-convergence error carrying the best estimate rather than
/// looping.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct SolverSettings {
    /// Accepted excess of achieved power over the target in continuous
    /// searches
    pub power_tolerance: f64,
    /// Bracket width at which a continuous search stops regardless of power
    pub effect_tolerance: f64,
    /// Upper bound on bracket expansions plus bisection steps per search
    pub max_iterations: usize,
    /// Largest sample size a search may try
    pub max_sample_size: u64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        SolverSettings {
            power_tolerance: 1e-4,
            effect_tolerance: 1e-10,
            max_iterations: 200,
            max_sample_size: 100_000_000,
        }
    }
}
