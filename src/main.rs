use clap::{Args, Parser, Subcommand, ValueEnum};
use sscompute::compute::{compute_ss, solve_achieved_power, solve_mdes};
use sscompute::{AnalysisSpec, DesignParameters, SolverSettings, SsComputeErr, Tails};

#[derive(Debug, Parser)]
#[command(
    name = "sscompute",
    version,
    about = "Sample size, power and minimum detectable effect for common study designs",
    long_about = "sscompute solves for the sample size a study needs, the power a fixed\n\
        sample size achieves, or the smallest effect it can detect.\n\n\
        EXAMPLES:\n\
        \n  sscompute independent-t --effect 0.5              Per-group n for d = 0.5\n\
        \n  sscompute anova --effect 0.25 --groups 3          Per-group n for f = 0.25\n\
        \n  sscompute power pearson --effect 0.3 --n 84       Power at N = 84\n\
        \n  sscompute mdes regression --predictors 3 --n 100  Smallest detectable f²"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Independent samples t-test (Cohen's d); n per group
    IndependentT(DesignArgs),
    /// Paired samples t-test (Cohen's dz); number of pairs
    PairedT(DesignArgs),
    /// One sample t-test (Cohen's d)
    OneSampleT(DesignArgs),
    /// One-way ANOVA (Cohen's f); n per group, needs --groups
    Anova(DesignArgs),
    /// Single effect of a factorial ANOVA (Cohen's f); needs --df
    Factorial(DesignArgs),
    /// Pearson correlation (r)
    Pearson(DesignArgs),
    /// Multiple linear regression, test of R² = 0 (Cohen's f²); needs --predictors
    Regression(DesignArgs),
    /// Logistic regression, continuous predictor (odds ratio); needs --baseline-prob
    Logistic(DesignArgs),
    /// Chi-square test (Cohen's w); needs --df
    ChiSquare(DesignArgs),
    /// Achieved power at a fixed sample size
    Power(InverseArgs),
    /// Minimum detectable effect size at a fixed sample size
    Mdes(InverseArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Family {
    IndependentT,
    PairedT,
    OneSampleT,
    Anova,
    Factorial,
    Pearson,
    Regression,
    Logistic,
    ChiSquare,
}

impl From<Family> for AnalysisSpec {
    fn from(family: Family) -> Self {
        match family {
            Family::IndependentT => AnalysisSpec::IndependentT,
            Family::PairedT => AnalysisSpec::PairedT,
            Family::OneSampleT => AnalysisSpec::OneSampleT,
            Family::Anova => AnalysisSpec::OneWayAnova,
            Family::Factorial => AnalysisSpec::FactorialAnova,
            Family::Pearson => AnalysisSpec::PearsonCorrelation,
            Family::Regression => AnalysisSpec::LinearRegression,
            Family::Logistic => AnalysisSpec::LogisticRegression,
            Family::ChiSquare => AnalysisSpec::ChiSquare,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TailsArg {
    One,
    Two,
}

impl From<TailsArg> for Tails {
    fn from(tails: TailsArg) -> Self {
        match tails {
            TailsArg::One => Tails::One,
            TailsArg::Two => Tails::Two,
        }
    }
}

#[derive(Debug, Args, Clone)]
struct DesignArgs {
    /// Significance level
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,

    /// Target power (1 - β)
    #[arg(long, default_value_t = 0.8)]
    power: f64,

    /// Effect size in the family's unit (d, dz, f, r, f², OR, w)
    #[arg(long, allow_hyphen_values = true)]
    effect: Option<f64>,

    /// One- or two-tailed test
    #[arg(long, value_enum, default_value = "two")]
    tails: TailsArg,

    /// Number of groups (one-way ANOVA)
    #[arg(long)]
    groups: Option<u32>,

    /// Degrees of freedom (chi-square), or numerator df of the effect (factorial ANOVA)
    #[arg(long)]
    df: Option<u32>,

    /// Number of design cells (factorial ANOVA; defaults to df + 1)
    #[arg(long)]
    cells: Option<u32>,

    /// Number of predictors (linear regression)
    #[arg(long)]
    predictors: Option<u32>,

    /// P(Y = 1) at the predictor mean (logistic regression)
    #[arg(long)]
    baseline_prob: Option<f64>,

    /// R² of the predictor on the other covariates (logistic regression)
    #[arg(long)]
    r2_other: Option<f64>,

    /// Maximum solver iterations
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Convergence tolerance in power units
    #[arg(long)]
    tolerance: Option<f64>,
}

#[derive(Debug, Args, Clone)]
struct InverseArgs {
    #[arg(value_enum)]
    family: Family,

    /// Sample size: per group for independent-t and anova, pairs for paired-t, total otherwise
    #[arg(long)]
    n: u64,

    #[command(flatten)]
    design: DesignArgs,
}

impl DesignArgs {
    fn params(&self) -> DesignParameters {
        DesignParameters {
            alpha: self.alpha,
            power: Some(self.power),
            effect_size: self.effect,
            tails: self.tails.into(),
            groups: self.groups,
            df: self.df,
            cells: self.cells,
            predictors: self.predictors,
            baseline_prob: self.baseline_prob,
            r2_other: self.r2_other,
            n: None,
        }
    }

    fn settings(&self) -> SolverSettings {
        let defaults = SolverSettings::default();
        SolverSettings {
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            power_tolerance: self.tolerance.unwrap_or(defaults.power_tolerance),
            ..defaults
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let rc = match run(cli.command) {
        Ok(summary) => {
            println!("{summary}");
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            if let Some(estimate) = e.best_estimate() {
                eprintln!("best estimate: {estimate}");
            }
            1
        }
    };
    std::process::exit(rc);
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: Command) -> Result<String, SsComputeErr> {
    let forward = |spec: AnalysisSpec, args: &DesignArgs| {
        compute_ss(spec, &args.params(), &args.settings()).map(|res| res.to_string())
    };
    match command {
        Command::IndependentT(args) => forward(AnalysisSpec::IndependentT, &args),
        Command::PairedT(args) => forward(AnalysisSpec::PairedT, &args),
        Command::OneSampleT(args) => forward(AnalysisSpec::OneSampleT, &args),
        Command::Anova(args) => forward(AnalysisSpec::OneWayAnova, &args),
        Command::Factorial(args) => forward(AnalysisSpec::FactorialAnova, &args),
        Command::Pearson(args) => forward(AnalysisSpec::PearsonCorrelation, &args),
        Command::Regression(args) => forward(AnalysisSpec::LinearRegression, &args),
        Command::Logistic(args) => forward(AnalysisSpec::LogisticRegression, &args),
        Command::ChiSquare(args) => forward(AnalysisSpec::ChiSquare, &args),
        Command::Power(args) => {
            let params = args.design.params().with_n(args.n);
            solve_achieved_power(args.family.into(), &params).map(|res| res.to_string())
        }
        Command::Mdes(args) => {
            let params = args.design.params().with_n(args.n);
            solve_mdes(args.family.into(), &params, &args.design.settings())
                .map(|res| res.to_string())
        }
    }
}
