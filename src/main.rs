use std::path::PathBuf;

use clap::Parser;
use dda_sim::config::{self, SimulationConfig};
use dda_sim::report::{self, ConvergenceSummary};
use dda_sim::{DdaResult, ScenarioRun, run_scenarios};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "dda-sim.toml";

#[derive(Parser)]
#[command(name = "dda-sim", version, about = "Simulate a dynamic difficulty adjustment estimator")]
struct Cli {
    /// Log per-run details (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run one simulation per seed and write one CSV per run
    Run(RunArgs),
    /// Write a commented default config file
    Init {
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

#[derive(Parser)]
struct RunArgs {
    /// Config file; missing file means defaults
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// The player's hidden skill level
    #[arg(long)]
    actual_level: Option<i32>,

    /// Temporary level the estimation window starts with
    #[arg(long)]
    initial_level: Option<i32>,

    /// Rounds per run
    #[arg(long)]
    rounds: Option<usize>,

    /// Seed (repeatable); replaces the configured seed list
    #[arg(long = "seed")]
    seeds: Vec<u64>,

    /// Directory the CSV files are written to
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Print a convergence table after the runs
    #[arg(long)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => run(args),
        Commands::Init { path } => config::create_default_config(&path).map(|()| {
            info!(path = %path.display(), "wrote default config");
        }),
    };

    if let Err(e) = result {
        error!("{e}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn resolve_config(args: &RunArgs) -> DdaResult<SimulationConfig> {
    let mut cfg = config::load_config(&args.config)?;
    if let Some(level) = args.actual_level {
        cfg.actual_level = level;
    }
    if let Some(level) = args.initial_level {
        cfg.initial_temporary_level = level;
    }
    if let Some(rounds) = args.rounds {
        cfg.rounds = rounds;
    }
    if !args.seeds.is_empty() {
        cfg.seeds = args.seeds.clone();
    }
    if let Some(dir) = &args.output_dir {
        cfg.output_dir = dir.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}

fn run(args: RunArgs) -> DdaResult<()> {
    let cfg = resolve_config(&args)?;
    std::fs::create_dir_all(&cfg.output_dir)?;

    let runs = run_scenarios(cfg.scenarios())?;
    let mut summaries = Vec::with_capacity(runs.len());
    for ScenarioRun { scenario, records } in &runs {
        let path = cfg.output_path(scenario.seed);
        report::write_csv_file(records, &path)?;

        let summary =
            ConvergenceSummary::from_records(records, scenario.actual_level, cfg.tail, cfg.tolerance);
        if summary.converged(cfg.tolerance) {
            info!(
                seed = scenario.seed,
                path = %path.display(),
                tail_mean = summary.tail_mean,
                "run converged"
            );
        } else {
            warn!(
                seed = scenario.seed,
                path = %path.display(),
                tail_mean = summary.tail_mean,
                "run did not converge within tolerance"
            );
        }
        summaries.push((scenario.seed, summary));
    }

    if args.summary {
        print_summary(&cfg, &summaries);
    }
    Ok(())
}

fn print_summary(cfg: &SimulationConfig, summaries: &[(u64, ConvergenceSummary)]) {
    println!(
        "actual level {} | seeded at {} | {} rounds | tail {} | tolerance {:.2}",
        cfg.actual_level, cfg.initial_temporary_level, cfg.rounds, cfg.tail, cfg.tolerance,
    );
    println!(" seed | win rate | hard wins | easy losses | final est | tail mean | settled at");
    println!("------|----------|-----------|-------------|-----------|-----------|-----------");
    for (seed, s) in summaries {
        println!(
            "{:>5} | {:>8} | {:>9} | {:>11} | {:>9} | {:>9} | {:>10}",
            seed,
            fmt_opt(s.win_rate()),
            s.hard_wins,
            s.easy_losses,
            fmt_opt(s.final_estimate),
            fmt_opt(s.tail_mean),
            s.settled_at.map_or_else(|| "-".to_string(), |r| r.to_string()),
        );
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |x| format!("{x:.2}"))
}
