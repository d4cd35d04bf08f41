//! u-policy-sim: compare SJF, EDF and weighted scheduling on a job set.
//!
//! # Usage
//!
//! ```text
//! u-policy-sim compare --input jobs.json --pretty --report
//! u-policy-sim compare --input jobs.csv --format csv --parallel
//! u-policy-sim generate --seed 7 --count 10 > jobs.json
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};

use u_policy_sim::codec::{self, JobRequest};
use u_policy_sim::generator::JobGenerator;
use u_policy_sim::{Aggregator, Comparison, ExecutionMode, Policy, SimulationConfig};

#[derive(Parser)]
#[command(name = "u-policy-sim", about = "Single-resource scheduling policy comparison")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    /// `{"jobs": [...]}` envelope or a bare array.
    Json,
    /// Header row plus `id,arrivalTime,executionTime,deadline,weight` rows.
    Csv,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate all policies and print the results envelope.
    Compare {
        /// Job file. Reads stdin when omitted.
        #[arg(long)]
        input: Option<PathBuf>,

        #[arg(long, value_enum, default_value = "json")]
        format: InputFormat,

        /// TOML configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Run the three policies on separate threads.
        #[arg(long)]
        parallel: bool,

        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,

        /// Log the recommendation and relative metric scores.
        #[arg(long)]
        report: bool,
    },
    /// Print a random job set as a JSON request envelope.
    Generate {
        /// RNG seed. Random when omitted.
        #[arg(long)]
        seed: Option<u64>,

        /// Exact number of jobs (default: 5 to 14).
        #[arg(long)]
        count: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compare {
            input,
            format,
            config,
            parallel,
            pretty,
            report,
        } => run_compare(
            input.as_deref(),
            format,
            config.as_deref(),
            parallel,
            pretty,
            report,
        ),
        Command::Generate { seed, count } => run_generate(seed, count),
    }
}

fn run_compare(
    input: Option<&Path>,
    format: InputFormat,
    config: Option<&Path>,
    parallel: bool,
    pretty: bool,
    report: bool,
) -> anyhow::Result<()> {
    let mut config = match config {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    if parallel {
        config = config.with_execution(ExecutionMode::Parallel);
    }

    let content = read_input(input)?;
    let jobs = match format {
        InputFormat::Json if content.trim_start().starts_with('[') => {
            codec::parse_jobs_json(&content)
        }
        InputFormat::Json => codec::parse_request(&content),
        InputFormat::Csv => codec::parse_jobs_csv(&content),
    };

    let outcome = jobs.and_then(|jobs| Aggregator::new(config).compare(&jobs));
    match &outcome {
        Ok(comparison) => {
            info!("{}", comparison.verdict());
            if report {
                log_report(comparison);
            }
        }
        Err(e) => error!(error = %e, "comparison failed"),
    }

    let failed = outcome.is_err();
    let (status, body) = codec::render_response(outcome, pretty)?;
    println!("{body}");

    if failed {
        anyhow::bail!("comparison failed with status {status}");
    }
    Ok(())
}

fn log_report(comparison: &Comparison) {
    if let Some(rec) = comparison.recommendation() {
        info!("{}", rec.profile.title);
        for strength in rec.profile.strengths {
            info!(policy = %rec.policy, "strength: {strength}");
        }
        for weakness in rec.profile.weaknesses {
            info!(policy = %rec.policy, "limitation: {weakness}");
        }
    }
    for row in comparison.relative_scores() {
        let scores: Vec<String> = Policy::ALL
            .iter()
            .zip(&row.scores)
            .map(|(policy, score)| format!("{policy}={score:.0}"))
            .collect();
        info!(metric = row.metric.label(), "relative {}", scores.join(" "));
    }
}

fn run_generate(seed: Option<u64>, count: Option<usize>) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut generator = JobGenerator::default();
    if let Some(count) = count {
        generator = generator.with_exact_count(count);
    }

    let request = JobRequest {
        jobs: generator.generate(&mut rng),
    };
    info!(jobs = request.jobs.len(), "generated job set");
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}
