//! tsdb-advisor CLI
//!
//! Run with no arguments for the interactive questionnaire, or use a
//! subcommand for scripted use.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};
use tsdb_advisor::{
    config::{AdvisorConfig, OutputFormat},
    eval, mcp,
    presenter::run_session,
    questions::questionnaire,
    render::{render_breakdown, render_text},
    report::AdvisorReport,
    types::*,
};

/// Recommend TimescaleDB or ClickHouse from five questions
#[derive(Parser)]
#[command(name = "tsdb-advisor")]
#[command(version)]
#[command(about = "Recommend TimescaleDB or ClickHouse from five questions about your workload")]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a set of answers without prompting
    Recommend {
        /// Daily ingestion volume (under_1gb, 1_10gb, 10_100gb, over_100gb)
        #[arg(long)]
        data_volume: DataVolume,

        /// Query pattern (oltp, olap, mixed, time_series_analytics)
        #[arg(long)]
        query_pattern: QueryPattern,

        /// Real-time needs (critical, important, moderate, low)
        #[arg(long)]
        realtime_needs: RealtimeNeed,

        /// Retention (under_1y, 1_3y, 3_7y, over_7y)
        #[arg(long)]
        data_retention: DataRetention,

        /// Team expertise (postgres_experts, general_sql, limited_experience, distributed_systems)
        #[arg(long)]
        team_expertise: TeamExpertise,

        /// Print a JSON report
        #[arg(long)]
        json: bool,

        /// Show the per-question score breakdown
        #[arg(long)]
        explain: bool,
    },
    /// List the questions and their options
    Questions {
        #[arg(long)]
        json: bool,
    },
    /// Score every answer combination and summarize
    Sweep {
        #[arg(long)]
        json: bool,
    },
    /// Run scenario files with expected results
    Scenarios {
        /// Directory of *.json scenario files
        #[arg(default_value = "scenarios")]
        dir: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// Print tool definitions as JSON
    Tools,
    /// Call a tool with JSON arguments
    Call {
        name: String,

        /// Arguments as a JSON object
        #[arg(default_value = "{}")]
        args: String,
    },
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = AdvisorConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration resolved");

    match cli.command {
        None => run_interactive(&config),
        Some(Commands::Recommend {
            data_volume,
            query_pattern,
            realtime_needs,
            data_retention,
            team_expertise,
            json,
            explain,
        }) => {
            let answers = Answers::new(
                data_volume,
                query_pattern,
                realtime_needs,
                data_retention,
                team_expertise,
            );
            run_recommend(&config, answers, json, explain)
        }
        Some(Commands::Questions { json }) => run_questions(json || config.output == OutputFormat::Json),
        Some(Commands::Sweep { json }) => run_sweep(json || config.output == OutputFormat::Json),
        Some(Commands::Scenarios { dir, json }) => {
            run_scenarios(&dir, json || config.output == OutputFormat::Json)
        }
        Some(Commands::Tools) => {
            println!("{}", serde_json::to_string_pretty(&mcp::get_tools())?);
            Ok(())
        }
        Some(Commands::Call { name, args }) => {
            let args: serde_json::Value =
                serde_json::from_str(&args).context("Tool arguments must be valid JSON")?;
            let result = mcp::handle_tool_call(&name, &args)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
    }
}

fn run_interactive(config: &AdvisorConfig) -> Result<()> {
    tracing::info!(output = ?config.output, "starting interactive questionnaire");

    let stdin = io::stdin();
    match config.output {
        // stdout carries only the report; prompts and the text result go to stderr
        OutputFormat::Json => run_session(stdin.lock(), io::stderr(), io::stdout(), config)?,
        OutputFormat::Text => run_session(stdin.lock(), io::stdout(), io::sink(), config)?,
    };
    Ok(())
}

fn run_recommend(config: &AdvisorConfig, answers: Answers, json: bool, explain: bool) -> Result<()> {
    tracing::info!(?answers, "recommend");
    let report = AdvisorReport::new(answers)?;

    if json || config.output == OutputFormat::Json {
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", render_text(&report.display, &config.render_options()))?;
    if explain || config.explain {
        writeln!(stdout)?;
        write!(stdout, "{}", render_breakdown(&report.breakdown))?;
    }
    Ok(())
}

fn run_questions(json: bool) -> Result<()> {
    let questions = questionnaire();
    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    for question in &questions {
        println!("Question {}: {}", question.number, question.heading);
        println!("{}", question.prompt);
        for option in &question.options {
            println!("  {:<24} {}", option.key, option.label);
        }
        println!();
    }
    Ok(())
}

fn run_sweep(json: bool) -> Result<()> {
    let summary = eval::sweep();
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Combinations: {}", summary.combinations);
    for (database, wins) in &summary.wins {
        println!(
            "  {:<12} {:>4} wins ({:.1}%)",
            database.name(),
            wins,
            summary.win_rate(*database) * 100.0
        );
    }
    println!("  Ties (→ ClickHouse): {}", summary.ties);
    println!("Confidence tiers:");
    for (tier, count) in &summary.tiers {
        println!("  {:<10} {:>4}", tier.to_string(), count);
    }
    println!(
        "Totals: {}..={}  (max TimescaleDB {}, max ClickHouse {})",
        summary.min_total, summary.max_total, summary.max_timescaledb, summary.max_clickhouse
    );
    Ok(())
}

fn run_scenarios(dir: &Path, json: bool) -> Result<()> {
    let scenarios = eval::load_all_scenarios(dir)?;
    if scenarios.is_empty() {
        anyhow::bail!("No scenario files found in {:?}", dir);
    }
    tracing::info!(count = scenarios.len(), ?dir, "running scenarios");

    let results = eval::run_scenarios(&scenarios);
    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("Scenarios: {}/{} passed", results.passed, results.total);
        for failure in &results.failures {
            println!("  ✗ {}", failure.scenario_id);
            for reason in &failure.reasons {
                println!("      {reason}");
            }
        }
    }

    if !results.all_passed() {
        anyhow::bail!("{} scenario(s) failed", results.failures.len());
    }
    Ok(())
}
