//! NavLab CLI: period returns, strategy simulation and comparison.
//!
//! Commands:
//! - `returns`: 1m / 3m / 6m / 1y returns table for one NAV history
//! - `simulate`: run the strategy named in a TOML config
//! - `compare`: stride SIP, Lumpsum and SWP side by side
//! - `stats`: risk/return and moving average for one or more funds
//! - `export`: write a trajectory (or the comparison) to CSV

mod export;
mod source;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use navlab_core::config::SimulationConfig;
use navlab_core::data::{align_trailing_year, last_n};
use navlab_core::domain::{Period, SchemeCode};
use navlab_core::fingerprint::RunStamp;
use navlab_core::returns::{compute_all_returns, compute_return, PeriodReturn};
use navlab_core::stats::{risk_return_for_funds, MovingAverage};
use navlab_core::strategy::{compare_strategies, StrategyComparison, StrategyRun};

use source::LoadedNav;

#[derive(Parser)]
#[command(
    name = "navlab",
    about = "NavLab CLI: mutual fund NAV returns and strategy simulation"
)]
struct Cli {
    /// Print machine-readable JSON instead of a text summary.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Period returns table for one NAV history.
    Returns {
        /// Scheme payload JSON file.
        #[arg(long, conflicts_with = "synthetic")]
        nav: Option<PathBuf>,

        /// Use a synthetic history seeded by this scheme code.
        #[arg(long)]
        synthetic: Option<String>,

        /// Only this period (1m, 3m, 6m, 1y).
        #[arg(long)]
        period: Option<Period>,

        /// Synthetic history start (YYYY-MM-DD).
        #[arg(long, default_value = "2019-01-01")]
        start: NaiveDate,

        /// Synthetic history end (YYYY-MM-DD).
        #[arg(long, default_value = "2024-12-31")]
        end: NaiveDate,
    },
    /// Run the strategy in the config's [strategy] section.
    Simulate {
        #[arg(long)]
        config: PathBuf,
    },
    /// Compare stride SIP, Lumpsum and SWP using the config's [compare] section.
    Compare {
        #[arg(long)]
        config: PathBuf,
    },
    /// Risk/return and moving average over the trailing year.
    Stats {
        /// Scheme payload JSON files.
        #[arg(long)]
        nav: Vec<PathBuf>,

        /// Synthetic scheme codes.
        #[arg(long)]
        synthetic: Vec<String>,

        /// Moving average window.
        #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(2..))]
        window: u64,
    },
    /// Write a strategy trajectory (or the comparison curves) to CSV.
    Export {
        #[arg(long)]
        config: PathBuf,

        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Returns {
            nav,
            synthetic,
            period,
            start,
            end,
        } => run_returns(nav, synthetic, period, start, end, cli.json),
        Commands::Simulate { config } => run_simulate(config, cli.json),
        Commands::Compare { config } => run_compare(config, cli.json),
        Commands::Stats {
            nav,
            synthetic,
            window,
        } => run_stats(nav, synthetic, window as usize, cli.json),
        Commands::Export { config, out } => run_export(config, out),
    }
}

fn run_returns(
    nav: Option<PathBuf>,
    synthetic: Option<String>,
    period: Option<Period>,
    start: NaiveDate,
    end: NaiveDate,
    json: bool,
) -> Result<()> {
    let loaded = match (nav, synthetic) {
        (Some(path), None) => source::load_file(&path)?,
        (None, Some(code)) => source::load_synthetic(&code, start, end),
        _ => bail!("one of --nav or --synthetic is required"),
    };

    let rows = match period {
        Some(period) => vec![PeriodReturn {
            period,
            outcome: compute_return(&loaded.series, period),
        }],
        None => compute_all_returns(&loaded.series),
    };

    if json {
        let out = json!({
            "scheme": loaded.meta,
            "synthetic": loaded.synthetic,
            "returns": rows,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header("Period Returns", &loaded);
    println!(
        "{:<6} {:<12} {:<12} {:>10} {:>10} {:>10}",
        "Period", "From", "To", "Start NAV", "Simple", "Annual"
    );
    println!("{}", "-".repeat(66));
    for row in &rows {
        match &row.outcome {
            Ok(r) => println!(
                "{:<6} {:<12} {:<12} {:>10.4} {:>9.2}% {:>9.2}%",
                row.period.label(),
                r.start_date,
                r.end_date,
                r.start_nav,
                r.simple_return_pct,
                r.annualized_return_pct
            ),
            Err(reason) => println!("{:<6} needs review: {reason}", row.period.label()),
        }
    }
    print_footer(&loaded);
    Ok(())
}

fn run_simulate(config_path: PathBuf, json: bool) -> Result<()> {
    let config = SimulationConfig::from_file(&config_path)?;
    let params = config.strategy()?;
    let loaded = source::load(&config.nav)?;

    let run = params.simulate(&loaded.series);
    let stamp = RunStamp::new(&loaded.series, params)?;
    if let Some(reason) = run.needs_review() {
        log::warn!("{} simulation needs review: {reason}", params.kind());
    }

    if json {
        let out = json!({
            "scheme": loaded.meta,
            "synthetic": loaded.synthetic,
            "stamp": stamp,
            "run": run,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header(&format!("{} Simulation", params.kind().to_uppercase()), &loaded);
    print_run(&run);
    println!("Stamp:          {}", stamp.short());
    print_footer(&loaded);
    Ok(())
}

fn run_compare(config_path: PathBuf, json: bool) -> Result<()> {
    let config = SimulationConfig::from_file(&config_path)?;
    let request = config.compare_request()?;
    let loaded = source::load(&config.nav)?;

    let cmp = compare_strategies(&loaded.series, &request);
    let stamp = RunStamp::new(&loaded.series, &request)?;

    if json {
        let out = json!({
            "scheme": loaded.meta,
            "synthetic": loaded.synthetic,
            "stamp": stamp,
            "comparison": cmp,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    print_header("Strategy Comparison", &loaded);
    println!(
        "Period:         {} to {}",
        request.sip.start_date, request.sip.end_date
    );
    print_comparison(&cmp);
    println!("Stamp:          {}", stamp.short());
    print_footer(&loaded);
    Ok(())
}

fn run_stats(nav: Vec<PathBuf>, synthetic: Vec<String>, window: usize, json: bool) -> Result<()> {
    if nav.is_empty() && synthetic.is_empty() {
        bail!("at least one --nav or --synthetic is required");
    }

    let mut funds: Vec<LoadedNav> = Vec::new();
    for path in &nav {
        funds.push(source::load_file(path)?);
    }
    for code in &synthetic {
        funds.push(source::load_synthetic(
            code,
            NaiveDate::from_ymd_opt(2019, 1, 1).unwrap_or(NaiveDate::MIN),
            NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or(NaiveDate::MAX),
        ));
    }

    let keyed: Vec<(SchemeCode, _)> = funds
        .iter()
        .map(|f| (f.label().to_string(), f.series.clone()))
        .collect();
    let points = risk_return_for_funds(&keyed);

    // Every fund restricted to the first fund's trailing-year dates
    let series: Vec<_> = funds.iter().map(|f| f.series.clone()).collect();
    let aligned = align_trailing_year(&series);
    let ma = MovingAverage::new(window);
    let latest_ma: Vec<Option<f64>> = aligned
        .iter()
        .map(|s| ma.compute(&last_n(s, window).navs()).last().copied().flatten())
        .collect();

    if json {
        let rows: Vec<_> = points
            .iter()
            .zip(&aligned)
            .zip(&latest_ma)
            .map(|((p, s), m)| {
                json!({
                    "scheme": p.scheme_code,
                    "risk_return": p.point,
                    "aligned_points": s.len(),
                    "moving_average": { "window": ma.window(), "latest": m },
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!();
    println!("=== Risk / Return (trailing observations) ===");
    println!(
        "{:<28} {:>12} {:>12} {:>8} {:>12}",
        "Scheme", "Volatility", "Avg Return", "Points", ma.name()
    );
    println!("{}", "-".repeat(76));
    for ((p, s), m) in points.iter().zip(&aligned).zip(&latest_ma) {
        let ma_text = m.map_or_else(|| "-".to_string(), |v| format!("{v:.4}"));
        println!(
            "{:<28} {:>11.4}% {:>11.4}% {:>8} {:>12}",
            p.scheme_code, p.point.volatility_pct, p.point.avg_return_pct, s.len(), ma_text
        );
    }
    if funds.iter().any(|f| f.synthetic) {
        println!();
        println!("WARNING: Results include SYNTHETIC data");
    }
    println!();
    Ok(())
}

fn run_export(config_path: PathBuf, out: PathBuf) -> Result<()> {
    let config = SimulationConfig::from_file(&config_path)?;
    let loaded = source::load(&config.nav)?;

    let csv = match &config.strategy {
        Some(params) => {
            let run = params.simulate(&loaded.series);
            if let Some(reason) = run.needs_review() {
                log::warn!("{} simulation needs review: {reason}", params.kind());
            }
            export::trajectory_csv(run.trajectory())?
        }
        None => {
            let request = config.compare_request()?;
            export::comparison_csv(&compare_strategies(&loaded.series, &request))?
        }
    };

    export::write_file(&out, &csv)?;
    println!("Exported to: {}", out.display());
    Ok(())
}

fn print_header(title: &str, loaded: &LoadedNav) {
    println!();
    println!("=== {title} ===");
    println!("Scheme:         {}", loaded.label());
    if let Some(house) = &loaded.meta.fund_house {
        println!("Fund House:     {house}");
    }
    match (loaded.series.first(), loaded.series.last()) {
        (Some(first), Some(last)) => println!(
            "History:        {} to {} ({} points)",
            first.date,
            last.date,
            loaded.series.len()
        ),
        _ => println!("History:        (empty)"),
    }
    println!();
}

fn print_footer(loaded: &LoadedNav) {
    if loaded.synthetic {
        println!();
        println!("WARNING: Results based on SYNTHETIC data");
    }
    if loaded.report.dropped() > 0 {
        println!(
            "WARNING: {} of {} NAV records were unusable",
            loaded.report.dropped(),
            loaded.report.input
        );
    }
    println!();
}

fn print_run(run: &StrategyRun) {
    match run {
        StrategyRun::Sip(Ok(out)) => {
            println!("Contributions:  {} ({} skipped)", out.executed, out.skipped);
            println!("Invested:       {:.2}", out.summary.total_invested);
            println!("Current Value:  {:.2}", out.summary.current_value);
            println!("Absolute:       {:.2}%", out.summary.absolute_return_pct);
            println!("Annualized:     {:.2}%", out.summary.annualized_return_pct);
        }
        StrategyRun::Sip(Err(reason)) => println!("NEEDS REVIEW:   {reason}"),
        StrategyRun::Lumpsum(out) => match out.entry {
            Some(entry) => {
                println!("Entry:          {} at {:.4}", entry.date, entry.nav);
                println!("Units:          {:.4}", out.units);
                print_last_value(run);
            }
            None => println!("NEEDS REVIEW:   no entry point"),
        },
        StrategyRun::Swp(out) => match out.entry {
            Some(entry) => {
                println!("Entry:          {} at {:.4}", entry.date, entry.nav);
                println!("Units:          {:.4} -> {:.4}", out.initial_units, out.final_units);
                println!("Withdrawals:    {}", out.withdrawals);
                print_last_value(run);
            }
            None => println!("NEEDS REVIEW:   no entry point"),
        },
    }
}

fn print_last_value(run: &StrategyRun) {
    if let Some(last) = run.trajectory().last() {
        println!("Value:          {:.2} on {}", last.value, last.date);
    }
}

fn print_comparison(cmp: &StrategyComparison) {
    println!();
    println!("{:<10} {:>8} {:>14}", "Strategy", "Points", "Final Value");
    println!("{}", "-".repeat(34));
    for (name, points) in [("SIP", &cmp.sip), ("Lumpsum", &cmp.lumpsum), ("SWP", &cmp.swp)] {
        let last = points
            .last()
            .map_or_else(|| "-".to_string(), |p| format!("{:.2}", p.value));
        println!("{:<10} {:>8} {:>14}", name, points.len(), last);
    }
}
