//! Command-line conjunction finder.
//!
//! ```bash
//! conjunction --objects Jupiter Moon --where 32.9029,-96.5639,153.7 \
//!     --start "2017/04/24 16:45:29" --duration 20d --resolution 1m
//! ```
//!
//! `RUST_LOG` overrides the log level chosen with `-v`.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use conjunction::{
    render_results, render_setup, scan, Ephemeris, PositionProvider, ScanRequest, Settings,
};

#[derive(Parser)]
#[command(name = "conjunction", about = "Conjunction finder")]
struct Cli {
    /// Two objects: a planet, Sun or Moon, a star name, or RA/DEC (J2000, RA in hours)
    #[arg(long, num_args = 1.., value_name = "OBJECT")]
    objects: Vec<String>,
    /// Observer as lat,lon[,elevation] or a place defined in the config file
    #[arg(long = "where", value_name = "PLACE")]
    place: Option<String>,
    /// 'now' or a date and time such as "2017/04/24 16:45:29"
    #[arg(long)]
    start: Option<String>,
    /// How long to search, e.g. "20d" or "1d 12h"
    #[arg(long)]
    duration: Option<String>,
    /// Step between samples, e.g. "1m"
    #[arg(long)]
    resolution: Option<String>,
    /// IANA time zone used to read --start (default UTC)
    #[arg(long)]
    tz: Option<String>,
    /// TOML file with defaults and named places
    #[arg(long)]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => Settings::default(),
    };

    let request = ScanRequest {
        objects: cli.objects,
        place: cli.place,
        start: cli.start,
        duration: cli.duration,
        resolution: cli.resolution,
        timezone: cli.tz,
    };
    let config = request
        .into_config(&settings, Utc::now())
        .context("invalid configuration")?;
    // `scan` validates again; this earlier pass keeps the setup block off
    // stdout when a name is unknown.
    for body in &config.objects {
        Ephemeris.validate(body).context("invalid configuration")?;
    }

    print!("{}", render_setup(&config));
    let outcome = scan(&config, &Ephemeris).context("scan failed")?;
    print!("{}", render_results(&outcome));
    Ok(())
}
