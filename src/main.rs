use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flight_plan_assistant::aircraft::Catalog;
use flight_plan_assistant::config::PlannerConfig;
use flight_plan_assistant::planner::{run_menu, Console, FAREWELL};

#[derive(Parser)]
#[command(name = "flight-plan-assistant")]
#[command(about = "Flight time, fuel and cost calculator for light aircraft", long_about = None)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = PlannerConfig::default();
    config.validate().context("Invalid planner settings")?;

    let catalog = Catalog::builtin()?;
    info!("[MAIN] {} aircraft available", catalog.len());

    ctrlc::set_handler(|| {
        println!("\n{}", FAREWELL);
        std::process::exit(0);
    })
    .context("Failed to install Ctrl-C handler")?;

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    run_menu(&mut console, &catalog, &config)?;

    Ok(())
}
