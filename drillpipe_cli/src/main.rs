//! # Drillpipe CLI
//!
//! Command-line front end for `drillpipe_core`. Resolves a pipe from the
//! catalog or from explicit dimensions, computes its torque-tension envelope
//! and prints a summary, with optional JSON/CSV export for plotting.
//!
//! ```text
//! drillpipe catalog
//! drillpipe analyze --size 5 --weight 19.5 --grade G-105 -s 20 --csv curve.csv
//! drillpipe analyze --od 5 --wall 0.5 --yield-psi 75000 --torque-unit kNm --check 30,250
//! ```

mod cli;
mod config;
mod error;
mod export;
mod logger;
mod report;

use std::process::ExitCode;

use clap::Parser;
use drillpipe_core::calculations::calculate;
use drillpipe_core::catalog;
use tracing::{debug, info};

use cli::{AnalyzeArgs, CatalogArgs, Cli, Command};
use error::Result;

fn main() -> ExitCode {
    let args = Cli::parse();
    logger::init_cli_logger(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {}", e);
            if let error::CliError::Calculation(calc) = &e {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: Cli) -> Result<()> {
    match &args.command {
        Command::Catalog(catalog_args) => run_catalog(catalog_args),
        Command::Analyze(analyze_args) => {
            let settings = config::load(args.config.as_deref())?;
            debug!(?settings, "effective settings");
            run_analyze(analyze_args, &settings)
        }
    }
}

fn run_catalog(args: &CatalogArgs) -> Result<()> {
    let entries = catalog::entries();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        report::print_catalog(&entries);
    }
    Ok(())
}

fn run_analyze(args: &AnalyzeArgs, settings: &drillpipe_core::AnalysisSettings) -> Result<()> {
    let request = args.build_request(settings)?;
    info!(
        pipe = %request.spec.label,
        safety_margin = %request.safety_margin,
        torque_unit = %request.units.torque_unit,
        tension_unit = %request.units.tension_unit,
        "analyzing"
    );

    let result = calculate(&request)?;
    report::print_envelope(&result, args.rows);

    if let Some((torque, tension)) = args.check {
        let check = result.check_operating_point(torque, tension);
        report::print_check(&result, &check);
    }

    if let Some(path) = &args.json {
        export::write_json(path, &request, &result)?;
    }
    if let Some(path) = &args.csv {
        export::write_csv(path, &result)?;
    }
    Ok(())
}
