use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use drillpipe_core::catalog::{self, NominalSize, PipeGrade};
use drillpipe_core::{AnalysisSettings, EnvelopeRequest, PipeSpecification, SafetyMargin, TensionUnit, TorqueUnit};

use crate::error::{CliError, Result};

#[derive(Parser, Debug)]
#[command(name = "drillpipe")]
#[command(about = "Torque-tension operating limits for drill pipe", version)]
pub struct Cli {
    /// Path to a TOML settings file (default: ./drillpipe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog sizes, nominal weights and grades
    Catalog(CatalogArgs),
    /// Compute the torque-tension envelope for one pipe
    Analyze(AnalyzeArgs),
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print the catalog as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Nominal size from the catalog (e.g., 5, 5-1/2, 3.5)
    #[arg(long, value_parser = parse_size, conflicts_with = "od")]
    pub size: Option<NominalSize>,

    /// Nominal weight in lb/ft (e.g., 19.5)
    #[arg(long, conflicts_with = "od")]
    pub weight: Option<f64>,

    /// Steel grade (E-75, X-95, G-105, S-135)
    #[arg(long, value_parser = parse_grade)]
    pub grade: Option<PipeGrade>,

    /// Outer diameter in inches for a pipe not in the catalog
    #[arg(long, requires = "wall")]
    pub od: Option<f64>,

    /// Wall thickness in inches (with --od)
    #[arg(long, requires = "od")]
    pub wall: Option<f64>,

    /// Yield strength in psi (with --od; overrides --grade)
    #[arg(long = "yield-psi", requires = "od")]
    pub yield_psi: Option<f64>,

    /// Label for a custom pipe
    #[arg(long, requires = "od")]
    pub label: Option<String>,

    /// Safety margin in percent (0-90)
    #[arg(short = 's', long = "safety-factor", value_parser = parse_margin)]
    pub safety_factor: Option<SafetyMargin>,

    /// Torque display unit (kft-lb or kNm)
    #[arg(long, value_parser = parse_torque_unit)]
    pub torque_unit: Option<TorqueUnit>,

    /// Tension display unit (klb or mT)
    #[arg(long, value_parser = parse_tension_unit)]
    pub tension_unit: Option<TensionUnit>,

    /// Number of torque samples (at least 2)
    #[arg(long)]
    pub samples: Option<usize>,

    /// Rows shown in the summary table
    #[arg(long, default_value_t = 11)]
    pub rows: usize,

    /// Check an operating point given as TORQUE,TENSION in display units
    #[arg(long, value_parser = parse_operating_point)]
    pub check: Option<(f64, f64)>,

    /// Write the full result as JSON
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the sampled curve as CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Resolve the pipe to analyze from flags, falling back to the settings' default pipe.
    pub fn resolve_pipe(&self, settings: &AnalysisSettings) -> Result<PipeSpecification> {
        let grade = self.grade.unwrap_or(settings.default_pipe.grade);

        if let Some(od) = self.od {
            let wall = self
                .wall
                .ok_or_else(|| CliError::invalid_argument("--wall is required with --od"))?;
            let yield_psi = self.yield_psi.unwrap_or_else(|| grade.min_yield_psi());
            let label = self
                .label
                .clone()
                .unwrap_or_else(|| format!("{:.3}\" OD x {:.3}\" wall, {:.0} psi", od, wall, yield_psi));
            return Ok(PipeSpecification::new(label, od, wall, yield_psi));
        }

        let default = settings.default_pipe;
        let size = self.size.unwrap_or(default.size);
        let weight = match self.weight {
            Some(weight) => weight,
            None if size == default.size => default.weight_lb_ft,
            None => size
                .nominal_weights()
                .first()
                .map(|nw| nw.weight_lb_ft)
                .ok_or_else(|| CliError::invalid_argument(format!("{} has no nominal weights", size)))?,
        };

        Ok(catalog::lookup(size, weight, grade)?)
    }

    /// Build the envelope request: flags override settings.
    pub fn build_request(&self, settings: &AnalysisSettings) -> Result<EnvelopeRequest> {
        let mut request = settings.request_for(self.resolve_pipe(settings)?);
        if let Some(margin) = self.safety_factor {
            request.safety_margin = margin;
        }
        if let Some(unit) = self.torque_unit {
            request.units.torque_unit = unit;
        }
        if let Some(unit) = self.tension_unit {
            request.units.tension_unit = unit;
        }
        if let Some(samples) = self.samples {
            request.sample_count = samples;
        }
        Ok(request)
    }
}

fn parse_size(s: &str) -> std::result::Result<NominalSize, String> {
    NominalSize::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_grade(s: &str) -> std::result::Result<PipeGrade, String> {
    PipeGrade::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_torque_unit(s: &str) -> std::result::Result<TorqueUnit, String> {
    TorqueUnit::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_tension_unit(s: &str) -> std::result::Result<TensionUnit, String> {
    TensionUnit::from_str_flexible(s).map_err(|e| e.to_string())
}

fn parse_margin(s: &str) -> std::result::Result<SafetyMargin, String> {
    let percent: u8 = s
        .trim()
        .trim_end_matches('%')
        .parse()
        .map_err(|_| format!("'{}' is not a whole percentage", s))?;
    SafetyMargin::new(percent).map_err(|e| e.to_string())
}

fn parse_operating_point(s: &str) -> std::result::Result<(f64, f64), String> {
    let (torque, tension) = s
        .split_once(',')
        .ok_or_else(|| format!("expected TORQUE,TENSION, got '{}'", s))?;
    let torque: f64 = torque.trim().parse().map_err(|_| format!("invalid torque '{}'", torque))?;
    let tension: f64 = tension.trim().parse().map_err(|_| format!("invalid tension '{}'", tension))?;
    if !torque.is_finite() || !tension.is_finite() {
        return Err(format!("operating point must be finite, got '{}'", s));
    }
    Ok((torque, tension))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn analyze(args: &[&str]) -> AnalyzeArgs {
        let mut argv = vec!["drillpipe", "analyze"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Analyze(args) => args,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_resolve_to_settings_pipe() {
        let args = analyze(&[]);
        let spec = args.resolve_pipe(&AnalysisSettings::default()).unwrap();
        assert_eq!(spec.outer_diameter_in, 5.0);
        assert_eq!(spec.wall_thickness_in, 0.362);
    }

    #[test]
    fn test_catalog_pipe_flags() {
        let args = analyze(&["--size", "3-1/2", "--weight", "15.5", "--grade", "G-105"]);
        let spec = args.resolve_pipe(&AnalysisSettings::default()).unwrap();
        assert_eq!(spec.outer_diameter_in, 3.5);
        assert_eq!(spec.wall_thickness_in, 0.449);
        assert_eq!(spec.yield_strength_psi, 105_000.0);
    }

    #[test]
    fn test_size_without_weight_uses_lightest() {
        let args = analyze(&["--size", "2-7/8"]);
        let spec = args.resolve_pipe(&AnalysisSettings::default()).unwrap();
        assert_eq!(spec.wall_thickness_in, 0.217);
    }

    #[test]
    fn test_custom_pipe_flags() {
        let args = analyze(&["--od", "5", "--wall", "0.5", "--yield-psi", "80000"]);
        let spec = args.resolve_pipe(&AnalysisSettings::default()).unwrap();
        assert_eq!(spec.outer_diameter_in, 5.0);
        assert_eq!(spec.yield_strength_psi, 80_000.0);
        assert_eq!(spec.label, "5.000\" OD x 0.500\" wall, 80000 psi");
    }

    #[test]
    fn test_custom_pipe_conflicts_with_size() {
        let argv = ["drillpipe", "analyze", "--od", "5", "--wall", "0.5", "--size", "5"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_flags_override_settings() {
        let args = analyze(&["-s", "20%", "--torque-unit", "kNm", "--tension-unit", "mT", "--samples", "50"]);
        let request = args.build_request(&AnalysisSettings::default()).unwrap();
        assert_eq!(request.safety_margin.percent(), 20);
        assert_eq!(request.units.torque_unit, TorqueUnit::KiloNewtonMeter);
        assert_eq!(request.units.tension_unit, TensionUnit::MetricTon);
        assert_eq!(request.sample_count, 50);
    }

    #[test]
    fn test_invalid_flag_values() {
        assert!(Cli::try_parse_from(["drillpipe", "analyze", "-s", "95"]).is_err());
        assert!(Cli::try_parse_from(["drillpipe", "analyze", "--torque-unit", "Nm"]).is_err());
        assert!(Cli::try_parse_from(["drillpipe", "analyze", "--check", "10"]).is_err());
    }

    #[test]
    fn test_operating_point_parsing() {
        assert_eq!(parse_operating_point("12.5, 300").unwrap(), (12.5, 300.0));
        assert!(parse_operating_point("nan,100").is_err());
        assert!(parse_operating_point("10,inf").is_err());
        assert!(Cli::try_parse_from(["drillpipe", "analyze", "--check", "NaN,100"]).is_err());
    }
}
