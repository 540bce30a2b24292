//! JSON and CSV export of envelope results for external plotting tools.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use drillpipe_core::{EnvelopeRequest, EnvelopeResult};
use serde::Serialize;
use tracing::info;

use crate::error::Result;

/// JSON document written by `--json`
#[derive(Debug, Serialize)]
pub struct EnvelopeReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub tool_version: &'static str,
    pub request: &'a EnvelopeRequest,
    pub result: &'a EnvelopeResult,
}

impl<'a> EnvelopeReport<'a> {
    pub fn new(request: &'a EnvelopeRequest, result: &'a EnvelopeResult) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION"),
            request,
            result,
        }
    }
}

pub fn write_json(path: &Path, request: &EnvelopeRequest, result: &EnvelopeResult) -> Result<()> {
    let report = EnvelopeReport::new(request, result);
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}

/// One row per sample; the header carries the display units.
pub fn write_csv(path: &Path, result: &EnvelopeResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    let torque = result.units.torque_unit.symbol();
    let tension = result.units.tension_unit.symbol();

    writer.write_record([
        format!("torque_{}", torque),
        format!("max_tension_{}", tension),
        format!("derated_tension_{}", tension),
    ])?;
    for point in &result.points {
        writer.serialize((point.torque, point.max_tension, point.derated_tension))?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = result.points.len(), "wrote CSV envelope");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillpipe_core::calculations::calculate;
    use drillpipe_core::{PipeSpecification, SafetyMargin};

    fn sample() -> (EnvelopeRequest, EnvelopeResult) {
        let mut request = EnvelopeRequest::new(PipeSpecification::new("test pipe", 5.0, 0.5, 75_000.0));
        request.sample_count = 4;
        request.safety_margin = SafetyMargin::new(50).unwrap();
        let result = calculate(&request).unwrap();
        (request, result)
    }

    #[test]
    fn test_csv_export() {
        let (_, result) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envelope.csv");
        write_csv(&path, &result).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "torque_kft-lb,max_tension_klb,derated_tension_klb");
        assert_eq!(lines.len(), 1 + 4);
        assert!(lines[1].starts_with("0.0,"));
    }

    #[test]
    fn test_json_export() {
        let (request, result) = sample();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("envelope.json");
        write_json(&path, &request, &result).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["request"]["safety_margin"], 50);
        assert_eq!(value["result"]["points"].as_array().unwrap().len(), 4);
        assert!(value["generated_at"].is_string());
    }
}
