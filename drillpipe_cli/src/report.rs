//! Terminal output for the `catalog` and `analyze` commands.

use drillpipe_core::calculations::OperatingPointCheck;
use drillpipe_core::catalog::{CatalogEntry, PipeGrade};
use drillpipe_core::EnvelopeResult;

pub fn print_catalog(entries: &[CatalogEntry]) {
    println!("{:<8} {:>8} {:>12} {:>10} {:>9}", "Size", "OD [in]", "Wt [lb/ft]", "Wall [in]", "ID [in]");
    println!("{}", "─".repeat(51));
    for entry in entries {
        println!(
            "{:<8} {:>8.3} {:>12.2} {:>10.3} {:>9.3}",
            entry.size.label(),
            entry.outer_diameter_in,
            entry.weight_lb_ft,
            entry.wall_thickness_in,
            entry.outer_diameter_in - 2.0 * entry.wall_thickness_in,
        );
    }
    println!();
    println!("Grades:");
    for grade in PipeGrade::ALL {
        println!("  {:<6} {:>8.0} psi", grade.code(), grade.min_yield_psi());
    }
}

pub fn print_envelope(result: &EnvelopeResult, rows: usize) {
    let torque_unit = result.units.torque_unit;
    let tension_unit = result.units.tension_unit;

    println!("═══════════════════════════════════════════════════");
    println!("  TORQUE-TENSION LIMITS: {}", result.label);
    println!("═══════════════════════════════════════════════════");
    println!();
    println!("Geometry:");
    println!("  Cross section area   {:.3} in²", result.geometry.area_in2);
    println!("  Moment of inertia    {:.3} in⁴", result.geometry.moment_of_inertia_in4);
    println!("  Inside diameter      {:.3} in", result.geometry.inner_diameter_in);
    println!();
    println!("Limits:");
    println!(
        "  Torsional yield      {:.2} {} ({:.0} ft-lb)",
        result.torsional_limit, torque_unit, result.torsional_yield_ftlb
    );
    println!(
        "  Pure tension yield   {:.2} {} ({:.0} lb)",
        result.pure_tension_limit, tension_unit, result.pure_tension_limit_lb
    );
    println!("  Safety margin        {}", result.safety_margin);
    println!();

    let max_header = format!("Max [{}]", tension_unit);
    let safe_header = format!("Safe [{}]", tension_unit);
    println!(
        "  {:>14} {:>14} {:>14}",
        format!("Torque [{}]", torque_unit),
        max_header,
        safe_header
    );
    println!("  {}", "─".repeat(44));
    for index in table_indices(result.points.len(), rows) {
        let p = &result.points[index];
        println!("  {:>14.2} {:>14.2} {:>14.2}", p.torque, p.max_tension, p.derated_tension);
    }
}

pub fn print_check(result: &EnvelopeResult, check: &OperatingPointCheck) {
    println!();
    println!("Operating point:");
    println!(
        "  {:.2} {} at {:.2} {}",
        check.torque, result.units.torque_unit, check.tension, result.units.tension_unit
    );
    println!(
        "  Allowable {:.2} {} (max {:.2})",
        check.allowable_tension, result.units.tension_unit, check.max_tension
    );
    match check.utilization {
        Some(ratio) => println!("  Utilization {:.2} {}", ratio, status_icon(check.passes())),
        None => println!("  Utilization n/a {}", status_icon(check.passes())),
    }
}

fn status_icon(pass: bool) -> &'static str {
    if pass { "[OK]" } else { "[FAIL]" }
}

/// Evenly spread `rows` indices over `len` samples, always including both ends.
fn table_indices(len: usize, rows: usize) -> Vec<usize> {
    if len == 0 || rows == 0 {
        return Vec::new();
    }
    if rows == 1 {
        return vec![0];
    }
    if rows >= len {
        return (0..len).collect();
    }
    let last = (len - 1) as f64;
    let mut indices: Vec<usize> = (0..rows)
        .map(|i| (i as f64 * last / (rows - 1) as f64).round() as usize)
        .collect();
    indices.dedup();
    indices
}
