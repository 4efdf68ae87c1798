use std::io::{BufRead, Write};
use tracing::info;

use crate::aircraft::{AircraftProfile, Catalog};
use crate::config::PlannerConfig;
use crate::utils::performance::{
    compute_cost, compute_flight_time_still_air, compute_fuel_needed, FlightDuration, FlightTimeError,
};

use super::console::Console;
use super::error::{InputField, ReportError};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegEstimate {
    pub duration: FlightDuration,
    pub fuel_needed: f64,
    pub cost: f64,
}

/// One aircraft's line in the comparison table
#[derive(Debug, Clone)]
pub struct ComparisonRow<'a> {
    pub aircraft: &'a AircraftProfile,
    pub estimate: Result<LegEstimate, FlightTimeError>,
}

impl ComparisonRow<'_> {
    pub fn render(&self, name_width: usize) -> String {
        let name = self.aircraft.short_name(name_width);
        match &self.estimate {
            Ok(leg) => format!(
                "{:<width$} | {:>2}h{:>2} | {:>5.1} | ${:>5.1}",
                name,
                leg.duration.hours,
                leg.duration.minutes,
                leg.fuel_needed,
                leg.cost,
                width = name_width
            ),
            Err(FlightTimeError::HeadwindTooStrong { .. }) => {
                format!("{:<width$} | headwind too strong", name, width = name_width)
            }
            Err(e) => format!("{:<width$} | {}", name, e, width = name_width),
        }
    }
}

/// Still-air estimate for every aircraft, in catalog order. Aircraft that
/// cannot make the trip keep their row.
pub fn compare_aircraft<'a>(
    catalog: &'a Catalog,
    distance_nm: f64,
    config: &PlannerConfig,
) -> Vec<ComparisonRow<'a>> {
    catalog
        .iter()
        .map(|aircraft| {
            let estimate = compute_flight_time_still_air(distance_nm, aircraft.cruise_speed).map(|duration| {
                let fuel_needed = compute_fuel_needed(duration.as_hours(), aircraft.fuel_burn, config.reserve_hours);
                LegEstimate {
                    duration,
                    fuel_needed,
                    cost: compute_cost(fuel_needed, config.default_fuel_price),
                }
            });
            ComparisonRow { aircraft, estimate }
        })
        .collect()
}

pub fn render_table(rows: &[ComparisonRow<'_>], name_width: usize) -> String {
    let header = format!("{:<width$} | Time  | Fuel  | Cost  ", "Aircraft", width = name_width);
    let mut table = format!("{}\n{}\n", header, "-".repeat(header.len()));
    for row in rows {
        table.push_str(&row.render(name_width));
        table.push('\n');
    }
    table
}

/// Interactive comparison: one distance, every aircraft
pub fn run_comparison<'c, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &'c Catalog,
    config: &PlannerConfig,
) -> Result<Vec<ComparisonRow<'c>>, ReportError> {
    writeln!(console.out(), "\n=== Aircraft Comparison ===")?;

    let distance_nm = console.prompt_number("Enter trip distance (nautical miles): ", InputField::Distance)?;
    if distance_nm < 0.0 {
        return Err(ReportError::OutOfRange {
            field: InputField::Distance,
            value: distance_nm,
        });
    }

    let rows = compare_aircraft(catalog, distance_nm, config);
    info!("[COMPARE] {} aircraft over {:.1} NM", rows.len(), distance_nm);

    writeln!(console.out(), "\nComparing aircraft for {} NM trip:\n", distance_nm)?;
    write!(console.out(), "{}", render_table(&rows, config.name_width))?;
    Ok(rows)
}
