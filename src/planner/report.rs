use std::fmt;
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::aircraft::{AircraftProfile, Catalog};
use crate::config::PlannerConfig;
use crate::utils::performance::{
    check_fuel_sufficiency, compute_cost, compute_flight_time, compute_fuel_needed, FlightTimeResult,
    FuelCheck,
};

use super::console::Console;
use super::error::{InputField, ReportError};

const RULE: &str = "========================================";

/// Qualitative remark on the wind component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindCondition {
    StrongHeadwind,
    FavorableTailwind,
    Normal,
}

impl WindCondition {
    /// Tailwind arrives as a negative headwind
    pub fn classify(headwind: f64, config: &PlannerConfig) -> Self {
        if headwind > config.strong_headwind {
            WindCondition::StrongHeadwind
        } else if headwind < -config.favorable_tailwind {
            WindCondition::FavorableTailwind
        } else {
            WindCondition::Normal
        }
    }
}

impl fmt::Display for WindCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindCondition::StrongHeadwind => write!(f, "Strong headwind - consider delaying if possible"),
            WindCondition::FavorableTailwind => write!(f, "Favorable tailwind - good flying conditions!"),
            WindCondition::Normal => write!(f, "Normal wind conditions"),
        }
    }
}

/// Trip parameters entered by the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripInputs {
    pub distance_nm: f64,
    pub headwind: f64,   // knots, negative for tailwind
    pub fuel_price: f64, // USD per gallon
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelEstimate {
    pub fuel_needed: f64,
    pub sufficiency: FuelCheck,
    pub cost: f64,
}

/// Everything the flight plan report prints, computed in one pass
#[derive(Debug, Clone)]
pub struct FlightPlanSummary<'a> {
    pub aircraft: &'a AircraftProfile,
    pub distance_nm: f64,
    pub headwind: f64,
    pub time: FlightTimeResult,
    /// None when the flight itself is impossible
    pub fuel: Option<FuelEstimate>,
    pub wind: WindCondition,
}

impl<'a> FlightPlanSummary<'a> {
    pub fn cost(&self) -> f64 {
        self.fuel.as_ref().map(|f| f.cost).unwrap_or(0.0)
    }
}

impl fmt::Display for FlightPlanSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", RULE)?;
        writeln!(f, "FLIGHT PLAN SUMMARY")?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Aircraft: {}", self.aircraft.name)?;
        writeln!(f, "Distance: {} nautical miles", self.distance_nm)?;

        match &self.time {
            Ok(duration) => writeln!(f, "Flight Time: {}", duration)?,
            Err(e) => writeln!(f, "Flight Time: Error: {}", e)?,
        }

        match &self.fuel {
            Some(fuel) => {
                writeln!(f, "Fuel Required: {:.1} gallons", fuel.fuel_needed)?;
                writeln!(f, "Fuel Check: {}", fuel.sufficiency)?;
            }
            None => {
                writeln!(f, "Fuel Required: N/A")?;
                writeln!(f, "Fuel Check: N/A")?;
            }
        }
        writeln!(f, "Estimated Cost: ${:.2}", self.cost())?;

        writeln!(f)?;
        write!(f, "{}", self.wind)
    }
}

/// Work out a full plan for one aircraft. An impossible flight still yields a
/// summary, with the fuel section left empty.
pub fn plan_flight<'a>(
    aircraft: &'a AircraftProfile,
    inputs: &TripInputs,
    config: &PlannerConfig,
) -> FlightPlanSummary<'a> {
    let time = compute_flight_time(inputs.distance_nm, aircraft.cruise_speed, inputs.headwind);

    let fuel = time.as_ref().ok().map(|duration| {
        let fuel_needed = compute_fuel_needed(duration.as_hours(), aircraft.fuel_burn, config.reserve_hours);
        FuelEstimate {
            fuel_needed,
            sufficiency: check_fuel_sufficiency(aircraft.max_fuel, fuel_needed),
            cost: compute_cost(fuel_needed, inputs.fuel_price),
        }
    });

    FlightPlanSummary {
        aircraft,
        distance_nm: inputs.distance_nm,
        headwind: inputs.headwind,
        time,
        fuel,
        wind: WindCondition::classify(inputs.headwind, config),
    }
}

fn non_negative(field: InputField, value: f64) -> Result<f64, ReportError> {
    if value < 0.0 {
        Err(ReportError::OutOfRange { field, value })
    } else {
        Ok(value)
    }
}

/// Interactive flight plan: pick an aircraft, enter the trip, print the summary.
/// Bad input aborts before anything is computed.
pub fn run_flight_plan<'c, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &'c Catalog,
    config: &PlannerConfig,
) -> Result<FlightPlanSummary<'c>, ReportError> {
    writeln!(console.out(), "=== Flight Plan Assistant ===\n")?;
    writeln!(console.out(), "Available Aircraft:")?;
    for aircraft in catalog.iter() {
        writeln!(console.out(), "  {}", aircraft)?;
    }

    let code = console.prompt("\nEnter aircraft code: ")?;
    let aircraft = catalog
        .get(&code)
        .ok_or_else(|| ReportError::UnknownAircraft(code.to_uppercase()))?;
    writeln!(console.out(), "\nSelected: {}", aircraft.name)?;

    let distance_nm = console.prompt_number("Enter distance (nautical miles): ", InputField::Distance)?;
    let distance_nm = non_negative(InputField::Distance, distance_nm)?;
    let headwind = console.prompt_number("Enter headwind (knots, 0 if none): ", InputField::Headwind)?;
    let fuel_price = console.prompt_number("Enter fuel price per gallon: ", InputField::FuelPrice)?;
    let fuel_price = non_negative(InputField::FuelPrice, fuel_price)?;

    let inputs = TripInputs { distance_nm, headwind, fuel_price };
    debug!("[PLANNER] {} with {:?}", aircraft.code, inputs);

    let summary = plan_flight(aircraft, &inputs, config);
    match &summary.time {
        Ok(duration) => info!(
            "[PLANNER] {} over {:.1} NM: {}, cost ${:.2}",
            aircraft.code, distance_nm, duration, summary.cost()
        ),
        Err(e) => info!("[PLANNER] {} cannot fly {:.1} NM: {}", aircraft.code, distance_nm, e),
    }

    writeln!(console.out(), "\n{}", summary)?;
    Ok(summary)
}
