//! Flight performance calculations: time en route, fuel, cost

use std::fmt;
use thiserror::Error;

/// Hours of fuel held back on top of the trip burn
pub const DEFAULT_RESERVE_HOURS: f64 = 1.0;

/// USD per gallon when nothing else is given
pub const DEFAULT_FUEL_PRICE: f64 = 6.50;

/// Longest trip we will split into hours and minutes. Past this an f64
/// no longer carries a meaningful fraction of an hour.
pub const MAX_FLIGHT_HOURS: f64 = 1.0e15;

/// Time en route, kept as typed fields rather than text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightDuration {
    pub hours: u64,
    pub minutes: u64, // always < 60
    exact_hours: f64,
}

impl FlightDuration {
    pub fn from_hours(exact_hours: f64) -> Result<Self, FlightTimeError> {
        if !(exact_hours >= 0.0 && exact_hours < MAX_FLIGHT_HOURS) {
            return Err(FlightTimeError::DurationTooLong(exact_hours));
        }

        let whole = exact_hours.floor();
        let minutes = ((exact_hours - whole) * 60.0).floor();

        Ok(Self {
            hours: whole as u64,
            minutes: (minutes as u64).min(59),
            exact_hours,
        })
    }

    /// Unrounded duration in hours, used for fuel planning
    pub fn as_hours(&self) -> f64 {
        self.exact_hours
    }

    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }
}

impl fmt::Display for FlightDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} hours {} minutes", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FlightTimeError {
    #[error("Headwind too strong! ({headwind} kt against {cruise_speed} kt cruise)")]
    HeadwindTooStrong { cruise_speed: f64, headwind: f64 },

    #[error("Distance must be a non-negative number, got {0}")]
    InvalidDistance(f64),

    #[error("Flight time too long to plan ({0:.0} hours)")]
    DurationTooLong(f64),
}

pub type FlightTimeResult = std::result::Result<FlightDuration, FlightTimeError>;

/// Time to cover `distance_nm` at cruise speed less the headwind component.
/// A tailwind is passed as a negative headwind.
pub fn compute_flight_time(distance_nm: f64, cruise_speed: f64, headwind: f64) -> FlightTimeResult {
    if !(distance_nm >= 0.0) || distance_nm.is_infinite() {
        return Err(FlightTimeError::InvalidDistance(distance_nm));
    }

    let effective_speed = cruise_speed - headwind;
    if !(effective_speed > 0.0) {
        return Err(FlightTimeError::HeadwindTooStrong { cruise_speed, headwind });
    }

    FlightDuration::from_hours(distance_nm / effective_speed)
}

/// `compute_flight_time` with no wind
pub fn compute_flight_time_still_air(distance_nm: f64, cruise_speed: f64) -> FlightTimeResult {
    compute_flight_time(distance_nm, cruise_speed, 0.0)
}

/// Trip fuel plus reserve, in gallons
pub fn compute_fuel_needed(duration_hours: f64, fuel_burn: f64, reserve_hours: f64) -> f64 {
    (duration_hours + reserve_hours) * fuel_burn
}

/// Outcome of comparing required fuel against tank capacity
#[derive(Debug, Clone, PartialEq)]
pub struct FuelCheck {
    pub ok: bool,
    pub message: String,
}

impl fmt::Display for FuelCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

pub fn check_fuel_sufficiency(max_fuel: f64, fuel_needed: f64) -> FuelCheck {
    if fuel_needed <= max_fuel {
        FuelCheck {
            ok: true,
            message: format!(
                "Fuel OK: {:.1} gal needed, {:.1} gal capacity",
                fuel_needed, max_fuel
            ),
        }
    } else {
        FuelCheck {
            ok: false,
            message: format!(
                "Fuel warning: {:.1} gal needed, but only {:.1} gal capacity",
                fuel_needed, max_fuel
            ),
        }
    }
}

pub fn compute_cost(fuel_needed: f64, fuel_price: f64) -> f64 {
    fuel_needed * fuel_price
}
