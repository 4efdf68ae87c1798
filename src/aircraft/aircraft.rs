use serde::{Deserialize, Serialize};
use std::fmt;

/// Performance profile for a single aircraft type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftProfile {
    pub code: String,
    pub name: String,
    pub cruise_speed: f64, // knots
    pub fuel_burn: f64,    // gallons per hour
    pub max_fuel: f64,     // gallons
    pub seats: u32,
}

impl AircraftProfile {
    pub fn new(
        code: &str,
        name: &str,
        cruise_speed: f64,
        fuel_burn: f64,
        max_fuel: f64,
        seats: u32,
    ) -> Self {
        Self {
            code: code.to_uppercase(),
            name: name.to_string(),
            cruise_speed,
            fuel_burn,
            max_fuel,
            seats,
        }
    }

    /// Name of the first field that breaks the "everything positive" rule
    pub fn invalid_field(&self) -> Option<&'static str> {
        // `!(x > 0.0)` also catches NaN
        if self.code.trim().is_empty() {
            Some("code")
        } else if !(self.cruise_speed > 0.0) {
            Some("cruiseSpeed")
        } else if !(self.fuel_burn > 0.0) {
            Some("fuelBurn")
        } else if !(self.max_fuel > 0.0) {
            Some("maxFuel")
        } else if self.seats == 0 {
            Some("seats")
        } else {
            None
        }
    }

    /// Name cut to `width` characters for table columns
    pub fn short_name(&self, width: usize) -> String {
        self.name.chars().take(width).collect()
    }

    /// Multi-line block used by the aircraft info listing
    pub fn info_block(&self) -> String {
        format!(
            "{}:\n  Cruise: {} knots\n  Fuel burn: {} gal/hour\n  Max fuel: {} gallons\n  Seats: {}",
            self.name, self.cruise_speed, self.fuel_burn, self.max_fuel, self.seats
        )
    }
}

impl fmt::Display for AircraftProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.name)
    }
}
