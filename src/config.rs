use anyhow::{ensure, Result};

use crate::utils::performance::{DEFAULT_FUEL_PRICE, DEFAULT_RESERVE_HOURS};

/// Planner constants, fixed for the life of the process
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    pub reserve_hours: f64,
    pub default_fuel_price: f64, // USD per gallon, used by the comparison table
    pub strong_headwind: f64,    // knots; above this the summary advises delaying
    pub favorable_tailwind: f64, // knots of tailwind; above this the summary calls it favorable
    pub name_width: usize,       // comparison table name column
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            reserve_hours: DEFAULT_RESERVE_HOURS,
            default_fuel_price: DEFAULT_FUEL_PRICE,
            strong_headwind: 20.0,
            favorable_tailwind: 10.0,
            name_width: 12,
        }
    }
}

impl PlannerConfig {
    pub fn with_reserve_hours(mut self, reserve_hours: f64) -> Self {
        self.reserve_hours = reserve_hours;
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.reserve_hours.is_finite() && self.reserve_hours > 0.0,
            "Reserve must be a positive number of hours, got {}",
            self.reserve_hours
        );
        ensure!(
            self.default_fuel_price.is_finite() && self.default_fuel_price >= 0.0,
            "Fuel price must be a non-negative amount, got {}",
            self.default_fuel_price
        );
        ensure!(
            self.strong_headwind >= 0.0 && self.favorable_tailwind >= 0.0,
            "Wind thresholds must be non-negative"
        );
        ensure!(self.name_width > 0, "Name column width must be at least 1");
        Ok(())
    }
}
