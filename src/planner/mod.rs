mod console;
mod error;
pub mod comparison;
pub mod menu;
pub mod report;

pub use comparison::{compare_aircraft, run_comparison, ComparisonRow, LegEstimate};
pub use console::{parse_number, Console};
pub use error::{InputField, ReportError};
pub use menu::{run_menu, MenuChoice, FAREWELL};
pub use report::{plan_flight, run_flight_plan, FlightPlanSummary, FuelEstimate, TripInputs, WindCondition};
