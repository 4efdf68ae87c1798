pub mod aircraft;
pub mod config;
pub mod planner;
pub mod utils;
