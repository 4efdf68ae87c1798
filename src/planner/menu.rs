use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info};

use crate::aircraft::Catalog;
use crate::config::PlannerConfig;

use super::comparison::run_comparison;
use super::console::Console;
use super::error::ReportError;
use super::report::run_flight_plan;

pub const FAREWELL: &str = "Safe travels!";

const BANNER_RULE: &str = "==============================";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    FlightPlan,
    Compare,
    AircraftInfo,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::FlightPlan),
            "2" => Ok(MenuChoice::Compare),
            "3" => Ok(MenuChoice::AircraftInfo),
            "4" => Ok(MenuChoice::Exit),
            other => Err(format!("Unknown menu option: {}", other)),
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ReportError> {
    let out = console.out();
    writeln!(out, "\n{}", BANNER_RULE)?;
    writeln!(out, "   FLIGHT PLAN ASSISTANT")?;
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "1. Create Flight Plan")?;
    writeln!(out, "2. Compare Aircraft")?;
    writeln!(out, "3. View Aircraft Info")?;
    writeln!(out, "4. Exit")?;
    Ok(())
}

pub fn print_aircraft_info<W: Write>(out: &mut W, catalog: &Catalog) -> Result<(), ReportError> {
    writeln!(out, "\nAircraft Information:")?;
    for aircraft in catalog.iter() {
        writeln!(out, "\n{}", aircraft.info_block())?;
    }
    Ok(())
}

/// Run one menu entry. Validation failures are shown and swallowed.
fn dispatch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    choice: MenuChoice,
    catalog: &Catalog,
    config: &PlannerConfig,
) -> Result<(), ReportError> {
    let outcome = match choice {
        MenuChoice::FlightPlan => run_flight_plan(console, catalog, config).map(|_| ()),
        MenuChoice::Compare => run_comparison(console, catalog, config).map(|_| ()),
        MenuChoice::AircraftInfo => print_aircraft_info(console.out(), catalog),
        MenuChoice::Exit => Ok(()),
    };

    match outcome {
        Err(e) if e.is_validation() => {
            info!("[MENU] {:?} aborted: {}", choice, e);
            writeln!(console.out(), "{}", e)?;
            Ok(())
        }
        other => other,
    }
}

/// Menu loop; returns on option 4 or when input runs out
pub fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &Catalog,
    config: &PlannerConfig,
) -> Result<(), ReportError> {
    loop {
        print_menu(console)?;

        let answer = match console.prompt("\nChoose an option (1-4): ") {
            Ok(answer) => answer,
            Err(ReportError::EndOfInput) => break,
            Err(e) => return Err(e),
        };

        let choice = match answer.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(e) => {
                debug!("[MENU] {}", e);
                writeln!(console.out(), "Please choose 1-4")?;
                continue;
            }
        };

        if choice == MenuChoice::Exit {
            break;
        }

        match dispatch(console, choice, catalog, config) {
            Ok(()) => {}
            Err(ReportError::EndOfInput) => break,
            Err(e) => return Err(e),
        }
    }

    writeln!(console.out(), "{}", FAREWELL)?;
    console.out().flush()?;
    Ok(())
}
