use anyhow::Result;
use std::io::Cursor;
use flight_plan_assistant::aircraft::Catalog;
use flight_plan_assistant::config::PlannerConfig;
use flight_plan_assistant::planner::{run_comparison, run_flight_plan, Console, InputField, ReportError};

fn scripted(input: &str) -> Console<Cursor<String>, Vec<u8>> {
    Console::new(Cursor::new(input.to_string()), Vec::new())
}

fn transcript(console: Console<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_c172_still_air_plan() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let config = PlannerConfig::default();
    let mut console = scripted("c172\n300\n0\n6.50\n");

    let summary = run_flight_plan(&mut console, &catalog, &config)?;
    let duration = summary.time.unwrap();
    assert_eq!((duration.hours, duration.minutes), (2, 30));

    let fuel = summary.fuel.as_ref().unwrap();
    assert!((fuel.fuel_needed - 29.75).abs() < 1e-9);
    assert!(fuel.sufficiency.ok);
    assert!((fuel.cost - 193.375).abs() < 1e-9);

    let output = transcript(console);
    println!("{}", output);
    assert!(output.contains("  C172: Cessna 172"));
    assert!(output.contains("Selected: Cessna 172"));
    assert!(output.contains("Flight Time: 2 hours 30 minutes"));
    assert!(output.contains("Fuel Check: Fuel OK:"));
    assert!(output.contains("Normal wind conditions"));

    Ok(())
}

#[test]
fn test_headwind_too_strong_degrades_report() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("C172\n300\n130\n6.50\n");

    let summary = run_flight_plan(&mut console, &catalog, &PlannerConfig::default())?;
    assert!(summary.time.is_err());
    assert!(summary.fuel.is_none());
    assert_eq!(summary.cost(), 0.0);

    let output = transcript(console);
    assert!(output.contains("Headwind too strong!"));
    assert!(output.contains("Fuel Required: N/A"));
    assert!(output.contains("Estimated Cost: $0.00"));
    assert!(output.contains("Strong headwind - consider delaying if possible"));

    Ok(())
}

#[test]
fn test_zero_distance_burns_only_reserve() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("SR22\n0\n0\n7\n");

    let summary = run_flight_plan(&mut console, &catalog, &PlannerConfig::default())?;
    let duration = summary.time.unwrap();
    assert_eq!((duration.hours, duration.minutes), (0, 0));
    assert!((summary.fuel.unwrap().fuel_needed - 15.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_unknown_aircraft_stops_prompting() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("XYZ\n300\n0\n6.50\n");

    let err = run_flight_plan(&mut console, &catalog, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::UnknownAircraft(ref code) if code == "XYZ"));
    assert!(err.to_string().contains("not found"));

    let output = transcript(console);
    assert!(!output.contains("Enter distance"));

    Ok(())
}

#[test]
fn test_bad_number_names_the_field() -> Result<()> {
    let catalog = Catalog::builtin()?;

    let mut console = scripted("PA28\n300\nstrong\n6.50\n");
    let err = run_flight_plan(&mut console, &catalog, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::InvalidNumber { field: InputField::Headwind, .. }));
    assert!(!transcript(console).contains("FLIGHT PLAN SUMMARY"));

    let mut console = scripted("PA28\n-20\n0\n6.50\n");
    let err = run_flight_plan(&mut console, &catalog, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::OutOfRange { field: InputField::Distance, .. }));

    Ok(())
}

#[test]
fn test_huge_distance_time_and_fuel_agree() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("C172\n1000000000000\n0\n6.50\n");

    let summary = run_flight_plan(&mut console, &catalog, &PlannerConfig::default())?;
    let duration = summary.time.unwrap();
    assert_eq!(duration.hours, 8_333_333_333);

    let fuel = summary.fuel.as_ref().unwrap();
    let expected = (duration.as_hours() + 1.0) * 8.5;
    assert!((fuel.fuel_needed - expected).abs() < 1.0);

    let output = transcript(console);
    assert!(output.contains("Flight Time: 8333333333 hours"));
    Ok(())
}

#[test]
fn test_unplannable_distance_degrades_report() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("C172\n1e18\n0\n6.50\n");

    let summary = run_flight_plan(&mut console, &catalog, &PlannerConfig::default())?;
    assert!(summary.time.is_err());
    assert!(summary.fuel.is_none());

    let output = transcript(console);
    assert!(output.contains("Flight Time: Error: Flight time too long to plan"));
    assert!(output.contains("Fuel Required: N/A"));
    Ok(())
}

#[test]
fn test_fuel_warning_on_long_trip() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("pa28\n600\n0\n6\n");

    let summary = run_flight_plan(&mut console, &catalog, &PlannerConfig::default())?;
    let fuel = summary.fuel.unwrap();
    assert!(!fuel.sufficiency.ok);
    assert!(fuel.sufficiency.message.starts_with("Fuel warning:"));

    Ok(())
}

#[test]
fn test_comparison_table() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("300\n");

    let rows = run_comparison(&mut console, &catalog, &PlannerConfig::default())?;
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.estimate.is_ok()));

    let output = transcript(console);
    println!("{}", output);
    assert!(output.contains("Comparing aircraft for 300 NM trip:"));
    assert!(output.contains("Cessna 172   |  2h30 |"));
    assert!(output.contains("Piper Cherok |"));
    assert!(output.contains("Cirrus SR22  |"));

    Ok(())
}

#[test]
fn test_comparison_rejects_text() -> Result<()> {
    let catalog = Catalog::builtin()?;
    let mut console = scripted("far\n");

    let err = run_comparison(&mut console, &catalog, &PlannerConfig::default()).unwrap_err();
    assert!(matches!(err, ReportError::InvalidNumber { field: InputField::Distance, .. }));

    Ok(())
}
