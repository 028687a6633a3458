use ride_core::catalog::{PREMIUM, STANDARD};
use ride_core::fare::LinearFare;
use ride_core::ledger::Ledger;
use ride_core::scenario::{build_scenario, ScenarioParams};
use ride_reports::{export_report_to_json, export_rides_to_csv, summarize_ledger};
use tempfile::tempdir;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn scenario_report_totals_agree() {
    let ledger = Ledger::new();
    build_scenario(
        &ledger,
        ScenarioParams::default().with_seed(5).with_counts(8, 12, 300),
    )
    .expect("scenario");

    let report = summarize_ledger(&ledger).expect("report");
    assert_eq!(report.counts.rides, 300);
    assert_eq!(report.drivers.len(), 8);
    assert_eq!(report.riders.len(), 12);

    let by_category: f64 = report.categories.iter().map(|c| c.revenue).sum();
    assert!(approx_eq(by_category, report.total_fares));

    let driver_rides: usize = report.drivers.iter().map(|d| d.rides).sum();
    assert_eq!(driver_rides, report.counts.rides_with_driver);

    let rider_rides: usize = report.riders.iter().map(|r| r.rides).sum();
    assert_eq!(rider_rides, report.counts.rides_with_rider);
    let spend: f64 = report.riders.iter().map(|r| r.total_spend).sum();
    assert!(spend <= report.total_fares + 1e-6);
}

#[test]
fn custom_category_appears_in_report() {
    let ledger = Ledger::new();
    ledger
        .register_category("pooled", LinearFare::new(0.0, 0.5).expect("pooled rule"))
        .expect("register");
    ledger.submit_ride("A", "B", 10.0, "pooled").expect("pooled");
    ledger.submit_ride("A", "B", 10.0, STANDARD).expect("standard");

    let report = summarize_ledger(&ledger).expect("report");
    let names: Vec<&str> = report
        .categories
        .iter()
        .map(|c| c.category.as_str())
        .collect();
    assert_eq!(names, vec![STANDARD, PREMIUM, "pooled"]);
    assert_eq!(report.categories[2].revenue, 5.0);
    assert_eq!(report.categories[1].rides, 0);
    assert_eq!(report.total_fares, 20.0);
}

#[test]
fn exports_round_out_a_scenario() {
    let ledger = Ledger::new();
    build_scenario(
        &ledger,
        ScenarioParams::default().with_seed(9).with_counts(3, 3, 40),
    )
    .expect("scenario");
    let report = summarize_ledger(&ledger).expect("report");

    let dir = tempdir().expect("tempdir");
    export_rides_to_csv(&ledger.query().rides(), dir.path().join("rides.csv")).expect("csv");
    export_report_to_json(&report, dir.path().join("report.json")).expect("json");

    let csv = std::fs::read_to_string(dir.path().join("rides.csv")).expect("read csv");
    assert_eq!(csv.lines().count(), 41);

    let json = std::fs::read_to_string(dir.path().join("report.json")).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value["counts"]["rides"], 40);
    assert_eq!(value["drivers"].as_array().map(Vec::len), Some(3));
}

#[test]
fn empty_ledger_reports_zeros() {
    let report = summarize_ledger(&Ledger::new()).expect("report");
    assert_eq!(report.total_fares, 0.0);
    assert!(report.drivers.is_empty());
    assert_eq!(report.categories.len(), 2);
}
