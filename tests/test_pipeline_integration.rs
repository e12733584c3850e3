use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use sitrep::Pipeline;
use sitrep::error::PipelineError;
use sitrep::extract::error::ExtractionError;
use sitrep::extract::traits::HasRows;
use sitrep::extract::{DateOrder, TabularSource};
use sitrep::transform::error::TransformError;
use sitrep::transform::{
    Combine, DerivedScalar, ScalarComponents, derive_scalar, filter_by_category, to_series,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[fixture]
fn assets_path() -> PathBuf {
    let manifest_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_path.join(PathBuf::from(file!()).parent().unwrap().join("assets"))
}

#[fixture]
fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[rstest]
fn test_pipeline_integration(assets_path: PathBuf) {
    let pipeline = Pipeline::try_from(assets_path.join("dashboard.yaml")).unwrap();

    let data = pipeline.refresh().unwrap();

    let confirmed = data.series("Confirmed").unwrap();
    assert_eq!(confirmed.x(), &[date(2020, 4, 8), date(2020, 4, 9), date(2020, 4, 10)]);
    assert_eq!(confirmed.y(), &[1623.0, 1910.0, 2108.0]);

    let imported = data.series("Imported").unwrap();
    assert_eq!(imported.x(), &[date(2020, 2, 1), date(2020, 2, 2), date(2020, 2, 3)]);
    assert_eq!(imported.y(), &[3.0, 1.0, 4.0]);

    let all_cases = data.series("All cases").unwrap();
    assert_eq!(all_cases.len(), 6);
    assert_eq!(all_cases.y().iter().sum::<f64>(), 21.0);

    let active = data.scalar("Active").unwrap();
    assert_eq!(active.current(), 1616.0);
    assert_eq!(active.reference(), Some(1450.0));

    let deaths = data.scalar("Deaths").unwrap();
    assert_eq!(deaths.delta(), Some(1.0));

    assert_eq!(data.panels.len(), 2);
    assert_eq!(data.panels[1].series, vec!["Imported".to_string()]);
}

#[rstest]
fn test_staged_operations(assets_path: PathBuf) {
    let source = TabularSource::load_named(
        "cases_by_type",
        assets_path.join("cases_by_type.csv"),
        "Date",
        DateOrder::DayFirst,
        Some(';'),
    )
    .unwrap();
    assert_eq!(source.height(), 7);

    let imported = filter_by_category(&source, "Type", "Imported").unwrap();
    assert_eq!(imported.height(), 3);
    assert_eq!(source.height(), 7);

    let series = to_series(&imported, "Date", "Value", "Imported").unwrap();
    assert_eq!(series.latest(), Some((date(2020, 2, 3), 4.0)));

    let components = ScalarComponents::new()
        .with("imported", series.latest().unwrap().1)
        .with_reference("imported", series.value_before_latest(1).unwrap());
    let scalar = derive_scalar(&components, Combine::Identity).unwrap();

    assert_eq!(scalar, DerivedScalar::external("imported", 4.0, Some(1.0)));
}

#[rstest]
fn test_missing_value_is_rejected_by_default(assets_path: PathBuf) {
    let source = TabularSource::load_named(
        "cases_by_type",
        assets_path.join("cases_by_type.csv"),
        "Date",
        DateOrder::DayFirst,
        Some(';'),
    )
    .unwrap();

    let result = to_series(&source, "Date", "Value", "All cases");

    assert!(matches!(result, Err(TransformError::MissingValue { row: 6, .. })));
}

#[rstest]
fn test_unreadable_date_fails_the_refresh(temp_dir: TempDir) {
    let csv_path = temp_dir.path().join("cases.csv");
    fs::write(&csv_path, "Date,Type,Value\n01/02/2020,Imported,3\nyesterday,Imported,1\n").unwrap();
    let config_path = temp_dir.path().join("dashboard.json");
    fs::write(
        &config_path,
        format!(
            r#"{{
  "sources": [{{ "name": "cases", "path": "{}", "date_column": "Date" }}],
  "series": [{{ "name": "Imported", "source": "cases", "y_column": "Value" }}]
}}"#,
            csv_path.display()
        ),
    )
    .unwrap();
    let pipeline = Pipeline::try_from(config_path).unwrap();

    let result = pipeline.refresh();

    match result {
        Err(PipelineError::Extraction(ExtractionError::Parse { column, row, raw })) => {
            assert_eq!(column, "Date");
            assert_eq!(row, 1);
            assert_eq!(raw, "yesterday");
        }
        other => panic!("Expected a parse error, got {other:?}"),
    }
}

#[rstest]
fn test_refresh_isolated_reports_broken_source(temp_dir: TempDir, assets_path: PathBuf) {
    let yaml = fs::read_to_string(assets_path.join("dashboard.yaml"))
        .unwrap()
        .replace("tests/assets/cases_by_type.csv", "tests/assets/missing.csv");
    let config_path = temp_dir.path().join("dashboard.yaml");
    fs::write(&config_path, yaml).unwrap();
    let pipeline = Pipeline::try_from(config_path).unwrap();

    let report = pipeline.refresh_isolated();

    let failed: Vec<&str> = report.failures().into_iter().map(|(name, _)| name).collect();
    assert_eq!(failed, vec!["Imported", "All cases"]);

    let data = report.into_partial_data();
    assert_eq!(data.scalar("Active").unwrap().current(), 1616.0);
    assert!(data.panels[1].series.is_empty());
}
