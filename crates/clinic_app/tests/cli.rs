use std::fs;
use std::path::PathBuf;
use std::process::Command;

use clap::error::ErrorKind;
use clap::Parser;
use clinic_app::{prepare, Cli, EnsembleSource};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
    Cli::try_parse_from(std::iter::once("clinic-scraper").chain(args.iter().copied()))
}

#[test]
fn single_year_and_ensemble() {
    let cli = parse(&["--year", "2009", "--ensemble", "Buchholz"]).unwrap();
    assert_eq!(cli.years(), vec![2009]);
    assert_eq!(cli.ensemble.as_deref(), Some("Buchholz"));
    assert!(!cli.discover);
}

#[test]
fn year_range_expands_inclusively() {
    let cli = parse(&["--years", "2015-2017", "--discover"]).unwrap();
    assert_eq!(cli.years(), vec![2015, 2016, 2017]);
    assert!(cli.discover);
}

#[test]
fn year_is_required() {
    let err = parse(&["--ensemble", "USAF"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn ensemble_source_is_required() {
    let err = parse(&["--year", "2019"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn sources_are_mutually_exclusive() {
    let err = parse(&["--year", "2019", "--ensemble", "A", "--discover"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    let err = parse(&["--year", "2019", "--years", "2019-2020", "--discover"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn reversed_range_is_rejected() {
    let err = parse(&["--years", "2023-2015", "--discover"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn huge_range_is_rejected() {
    let err = parse(&["--years", "0-4294967295", "--discover"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn boring_and_chaos_conflict() {
    let err = parse(&["--year", "2019", "--discover", "--boring", "--chaos"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

#[test]
fn prepare_loads_list_file_in_order() {
    let temp = TempDir::new().unwrap();
    let list = temp.path().join("ensembles.txt");
    fs::write(&list, "A\n\n# comment\nB\n").unwrap();

    let cli = parse(&[
        "--years",
        "2020-2021",
        "--list",
        list.to_str().unwrap(),
        "--output",
        "archive",
    ])
    .unwrap();
    let plan = prepare(&cli).unwrap();

    assert_eq!(plan.years, vec![2020, 2021]);
    assert_eq!(
        plan.source,
        EnsembleSource::Names(vec!["A".to_string(), "B".to_string()])
    );
    assert_eq!(plan.config.output_dir, PathBuf::from("archive"));
}

#[test]
fn prepare_fails_on_missing_list_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.txt");
    let cli = parse(&["--year", "2020", "--list", missing.to_str().unwrap()]).unwrap();

    let err = prepare(&cli).unwrap_err();
    assert!(format!("{err:#}").contains("missing.txt"));
}

#[test]
fn prepare_fails_on_bad_base_url() {
    let cli = parse(&["--year", "2020", "--ensemble", "A", "--base-url", "nope"]).unwrap();
    assert!(prepare(&cli).is_err());
}

#[test]
fn prepare_reads_config_file_and_flags_override_it() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("scraper.ron");
    fs::write(
        &config,
        r#"(base_url: "http://mirror.example/pdfs", output_dir: "from_config", candidates: ["X"])"#,
    )
    .unwrap();

    let cli = parse(&[
        "--year",
        "2019",
        "--discover",
        "--config",
        config.to_str().unwrap(),
        "--output",
        "from_flag",
    ])
    .unwrap();
    let plan = prepare(&cli).unwrap();

    assert_eq!(plan.config.base_url, "http://mirror.example/pdfs");
    assert_eq!(plan.config.output_dir, PathBuf::from("from_flag"));
    assert_eq!(plan.source, EnsembleSource::Discover(vec!["X".to_string()]));
}

#[test]
fn prepare_fails_on_missing_config_file() {
    let cli = parse(&[
        "--year",
        "2019",
        "--discover",
        "--config",
        "/definitely/not/here.ron",
    ])
    .unwrap();
    let err = prepare(&cli).unwrap_err();
    assert!(err.to_string().contains("cannot read config file"));
}

#[test]
fn binary_exits_nonzero_on_missing_list_before_any_download() {
    let temp = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_clinic-scraper"))
        .current_dir(temp.path())
        .args(["--year", "2020", "--list", "missing.txt", "--output", "out"])
        // Nothing listens here; a request would show up as a per-job failure instead.
        .args(["--base-url", "http://127.0.0.1:9/pdfs"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot load ensemble list"), "{stderr}");
    assert!(!temp.path().join("out").exists());
}

#[test]
fn binary_reports_usage_error_with_status_two() {
    let temp = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_clinic-scraper"))
        .current_dir(temp.path())
        .args(["--year", "2020"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
