use std::fs;

use assetgen_core::{CurveConfig, CurveFormula, Error, LookupTable, generate_curve};
use tempfile::TempDir;

fn in_dir(dir: &TempDir, mut config: CurveConfig) -> CurveConfig {
    config.output_path = dir.path().join(&config.output_path);
    config
}

#[test]
fn test_d93_file_layout_and_endpoints() {
    let dir = TempDir::new().unwrap();
    let config = in_dir(&dir, CurveConfig::d93());
    generate_curve(&config).unwrap();

    let text = fs::read_to_string(&config.output_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2 + 256);
    assert!(lines[0].starts_with("# "));
    assert_eq!(lines[1], "");
    assert_eq!(lines[2], "0, 0, 0");
    assert_eq!(lines[257], "225, 237, 255");
}

#[test]
fn test_boost_file_rows_are_gray() {
    let dir = TempDir::new().unwrap();
    let config = in_dir(&dir, CurveConfig::boost());
    generate_curve(&config).unwrap();

    let table = LookupTable::load(&config.output_path).unwrap();
    for (i, [r, g, b]) in table.rows().iter().copied().enumerate() {
        assert!(r == g && g == b, "row {i} is not gray: {r}, {g}, {b}");
    }
    assert!(table.is_monotonic());
}

#[test]
fn test_written_rows_match_formula() {
    let dir = TempDir::new().unwrap();
    let config = in_dir(&dir, CurveConfig::d93());
    generate_curve(&config).unwrap();

    let text = fs::read_to_string(&config.output_path).unwrap();
    for (i, line) in text.lines().skip(2).enumerate() {
        let t = (i as f64 / 255.0).powf(1.1091);
        let expected = format!(
            "{}, {}, {}",
            (225.0 * t).round_ties_even(),
            (237.0 * t).round_ties_even(),
            (255.0 * t).round_ties_even()
        );
        assert_eq!(line, expected, "row {i}");
    }
}

#[test]
fn test_rerun_produces_identical_bytes() {
    let dir = TempDir::new().unwrap();
    for config in [CurveConfig::boost(), CurveConfig::d93()] {
        let config = in_dir(&dir, config);
        generate_curve(&config).unwrap();
        let first = fs::read(&config.output_path).unwrap();
        generate_curve(&config).unwrap();
        assert_eq!(first, fs::read(&config.output_path).unwrap());
    }
}

#[test]
fn test_existing_file_is_overwritten() {
    let dir = TempDir::new().unwrap();
    let config = in_dir(&dir, CurveConfig::d93());
    fs::write(&config.output_path, "stale\n".repeat(1000)).unwrap();

    generate_curve(&config).unwrap();
    let text = fs::read_to_string(&config.output_path).unwrap();
    assert_eq!(text.lines().count(), 258);
    assert!(!text.contains("stale"));
}

#[test]
fn test_custom_power_config() {
    let dir = TempDir::new().unwrap();
    let config = CurveConfig::new(
        "linear",
        CurveFormula::Power { exponent: 1.0 },
        [255, 128, 0],
        dir.path().join("linear.txt"),
    );
    let table = generate_curve(&config).unwrap();
    assert_eq!(table.row(255), [255, 128, 0]);
    assert_eq!(table.row(100), [100, 50, 0]);
}

#[test]
fn test_unwritable_output_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let mut config = CurveConfig::d93();
    config.output_path = dir.path().join("missing").join("d93.txt");

    match generate_curve(&config) {
        Err(Error::Io { path, .. }) => assert_eq!(path, config.output_path),
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut config = in_dir(&dir, CurveConfig::boost());
    config.channel_maxima = [256, 255, 255];

    assert!(matches!(generate_curve(&config), Err(Error::InvalidConfig(_))));
    assert!(!config.output_path.exists());
}
