use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use stepgraph::core::config::ConfigLoader;
use stepgraph::core::ErrorCategory;
use tempfile::TempDir;

fn clear_stepgraph_env() {
    for v in &[
        "STEPGRAPH_INPUT",
        "STEPGRAPH_OUTPUT",
        "STEPGRAPH_QUOTE_PLACEHOLDER",
        "STEPGRAPH_NUMBER_PLACEHOLDER",
        "STEPGRAPH_PAGE_TITLE",
    ] {
        env::remove_var(v);
    }
}

/// Test integration of config loading with environment variables
#[test]
#[serial]
fn test_config_file_sections() {
    clear_stepgraph_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("stepgraph.toml");

    fs::write(
        &config_path,
        r#"
[report]
input = "reports/run.json"
output = "site/steps.html"

[normalize]
quote_placeholder = "<str>"
number_placeholder = "<n>"

[page]
title = "Checkout"
width = 1280
height = 720

[logging]
default_level = "warn"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();

    assert_eq!(config.report.input, PathBuf::from("reports/run.json"));
    assert_eq!(config.report.output, PathBuf::from("site/steps.html"));
    assert_eq!(config.normalize.quote_placeholder, "<str>");
    assert_eq!(config.normalize.number_placeholder, "<n>");
    assert_eq!(config.page.title, "Checkout");
    assert_eq!((config.page.width, config.page.height), (1280, 720));
}

#[test]
#[serial]
fn test_env_overrides_file_values() {
    clear_stepgraph_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("stepgraph.toml");
    fs::write(&config_path, "[page]\ntitle = \"From file\"\n").unwrap();

    env::set_var("STEPGRAPH_PAGE_TITLE", "From env");
    env::set_var("STEPGRAPH_INPUT", "env/report.json");
    env::set_var("STEPGRAPH_NUMBER_PLACEHOLDER", "N");

    let config = ConfigLoader::load(Some(config_path.as_path())).unwrap();
    clear_stepgraph_env();

    assert_eq!(config.page.title, "From env");
    assert_eq!(config.report.input, PathBuf::from("env/report.json"));
    assert_eq!(config.normalize.normalizer().normalize("", "wait 5 s"), "wait N s");
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    clear_stepgraph_env();
    let temp_dir = TempDir::new().unwrap();

    let err = ConfigLoader::load(Some(temp_dir.path().join("absent.toml").as_path())).unwrap_err();
    assert_eq!(err.category, ErrorCategory::IoError);
}

#[test]
#[serial]
fn test_invalid_toml_is_a_parse_error() {
    clear_stepgraph_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("stepgraph.toml");
    fs::write(&config_path, "[page\ntitle = ").unwrap();

    let err = ConfigLoader::load(Some(config_path.as_path())).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ParseError);
}

#[test]
#[serial]
fn test_empty_placeholder_from_env_fails_validation() {
    clear_stepgraph_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("stepgraph.toml");
    fs::write(&config_path, "").unwrap();

    env::set_var("STEPGRAPH_QUOTE_PLACEHOLDER", "");
    let result = ConfigLoader::load(Some(config_path.as_path()));
    clear_stepgraph_env();

    assert_eq!(result.unwrap_err().category, ErrorCategory::ValidationError);
}

#[test]
#[serial]
fn test_zero_width_fails_validation() {
    clear_stepgraph_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("stepgraph.toml");
    fs::write(&config_path, "[page]\nwidth = 0\n").unwrap();

    let err = ConfigLoader::load(Some(config_path.as_path())).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ValidationError);
}
