use super::{apply_config, load_config, load_config_file, resolve_run_config, types::ConfigFile};
use clap::Parser;
use std::time::Duration;
use tempfile::tempdir;

use crate::args::{RunCount, TesterArgs};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

fn parse_args(argv: &[&str]) -> AppResult<TesterArgs> {
    TesterArgs::try_parse_from(argv)
        .map_err(|err| AppError::config(format!("Expected parse success: {}", err)))
}

#[test]
fn parse_toml_config() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("stressi.toml");
    let content = r#"
url = "http://localhost:3000"
method = "post"
users = 5
reps = -1
verbose = true
user_agent = "stressi-config"
timeout = 750

[headers]
x-api-key = "secret"
accept = "application/json"
"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.url.as_deref() != Some("http://localhost:3000") {
        return Err(AppError::config("Unexpected url"));
    }
    if config.users != Some(RunCount::Bounded(5)) {
        return Err(AppError::config("Unexpected users"));
    }
    if config.reps != Some(RunCount::Unbounded) {
        return Err(AppError::config("Expected unbounded reps"));
    }
    if config.timeout != Some(750) {
        return Err(AppError::config("Unexpected timeout"));
    }
    let headers = config
        .headers
        .ok_or_else(|| AppError::config("Expected headers"))?;
    if headers.get("x-api-key").map(String::as_str) != Some("secret") || headers.len() != 2 {
        return Err(AppError::config("Unexpected headers"));
    }
    Ok(())
}

#[test]
fn parse_json_config_with_aliases() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("stressi.json");
    let content = r#"{
  "url": "https://example.com",
  "concurrent_users": 3,
  "repetitions": 0
}"#;
    std::fs::write(&path, content)?;

    let config = load_config_file(&path)?;
    if config.users != Some(RunCount::Bounded(3)) || config.reps != Some(RunCount::Bounded(0)) {
        return Err(AppError::config("Unexpected counts from aliases"));
    }
    Ok(())
}

#[test]
fn config_rejects_negative_counts_other_than_minus_one() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("stressi.toml");
    std::fs::write(&path, "url = \"http://localhost\"\nusers = -5\n")?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::ParseToml { .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected parse failure")),
    }
}

#[test]
fn config_rejects_unknown_extension() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("stressi.yaml");
    std::fs::write(&path, "url: http://localhost")?;

    match load_config_file(&path) {
        Err(AppError::Config(ConfigError::UnsupportedExtension { ext })) if ext == "yaml" => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected extension error")),
    }
}

#[test]
fn load_config_explicit_missing_path_errors() -> AppResult<()> {
    let dir = tempdir()?;
    let path = dir.path().join("missing.toml");
    let path_str = path.to_string_lossy().into_owned();
    match load_config(Some(&path_str)) {
        Err(AppError::Config(ConfigError::ReadConfig { .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected read error")),
    }
}

#[test]
fn cli_values_take_precedence_over_config() -> AppResult<()> {
    let mut args = parse_args(&["stressi", "-u", "http://cli.local", "-s", "2"])?;
    let config = ConfigFile {
        url: Some("http://config.local".to_owned()),
        method: Some("put".to_owned()),
        users: Some(RunCount::Bounded(50)),
        reps: Some(RunCount::Bounded(3)),
        verbose: Some(true),
        timeout: Some(100),
        ..ConfigFile::default()
    };
    apply_config(&mut args, config)?;

    if args.url.as_deref() != Some("http://cli.local") {
        return Err(AppError::config("CLI url should win"));
    }
    if args.users != Some(RunCount::Bounded(2)) {
        return Err(AppError::config("CLI users should win"));
    }
    if args.repetitions != Some(RunCount::Bounded(3)) {
        return Err(AppError::config("Config reps should fill the gap"));
    }
    if args.method != Some(reqwest::Method::PUT) || !args.verbose || args.timeout_ms != Some(100)
    {
        return Err(AppError::config("Config values should fill the gaps"));
    }
    Ok(())
}

#[test]
fn apply_config_rejects_invalid_method() -> AppResult<()> {
    let mut args = parse_args(&["stressi"])?;
    let config = ConfigFile {
        method: Some("NOT VALID".to_owned()),
        ..ConfigFile::default()
    };
    match apply_config(&mut args, config) {
        Err(AppError::Config(ConfigError::InvalidField { field: "method", .. })) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(()) => Err(AppError::config("Expected invalid method error")),
    }
}

#[test]
fn resolve_applies_defaults() -> AppResult<()> {
    let args = parse_args(&["stressi", "-u", "http://localhost:9000/ping"])?;
    let config = resolve_run_config(&args)?;

    if config.method != reqwest::Method::GET {
        return Err(AppError::config("Expected default GET"));
    }
    if config.users.get() != 10 || config.repetitions.get() != 10 {
        return Err(AppError::config("Expected default 10/10 counts"));
    }
    if config.total_requests() != 100 {
        return Err(AppError::config("Expected 100 total requests"));
    }
    if config.timeout.is_some() || config.user_agent.is_some() || config.headers.is_some() {
        return Err(AppError::config("Expected optional settings to be unset"));
    }
    Ok(())
}

#[test]
fn resolve_expands_unbounded_counts() -> AppResult<()> {
    let args = parse_args(&[
        "stressi", "-u", "http://localhost", "-s", "-1", "-r", "2", "-t", "30",
    ])?;
    let config = resolve_run_config(&args)?;

    if config.users.get() != i64::MAX.unsigned_abs() {
        return Err(AppError::config("Expected users to resolve to i64::MAX"));
    }
    if config.total_requests() != u128::from(i64::MAX.unsigned_abs()).saturating_mul(2) {
        return Err(AppError::config("Unexpected total for unbounded users"));
    }
    if config.timeout != Some(Duration::from_millis(30)) {
        return Err(AppError::config("Unexpected timeout"));
    }
    Ok(())
}

#[test]
fn resolve_requires_url() -> AppResult<()> {
    let args = parse_args(&["stressi", "-s", "1"])?;
    match resolve_run_config(&args) {
        Err(AppError::Validation(ValidationError::MissingUrl)) => Ok(()),
        Err(err) => Err(AppError::config(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::config("Expected missing url error")),
    }
}

#[test]
fn resolve_rejects_invalid_urls() -> AppResult<()> {
    for url in ["not a url", "ftp://example.com/file", "   "] {
        let args = parse_args(&["stressi", "-u", url])?;
        if resolve_run_config(&args).is_ok() {
            return Err(AppError::config(format!("Expected '{}' to be rejected", url)));
        }
    }
    Ok(())
}
