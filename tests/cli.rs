// Binary-level checks for the diaglab CLI.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs diaglab isolated from the caller's config, catalog and log settings.
fn diaglab(dir: &TempDir, args: &[&str]) -> Result<Output> {
    let config = dir.path().join("config.toml");
    if !config.exists() {
        fs::write(&config, "")?;
    }
    Command::new(env!("CARGO_BIN_EXE_diaglab"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("DIAGLAB_CATALOG")
        .env_remove("DIAGLAB_LOG")
        .env_remove("DIAGLAB_LOG_FORMAT")
        .output()
        .context("failed to execute diaglab")
}

fn ids(json: &Value) -> Vec<&str> {
    json.as_array()
        .expect("list output should be an array")
        .iter()
        .map(|record| record["id"].as_str().expect("id should be a string"))
        .collect()
}

#[test]
fn list_json_filters_by_modality() -> Result<()> {
    let dir = TempDir::new()?;
    let output = diaglab(&dir, &["list", "--modality", "Signal", "--format", "json"])?;
    assert!(output.status.success(), "list should succeed");

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(ids(&json), ["4"]);
    assert_eq!(json[0]["title"], "ECG Arrhythmia Analysis");
    assert_eq!(json[0]["enabled"], false);
    Ok(())
}

#[test]
fn list_query_and_enable_flags() -> Result<()> {
    let dir = TempDir::new()?;
    let output = diaglab(
        &dir,
        &["list", "-q", "status:stable oncology", "-e", "5", "-f", "json"],
    )?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(ids(&json), ["5"]);
    assert_eq!(json[0]["enabled"], true);
    Ok(())
}

#[test]
fn list_table_ends_with_summary_and_notice() -> Result<()> {
    let dir = TempDir::new()?;
    let output = diaglab(&dir, &["list", "--search", "x-ray"])?;
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Chest X-ray"));
    assert!(stdout.contains("Showing 2 of 6 models (0 enabled)"));
    assert!(stdout.contains("Not a substitute for final clinical decisions."));
    Ok(())
}

#[test]
fn show_unknown_id_fails() -> Result<()> {
    let dir = TempDir::new()?;
    let output = diaglab(&dir, &["show", "99"])?;
    assert!(!output.status.success(), "unknown id should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no model with id 99"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn notice_prints_clinical_disclaimer() -> Result<()> {
    let dir = TempDir::new()?;
    let output = diaglab(&dir, &["notice"])?;
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        diaglab::cli::CLINICAL_NOTICE
    );
    Ok(())
}

#[test]
fn catalog_from_config_file() -> Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"models": [{"id": "a1", "title": "Custom", "description": "Only entry",
            "version": "v1", "status": "Beta", "modality": "Imaging"}]}"#,
    )?;
    fs::write(
        dir.path().join("config.toml"),
        format!(
            "catalog_path = {:?}\noutput_format = \"json\"\n",
            catalog.display().to_string()
        ),
    )?;

    let output = diaglab(&dir, &["list"])?;
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(ids(&json), ["a1"]);
    Ok(())
}

#[test]
fn broken_catalog_reports_path() -> Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.path().join("catalog.csv");
    fs::write(&catalog, "id,title")?;

    let output = diaglab(&dir, &["--catalog", catalog.to_str().unwrap(), "list"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("catalog.csv"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn session_reads_commands_from_stdin() -> Result<()> {
    let dir = TempDir::new()?;
    let config = dir.path().join("config.toml");
    fs::write(&config, "")?;
    let mut child = Command::new(env!("CARGO_BIN_EXE_diaglab"))
        .arg("--config")
        .arg(&config)
        .arg("session")
        .env_remove("DIAGLAB_CATALOG")
        .env_remove("DIAGLAB_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn diaglab session")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(b"modality Signal\ntoggle 4\nquit\n")?;
    let output = child.wait_with_output()?;

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("ECG Arrhythmia Analysis"));
    assert!(stdout.contains("4 is now on"));
    Ok(())
}

#[test]
fn enable_keeps_already_enabled_records_on() -> Result<()> {
    let dir = TempDir::new()?;
    let catalog = dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"models": [
            {"id": "a1", "title": "Preloaded", "description": "On from the file",
             "version": "v1", "status": "Stable", "modality": "Imaging", "enabled": true},
            {"id": "b2", "title": "Dormant", "description": "Off from the file",
             "version": "v1", "status": "Beta", "modality": "Signal"}
        ]}"#,
    )?;

    let output = diaglab(
        &dir,
        &[
            "--catalog",
            catalog.to_str().unwrap(),
            "list",
            "--enable",
            "a1",
            "-e",
            "b2",
            "-e",
            "b2",
            "-f",
            "json",
        ],
    )?;
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json[0]["enabled"], true, "pre-enabled record must stay on");
    assert_eq!(json[1]["enabled"], true, "repeated --enable must not cancel out");
    Ok(())
}

#[test]
fn enable_unknown_id_warns() -> Result<()> {
    let dir = TempDir::new()?;
    let output = diaglab(&dir, &["list", "-e", "404", "-f", "json"])?;
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no model with id 404"), "stderr: {stderr}");
    Ok(())
}

#[cfg(unix)]
#[test]
fn broken_default_config_is_reported() -> Result<()> {
    let home = TempDir::new()?;
    let config_dir = home.path().join(".config").join("diaglab");
    fs::create_dir_all(&config_dir)?;
    fs::write(config_dir.join("config.toml"), "output_format = [")?;

    let output = Command::new(env!("CARGO_BIN_EXE_diaglab"))
        .args(["-v", "list"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("DIAGLAB_CONFIG_PATH")
        .env_remove("DIAGLAB_CATALOG")
        .env_remove("DIAGLAB_LOG")
        .env_remove("DIAGLAB_LOG_FORMAT")
        .output()
        .context("failed to execute diaglab")?;

    assert!(output.status.success(), "defaults still apply");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ignoring unreadable config file"),
        "stderr: {stderr}"
    );
    assert!(stderr.contains("config.toml"), "stderr: {stderr}");
    Ok(())
}
