//! CLI tests: exit codes and output streams of the depviz binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn depviz() -> Command {
    let mut cmd = Command::cargo_bin("depviz").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.xml");
    fs::write(&path, body).unwrap();
    path
}

fn config_xml(package_name: &str, repository: &str, mode: &str) -> String {
    format!(
        "<root><package_name>{}</package_name><repository>{}</repository><mode>{}</mode></root>",
        package_name, repository, mode
    )
}

#[test]
fn lists_local_dependencies() {
    let repo = TempDir::new().unwrap();
    fs::write(
        repo.path().join("Cargo.toml"),
        "[package]\nname = \"demo\"\n\n[dependencies]\nfoo = \"1.0\"\nbar = \"2.0\"\n",
    )
    .unwrap();
    let config = write_config(
        repo.path(),
        &config_xml("demo", repo.path().to_str().unwrap(), "local"),
    );

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("Found dependencies in file:\n  - foo\n  - bar\n");
}

#[test]
fn lists_remote_dependencies() {
    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/Cargo.toml")
        .with_status(200)
        .with_body("[dependencies]\nserde = \"1\"\n")
        .create();

    let dir = TempDir::new().unwrap();
    let url = format!("{}/Cargo.toml", server.url());
    let config = write_config(dir.path(), &config_xml("demo", &url, "remote"));

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("  - serde"));
}

#[test]
fn nonexistent_config_fails() {
    let dir = TempDir::new().unwrap();

    depviz()
        .arg("--config")
        .arg(dir.path().join("nonexistent_config.xml"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn missing_repository_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "<root><package_name>demo</package_name><mode>local</mode></root>",
    );

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("<repository>"));
}

#[test]
fn blank_package_name_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &config_xml("   ", "/r", "local"));

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("<package_name> is empty"));
}

#[test]
fn malformed_xml_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        dir.path(),
        "<root><package_name>demo</package_name><repository>/r</repository><mode>local</root>",
    );

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid XML"));
}

#[test]
fn unsupported_mode_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), &config_xml("demo", "/r", "svn"));

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unsupported mode 'svn'"));
}

#[test]
fn missing_local_manifest_fails() {
    let repo = TempDir::new().unwrap();
    let config = write_config(
        repo.path(),
        &config_xml("demo", repo.path().to_str().unwrap(), "local"),
    );

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Manifest not found"));
}

#[test]
fn remote_fetch_failure_fails() {
    let mut server = mockito::Server::new();
    let _m = server.mock("GET", "/Cargo.toml").with_status(500).create();

    let dir = TempDir::new().unwrap();
    let url = format!("{}/Cargo.toml", server.url());
    let config = write_config(dir.path(), &config_xml("demo", &url, "remote"));

    depviz()
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to fetch manifest"));
}

#[test]
fn config_flag_is_required() {
    depviz().assert().failure().stderr(predicate::str::contains("--config"));
}
