//! End-to-end tests for the `folio` binary.
//!
//! Each test runs the compiled binary against a temporary working directory so
//! the bundled catalog, an external catalog and config errors are all covered.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn folio(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("folio").expect("binary builds");
    cmd.arg("--dir").arg(dir.path()).env("RUST_LOG", "error");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("utf-8 stdout")
}

#[test]
fn ls_lists_bundled_catalog_in_order() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(folio(&dir).arg("ls"));
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines[0], "ID | Date | Name | Technologies | Badges");
    assert!(lines[2].starts_with("payroll-retail-system | "));
    assert_eq!(lines.len(), 2 + 12);
}

#[test]
fn ls_json_is_machine_readable() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(folio(&dir).args(["ls", "--json"]));
    let value: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    let rows = value.as_array().expect("array of rows");
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["id"], "payroll-retail-system");
}

#[test]
fn show_unknown_project_fails() {
    let dir = TempDir::new().unwrap();
    let output = folio(&dir)
        .args(["show", "--project", "missing"])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("Project not found: missing"), "stderr: {stderr}");
}

#[test]
fn classify_prints_one_category_per_tag() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(folio(&dir).args(["classify", "Docker", "MySQL", "Zig"]));
    assert_eq!(
        out,
        "Docker  DevOps & Tools\nMySQL   Database\nZig     Other\n"
    );
}

#[test]
fn configured_catalog_replaces_bundled_one() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".folio")).unwrap();
    fs::write(
        dir.path().join(".folio/config.toml"),
        "[catalog]\npath = \"site/projects.toml\"\n",
    )
    .unwrap();
    fs::create_dir_all(dir.path().join("site")).unwrap();
    fs::write(
        dir.path().join("site/projects.toml"),
        "[[projects]]\nid = \"solo\"\ndate = \"2025\"\nname = \"Solo\"\nrole = \"Dev\"\ndescription = \"Only one\"\n",
    )
    .unwrap();

    let out = stdout_of(folio(&dir).args(["show", "--project", "solo"]));
    assert!(out.starts_with("Solo (solo)\n"));
    assert!(out.contains("Images (3):"));
    assert!(out.contains("View Code: Code Private"));
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".folio")).unwrap();
    fs::write(
        dir.path().join(".folio/config.toml"),
        "[carousel]\ntransition_ms = 99999\n",
    )
    .unwrap();

    folio(&dir).arg("ls").assert().failure();
}

#[test]
fn init_config_writes_keybindings_file() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("keys/config.toml");

    folio(&dir)
        .arg("init-config")
        .arg("--output")
        .arg(&target)
        .assert()
        .success();
    let content = fs::read_to_string(&target).unwrap();
    assert!(content.contains("[tui.keybindings.project_modal]"));

    folio(&dir)
        .arg("init-config")
        .arg("--output")
        .arg(&target)
        .arg("--force")
        .assert()
        .success();
}
