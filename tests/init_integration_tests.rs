#![allow(deprecated)] // cargo_bin deprecation - still works fine

mod common;

use assert_cmd::Command;
use common::TestFixture;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("a11y-guard").expect("binary should exist")
}

#[test]
fn init_creates_the_default_config() {
    let fixture = TestFixture::new();

    cmd()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .a11y-guard.toml"));

    let content = std::fs::read_to_string(fixture.path().join(".a11y-guard.toml")).unwrap();
    assert!(content.contains("# a11y-guard configuration"));
    assert!(content.contains("rules"));
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let fixture = TestFixture::new();
    fixture.create_config("target = \"src\"\n");

    cmd()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    let content = std::fs::read_to_string(fixture.path().join(".a11y-guard.toml")).unwrap();
    assert_eq!(content, "target = \"src\"\n");
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("target = \"src\"\n");

    cmd()
        .current_dir(fixture.path())
        .arg("init")
        .arg("--force")
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".a11y-guard.toml")).unwrap();
    assert!(content.contains("# a11y-guard configuration"));
}

#[test]
fn init_output_flag_picks_the_path() {
    let fixture = TestFixture::new();
    let path = fixture.path().join("custom.toml");

    cmd()
        .arg("init")
        .arg("--output")
        .arg(&path)
        .assert()
        .success();

    assert!(path.exists());
}

#[test]
fn generated_config_is_loadable() {
    let fixture = TestFixture::new();

    cmd()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success();

    // The freshly generated config must drive a real audit.
    cmd()
        .current_dir(fixture.path())
        .arg("audit")
        .assert()
        .success();
}
