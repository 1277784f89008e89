//! Integration tests for the apply command
//!
//! The external document-transform engine is stubbed with a shell script
//! that records its argv, so the tests assert the exact delegation
//! contract: `<engine> <original> <transform> <output>` with the
//! destination passed as both original and output.

mod common;

use assert_cmd::Command;
use common::{TestProject, WELL_FORMED_CONFIG};
use predicates::prelude::*;

#[allow(deprecated)]
fn xdt_cmd() -> Command {
    Command::cargo_bin("xdt-apply").unwrap()
}

#[cfg(unix)]
#[test]
fn test_apply_invokes_engine_once_in_place() {
    let project = TestProject::new();
    let proj_file = project.project_file("csproj");
    let transform = project.write_file("App.Dev.config", WELL_FORMED_CONFIG);
    let destination = project.write_file("App.config", WELL_FORMED_CONFIG);
    let engine = project.stub_engine("engine.log");

    xdt_cmd()
        .arg("apply")
        .arg(&transform)
        .arg("--project")
        .arg(&proj_file)
        .arg("--engine")
        .arg(&engine)
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied"));

    let log = project.read_file("engine.log");
    let calls: Vec<&str> = log.lines().collect();
    assert_eq!(calls.len(), 1, "engine must be invoked exactly once");
    assert_eq!(
        calls[0],
        format!(
            "{}|{}|{}",
            destination.display(),
            transform.display(),
            destination.display()
        )
    );
}

#[cfg(unix)]
#[test]
fn test_apply_refuses_ineligible_selection() {
    let project = TestProject::new();
    let proj_file = project.project_file("txtproj");
    let transform = project.write_file("App.Dev.config", WELL_FORMED_CONFIG);
    project.write_file("App.config", WELL_FORMED_CONFIG);
    let engine = project.stub_engine("engine.log");

    xdt_cmd()
        .arg("apply")
        .arg(&transform)
        .arg("--project")
        .arg(&proj_file)
        .arg("--engine")
        .arg(&engine)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not applicable"));

    assert!(
        !project.path.join("engine.log").exists(),
        "engine must not run for an ineligible selection"
    );
}

#[cfg(unix)]
#[test]
fn test_apply_refuses_missing_destination() {
    let project = TestProject::new();
    let proj_file = project.project_file("csproj");
    let transform = project.write_file("Web.Staging.config", WELL_FORMED_CONFIG);
    let engine = project.stub_engine("engine.log");

    xdt_cmd()
        .arg("apply")
        .arg(&transform)
        .arg("--project")
        .arg(&proj_file)
        .arg("--engine")
        .arg(&engine)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not applicable"));
}

#[cfg(unix)]
#[test]
fn test_apply_surfaces_engine_failure() {
    let project = TestProject::new();
    let proj_file = project.project_file("csproj");
    let transform = project.write_file("App.Dev.config", WELL_FORMED_CONFIG);
    project.write_file("App.config", WELL_FORMED_CONFIG);

    xdt_cmd()
        .arg("apply")
        .arg(&transform)
        .arg("--project")
        .arg(&proj_file)
        .arg("--engine")
        .arg("false")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed"));
}

#[test]
fn test_apply_requires_engine_argument() {
    let project = TestProject::new();
    let proj_file = project.project_file("csproj");
    let transform = project.write_file("App.Dev.config", WELL_FORMED_CONFIG);

    xdt_cmd()
        .arg("apply")
        .arg(&transform)
        .arg("--project")
        .arg(&proj_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--engine"));
}

#[cfg(unix)]
#[test]
fn test_apply_accepts_engine_from_env() {
    let project = TestProject::new();
    let proj_file = project.project_file("csproj");
    let transform = project.write_file("App.Dev.config", WELL_FORMED_CONFIG);
    project.write_file("App.config", WELL_FORMED_CONFIG);
    let engine = project.stub_engine("engine.log");

    xdt_cmd()
        .env("XDT_APPLY_ENGINE", &engine)
        .arg("apply")
        .arg(&transform)
        .arg("--project")
        .arg(&proj_file)
        .assert()
        .success();

    let log = project.read_file("engine.log");
    assert_eq!(log.lines().count(), 1);
}
