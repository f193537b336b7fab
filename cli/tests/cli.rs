//! End-to-end tests for the waypoint binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A command isolated from any config files and env on the host
fn waypoint(workdir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("waypoint").unwrap();
    cmd.current_dir(workdir.path())
        .env("XDG_CONFIG_HOME", workdir.path().join("xdg"))
        .env_remove("WAYPOINT_ENV")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn resolve_uses_builtin_site() {
    let workdir = TempDir::new().unwrap();
    waypoint(&workdir)
        .args(["resolve", "/", "/admin", "/unknown/x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/ -> View(SignupForm) [Home]"))
        .stdout(predicate::str::contains("/admin -> View(AdminDashboard) [Admin]"))
        .stdout(predicate::str::contains("/unknown/x -> redirect /"));
}

#[test]
fn href_depends_on_profile_and_mode() {
    let workdir = TempDir::new().unwrap();
    waypoint(&workdir)
        .args(["href", "/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/admin -> /#/admin"));

    waypoint(&workdir)
        .env("WAYPOINT_ENV", "production")
        .args(["href", "/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/admin -> /wish-you-were-here-v4/#/admin",
        ));

    waypoint(&workdir)
        .args(["--profile", "production", "--mode", "native", "href", "/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/admin -> /wish-you-were-here-v4/admin",
        ));
}

#[test]
fn walk_restores_saved_scroll() {
    let workdir = TempDir::new().unwrap();
    waypoint(&workdir)
        .args(["walk", "scroll:400", "push:/admin", "back", "forward"])
        .assert()
        .success()
        .stdout(predicate::str::contains("back -> SignupForm at /, scroll top=400"))
        .stdout(predicate::str::contains(
            "forward -> AdminDashboard at /admin, scroll top=0",
        ));
}

#[test]
fn walk_rejects_unknown_steps() {
    let workdir = TempDir::new().unwrap();
    waypoint(&workdir)
        .args(["walk", "teleport:/admin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown step"));
}

#[test]
fn config_file_in_working_directory_is_used() {
    let workdir = TempDir::new().unwrap();
    fs::write(
        workdir.path().join("waypoint.json"),
        r#"{
            "history_mode": "native",
            "routes": [
                { "path": "/", "name": "Home", "component": "SignupForm" },
                { "path": "/dashboard", "name": "Admin", "component": "AdminDashboard" },
                { "path": "/admin", "redirect": "/dashboard" }
            ]
        }"#,
    )
    .unwrap();

    waypoint(&workdir)
        .args(["routes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode: native"))
        .stdout(predicate::str::contains("/admin -> redirect /dashboard"));

    waypoint(&workdir)
        .args(["walk", "push:/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "push:/admin -> AdminDashboard at /dashboard, scroll top=0 (redirected from /admin)",
        ));
}

#[test]
fn invalid_config_is_reported() {
    let workdir = TempDir::new().unwrap();
    fs::write(
        workdir.path().join("waypoint.json"),
        r#"{ "routes": [ { "path": "/admin", "component": "AdminDashboard" } ] }"#,
    )
    .unwrap();

    waypoint(&workdir)
        .args(["routes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not resolve to a view"));
}

#[test]
fn routes_json_round_trips_the_site() {
    let workdir = TempDir::new().unwrap();
    let output = waypoint(&workdir)
        .args(["routes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["profile"], "development");
    assert_eq!(dump["base"], "/");
    assert_eq!(dump["site"]["history_mode"], "hash");
    assert_eq!(dump["site"]["routes"][1]["component"], "AdminDashboard");
    assert_eq!(dump["site"]["routes"][2]["redirect"], "/");

    let site = serde_json::to_string(&dump["site"]).unwrap();
    fs::write(workdir.path().join("waypoint.json"), site).unwrap();
    waypoint(&workdir)
        .args(["resolve", "/admin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/admin -> View(AdminDashboard) [Admin]"));
}

#[test]
fn routes_json_reports_profile_and_base_overrides() {
    let workdir = TempDir::new().unwrap();
    let output = waypoint(&workdir)
        .args(["--profile", "production", "routes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["profile"], "production");
    assert_eq!(dump["base"], "/wish-you-were-here-v4/");

    let output = waypoint(&workdir)
        .args(["--base", "/preview/", "--mode", "native", "routes", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["base"], "/preview/");
    assert_eq!(dump["site"]["history_mode"], "native");
}
