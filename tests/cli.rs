use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn multitech(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("multitech").expect("multitech binary");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    for var in [
        "MULTITECH_OUTPUT_ROOT",
        "MULTITECH_TEMPLATES_DIR",
        "MULTITECH_HEALTH_TIMEOUT",
        "MULTITECH_POLL_INTERVAL",
        "MULTITECH_DOCKER_NETWORK",
        "MULTITECH_SPRING_URL",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_version() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_version_json() {
    let dir = tempdir().unwrap();
    let output = multitech(dir.path()).args(["--json", "version"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "multitech");
    assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help_lists_verbs() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .arg("help")
        .assert()
        .success()
        .stdout(predicate::str::contains("guis:web:<tech>"))
        .stdout(predicate::str::contains("databases:<tech>"));
}

#[test]
fn test_list_all_categories() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Web Technologies"))
        .stdout(predicate::str::contains("guis:mobile:flutter"))
        .stdout(predicate::str::contains("backends:springboot"))
        .stdout(predicate::str::contains("databases:oracleenterprise"));
}

#[test]
fn test_list_one_category_json() {
    let dir = tempdir().unwrap();
    let output = multitech(dir.path()).args(["--json", "list", "database"]).output().unwrap();
    assert!(output.status.success());

    let groups: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let groups = groups.as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["category"], "database");
    let ids: Vec<&str> = groups[0]["technologies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["mariadb", "mongodb", "oracleenterprise", "postgresql"]);
}

#[test]
fn test_list_unknown_category() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["list", "desktop"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown category 'desktop'"));
}

#[test]
fn test_info() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["info", "springboot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Backend Technologies"))
        .stdout(predicate::str::contains("backends:springboot"));

    multitech(dir.path())
        .args(["info", "guis:web:reactjs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ReactJs"));
}

#[test]
fn test_info_unknown_technology() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["info", "ember"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown technology 'ember'"));
}

#[test]
fn test_invalid_name_creates_nothing() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["guis:web:reactjs", "1app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name '1app'"))
        .stderr(predicate::str::contains("multitech help"));

    multitech(dir.path())
        .args(["databases:mongodb", "abc"])
        .assert()
        .code(1);

    multitech(dir.path())
        .args(["backends:expressjs", "my app"])
        .assert()
        .code(1);

    assert!(!dir.path().join("__GEN_PROJECTS").exists());
}

#[test]
fn test_missing_name() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .arg("backends:springboot")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("project name"))
        .stderr(predicate::str::contains("Usage: multitech"))
        .stderr(predicate::str::contains("multitech backends:<tech> <name>"));
    assert!(!dir.path().join("__GEN_PROJECTS").exists());
}

#[test]
fn test_unknown_verb() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["frontends:reactjs", "my-app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown command: frontends:reactjs"));
}

#[test]
fn test_unknown_technology_in_category() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["guis:mobile:reactnative", "my-app"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available: flutter"))
        .stderr(predicate::str::contains("Usage: multitech"));

    multitech(dir.path())
        .args(["create", "my-app", "-c", "web", "-t", "springboot"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown technology 'springboot'"));
}

#[test]
fn test_create_requires_category_and_tech() {
    let dir = tempdir().unwrap();
    multitech(dir.path())
        .args(["create", "my-app"])
        .assert()
        .code(1);
}

#[test]
fn test_json_error_object() {
    let dir = tempdir().unwrap();
    let output = multitech(dir.path())
        .args(["--json", "guis:web:reactjs", "ab"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(value["error"], true);
    assert!(value["message"].as_str().unwrap().contains("Invalid project name"));
}

#[test]
fn test_existing_project_is_refused() {
    let dir = tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("__GEN_PROJECTS/databases/mongodb/erp-db")).unwrap();

    multitech(dir.path())
        .args(["databases:mongodb", "erp-db"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("multitech.toml"), "[docker]\npoll_interval = 0\n").unwrap();

    multitech(dir.path())
        .args(["databases:mongodb", "erp-db"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("poll_interval"));
    assert!(!dir.path().join("__GEN_PROJECTS").exists());
}

#[test]
fn test_info_uses_configured_output_root() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("multitech.toml"), "[output]\nroot = \"generated\"\n").unwrap();

    multitech(dir.path())
        .args(["info", "mongodb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generated/databases/mongodb/<project-name>"));

    let output = multitech(dir.path())
        .args(["--json", "info", "reactjs"])
        .env("MULTITECH_OUTPUT_ROOT", "from-env")
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["output_dir"], "from-env/guis/web/reactjs");
}
