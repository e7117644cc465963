use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

const BASIC_REQUEST: &str = r#"
type: request
request:
  method: GET
  endpoint: https://api.example.com/users
  auth:
    authType: basic
    username: alice
    password: secret
"#;

const INHERITED_DIGEST_REQUEST: &str = r#"
type: request
request:
  method: GET
  endpoint: https://api.example.com/users
  auth:
    authType: inherit
inheritedProperties:
  auth:
    parentID: coll-1
    parentName: Users API
    inheritedAuth:
      authType: digest
      username: alice
"#;

const INHERITING_EXAMPLE_RESPONSE: &str = r#"
type: example-response
request:
  method: GET
  endpoint: https://api.example.com/users
  auth:
    authType: inherit
"#;

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write file");
    path
}

fn write_config(dir: &Path, default_transport: &str) -> PathBuf {
    write_file(
        dir,
        "config.yaml",
        &format!("platform:\n  default_transport: {default_transport}\n  agent_transport: agent\n"),
    )
}

fn reqinspect(config: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("reqinspect"));
    cmd.arg("--config")
        .arg(config)
        .env_remove("REQINSPECT_CONFIG")
        .env_remove("REQINSPECT_FORMAT")
        .env_remove("REQINSPECT_TRANSPORT")
        .env_remove("REQINSPECT_DEBUG");
    cmd
}

/// Run `inspect --format json` and return the `data` array.
fn inspect_json(config: &Path, request: &Path, transport: &str) -> Vec<serde_json::Value> {
    let assert = reqinspect(config)
        .arg("--format")
        .arg("json")
        .arg("--transport")
        .arg(transport)
        .arg("inspect")
        .arg(request)
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    value["data"].as_array().cloned().expect("data is an array")
}

#[test]
fn basic_auth_has_no_findings_on_any_transport() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", BASIC_REQUEST);

    for transport in ["browser", "proxy", "extension", "agent"] {
        assert!(inspect_json(&config, &request, transport).is_empty());
    }

    Ok(())
}

#[test]
fn inherit_on_example_response_has_no_findings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "example.yaml", INHERITING_EXAMPLE_RESPONSE);

    assert!(inspect_json(&config, &request, "browser").is_empty());

    Ok(())
}

#[test]
fn inherited_digest_on_browser_warns_at_url() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", INHERITED_DIGEST_REQUEST);

    let data = inspect_json(&config, &request, "browser");

    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], "url");
    assert_eq!(data[0]["severity"], "warning");
    assert_eq!(data[0]["locations"]["type"], "url");
    assert!(data[0]["text"].as_str().unwrap().contains("Digest"));
    assert!(data[0]["doc"]["link"].as_str().unwrap().starts_with("https://"));

    Ok(())
}

#[test]
fn inherited_digest_on_agent_has_no_findings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", INHERITED_DIGEST_REQUEST);

    assert!(inspect_json(&config, &request, "agent").is_empty());

    Ok(())
}

#[test]
fn digest_on_native_platform_has_no_findings() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "native");
    let request = write_file(temp.path(), "req.yaml", INHERITED_DIGEST_REQUEST);

    assert!(inspect_json(&config, &request, "native").is_empty());

    Ok(())
}

#[test]
fn json_request_files_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(
        temp.path(),
        "req.json",
        r#"{"type":"request","request":{"endpoint":"https://x.example.com","auth":{"authType":"digest"}}}"#,
    );

    assert_eq!(inspect_json(&config, &request, "browser").len(), 1);

    Ok(())
}

#[test]
fn fail_on_warning_exits_with_status_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", INHERITED_DIGEST_REQUEST);

    reqinspect(&config)
        .arg("--transport")
        .arg("browser")
        .arg("inspect")
        .arg(&request)
        .arg("--fail-on")
        .arg("warning")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at or above warning"));

    reqinspect(&config)
        .arg("--transport")
        .arg("browser")
        .arg("inspect")
        .arg(&request)
        .arg("--fail-on")
        .arg("error")
        .assert()
        .success();

    Ok(())
}

#[test]
fn pretty_output_reports_clean_request() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", BASIC_REQUEST);

    reqinspect(&config)
        .arg("inspect")
        .arg(&request)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found."))
        .stdout(predicate::str::contains("transport: browser"));

    Ok(())
}

#[test]
fn pretty_output_shows_inherited_auth_and_finding() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", INHERITED_DIGEST_REQUEST);

    reqinspect(&config)
        .arg("inspect")
        .arg(&request)
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("auth: digest (inherited)"))
        .stdout(predicate::str::contains("[url]"))
        .stdout(predicate::str::contains("highest severity: warning"));

    Ok(())
}

#[test]
fn missing_request_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");

    reqinspect(&config)
        .arg("inspect")
        .arg(temp.path().join("absent.yaml"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Request file not found"));

    Ok(())
}

#[test]
fn unknown_transport_override_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", BASIC_REQUEST);

    reqinspect(&config)
        .arg("--transport")
        .arg("teleport")
        .arg("inspect")
        .arg(&request)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown transport 'teleport'"));

    Ok(())
}

#[test]
fn inspector_list_is_in_registration_order() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");

    let assert = reqinspect(&config)
        .arg("--format")
        .arg("json")
        .arg("inspector")
        .arg("list")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let ids: Vec<&str> = value["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_str().unwrap())
        .collect();

    assert_eq!(ids, vec!["authorization", "header"]);

    Ok(())
}

#[test]
fn transport_set_persists_to_config() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");
    let request = write_file(temp.path(), "req.yaml", INHERITED_DIGEST_REQUEST);

    reqinspect(&config)
        .arg("transport")
        .arg("set")
        .arg("agent")
        .assert()
        .success();

    let saved = fs::read_to_string(&config)?;
    assert!(saved.contains("current: agent"));

    // No --transport override: the saved selection applies
    let assert = reqinspect(&config)
        .arg("--format")
        .arg("json")
        .arg("inspect")
        .arg(&request)
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("\"data\": []"));

    Ok(())
}

#[test]
fn transport_set_rejects_unknown_id() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "native");

    reqinspect(&config)
        .arg("transport")
        .arg("set")
        .arg("browser")
        .assert()
        .failure();

    let saved = fs::read_to_string(&config)?;
    assert!(!saved.contains("current"));

    Ok(())
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = write_config(temp.path(), "browser");

    let assert = reqinspect(&config).arg("status").assert().success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config.to_string_lossy().to_string()));
    assert!(stdout.contains("Active transport: browser"));
    assert!(stdout.contains("2 inspector(s) registered"));

    Ok(())
}

#[test]
fn status_without_config_uses_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config = temp.path().join("missing.yaml");

    reqinspect(&config)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not created, using defaults"));

    Ok(())
}

#[test]
fn version_prints_package_version() {
    Command::new(assert_cmd::cargo::cargo_bin!("reqinspect"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
