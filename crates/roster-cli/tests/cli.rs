use assert_cmd::cargo::cargo_bin_cmd;
use httpmock::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

const SAMPLE_RAW: &str = r#"[{"id":1,"name":" Leanne Graham ","email":"Sincere@april.biz","address":{"city":"Gwenborough","geo":{"lat":"-37.3159","lng":"81.1496"}},"company":{"name":"Romaguera-Crona"}}]"#;

fn run_in(dir: &Path, args: &[&str]) -> Output {
    cargo_bin_cmd!("roster")
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("config-home"))
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run command")
}

fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = run_in(dir, args);
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).expect("read file")).expect("parse json")
}

fn expected_sample_clean() -> Value {
    json!([{
        "id": 1,
        "name": "Leanne Graham",
        "username": null,
        "email": "sincere@april.biz",
        "city": "Gwenborough",
        "zipcode": null,
        "lat": -37.3159,
        "lng": 81.1496,
        "company_name": "Romaguera-Crona",
        "website": null
    }])
}

#[test]
fn normalize_uses_default_paths() {
    let temp = TempDir::new().expect("temp dir");
    fs::create_dir_all(temp.path().join("out")).expect("mkdir");
    fs::write(temp.path().join("out/users_raw.json"), SAMPLE_RAW).expect("write raw");

    let stdout = run_ok(temp.path(), &["normalize"]);

    assert!(stdout.contains("Normalized 1 of 1 users"));
    let clean_path = temp.path().join("out/users_clean.json");
    assert_eq!(read_json(&clean_path), expected_sample_clean());
    let text = fs::read_to_string(&clean_path).expect("read clean");
    assert!(text.starts_with("[\n  {\n    \"id\": 1,"));
}

#[test]
fn normalize_missing_id_aborts_without_output() {
    let temp = TempDir::new().expect("temp dir");
    let raw = temp.path().join("raw.json");
    let clean = temp.path().join("clean").join("users.json");
    fs::write(&raw, r#"[{"id": 1, "name": "Leanne"}, {"name": "Ervin Howell"}]"#)
        .expect("write raw");

    let output = run_in(
        temp.path(),
        &[
            "normalize",
            "--input",
            raw.to_str().expect("raw path"),
            "--out",
            clean.to_str().expect("clean path"),
        ],
    );

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("error:"), "stderr: {stderr}");
    assert!(!clean.exists());
}

#[test]
fn normalize_verbose_error_names_record() {
    let temp = TempDir::new().expect("temp dir");
    let raw = temp.path().join("raw.json");
    fs::write(&raw, r#"[{"name": "Ervin Howell"}]"#).expect("write raw");

    let output = run_in(
        temp.path(),
        &["-v", "normalize", "--input", raw.to_str().expect("raw path")],
    );

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(
        stderr.contains("id missing for record Ervin Howell"),
        "stderr: {stderr}"
    );
}

#[test]
fn normalize_skip_invalid_reports_failures() {
    let temp = TempDir::new().expect("temp dir");
    let raw = temp.path().join("raw.json");
    let clean = temp.path().join("clean.json");
    fs::write(
        &raw,
        r#"[{"id": "7", "name": "Kurtis"}, {"name": "Ervin"}, {"id": [1]}]"#,
    )
    .expect("write raw");

    let stdout = run_ok(
        temp.path(),
        &[
            "--json",
            "normalize",
            "--skip-invalid",
            "--input",
            raw.to_str().expect("raw path"),
            "--out",
            clean.to_str().expect("clean path"),
        ],
    );

    let report: Value = serde_json::from_str(&stdout).expect("report json");
    assert_eq!(report["read"], json!(3));
    assert_eq!(report["written"], json!(1));
    assert_eq!(report["skipped"], json!(2));
    assert_eq!(report["warnings"].as_array().expect("warnings").len(), 2);

    let records = read_json(&clean);
    assert_eq!(records.as_array().expect("array").len(), 1);
    assert_eq!(records[0]["id"], json!(7));
}

#[test]
fn normalize_missing_input_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");

    let output = run_in(temp.path(), &["normalize", "--input", "nope.json"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn normalize_reads_paths_from_config() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("roster.toml");
    fs::write(
        &config,
        "raw_path = \"data/raw.json\"\nclean_path = \"data/clean.json\"\n",
    )
    .expect("write config");
    fs::create_dir_all(temp.path().join("data")).expect("mkdir");
    fs::write(temp.path().join("data/raw.json"), SAMPLE_RAW).expect("write raw");

    run_ok(
        temp.path(),
        &["--config", config.to_str().expect("config"), "normalize"],
    );

    assert_eq!(
        read_json(&temp.path().join("data/clean.json")),
        expected_sample_clean()
    );
}

#[test]
fn missing_explicit_config_exits_not_found() {
    let temp = TempDir::new().expect("temp dir");

    let output = run_in(temp.path(), &["--config", "absent.toml", "normalize"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn fetch_non_ok_status_leaves_no_file() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(404);
    });
    let temp = TempDir::new().expect("temp dir");

    let output = run_in(
        temp.path(),
        &["--verbose", "fetch", "--url", &server.url("/users")],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("status 404"), "stderr: {stderr}");
    assert!(!temp.path().join("out/users_raw.json").exists());
}

#[test]
fn fetch_writes_raw_payload() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_RAW);
    });
    let temp = TempDir::new().expect("temp dir");
    let out = temp.path().join("raw").join("users.json");

    let stdout = run_ok(
        temp.path(),
        &[
            "--json",
            "fetch",
            "--url",
            &server.url("/users"),
            "--out",
            out.to_str().expect("out path"),
        ],
    );

    mock.assert();
    let report: Value = serde_json::from_str(&stdout).expect("report json");
    assert_eq!(report["entries"], json!(1));
    let expected: Value = serde_json::from_str(SAMPLE_RAW).expect("sample");
    assert_eq!(read_json(&out), expected);
}

#[test]
fn run_fetches_then_normalizes() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200)
            .header("content-type", "application/json")
            .body(SAMPLE_RAW);
    });
    let temp = TempDir::new().expect("temp dir");

    let stdout = run_ok(temp.path(), &["run", "--url", &server.url("/users")]);

    assert!(stdout.contains("Fetched 1 users"));
    assert!(temp.path().join("out/users_raw.json").exists());
    assert_eq!(
        read_json(&temp.path().join("out/users_clean.json")),
        expected_sample_clean()
    );
}

#[test]
fn fetch_rejects_unsupported_scheme() {
    let temp = TempDir::new().expect("temp dir");

    let output = run_in(temp.path(), &["fetch", "--url", "ftp://example.com/users"]);

    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn completions_emit_script() {
    let temp = TempDir::new().expect("temp dir");

    let stdout = run_ok(temp.path(), &["completions", "bash"]);

    assert!(stdout.contains("roster"));
}

#[test]
fn run_help_documents_every_flag() {
    let temp = TempDir::new().expect("temp dir");

    let stdout = run_ok(temp.path(), &["run", "--help"]);

    assert!(stdout.contains("defaults to `source_url`"), "stdout: {stdout}");
    assert!(stdout.contains("defaults to `raw_path`"), "stdout: {stdout}");
    assert!(stdout.contains("defaults to `clean_path`"), "stdout: {stdout}");
    assert!(stdout.contains("report the others"), "stdout: {stdout}");
}
