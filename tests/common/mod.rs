// Shared test helpers for integration tests.
// Used by cli_contract.rs, cli_flows.rs and github_api.rs.
#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

/// Environment variables the binary reads; cleared so the host can't leak in.
const ROUTER_ENV: [&str; 4] = [
    "DANGER_GITHUB_API_BASE_URL",
    "PERIL_ORG_INSTALLATION_ID",
    "GITHUB_APP_JWT",
    "RUST_LOG",
];

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_dangerfile-router"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

pub fn write_temp(content: &str) -> NamedTempFile {
    let mut tmpfile = NamedTempFile::new().expect("failed to create temp file");
    tmpfile
        .write_all(content.as_bytes())
        .expect("failed to write temp file");
    tmpfile
}

/// Runs `route --event <event>` with a KDL config and the given payload on stdin.
pub fn route_with_config(event: &str, payload: &str, config_content: &str) -> (String, String, i32) {
    let config = write_temp(config_content);
    let config_path = config.path().to_str().unwrap().to_string();
    run_router(payload, &["--config", &config_path, "route", "--event", event], &[])
}

/// Runs the binary with the given stdin, args and extra environment.
/// Returns (stdout, stderr, exit_code).
pub fn run_router(stdin_input: &str, args: &[&str], env: &[(&str, &str)]) -> (String, String, i32) {
    let mut cmd = Command::new(binary_path());
    for key in ROUTER_ENV {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.args(args);
    let output = cmd
        .stdin(std::process::Stdio::piped())
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::{ErrorKind, Write};
            let write_result = child
                .stdin
                .take()
                .unwrap()
                .write_all(stdin_input.as_bytes());
            if let Err(e) = write_result {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e);
                }
            }
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

pub fn payload_json(action: Option<&str>) -> String {
    match action {
        Some(action) => serde_json::json!({"action": action, "sender": {"login": "orta"}}),
        None => serde_json::json!({"zen": "Design for failure.", "hook_id": 1}),
    }
    .to_string()
}

/// Parses the route output JSON.
pub fn parse_route_output(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}

/// The `dangerfilePath` of every run, in output order.
pub fn run_paths(stdout: &str) -> Vec<String> {
    parse_route_output(stdout)["runs"]
        .as_array()
        .expect("runs must be an array")
        .iter()
        .map(|run| run["dangerfilePath"].as_str().unwrap().to_string())
        .collect()
}
