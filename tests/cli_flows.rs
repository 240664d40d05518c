// Representative integration flow tests.
// One test per major capability path, proving the full pipeline works
// from stdin payload to JSON runs on stdout.

mod common;

use common::{
    parse_route_output, payload_json, route_with_config, run_paths, run_router, write_temp,
};

const FLOW_CONFIG: &str = r#"
rules {
    "issue" "issue.ts"
    "pull_request" "org/settings@pr.ts"
    "pull_request.*" "all-prs.ts#dev"
    "pull_request.closed" "closed.ts"
    "ping" "ping.ts"
}
"#;

// ---- Matching flows ----

#[test]
fn flow_pull_request_collects_every_matching_rule() {
    let (stdout, _, exit_code) =
        route_with_config("pull_request", &payload_json(Some("closed")), FLOW_CONFIG);
    assert_eq!(exit_code, 0);
    assert_eq!(run_paths(&stdout), vec!["pr.ts", "all-prs.ts", "closed.ts"]);
}

#[test]
fn flow_pull_request_other_action_skips_exact_rule() {
    let (stdout, _, exit_code) =
        route_with_config("pull_request", &payload_json(Some("opened")), FLOW_CONFIG);
    assert_eq!(exit_code, 0);
    assert_eq!(run_paths(&stdout), vec!["pr.ts", "all-prs.ts"]);
}

#[test]
fn flow_ping_without_action() {
    let (stdout, _, exit_code) = route_with_config("ping", &payload_json(None), FLOW_CONFIG);
    assert_eq!(exit_code, 0);
    let value = parse_route_output(&stdout);
    assert_eq!(value["action"], serde_json::Value::Null);
    assert_eq!(value["runs"][0]["dangerfilePath"], "ping.ts");
    assert_eq!(value["runs"][0]["dslType"], "import");
    assert_eq!(value["runs"][0]["feedback"], "silent");
}

#[test]
fn flow_blank_stdin_is_a_payload_without_action() {
    let (stdout, _, exit_code) = route_with_config("ping", "", FLOW_CONFIG);
    assert_eq!(exit_code, 0);
    assert_eq!(run_paths(&stdout), vec!["ping.ts"]);
}

#[test]
fn flow_unknown_event_yields_no_runs() {
    let (stdout, _, exit_code) =
        route_with_config("deployment", &payload_json(Some("created")), FLOW_CONFIG);
    assert_eq!(exit_code, 0);
    assert!(run_paths(&stdout).is_empty());
}

#[test]
fn flow_resolves_repo_and_branch() {
    let (stdout, _, _) =
        route_with_config("pull_request", &payload_json(Some("opened")), FLOW_CONFIG);
    let value = parse_route_output(&stdout);
    let runs = &value["runs"];
    assert_eq!(runs[0]["repoSlug"], "org/settings");
    assert_eq!(runs[0]["branch"], "master");
    assert_eq!(runs[1]["repoSlug"], serde_json::Value::Null);
    assert_eq!(runs[1]["branch"], "dev");
    assert_eq!(runs[1]["dslType"], "pr");
    assert_eq!(runs[1]["feedback"], "commentable");
}

// ---- Settings file flow ----

#[test]
fn flow_settings_json_replaces_config_rules() {
    let settings = write_temp(
        r#"{"settings": {}, "rules": {"issue.*": "json-issue.ts", "issue": "json-any.ts"}}"#,
    );
    let config = write_temp(FLOW_CONFIG);
    let (stdout, _, exit_code) = run_router(
        &payload_json(Some("opened")),
        &[
            "--config",
            config.path().to_str().unwrap(),
            "route",
            "--event",
            "issue",
            "--settings",
            settings.path().to_str().unwrap(),
        ],
        &[],
    );
    assert_eq!(exit_code, 0);
    assert_eq!(run_paths(&stdout), vec!["json-issue.ts", "json-any.ts"]);
}

#[test]
fn flow_settings_without_config_file() {
    let settings = write_temp(r#"{"rules": {"ping": "only.ts"}}"#);
    let (stdout, _, exit_code) = run_router(
        "",
        &[
            "route",
            "--event",
            "ping",
            "--settings",
            settings.path().to_str().unwrap(),
        ],
        &[],
    );
    assert_eq!(exit_code, 0);
    assert_eq!(run_paths(&stdout), vec!["only.ts"]);
}
