use std::io::Read;
use std::path::Path;

use miette::{IntoDiagnostic, WrapErr};

use crate::config;
use crate::protocol::{RouteOutput, WebhookEvent};
use crate::routing;

/// Execute the route subcommand: read a webhook payload from stdin, write runs to stdout.
///
/// Rules come from the JSON settings file when `settings_path` is given,
/// otherwise from the KDL config's `rules` section. Blank stdin is accepted
/// as a payload without an action (e.g. for `ping`). GitHub settings from the
/// environment are not read, since routing never talks to GitHub.
pub fn run(
    config_path: Option<&Path>,
    settings_path: Option<&Path>,
    event: &str,
) -> miette::Result<()> {
    let config = super::load_routing_config(config_path)?;
    let rules = match settings_path {
        Some(path) => config::load_settings(path)?,
        None => config.rules,
    };

    let payload = read_payload()?;
    let webhook = WebhookEvent::from_payload(event, &payload);
    let runs = routing::runs_for_rules(&webhook.event, webhook.action.as_deref(), &rules);

    let output = RouteOutput {
        event: &webhook.event,
        action: webhook.action.as_deref(),
        runs: &runs,
    };
    let json = serde_json::to_string(&output).into_diagnostic()?;
    println!("{json}");
    Ok(())
}

fn read_payload() -> miette::Result<serde_json::Value> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).into_diagnostic()?;
    if input.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(&input)
        .into_diagnostic()
        .wrap_err("webhook payload on stdin is not valid JSON")
}
