pub mod config;
pub mod domain;
pub mod github;
pub mod logging;
pub mod protocol;
pub mod routing;

pub(crate) mod cli;

use std::path::Path;

/// Run the route subcommand: read a webhook payload from stdin, print runs as JSON.
///
/// This is the binary entry point. It exists to bridge the binary crate (`main.rs`)
/// to the library without exposing `cli` internals. Library callers should use
/// [`routing::runs_for_rules`] and [`config::Config`] directly.
pub fn run_route(
    config_path: Option<&Path>,
    settings_path: Option<&Path>,
    event: &str,
) -> miette::Result<()> {
    cli::route::run(config_path, settings_path, event)
}

/// Run the fetch subcommand: print the dangerfile a location string points at.
pub fn run_fetch(
    config_path: Option<&Path>,
    location: &str,
    default_repo: Option<&str>,
) -> miette::Result<()> {
    cli::fetch::run(config_path, location, default_repo)
}

/// Run the can-write subcommand: print whether a user may write to a repo.
pub fn run_can_write(
    config_path: Option<&Path>,
    token: &str,
    user: &str,
    repo: &str,
) -> miette::Result<()> {
    cli::can_write::run(config_path, token, user, repo)
}
