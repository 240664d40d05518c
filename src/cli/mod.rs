pub mod can_write;
pub mod fetch;
pub mod route;

use std::path::Path;

use crate::config::{Config, ConfigError};

/// Load the KDL config if a path was given, otherwise defaults plus environment.
fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load(path),
        None => Config::from_env(),
    }
}

/// Load only what routing needs: the file's rules, without the GitHub
/// environment overlay.
fn load_routing_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_file(path),
        None => Ok(Config::default()),
    }
}

/// Runtime for the subcommands that talk to GitHub.
fn runtime() -> miette::Result<tokio::runtime::Runtime> {
    use miette::IntoDiagnostic;
    tokio::runtime::Runtime::new().into_diagnostic()
}
