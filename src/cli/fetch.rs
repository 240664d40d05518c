use std::io::Write;
use std::path::Path;

use miette::IntoDiagnostic;

use crate::domain::DangerfileLocation;
use crate::github::{AppInstallationTokens, GitHubClient};

/// Execute the fetch subcommand: resolve a location string and print the file.
///
/// An empty result after the token fallback is reported as an error, since
/// the contents endpoint never distinguishes "missing" from "empty" for us.
pub fn run(
    config_path: Option<&Path>,
    location: &str,
    default_repo: Option<&str>,
) -> miette::Result<()> {
    let config = super::load_config(config_path)?;
    let location = DangerfileLocation::parse(location);
    let client = GitHubClient::new(&config.github);
    let tokens = AppInstallationTokens::new(&config.github);

    let contents = super::runtime()?.block_on(client.fetch_dangerfile(
        &tokens,
        &location,
        default_repo,
    ))?;

    if contents.is_empty() {
        miette::bail!("could not fetch dangerfile {location}");
    }

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(contents.as_bytes()).into_diagnostic()?;
    stdout.flush().into_diagnostic()
}
