use std::path::Path;

use crate::github::GitHubClient;

/// Execute the can-write subcommand: print `true` when `user` may write to `repo`.
pub fn run(config_path: Option<&Path>, token: &str, user: &str, repo: &str) -> miette::Result<()> {
    let config = super::load_config(config_path)?;
    let client = GitHubClient::new(&config.github);

    let allowed = super::runtime()?.block_on(client.can_user_write_to_repo(token, user, repo))?;
    tracing::info!(user, repo, allowed, "checked collaborator permission");
    println!("{allowed}");
    Ok(())
}
