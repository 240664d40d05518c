use reqwest::{Method, StatusCode};
use serde::Deserialize;

use super::{GitHubClient, GitHubError};

#[derive(Debug, Deserialize)]
struct PermissionLevel {
    permission: String,
}

impl GitHubClient {
    /// Whether `user` has admin or write permission on `repo_slug`.
    ///
    /// A 404 (user is not a collaborator) is `false`; other failures are errors.
    pub async fn can_user_write_to_repo(
        &self,
        token: &str,
        user: &str,
        repo_slug: &str,
    ) -> Result<bool, GitHubError> {
        let response = self
            .request(
                Method::GET,
                Some(token),
                &format!("repos/{repo_slug}/collaborators/{user}/permission"),
            )
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::debug!(user, repo = repo_slug, "user is not a collaborator");
            return Ok(false);
        }
        if !status.is_success() {
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let level: PermissionLevel = response.json().await?;
        Ok(grants_write(&level.permission))
    }
}

fn grants_write(permission: &str) -> bool {
    matches!(permission, "admin" | "write")
}
