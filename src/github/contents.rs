use base64::{engine::general_purpose, Engine as _};
use reqwest::Method;
use serde::Deserialize;

use super::{GitHubClient, GitHubError, InstallationTokens};
use crate::domain::DangerfileLocation;

/// Body of `GET /repos/{slug}/contents/{path}` for a file.
#[derive(Debug, Deserialize)]
struct FileContent {
    content: String,
}

impl GitHubClient {
    /// Fetch and decode a file from a repo.
    ///
    /// Returns the empty string on any failure (non-success status, transport
    /// error, undecodable body); the cause is logged, never raised.
    pub async fn file_contents(
        &self,
        token: Option<&str>,
        repo_slug: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> String {
        let mut request = self.request(
            Method::GET,
            token,
            &format!("repos/{repo_slug}/contents/{path}"),
        );
        if let Some(git_ref) = git_ref {
            request = request.query(&[("ref", git_ref)]);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(repo = repo_slug, path, error = %e, "getting GitHub file failed");
                return String::new();
            }
        };

        let url = response.url().to_string();
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(%url, error = %e, "reading GitHub file response failed");
                return String::new();
            }
        };

        if !status.is_success() {
            tracing::error!(%url, %status, body = %body, "getting GitHub file failed");
            return String::new();
        }

        match decode_file_content(&body) {
            Ok(text) => text,
            Err(reason) => {
                tracing::error!(%url, reason = %reason, "decoding GitHub file failed");
                String::new()
            }
        }
    }

    /// Fetch a file without a token, falling back to an installation token.
    ///
    /// An empty unauthenticated result is treated as "possibly private": the
    /// org installation id is then required, and its absence is fatal.
    pub async fn file_contents_without_token(
        &self,
        tokens: &dyn InstallationTokens,
        repo_slug: &str,
        path: &str,
    ) -> Result<String, GitHubError> {
        self.fetch_with_fallback(tokens, repo_slug, path, None).await
    }

    /// Fetch the dangerfile a [`DangerfileLocation`] points at.
    ///
    /// Uses the location's repo, or `default_repo` when the location has none,
    /// and the location's branch as the git ref.
    pub async fn fetch_dangerfile(
        &self,
        tokens: &dyn InstallationTokens,
        location: &DangerfileLocation,
        default_repo: Option<&str>,
    ) -> Result<String, GitHubError> {
        let repo = location
            .repo_slug
            .as_deref()
            .or(default_repo)
            .ok_or_else(|| GitHubError::MissingRepo(location.dangerfile_path.clone()))?;
        self.fetch_with_fallback(
            tokens,
            repo,
            &location.dangerfile_path,
            Some(&location.branch),
        )
        .await
    }

    async fn fetch_with_fallback(
        &self,
        tokens: &dyn InstallationTokens,
        repo_slug: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<String, GitHubError> {
        let file = self.file_contents(None, repo_slug, path, git_ref).await;
        if !file.is_empty() {
            return Ok(file);
        }

        let installation_id = self
            .org_installation_id
            .ok_or(GitHubError::MissingInstallationId)?;

        tracing::warn!(
            repo = repo_slug,
            path,
            installation_id,
            "unauthenticated fetch returned nothing, retrying with installation token"
        );
        let token = tokens.installation_token(installation_id).await?;
        Ok(self
            .file_contents(Some(&token), repo_slug, path, git_ref)
            .await)
    }
}

/// Decode the base64 `content` field of a contents API response.
///
/// GitHub wraps the encoded payload at 60 columns, so whitespace is stripped
/// before decoding.
fn decode_file_content(body: &str) -> Result<String, String> {
    let file: FileContent = serde_json::from_str(body).map_err(|e| e.to_string())?;
    let encoded: String = file
        .content
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| e.to_string())?;
    String::from_utf8(bytes).map_err(|e| e.to_string())
}
