use serde::Serialize;

use super::location::DangerfileLocation;

/// The only event that runs with the pull-request DSL and may comment.
pub const PULL_REQUEST_EVENT: &str = "pull_request";

/// Which execution context a dangerfile runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DslType {
    /// Generic integration context: the raw webhook payload.
    Import,
    /// Pull-request context.
    Pr,
}

/// Whether a run's results may be posted back as a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    Silent,
    Commentable,
}

impl DslType {
    /// `Pr` for `pull_request`, `Import` for every other event name.
    pub fn for_event(event: &str) -> Self {
        if event == PULL_REQUEST_EVENT {
            DslType::Pr
        } else {
            DslType::Import
        }
    }
}

impl Feedback {
    /// `Commentable` for `pull_request`, `Silent` for every other event name.
    pub fn for_event(event: &str) -> Self {
        match DslType::for_event(event) {
            DslType::Pr => Feedback::Commentable,
            DslType::Import => Feedback::Silent,
        }
    }
}

/// One resolved instruction to execute a dangerfile for an event occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub event: String,
    pub action: Option<String>,
    pub dangerfile_path: String,
    pub repo_slug: Option<String>,
    pub branch: String,
    pub dsl_type: DslType,
    pub feedback: Feedback,
}

impl Run {
    /// Build a run for `event`/`action` that executes the dangerfile at `location`.
    pub fn new(event: &str, action: Option<&str>, location: DangerfileLocation) -> Self {
        Run {
            event: event.to_string(),
            action: action.map(String::from),
            dangerfile_path: location.dangerfile_path,
            repo_slug: location.repo_slug,
            branch: location.branch,
            dsl_type: DslType::for_event(event),
            feedback: Feedback::for_event(event),
        }
    }
}
