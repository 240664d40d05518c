use serde_json::Value;

/// An incoming webhook occurrence, reduced to what routing needs.
///
/// The event name comes from outside the payload (GitHub sends it in the
/// `X-GitHub-Event` header); the action is the payload's top-level `action`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookEvent {
    pub event: String,
    pub action: Option<String>,
}

impl WebhookEvent {
    /// Build from an event name and a raw JSON payload.
    ///
    /// A missing or non-string `action` field yields `None`. An empty string
    /// is kept as `Some("")`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dangerfile_router::protocol::WebhookEvent;
    ///
    /// let payload = serde_json::json!({"action": "opened", "number": 1});
    /// let event = WebhookEvent::from_payload("pull_request", &payload);
    /// assert_eq!(event.action.as_deref(), Some("opened"));
    /// ```
    pub fn from_payload(event: &str, payload: &Value) -> Self {
        let action = payload
            .get("action")
            .and_then(Value::as_str)
            .map(String::from);
        WebhookEvent {
            event: event.to_string(),
            action,
        }
    }
}
