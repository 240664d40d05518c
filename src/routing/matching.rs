/// Which form of rule key matched an event.
///
/// The three forms overlap on purpose: for `pull_request`/`updated`, the keys
/// `pull_request`, `pull_request.*` and `pull_request.updated` all match, and
/// each yields its own run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    /// Key is the bare event name. Matches any action, including none.
    Event,
    /// Key is `<event>.*`. Matches any action, including none.
    AnyAction,
    /// Key is `<event>.<action>`. Requires a present, non-empty action.
    ExactAction,
}

const WILDCARD: &str = "*";

/// Evaluate one rule key against an event and optional action.
///
/// Returns `None` for keys belonging to other events or naming other actions.
pub fn match_rule(key: &str, event: &str, action: Option<&str>) -> Option<RuleMatch> {
    if is_event_match(key, event) {
        return Some(RuleMatch::Event);
    }
    let suffix = action_suffix(key, event)?;
    if is_any_action_match(suffix) {
        Some(RuleMatch::AnyAction)
    } else if is_exact_action_match(suffix, action) {
        Some(RuleMatch::ExactAction)
    } else {
        None
    }
}

fn is_event_match(key: &str, event: &str) -> bool {
    key == event
}

fn is_any_action_match(suffix: &str) -> bool {
    suffix == WILDCARD
}

fn is_exact_action_match(suffix: &str, action: Option<&str>) -> bool {
    match action {
        Some(action) if !action.is_empty() => suffix == action,
        _ => false,
    }
}

/// The part of `key` after `"<event>."`, if `key` is scoped to `event`.
fn action_suffix<'k>(key: &'k str, event: &str) -> Option<&'k str> {
    key.strip_prefix(event)?.strip_prefix('.')
}
