mod matching;

pub use matching::{match_rule, RuleMatch};

use crate::domain::{DangerfileLocation, RuleSet, Run};

/// Resolve every rule that applies to an event into a [`Run`].
///
/// Each key is checked on its own against [`match_rule`]; there is no
/// precedence and no short-circuit, so one event can produce several runs
/// (including duplicates pointing at the same dangerfile). Output order is
/// the rule set's insertion order. Unmatched input yields an empty list.
///
/// # Examples
///
/// ```
/// use dangerfile_router::domain::{DslType, Feedback, RuleSet};
/// use dangerfile_router::routing::runs_for_rules;
///
/// let rules = RuleSet::from_pairs([("pull_request.*", "orta/eigen@dangerfile.ts")]);
/// let runs = runs_for_rules("pull_request", Some("opened"), &rules);
///
/// assert_eq!(runs.len(), 1);
/// assert_eq!(runs[0].repo_slug.as_deref(), Some("orta/eigen"));
/// assert_eq!(runs[0].dsl_type, DslType::Pr);
/// assert_eq!(runs[0].feedback, Feedback::Commentable);
/// ```
pub fn runs_for_rules(event: &str, action: Option<&str>, rules: &RuleSet) -> Vec<Run> {
    let runs: Vec<Run> = rules
        .iter()
        .filter_map(|rule| {
            let matched = match_rule(&rule.key, event, action)?;
            tracing::debug!(key = %rule.key, ?matched, location = %rule.location, "rule matched");
            Some(Run::new(
                event,
                action,
                DangerfileLocation::parse(&rule.location),
            ))
        })
        .collect();

    tracing::info!(
        event,
        action = action.unwrap_or("<none>"),
        rules = rules.len(),
        runs = runs.len(),
        "routed event"
    );
    runs
}

#[cfg(test)]
mod tests;
