pub mod location;
pub mod rules;
pub mod run;

pub use location::{DangerfileLocation, DEFAULT_BRANCH};
pub use rules::{Rule, RuleSet};
pub use run::{DslType, Feedback, Run, PULL_REQUEST_EVENT};
