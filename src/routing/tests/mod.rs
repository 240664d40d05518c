
use crate::domain::RuleSet;

fn rules_of(pairs: &[(&str, &str)]) -> RuleSet {
    RuleSet::from_pairs(pairs.iter().copied())
}
