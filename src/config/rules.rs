//! `rules` section: one node per rule, node name is the key.
//!
//! ```kdl
//! rules {
//!     "pull_request" "dangerfile.ts"
//!     "pull_request.*" "orta/eigen@dangerfile.ts#branch"
//! }
//! ```

use std::collections::HashMap;

use super::document::ConfigSection;
use super::section::{single_string, SectionConfig};
use super::ConfigError;
use crate::domain::RuleSet;

/// Rules read from the config file, in document order.
#[derive(Debug, Default)]
pub struct RulesConfig {
    pub rules: RuleSet,
}

impl SectionConfig for RulesConfig {
    const SECTION: &'static str = "rules";

    fn from_section(section: &ConfigSection<'_>) -> Result<Self, ConfigError> {
        let mut rules = RuleSet::new();
        let mut seen: HashMap<&str, usize> = HashMap::new();

        for node in section.nodes() {
            let key = node.name();
            let line = node.line();
            let location = single_string(&node, Self::SECTION)?;

            if let Some(first) = seen.insert(key, line) {
                return Err(ConfigError::ValidationError(format!(
                    "line {line}: rule \"{key}\" is already defined on line {first}"
                )));
            }
            rules.push(key, location);
        }

        Ok(RulesConfig { rules })
    }
}
