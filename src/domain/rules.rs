use serde::Deserialize;

/// A single rule: an event pattern paired with a dangerfile location string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// `event`, `event.*`, or `event.action`.
    pub key: String,
    /// `[repoSlug@]path[#branch]`, resolved lazily when the rule matches.
    pub location: String,
}

/// Ordered collection of rules.
///
/// Iteration order is insertion order, and the routing output follows it.
/// Keys are not checked for uniqueness here; loaders decide how to treat
/// repeats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

/// Peril-style JSON settings: `{ "rules": { "<key>": "<location>" } }`.
///
/// `serde_json` is built with `preserve_order`, so the map keeps document order.
#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    rules: serde_json::Map<String, serde_json::Value>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule at the end.
    pub fn push(&mut self, key: impl Into<String>, location: impl Into<String>) {
        self.rules.push(Rule {
            key: key.into(),
            location: location.into(),
        });
    }

    /// Build from `(key, location)` pairs, keeping their order.
    ///
    /// # Examples
    ///
    /// ```
    /// use dangerfile_router::domain::RuleSet;
    ///
    /// let rules = RuleSet::from_pairs([("ping", "dangerfile.js")]);
    /// assert_eq!(rules.len(), 1);
    /// ```
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let mut set = RuleSet::new();
        for (key, location) in pairs {
            set.push(key, location);
        }
        set
    }

    /// Parse the `rules` object of a JSON settings document.
    ///
    /// Unknown top-level fields are ignored. Non-string rule values are rejected.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        let settings: SettingsFile = serde_json::from_str(source)?;
        let mut set = RuleSet::new();
        for (key, value) in settings.rules {
            match value {
                serde_json::Value::String(location) => set.push(key, location),
                other => {
                    return Err(serde::de::Error::custom(format!(
                        "rule \"{key}\" must map to a location string, got {other}"
                    )))
                }
            }
        }
        Ok(set)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
