//! Extension hook: an ordered chain of rule set transformers.
//!
//! Collaborators register transformers that run between filtering and
//! consolidation. Each transformer receives the output of the previous one,
//! in registration order. Nothing else is guaranteed; a transformer may touch
//! external state.

use std::fmt;

use log::trace;

use crate::types::{RuleEntry, RuleSet};

/// Name of the hook applied to filtered rules before consolidation.
pub const RULES_HOOK: &str = "clarity_rules";

/// A registered transformer.
pub type Transformer = Box<dyn Fn(RuleSet) -> RuleSet + Send + Sync>;

pub struct ExtensionHook {
    name: String,
    transformers: Vec<Transformer>,
}

impl ExtensionHook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transformers: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a transformer to the end of the chain.
    pub fn register<F>(&mut self, transformer: F)
    where
        F: Fn(RuleSet) -> RuleSet + Send + Sync + 'static,
    {
        self.transformers.push(Box::new(transformer));
    }

    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Fold the rule set through every transformer. Identity when empty.
    pub fn apply(&self, rules: RuleSet) -> RuleSet {
        self.transformers
            .iter()
            .enumerate()
            .fold(rules, |rules, (i, transformer)| {
                let before = rules.len();
                let rules = transformer(rules);
                trace!(
                    "hook '{}' transformer #{}: {} -> {} entries",
                    self.name,
                    i,
                    before,
                    rules.len()
                );
                rules
            })
    }
}

impl Default for ExtensionHook {
    fn default() -> Self {
        Self::new(RULES_HOOK)
    }
}

impl fmt::Debug for ExtensionHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionHook")
            .field("name", &self.name)
            .field("transformers", &self.transformers.len())
            .finish()
    }
}

/// Transformer that appends `selector`. Blank selectors are ignored.
pub fn add_rule(selector: &str) -> impl Fn(RuleSet) -> RuleSet + Send + Sync + 'static {
    let entry = RuleEntry::new(selector);
    move |mut rules: RuleSet| {
        rules.extend(entry.clone());
        rules
    }
}

/// Transformer that drops every entry equal to `selector`.
pub fn remove_rule(selector: &str) -> impl Fn(RuleSet) -> RuleSet + Send + Sync + 'static {
    let selector = selector.to_string();
    move |mut rules: RuleSet| {
        rules.remove(&selector);
        rules
    }
}
