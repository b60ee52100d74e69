//! Rule system for DOM to Slack mrkdwn conversion.
//!
//! A [`Rules`] value is built once, handed to the host traversal engine, and
//! only read from then on. The engine asks it for the first rule accepting a
//! node, converts the node's children itself, and calls the rule's
//! replacement with that content.

mod rule;
mod slack;

pub use rule::{Filter, PredicateFn, ReplacementFn, Rule};
pub use slack::{
    slack_rules, CHECKED_GLYPH, CODE_BLOCK, CODE, HEADING, HIGHLIGHTED_CODE_BLOCK, IMAGES,
    LIST_ITEM, SLACK_LINK, TASK_LIST_ITEMS, UNCHECKED_GLYPH,
};

use indexmap::IndexMap;

use crate::node::NodeRef;
use crate::options::SlackOptions;

/// Ordered collection of rules, keyed by a stable identifier
pub struct Rules {
    /// Rules in priority order; the first match wins
    rules: IndexMap<String, Rule>,
}

impl Rules {
    /// Create a new Rules instance holding the Slack rule table
    pub fn new() -> Self {
        Self {
            rules: slack_rules(),
        }
    }

    /// Create an empty rule table
    pub fn empty() -> Self {
        Self {
            rules: IndexMap::new(),
        }
    }

    /// Add a rule ahead of every rule already present.
    ///
    /// Replacing an existing key moves it to the front as well.
    pub fn with_rule(mut self, key: &str, rule: Rule) -> Self {
        self.rules.shift_remove(key);
        self.rules.shift_insert(0, key.to_string(), rule);
        self
    }

    /// Look up a rule by its identifier
    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.get(key)
    }

    /// Rule identifiers in priority order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the first rule whose filter accepts the node
    pub fn for_node<'r>(
        &'r self,
        node: &NodeRef,
        options: &SlackOptions,
    ) -> Option<(&'r str, &'r Rule)> {
        let found = self
            .rules
            .iter()
            .find(|(_, rule)| rule.matches(node, options))
            .map(|(key, rule)| (key.as_str(), rule));

        if let Some((key, _)) = found {
            tracing::trace!(rule = key, tag = %node.tag_name(), "matched rule");
        }
        found
    }

    /// Match and apply in one step; `None` leaves the node to the host engine
    pub fn replacement_for(
        &self,
        content: &str,
        node: &NodeRef,
        options: &SlackOptions,
    ) -> Option<String> {
        self.for_node(node, options)
            .map(|(_, rule)| rule.replace(content, node, options))
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}
