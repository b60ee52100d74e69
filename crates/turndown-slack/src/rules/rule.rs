//! Rule and Filter types for node conversion.

use crate::node::NodeRef;
use crate::options::SlackOptions;

/// Type alias for replacement functions: `(content, node, options) -> text`
pub type ReplacementFn = Box<dyn Fn(&str, &NodeRef, &SlackOptions) -> String + Send + Sync>;

/// Type alias for filter predicates: `(tag, node, options) -> matches`
pub type PredicateFn = Box<dyn Fn(&str, &NodeRef, &SlackOptions) -> bool + Send + Sync>;

/// A filter determines which nodes a rule applies to
pub enum Filter {
    /// Match a single tag name
    TagName(String),
    /// Match any of multiple tag names
    TagNames(Vec<String>),
    /// Match using a predicate function
    Predicate(PredicateFn),
}

impl Filter {
    /// Create a filter for a single tag
    pub fn tag(name: &str) -> Self {
        Filter::TagName(name.to_lowercase())
    }

    /// Create a filter for multiple tags
    pub fn tags(names: &[&str]) -> Self {
        Filter::TagNames(names.iter().map(|s| s.to_lowercase()).collect())
    }

    /// Create a filter with a predicate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn(&str, &NodeRef, &SlackOptions) -> bool + Send + Sync + 'static,
    {
        Filter::Predicate(Box::new(f))
    }

    /// Check if this filter matches a node.
    ///
    /// Tag filters only ever match elements; predicates see every node and
    /// receive the lowercased tag (`#text` for text nodes).
    pub fn matches(&self, node: &NodeRef, options: &SlackOptions) -> bool {
        let tag = node.tag_name();
        match self {
            Filter::TagName(t) => node.is_element() && tag == *t,
            Filter::TagNames(tags) => node.is_element() && tags.contains(&tag),
            Filter::Predicate(f) => f(&tag, node, options),
        }
    }
}

/// A rule defines how to convert a matched node to Slack text
pub struct Rule {
    /// Filter to determine which nodes this rule applies to
    pub filter: Filter,
    /// Replacement function that generates the output text
    pub replacement: ReplacementFn,
}

impl Rule {
    /// Create a new rule
    pub fn new<F>(filter: Filter, replacement: F) -> Self
    where
        F: Fn(&str, &NodeRef, &SlackOptions) -> String + Send + Sync + 'static,
    {
        Self {
            filter,
            replacement: Box::new(replacement),
        }
    }

    /// Create a rule that matches a single tag
    pub fn for_tag<F>(tag: &str, replacement: F) -> Self
    where
        F: Fn(&str, &NodeRef, &SlackOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tag(tag), replacement)
    }

    /// Create a rule that matches multiple tags
    pub fn for_tags<F>(tags: &[&str], replacement: F) -> Self
    where
        F: Fn(&str, &NodeRef, &SlackOptions) -> String + Send + Sync + 'static,
    {
        Self::new(Filter::tags(tags), replacement)
    }

    /// Check whether this rule applies to `node`
    pub fn matches(&self, node: &NodeRef, options: &SlackOptions) -> bool {
        self.filter.matches(node, options)
    }

    /// Apply this rule's replacement
    pub fn replace(&self, content: &str, node: &NodeRef, options: &SlackOptions) -> String {
        (self.replacement)(content, node, options)
    }
}
