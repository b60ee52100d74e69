//! # turndown-slack
//!
//! Turndown rules that convert DOM nodes to Slack's mrkdwn dialect.
//!
//! This crate does not walk the document. A host traversal engine (a turndown
//! service, a CDP client, a custom walker) finds the first matching rule for
//! each node, converts the node's children into a `content` string, and calls
//! the rule with it. What lives here is the rule table and the formatting
//! logic the rules share.
//!
//! ## Example
//!
//! ```rust
//! use turndown_slack::{Node, NodeRef, Rules, SlackOptions};
//!
//! let rules = Rules::new();
//! let options = SlackOptions::slack();
//!
//! let a = Node::element_with_attrs("a", vec![("href", "https://example.com")]);
//! let node = NodeRef::root(&a);
//!
//! let text = rules.replacement_for("Example", &node, &options);
//! assert_eq!(text.as_deref(), Some("<https://example.com|Example>"));
//! ```

#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod options;
mod rules;
mod utilities;

#[cfg(test)]
mod testing;

#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, NodeRef, NodeType};
pub use options::{LinkStyle, SlackOptions};
pub use rules::*;
pub use utilities::*;

/// Error type for turndown-slack operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
