//! Slack mrkdwn rules.
//!
//! Slack has no headings, no images and no numbered-list syntax of its own,
//! so most rules here map richer HTML onto the handful of constructs mrkdwn
//! does render: `*bold*`, `` `code` ``, fenced blocks and `<url|label>` links.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Filter, Rule};
use crate::options::LinkStyle;
use crate::utilities::{join_list_item, list_item_prefix, normalize_list_item_content};

pub const SLACK_LINK: &str = "slack_link";
pub const HEADING: &str = "heading";
pub const TASK_LIST_ITEMS: &str = "task_list_items";
pub const LIST_ITEM: &str = "list_item";
pub const IMAGES: &str = "images";
pub const HIGHLIGHTED_CODE_BLOCK: &str = "highlighted_code_block";
pub const CODE: &str = "code";
pub const CODE_BLOCK: &str = "code_block";

/// Glyph emitted for a ticked task-list checkbox
pub const CHECKED_GLYPH: &str = "\u{2611}\u{FE0E}";
/// Glyph emitted for an unticked task-list checkbox
pub const UNCHECKED_GLYPH: &str = "\u{2610}";

static HIGHLIGHT_CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"highlight-(?:text|source)-([a-z0-9]+)").expect("valid highlight class pattern")
});

/// Create all Slack rules, in priority order
pub fn slack_rules() -> IndexMap<String, Rule> {
    [
        (SLACK_LINK, slack_link_rule()),
        (HEADING, heading_rule()),
        (TASK_LIST_ITEMS, task_list_items_rule()),
        (LIST_ITEM, list_item_rule()),
        (IMAGES, image_rule()),
        (HIGHLIGHTED_CODE_BLOCK, highlighted_code_block_rule()),
        (CODE, code_rule()),
        (CODE_BLOCK, code_block_rule()),
    ]
    .into_iter()
    .map(|(key, rule)| (key.to_string(), rule))
    .collect()
}

/// Anchors become `<href|text>`, but only when Slack links are selected.
/// Otherwise the host's own link handling applies.
fn slack_link_rule() -> Rule {
    Rule::new(
        Filter::predicate(|tag, node, options| {
            options.link_style == LinkStyle::Slack
                && tag == "a"
                && node.attr("href").is_some_and(|href| !href.is_empty())
        }),
        |content, node, _| {
            let href = node.attr("href").unwrap_or_default();
            format!("<{}|{}>", href, content)
        },
    )
}

// Every heading level renders the same way.
fn heading_rule() -> Rule {
    Rule::for_tags(&["h1", "h2", "h3", "h4", "h5", "h6"], |content, _, _| {
        format!("\n*{}*\n", content)
    })
}

fn task_list_items_rule() -> Rule {
    Rule::new(
        Filter::predicate(|tag, node, _| {
            tag == "input"
                && node
                    .attr("type")
                    .is_some_and(|t| t.eq_ignore_ascii_case("checkbox"))
                && node.parent_is("li")
        }),
        |_, node, _| {
            if node.is_checked() {
                CHECKED_GLYPH.to_string()
            } else {
                UNCHECKED_GLYPH.to_string()
            }
        },
    )
}

fn list_item_rule() -> Rule {
    Rule::for_tag("li", |content, node, options| {
        let content = normalize_list_item_content(content);
        let prefix = list_item_prefix(node, options);
        join_list_item(&prefix, &content, node.next_sibling().is_some())
    })
}

fn image_rule() -> Rule {
    Rule::for_tag("img", |_, node, _| {
        let src = node.attr("src").unwrap_or_default();
        let alt = node.attr("alt").filter(|alt| !alt.is_empty());

        if node.parent_is("a") {
            // The enclosing link supplies the URL.
            alt.unwrap_or(src).to_string()
        } else if let Some(alt) = alt {
            format!("<{}|{}>", src, alt)
        } else {
            src.to_string()
        }
    })
}

/// `<div class="highlight-source-rust"><pre>…</pre></div>` as produced by
/// GitHub-style syntax highlighters. The code is taken from the `<pre>`'s
/// literal text so the highlighter's spans never reach the output.
fn highlighted_code_block_rule() -> Rule {
    Rule::new(
        Filter::predicate(|tag, node, _| {
            tag == "div"
                && HIGHLIGHT_CLASS.is_match(node.class_name())
                && node.first_child().is_some_and(|child| child.is_tag("pre"))
        }),
        |_, node, options| {
            let code = node
                .first_child()
                .map(|pre| pre.text_content())
                .unwrap_or_default();
            format!(
                "\n\n{fence}\n{code}\n{fence}\n\n",
                fence = options.fence,
                code = code
            )
        },
    )
}

// Spaces on both sides keep Slack from gluing the span onto adjacent words.
fn code_rule() -> Rule {
    Rule::for_tag("code", |content, _, _| format!(" `{}` ", content))
}

/// `<pre><code>…</code></pre>`. The closing fence follows the code directly,
/// with no newline in between.
fn code_block_rule() -> Rule {
    Rule::new(
        Filter::predicate(|tag, node, _| {
            tag == "pre" && node.first_child().is_some_and(|child| child.is_tag("code"))
        }),
        |_, node, _| {
            let code = node
                .first_child()
                .map(|code| code.text_content())
                .unwrap_or_default();
            format!("\n```\n{}```\n", code)
        },
    )
}
