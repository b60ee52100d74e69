//! Formatting helpers shared by the Slack rules.

use crate::node::NodeRef;
use crate::options::SlackOptions;

/// Indent applied to every continuation line inside a list item
pub const LIST_INDENT: &str = "    ";

/// Class that marks an `<li>` as a task-list item
pub const TASK_LIST_ITEM_CLASS: &str = "task-list-item";

/// Prepare converted list-item content for prefixing.
///
/// Leading newlines are dropped, a run of trailing newlines becomes exactly
/// one, and every newline that remains is followed by [`LIST_INDENT`] so that
/// nested blocks line up under the item's text.
pub fn normalize_list_item_content(content: &str) -> String {
    let content = content.trim_start_matches('\n');
    let body = content.trim_end_matches('\n');

    let mut normalized = String::with_capacity(content.len() + LIST_INDENT.len());
    normalized.push_str(body);
    if body.len() != content.len() {
        normalized.push('\n');
    }
    indent_lines(&normalized, LIST_INDENT)
}

/// Insert `indent` after every newline in `text`
pub fn indent_lines(text: &str, indent: &str) -> String {
    text.replace('\n', &format!("\n{indent}"))
}

/// Number shown for the list item at `index` within an ordered list.
///
/// `start` is the list's raw `start` attribute, read as any finite number
/// (`"5"`, `"2.5"`, `"1e1"`); when it is missing or not a number, numbering
/// starts from 1. Whole results display without a fraction.
pub fn ordered_list_number(start: Option<&str>, index: usize) -> f64 {
    let index = index as f64;
    start
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|start| start.is_finite())
        .map(|start| start + index)
        .unwrap_or(index + 1.0)
}

/// Marker placed in front of a list item's text.
///
/// Task-list items get no marker because their checkbox glyph is already part
/// of the content. Items of an `<ol>` are numbered from their position among
/// the list's element children; everything else gets the bullet marker.
pub fn list_item_prefix(node: &NodeRef, options: &SlackOptions) -> String {
    if node.has_class(TASK_LIST_ITEM_CLASS) {
        return String::new();
    }

    match node.parent() {
        Some(parent) if parent.is_tag("ol") => {
            let index = node.element_index().unwrap_or(0);
            format!("{}. ", ordered_list_number(parent.attr("start"), index))
        }
        _ => format!("{} ", options.bullet_list_marker),
    }
}

/// Assemble a list item: prefix, trimmed content, and a separating newline
/// when a sibling follows and `content` does not already end in one.
pub fn join_list_item(prefix: &str, content: &str, has_next_sibling: bool) -> String {
    let separator = if has_next_sibling && !content.ends_with('\n') {
        "\n"
    } else {
        ""
    };
    format!("{}{}{}", prefix, content.trim(), separator)
}
