//! A minimal host engine so rules can be exercised end to end.
//!
//! Children are converted before their parent; unmatched elements pass their
//! content through untouched, the way turndown's default handling does for
//! unknown tags.

use crate::node::{Node, NodeRef, NodeType};
use crate::options::SlackOptions;
use crate::rules::{Rule, Rules};

/// Slack rules plus a turndown-style list rule, which real hosts supply
pub fn host_rules() -> Rules {
    Rules::new().with_rule(
        "list",
        Rule::for_tags(&["ul", "ol"], |content, node, _| {
            if node.parent_is("li") {
                format!("\n{}", content)
            } else {
                format!("\n\n{}\n\n", content)
            }
        }),
    )
}

pub fn render(node: &Node, rules: &Rules, options: &SlackOptions) -> String {
    render_ref(&NodeRef::root(node), rules, options)
}

fn render_ref(node: &NodeRef, rules: &Rules, options: &SlackOptions) -> String {
    match node.node.node_type {
        NodeType::Text => node.node.node_value.clone().unwrap_or_default(),
        NodeType::Comment => String::new(),
        _ => {
            let content: String = node
                .children()
                .map(|child| render_ref(&child, rules, options))
                .collect();
            if !node.is_element() {
                return content;
            }
            rules
                .replacement_for(&content, node, options)
                .unwrap_or(content)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{CHECKED_GLYPH, UNCHECKED_GLYPH};

    fn li(text: &str) -> Node {
        Node::element("li").with_child(Node::text(text))
    }

    fn convert(node: &Node, options: &SlackOptions) -> String {
        render(node, &host_rules(), options)
    }

    #[test]
    fn test_ordered_list_numbers_from_one() {
        let ol = Node::element("ol")
            .with_child(li("One"))
            .with_child(li("Two"))
            .with_child(li("Three"));
        assert_eq!(
            convert(&ol, &SlackOptions::default()),
            "\n\n1. One\n2. Two\n3. Three\n\n"
        );
    }

    #[test]
    fn test_ordered_list_with_start() {
        let ol = Node::element_with_attrs("ol", vec![("start", "5")])
            .with_child(li("One"))
            .with_child(li("Two"));
        assert_eq!(
            convert(&ol, &SlackOptions::default()),
            "\n\n5. One\n6. Two\n\n"
        );
    }

    #[test]
    fn test_ordered_list_counts_non_item_children() {
        let ol = Node::element("ol")
            .with_child(li("a"))
            .with_child(Node::element("p").with_child(Node::text("x")))
            .with_child(li("b"));
        assert_eq!(
            convert(&ol, &SlackOptions::default()),
            "\n\n1. a\nx3. b\n\n"
        );
    }

    #[test]
    fn test_unordered_list_uses_bullet_marker() {
        let ul = Node::element("ul").with_child(li("a")).with_child(li("b"));
        let options = SlackOptions {
            bullet_list_marker: '•',
            ..Default::default()
        };
        assert_eq!(convert(&ul, &options), "\n\n• a\n• b\n\n");
    }

    #[test]
    fn test_nested_list_is_indented() {
        let inner = Node::element("ul").with_child(li("a")).with_child(li("b"));
        let outer = Node::element("ul")
            .with_child(li("Parent").with_child(inner))
            .with_child(li("Next"));
        assert_eq!(
            convert(&outer, &SlackOptions::default()),
            "\n\n* Parent\n    * a\n    * b\n* Next\n\n"
        );
    }

    #[test]
    fn test_task_list() {
        let task = |checked: bool, text: &str| {
            let mut attrs = vec![("type", "checkbox")];
            if checked {
                attrs.push(("checked", "checked"));
            }
            Node::element_with_attrs("li", vec![("class", "task-list-item")])
                .with_child(Node::element_with_attrs("input", attrs))
                .with_child(Node::text(text))
        };
        let ul = Node::element("ul")
            .with_child(task(true, " done"))
            .with_child(task(false, " todo"));

        assert_eq!(
            convert(&ul, &SlackOptions::default()),
            format!("\n\n{} done\n{} todo\n\n", CHECKED_GLYPH, UNCHECKED_GLYPH)
        );
    }

    #[cfg(feature = "html")]
    mod html {
        use super::*;
        use crate::html::parse_html;

        fn convert_html(html: &str, options: &SlackOptions) -> String {
            convert(&parse_html(html), options)
        }

        #[test]
        fn test_links_and_inline_code() {
            let html = r#"<p>See <a href="http://a">A</a> and <code>x</code></p>"#;
            assert_eq!(
                convert_html(html, &SlackOptions::slack()),
                "See <http://a|A> and  `x` "
            );
            assert_eq!(
                convert_html(html, &SlackOptions::default()),
                "See A and  `x` "
            );
        }

        #[test]
        fn test_linked_image() {
            let html = r#"<a href="http://x"><img src="http://x/y.png" alt="pic"></a>"#;
            assert_eq!(convert_html(html, &SlackOptions::slack()), "<http://x|pic>");
        }

        #[test]
        fn test_heading() {
            assert_eq!(
                convert_html("<h2>Title <code>x</code></h2>", &SlackOptions::default()),
                "\n*Title  `x` *\n"
            );
        }

        #[test]
        fn test_plain_code_block_ignores_converted_content() {
            assert_eq!(
                convert_html("<pre><code>x=1</code></pre>", &SlackOptions::default()),
                "\n```\nx=1```\n"
            );
        }

        #[test]
        fn test_highlighted_code_block_uses_literal_text() {
            let html = concat!(
                r#"<div class="highlight highlight-source-rust"><pre>"#,
                r#"<span class="k">fn</span> main() {}</pre></div>"#
            );
            assert_eq!(
                convert_html(html, &SlackOptions::default()),
                "\n\n```\nfn main() {}\n```\n\n"
            );
        }

        #[test]
        fn test_ordered_list_from_html() {
            assert_eq!(
                convert_html(
                    r#"<ol start="5"><li>a</li><li>b</li></ol>"#,
                    &SlackOptions::default()
                ),
                "\n\n5. a\n6. b\n\n"
            );
        }

        #[test]
        fn test_ordered_list_with_huge_start_from_html() {
            let out = convert_html(
                r#"<ol start="9223372036854775807"><li>a</li><li>b</li></ol>"#,
                &SlackOptions::default(),
            );
            assert!(out.starts_with("\n\n9223372036854775808. a\n"));
        }

        #[test]
        fn test_ordered_list_with_fractional_start_from_html() {
            assert_eq!(
                convert_html(
                    r#"<ol start="2.5"><li>a</li><li>b</li></ol>"#,
                    &SlackOptions::default()
                ),
                "\n\n2.5. a\n3.5. b\n\n"
            );
        }
    }
}
