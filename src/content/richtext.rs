//! Rich-text renderer: document tree to display blocks

use serde::Serialize;

use super::document::{Document, Node, NodeKind};
use crate::helpers::html_escape;

/// Placeholder text for an empty paragraph, keeps vertical spacing
pub const BLANK_PARAGRAPH: &str = "\u{a0}";

/// Heading level, h1 to h6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Level from a heading `tag`; anything unrecognized is h2
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("h1") => HeadingLevel::H1,
            Some("h3") => HeadingLevel::H3,
            Some("h4") => HeadingLevel::H4,
            Some("h5") => HeadingLevel::H5,
            Some("h6") => HeadingLevel::H6,
            _ => HeadingLevel::H2,
        }
    }

    pub fn as_u8(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    /// `number` is ordered, everything else is a bullet list
    pub fn from_list_type(list_type: Option<&str>) -> Self {
        match list_type {
            Some("number") => ListKind::Ordered,
            _ => ListKind::Unordered,
        }
    }
}

/// A typed display block
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph { text: String },
    Heading { level: HeadingLevel, text: String },
    List { kind: ListKind, items: Vec<Block> },
    ListItem { text: String },
    Quote { text: String },
    Code { text: String },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }

    /// Whether this is the empty-paragraph placeholder
    pub fn is_blank(&self) -> bool {
        matches!(self, Block::Paragraph { text } if text == BLANK_PARAGRAPH)
    }

    /// Render as an HTML fragment
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Block::Paragraph { text } if text == BLANK_PARAGRAPH => out.push_str("<p>&nbsp;</p>"),
            Block::Paragraph { text } => {
                out.push_str(&format!("<p>{}</p>", html_escape(text)));
            }
            Block::Heading { level, text } => {
                let n = level.as_u8();
                out.push_str(&format!("<h{n}>{}</h{n}>", html_escape(text)));
            }
            Block::List { kind, items } => {
                let tag = match kind {
                    ListKind::Ordered => "ol",
                    ListKind::Unordered => "ul",
                };
                out.push_str(&format!("<{tag}>"));
                for item in items {
                    item.write_html(out);
                }
                out.push_str(&format!("</{tag}>"));
            }
            Block::ListItem { text } => {
                out.push_str(&format!("<li>{}</li>", html_escape(text)));
            }
            Block::Quote { text } => {
                out.push_str(&format!("<blockquote>{}</blockquote>", html_escape(text)));
            }
            Block::Code { text } => {
                out.push_str(&format!("<pre><code>{}</code></pre>", html_escape(text)));
            }
        }
    }
}

/// Render one node into a display block.
///
/// Returns `None` only for a node of an unknown kind that carries no text;
/// such a node is dropped together with its subtree.
pub fn render_node(node: &Node) -> Option<Block> {
    match &node.kind {
        NodeKind::Paragraph => {
            let text = node.text_content();
            if text.is_empty() {
                Some(Block::paragraph(BLANK_PARAGRAPH))
            } else {
                Some(Block::paragraph(text))
            }
        }
        NodeKind::Heading => Some(Block::Heading {
            level: HeadingLevel::from_tag(node.tag.as_deref()),
            text: node.text_content(),
        }),
        NodeKind::List => {
            let items = node
                .children
                .iter()
                .flatten()
                .filter_map(render_node)
                .collect();
            Some(Block::List {
                kind: ListKind::from_list_type(node.list_type.as_deref()),
                items,
            })
        }
        // Nested lists inside an item collapse to flat text
        NodeKind::ListItem => Some(Block::ListItem {
            text: node.text_content(),
        }),
        NodeKind::Quote => Some(Block::Quote {
            text: node.text_content(),
        }),
        NodeKind::Code => Some(Block::Code {
            text: node.text_content(),
        }),
        NodeKind::Root | NodeKind::Other(_) => {
            let text = node.text_content();
            if text.is_empty() {
                None
            } else {
                Some(Block::paragraph(text))
            }
        }
    }
}

/// Render a whole document.
///
/// Returns `None` when there is no document or its root has no children.
pub fn render_document(doc: Option<&Document>) -> Option<Vec<Block>> {
    let children = doc?.children()?;
    let blocks = children.iter().filter_map(render_node).collect();
    Some(blocks)
}

/// Render blocks into the HTML body of an article
pub fn render_html(blocks: &[Block]) -> String {
    let mut out = String::from(r#"<div class="rich-text-content">"#);
    for block in blocks {
        block.write_html(&mut out);
    }
    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(value: serde_json::Value) -> Node {
        Node::from_value(&value)
    }

    #[test]
    fn test_empty_paragraph_is_placeholder() {
        let block = render_node(&node(json!({"type": "paragraph", "text": ""}))).unwrap();
        assert_eq!(block, Block::paragraph(BLANK_PARAGRAPH));
        assert!(block.is_blank());
        assert_eq!(block.to_html(), "<p>&nbsp;</p>");
    }

    #[test]
    fn test_paragraph_from_children() {
        let block = render_node(&node(json!({
            "type": "paragraph",
            "children": [{"type": "text", "text": "Hello "}, {"type": "text", "text": "there"}]
        })))
        .unwrap();
        assert_eq!(block, Block::paragraph("Hello there"));
        assert!(!block.is_blank());
    }

    #[test]
    fn test_built_paragraph_joins_leaves() {
        let paragraph = Node::new(NodeKind::Paragraph)
            .with_children(vec![Node::leaf("Ship "), Node::leaf("it")]);
        assert_eq!(render_node(&paragraph), Some(Block::paragraph("Ship it")));
    }

    #[test]
    fn test_heading_level() {
        let block = render_node(&node(json!({"type": "heading", "tag": "h3", "text": "Title"})));
        assert_eq!(
            block,
            Some(Block::Heading {
                level: HeadingLevel::H3,
                text: "Title".to_string()
            })
        );
    }

    #[test]
    fn test_heading_defaults_to_h2() {
        for tag in [json!("h7"), json!(null), json!(3)] {
            let block =
                render_node(&node(json!({"type": "heading", "tag": tag, "text": "T"}))).unwrap();
            assert!(matches!(
                block,
                Block::Heading {
                    level: HeadingLevel::H2,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_ordered_list() {
        let block = render_node(&node(json!({
            "type": "list",
            "listType": "number",
            "children": [
                {"type": "listitem", "text": "first"},
                {"type": "listitem", "text": "second"}
            ]
        })))
        .unwrap();

        assert_eq!(
            block,
            Block::List {
                kind: ListKind::Ordered,
                items: vec![
                    Block::ListItem {
                        text: "first".to_string()
                    },
                    Block::ListItem {
                        text: "second".to_string()
                    },
                ],
            }
        );
        assert_eq!(block.to_html(), "<ol><li>first</li><li>second</li></ol>");
    }

    #[test]
    fn test_bullet_list_without_children() {
        let block = render_node(&node(json!({"type": "list", "listType": "check"}))).unwrap();
        assert_eq!(
            block,
            Block::List {
                kind: ListKind::Unordered,
                items: vec![]
            }
        );
    }

    #[test]
    fn test_nested_list_item_is_flattened() {
        let block = render_node(&node(json!({
            "type": "listitem",
            "children": [
                {"text": "outer "},
                {"type": "list", "listType": "bullet", "children": [
                    {"type": "listitem", "text": "inner"}
                ]}
            ]
        })))
        .unwrap();
        assert_eq!(
            block,
            Block::ListItem {
                text: "outer inner".to_string()
            }
        );
    }

    #[test]
    fn test_quote_and_code() {
        let quote = render_node(&node(json!({"type": "quote", "text": "Ship it"}))).unwrap();
        assert_eq!(quote.to_html(), "<blockquote>Ship it</blockquote>");

        let code = render_node(&node(json!({
            "type": "code",
            "children": [{"text": "if a < b {"}, {"type": "linebreak"}, {"text": "}"}]
        })))
        .unwrap();
        assert_eq!(
            code,
            Block::Code {
                text: "if a < b {}".to_string()
            }
        );
        assert_eq!(code.to_html(), "<pre><code>if a &lt; b {}</code></pre>");
    }

    #[test]
    fn test_unknown_node_without_text_is_dropped() {
        assert_eq!(render_node(&node(json!({"type": "unknown-widget"}))), None);
    }

    #[test]
    fn test_unknown_node_with_text_is_paragraph() {
        let block = render_node(&node(json!({
            "type": "upload",
            "children": [{"text": "caption"}]
        })));
        assert_eq!(block, Some(Block::paragraph("caption")));
    }

    #[test]
    fn test_document_without_children() {
        let doc = Document::from_value(&json!({"root": {"type": "root"}}));
        assert_eq!(render_document(Some(&doc)), None);
        assert_eq!(render_document(None), None);
    }

    #[test]
    fn test_render_document() {
        let doc = Document::from_value(&json!({
            "root": {
                "type": "root",
                "children": [
                    {"type": "heading", "tag": "h1", "text": "Intro"},
                    {"type": "horizontalrule"},
                    {"type": "paragraph", "children": []},
                    {"type": "paragraph", "text": "Tom & Jerry"}
                ]
            }
        }));

        let blocks = render_document(Some(&doc)).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            render_html(&blocks),
            r#"<div class="rich-text-content"><h1>Intro</h1><p>&nbsp;</p><p>Tom &amp; Jerry</p></div>"#
        );
    }

    #[test]
    fn test_block_json_shape() {
        let block = Block::Heading {
            level: HeadingLevel::H4,
            text: "x".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "heading", "level": "h4", "text": "x"})
        );
    }
}
