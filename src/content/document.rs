//! Serialized rich-text document tree
//!
//! The CMS stores post bodies as editor state: a root node owning typed
//! children. Every field is optional here; a node that is missing a field,
//! or carries one of the wrong JSON type, simply behaves as if the field
//! were absent.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Kind of a node, taken from its `type` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Paragraph,
    Heading,
    List,
    ListItem,
    Quote,
    Code,
    /// Any type this crate has no dedicated rendering for
    Other(String),
}

impl NodeKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "root" => NodeKind::Root,
            "paragraph" => NodeKind::Paragraph,
            "heading" => NodeKind::Heading,
            "list" => NodeKind::List,
            "listitem" => NodeKind::ListItem,
            "quote" => NodeKind::Quote,
            "code" => NodeKind::Code,
            other => NodeKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Heading => "heading",
            NodeKind::List => "list",
            NodeKind::ListItem => "listitem",
            NodeKind::Quote => "quote",
            NodeKind::Code => "code",
            NodeKind::Other(s) => s,
        }
    }
}

impl Serialize for NodeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A single node of the document tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "type")]
    pub kind: NodeKind,

    /// Direct text of a leaf node
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    /// Heading tag, `h1` to `h6`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// `number` or `bullet`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_type: Option<String>,
}

impl Node {
    /// A node of the given kind with no fields set
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            text: None,
            children: None,
            tag: None,
            list_type: None,
        }
    }

    /// A bare text leaf
    pub fn leaf(text: &str) -> Self {
        let mut node = Node::new(NodeKind::Other("text".to_string()));
        node.text = Some(text.to_string());
        node
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn with_list_type(mut self, list_type: &str) -> Self {
        self.list_type = Some(list_type.to_string());
        self
    }

    /// Build a node from arbitrary JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Node::new(NodeKind::Other(String::new()));
        };

        let kind = NodeKind::parse(string_field(obj, "type").unwrap_or_default());
        let children = obj
            .get("children")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(Node::from_value).collect());

        Self {
            kind,
            text: string_field(obj, "text").map(str::to_string),
            children,
            tag: string_field(obj, "tag").map(str::to_string),
            list_type: string_field(obj, "listType").map(str::to_string),
        }
    }

    /// Plain text of this node.
    ///
    /// A direct `text` string wins; otherwise the children's text is
    /// concatenated depth-first with no separator. A node with neither
    /// yields an empty string.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        } else if let Some(children) = &self.children {
            for child in children {
                child.collect_text(out);
            }
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Node::from_value(&value))
    }
}

fn string_field<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

/// A complete rich-text document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub root: Node,
}

impl Document {
    /// A document whose root owns the given children
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            root: Node::new(NodeKind::Root).with_children(children),
        }
    }

    /// Top-level nodes, if the root has a `children` sequence
    pub fn children(&self) -> Option<&[Node]> {
        self.root.children.as_deref()
    }

    /// Build a document from arbitrary JSON. Never fails.
    pub fn from_value(value: &Value) -> Self {
        let root = value
            .get("root")
            .map(Node::from_value)
            .unwrap_or_else(|| Node::new(NodeKind::Root));
        Self { root }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Document::from_value(&value))
    }
}
