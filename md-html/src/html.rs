//! HTML node tree and serialization.
//!
//! Values are written verbatim: documents are trusted input and nothing in
//! the tree is escaped.

use crate::error::{Error, Result};
use crate::types::InlineNode;

/// Attribute name/value pairs, rendered in insertion order.
pub type Attributes = Vec<(String, String)>;

/// An element or text leaf in the output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A value with an optional wrapping tag. Without a tag the value is
    /// emitted as bare text.
    Leaf {
        tag: Option<String>,
        value: String,
        attrs: Attributes,
    },
    /// An element wrapping one or more child nodes.
    Parent {
        tag: String,
        children: Vec<HtmlNode>,
        attrs: Attributes,
    },
}

impl HtmlNode {
    /// A leaf, optionally tagged. The value must be non-empty.
    pub fn leaf(tag: Option<&str>, value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyValue);
        }
        Ok(HtmlNode::Leaf {
            tag: tag.filter(|t| !t.is_empty()).map(str::to_string),
            value,
            attrs: Attributes::new(),
        })
    }

    /// An untagged text leaf.
    pub fn text(value: impl Into<String>) -> Result<Self> {
        Self::leaf(None, value)
    }

    /// An element with children. Needs a non-empty tag and at least one child.
    pub fn parent(tag: &str, children: Vec<HtmlNode>) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::MissingTag);
        }
        if children.is_empty() {
            return Err(Error::NoChildren {
                tag: tag.to_string(),
            });
        }
        Ok(HtmlNode::Parent {
            tag: tag.to_string(),
            children,
            attrs: Attributes::new(),
        })
    }

    /// Append an attribute, keeping earlier ones first.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => {
                attrs.push((name.into(), value.into()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } => tag.as_deref(),
            HtmlNode::Parent { tag, .. } => Some(tag),
        }
    }

    pub fn attrs(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attrs, .. } | HtmlNode::Parent { attrs, .. } => attrs,
        }
    }

    /// Serialize this node and everything under it.
    pub fn to_html(&self) -> Result<String> {
        serialize(self)
    }
}

impl PartialEq<HtmlNode> for InlineNode {
    /// Inline and HTML nodes are never equal.
    fn eq(&self, other: &HtmlNode) -> bool {
        log::warn!("compared inline node {self:?} against non-inline value {other:?}");
        false
    }
}

/// Serialize `node` to an HTML string.
///
/// Fails only on a hand-built `Parent` with an empty tag or no children.
pub fn serialize(node: &HtmlNode) -> Result<String> {
    let mut out = String::new();
    write_node(node, &mut out)?;
    Ok(out)
}

fn write_node(node: &HtmlNode, out: &mut String) -> Result<()> {
    match node {
        HtmlNode::Leaf { tag, value, attrs } => match tag.as_deref().filter(|t| !t.is_empty()) {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(tag, attrs, out);
                out.push_str(value);
                close_tag(tag, out);
            }
        },
        HtmlNode::Parent {
            tag,
            children,
            attrs,
        } => {
            if tag.is_empty() {
                return Err(Error::MissingTag);
            }
            if children.is_empty() {
                return Err(Error::NoChildren { tag: tag.clone() });
            }
            open_tag(tag, attrs, out);
            for child in children {
                write_node(child, out)?;
            }
            close_tag(tag, out);
        }
    }
    Ok(())
}

fn open_tag(tag: &str, attrs: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push_str(&render_attrs(attrs));
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// Render attributes as ` key="value"` pairs in insertion order.
pub fn render_attrs(attrs: &Attributes) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!(" {key}=\"{value}\""))
        .collect()
}
