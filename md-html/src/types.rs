use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Style of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl Style {
    /// Whether nodes of this style must carry a destination URL.
    pub fn takes_url(self) -> bool {
        matches!(self, Style::Link | Style::Image)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Style::Plain => "plain",
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::Code => "code",
            Style::Link => "link",
            Style::Image => "image",
        };
        f.write_str(label)
    }
}

/// A run of text tagged with a [`Style`].
///
/// Link and image nodes always carry a non-empty URL; every other style never
/// does. Nodes are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineNode {
    text: String,
    style: Style,
    url: Option<String>,
}

impl InlineNode {
    /// Build a node, checking that `url` is present exactly when the style
    /// needs one.
    pub fn try_new(text: impl Into<String>, style: Style, url: Option<String>) -> Result<Self> {
        let url = url.filter(|u| !u.is_empty());
        match (style.takes_url(), &url) {
            (true, None) => Err(Error::MissingUrl { style }),
            (false, Some(_)) => Err(Error::UnexpectedUrl { style }),
            _ => Ok(Self {
                text: text.into(),
                style,
                url,
            }),
        }
    }

    /// A URL-less node. Link and image styles are rejected.
    pub fn new(text: impl Into<String>, style: Style) -> Result<Self> {
        Self::try_new(text, style, None)
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: Style::Plain,
            url: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        Self::try_new(text, Style::Link, Some(url.into()))
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        Self::try_new(alt, Style::Image, Some(url.into()))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// Structural type of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "level", rename_all = "snake_case")]
pub enum BlockType {
    Paragraph,
    /// Heading level, 1 through 6.
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

/// A trimmed, blank-line-separated chunk of the source document together with
/// its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub text: String,
    pub block_type: BlockType,
}
