//! Inline span splitter.
//!
//! Tokenizes the text of a block into [`InlineNode`]s with a fixed sequence
//! of passes: italic (`_`), code (`` ` ``), bold (`**`), then links, then
//! images. Each pass only looks inside the `Plain` nodes left over by the
//! previous one, so styles never nest.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::types::{InlineNode, Style};

pub const ITALIC_DELIMITER: &str = "_";
pub const CODE_DELIMITER: &str = "`";
pub const BOLD_DELIMITER: &str = "**";

/// Delimiter passes in the order they run. Changing this order changes the
/// output for overlapping delimiters.
pub const DELIMITER_PASSES: [(&str, Style); 3] = [
    (ITALIC_DELIMITER, Style::Italic),
    (CODE_DELIMITER, Style::Code),
    (BOLD_DELIMITER, Style::Bold),
];

/// Run the full inline pipeline over `text`.
pub fn tokenize(text: &str) -> Result<Vec<InlineNode>> {
    let mut nodes = vec![InlineNode::plain(text)];
    for (delimiter, style) in DELIMITER_PASSES {
        nodes = split_by_delimiter(nodes, delimiter, style)?;
    }
    let nodes = split_links(nodes)?;
    split_images(nodes)
}

/// Split every `Plain` node on `delimiter`, turning the odd-numbered pieces
/// into nodes of `style`.
///
/// An even number of pieces means a delimiter was never closed, which is an
/// [`Error::UnclosedDelimiter`]. Empty pieces are dropped and non-plain nodes
/// pass through untouched.
pub fn split_by_delimiter(
    nodes: Vec<InlineNode>,
    delimiter: &str,
    style: Style,
) -> Result<Vec<InlineNode>> {
    if delimiter.is_empty() {
        return Ok(nodes);
    }

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.style() != Style::Plain {
            out.push(node);
            continue;
        }

        let pieces: Vec<&str> = node.text().split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(Error::UnclosedDelimiter {
                delimiter: delimiter.to_string(),
                text: node.text().to_string(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(InlineNode::plain(piece));
            } else {
                out.push(InlineNode::new(piece, style)?);
            }
        }
    }

    Ok(out)
}

/// Collect `(alt text, url)` for every `![alt](url)` in `text`, left to right.
pub fn extract_image_refs(text: &str) -> Vec<(String, String)> {
    find_refs(text, RefKind::Image)
        .into_iter()
        .map(RefMatch::into_pair)
        .collect()
}

/// Collect `(link text, url)` for every `[text](url)` in `text` that is not
/// part of an image reference.
pub fn extract_link_refs(text: &str) -> Vec<(String, String)> {
    find_refs(text, RefKind::Link)
        .into_iter()
        .map(RefMatch::into_pair)
        .collect()
}

/// Cut `Plain` nodes at every image reference.
pub fn split_images(nodes: Vec<InlineNode>) -> Result<Vec<InlineNode>> {
    split_refs(nodes, RefKind::Image)
}

/// Cut `Plain` nodes at every link reference. Image references are left
/// inside the surrounding plain text.
pub fn split_links(nodes: Vec<InlineNode>) -> Result<Vec<InlineNode>> {
    split_refs(nodes, RefKind::Link)
}

// ------------------------------------------------------------------
// Reference matching
// ------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RefKind {
    Image,
    Link,
}

impl RefKind {
    fn regex(self) -> &'static Regex {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        static LINK: OnceLock<Regex> = OnceLock::new();
        match self {
            RefKind::Image => IMAGE.get_or_init(|| {
                Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
            }),
            RefKind::Link => LINK.get_or_init(|| {
                Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex")
            }),
        }
    }

    fn node(self, label: &str, url: &str) -> Result<InlineNode> {
        match self {
            RefKind::Image => InlineNode::image(label, url),
            RefKind::Link => InlineNode::link(label, url),
        }
    }
}

#[derive(Debug)]
struct RefMatch<'a> {
    start: usize,
    end: usize,
    label: &'a str,
    url: &'a str,
}

impl RefMatch<'_> {
    fn into_pair(self) -> (String, String) {
        (self.label.to_string(), self.url.to_string())
    }
}

/// The regex crate has no lookbehind, so link matches directly after a `!`
/// are discarded here. Such a match is always a whole image reference, and no
/// other link can start inside one.
fn find_refs(text: &str, kind: RefKind) -> Vec<RefMatch<'_>> {
    kind.regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if kind == RefKind::Link && text[..whole.start()].ends_with('!') {
                return None;
            }
            Some(RefMatch {
                start: whole.start(),
                end: whole.end(),
                label: caps.get(1).map_or("", |m| m.as_str()),
                url: caps.get(2).map_or("", |m| m.as_str()),
            })
        })
        .collect()
}

fn split_refs(nodes: Vec<InlineNode>, kind: RefKind) -> Result<Vec<InlineNode>> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        if node.style() != Style::Plain {
            out.push(node);
            continue;
        }

        match cut_at_refs(node.text(), kind)? {
            Some(pieces) => out.extend(pieces),
            None => out.push(node),
        }
    }

    Ok(out)
}

/// `None` when `text` holds no reference of `kind`.
fn cut_at_refs(text: &str, kind: RefKind) -> Result<Option<Vec<InlineNode>>> {
    let matches = find_refs(text, kind);
    if matches.is_empty() {
        return Ok(None);
    }

    let mut pieces = Vec::with_capacity(matches.len() * 2 + 1);
    let mut cursor = 0;
    for m in &matches {
        let before = &text[cursor..m.start];
        if !before.is_empty() {
            pieces.push(InlineNode::plain(before));
        }
        pieces.push(kind.node(m.label, m.url)?);
        cursor = m.end;
    }
    let rest = &text[cursor..];
    if !rest.is_empty() {
        pieces.push(InlineNode::plain(rest));
    }

    Ok(Some(pieces))
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
