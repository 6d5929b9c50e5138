//! Block-to-HTML translation.
//!
//! Every block becomes one HTML subtree; the subtrees are wrapped, in
//! document order, in a single `<div>`.

use crate::blocks::parse_blocks;
use crate::error::Result;
use crate::html::HtmlNode;
use crate::inline::tokenize;
use crate::types::{Block, BlockType, InlineNode, Style};

/// Convert a Markdown document to an HTML fragment wrapped in `<div>`.
pub fn markdown_to_html(document: &str) -> Result<String> {
    markdown_to_html_node(document)?.to_html()
}

/// Build the `<div>` tree for `document` without serializing it.
pub fn markdown_to_html_node(document: &str) -> Result<HtmlNode> {
    let children = parse_blocks(document)
        .iter()
        .map(block_to_html)
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent("div", children)
}

/// Translate one classified block.
pub fn block_to_html(block: &Block) -> Result<HtmlNode> {
    let text = block.text.as_str();
    match block.block_type {
        BlockType::Heading(level) => heading_to_html(text, level),
        BlockType::Paragraph => paragraph_to_html(text),
        BlockType::Quote => quote_to_html(text),
        BlockType::UnorderedList => unordered_list_to_html(text),
        BlockType::OrderedList => ordered_list_to_html(text),
        BlockType::Code => code_to_html(text),
    }
}

/// Map an inline node onto its HTML leaf.
pub fn inline_to_html(node: &InlineNode) -> Result<HtmlNode> {
    let text = node.text();
    let url = node.url().unwrap_or_default();
    Ok(match node.style() {
        Style::Plain => HtmlNode::text(text)?,
        Style::Bold => HtmlNode::leaf(Some("b"), text)?,
        Style::Italic => HtmlNode::leaf(Some("i"), text)?,
        Style::Code => HtmlNode::leaf(Some("code"), text)?,
        Style::Link => HtmlNode::leaf(Some("a"), text)?.with_attr("href", url),
        Style::Image => HtmlNode::leaf(Some("img"), text)?
            .with_attr("src", url)
            .with_attr("alt", text),
    })
}

/// Heading text is emitted literally; inline markup is not interpreted.
fn heading_to_html(block: &str, level: u8) -> Result<HtmlNode> {
    let hashes = usize::from(level);
    let rest = block.get(hashes..).unwrap_or_default();
    let rest = rest.strip_prefix(' ').unwrap_or(rest);
    HtmlNode::leaf(Some(format!("h{level}").as_str()), rest)
}

fn paragraph_to_html(text: &str) -> Result<HtmlNode> {
    let children = tokenize(text)?
        .iter()
        .map(inline_to_html)
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent("p", children)
}

/// Each line becomes its own paragraph. A bare `>` line has nothing to wrap
/// and fails as an empty `p`.
fn quote_to_html(block: &str) -> Result<HtmlNode> {
    let paragraphs = block
        .split('\n')
        .map(|line| {
            let stripped = line.strip_prefix('>').unwrap_or(line);
            paragraph_to_html(stripped.trim_start_matches(' '))
        })
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent("blockquote", paragraphs)
}

fn unordered_list_to_html(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let item = line.strip_prefix("- ").unwrap_or(line);
            HtmlNode::leaf(Some("li"), item.trim_end())
        })
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent("ul", items)
}

fn ordered_list_to_html(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| {
            let item = line.split_once(". ").map_or(line, |(_, rest)| rest);
            HtmlNode::leaf(Some("li"), item.trim())
        })
        .collect::<Result<Vec<_>>>()?;
    HtmlNode::parent("ol", items)
}

/// Inner whitespace and newlines are kept exactly.
fn code_to_html(block: &str) -> Result<HtmlNode> {
    let code = HtmlNode::leaf(Some("code"), block.trim_matches('`'))?;
    HtmlNode::parent("pre", vec![code])
}

// ------------------------------------------------------------------
// Full pages
// ------------------------------------------------------------------

/// Configuration for full-page HTML rendering.
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    /// Page title. Falls back to the first `# ` heading, then "Untitled".
    pub title: Option<String>,
    /// Language code for `<html lang>` (default: "en").
    pub lang: Option<String>,
    /// Optional stylesheet href linked from `<head>`.
    pub stylesheet: Option<String>,
}

const FALLBACK_TITLE: &str = "Untitled";

/// Text of the first level-1 heading in `document`.
pub fn extract_title(document: &str) -> Option<String> {
    parse_blocks(document)
        .into_iter()
        .find(|b| b.block_type == BlockType::Heading(1))
        .map(|b| b.text.get(1..).unwrap_or_default().trim().to_string())
}

/// Render `document` as a complete HTML page.
pub fn to_html_page(document: &str, config: &PageConfig) -> Result<String> {
    let body = markdown_to_html(document)?;
    let lang = config.lang.as_deref().unwrap_or("en");

    // Resolve title: explicit config > first h1 > fallback
    let title = config
        .title
        .clone()
        .or_else(|| extract_title(document))
        .unwrap_or_else(|| FALLBACK_TITLE.to_string());

    let mut head_extra = String::new();
    if let Some(href) = &config.stylesheet {
        head_extra.push_str(&format!(
            "\n    <link rel=\"stylesheet\" href=\"{}\">",
            escape_html(href)
        ));
    }

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>{head_extra}
</head>
<body>
{body}
</body>
</html>"#,
        lang = escape_html(lang),
        title = escape_html(&title),
        head_extra = head_extra,
        body = body,
    ))
}

/// Escape text for use in the page shell. Body content is never escaped.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
