//! `md-html`: converter for a small, deterministic Markdown dialect.
//!
//! The pipeline is: segment the document into blank-line separated blocks,
//! classify each block, tokenize inline spans inside it, translate to an
//! [`HtmlNode`] tree and serialize the tree under a single `<div>`.
//!
//! This is not CommonMark. Inline styles do not nest, there is no escaping,
//! and unclosed `_`, `` ` `` or `**` delimiters are errors.
//!
//! # Quick start
//!
//! ```
//! let html = md_html::markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

pub mod blocks;
pub mod error;
pub mod html;
pub mod inline;
pub mod render_html;
pub mod types;

pub use error::*;
pub use html::HtmlNode;
pub use render_html::{
    PageConfig, extract_title, markdown_to_html, markdown_to_html_node, to_html_page,
};
pub use types::*;
