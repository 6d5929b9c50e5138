//! Property-based tests using proptest.

use md_html::inline::split_by_delimiter;
use md_html::{Error, InlineNode, Style, markdown_to_html};
use proptest::prelude::*;

proptest! {
    /// Arbitrary input either converts or returns an error, never panics.
    #[test]
    fn any_markdown_no_panic(input in "\\PC{0,500}") {
        let _ = markdown_to_html(&input);
    }

    /// Text with no reserved characters becomes a single paragraph.
    #[test]
    fn plain_text_is_one_paragraph(text in "[A-Za-z][A-Za-z0-9 ,]{0,80}[A-Za-z0-9]") {
        let html = markdown_to_html(&text).unwrap();
        prop_assert_eq!(html, format!("<div><p>{text}</p></div>"));
    }

    /// Two occurrences of a delimiter give before/styled/after.
    #[test]
    fn paired_delimiter_splits_in_three(
        before in "[a-z ]{1,20}",
        inner in "[a-z ]{1,20}",
        after in "[a-z ]{1,20}",
        (delimiter, style) in prop_oneof![
            Just(("**", Style::Bold)),
            Just(("_", Style::Italic)),
            Just(("`", Style::Code)),
        ],
    ) {
        let text = format!("{before}{delimiter}{inner}{delimiter}{after}");
        let nodes = split_by_delimiter(vec![InlineNode::plain(text)], delimiter, style).unwrap();
        prop_assert_eq!(nodes.len(), 3);
        prop_assert_eq!(nodes[1].style(), style);
        prop_assert_eq!(nodes[1].text(), inner.as_str());
    }

    /// A single unmatched `**` always fails, whatever surrounds it.
    #[test]
    fn unmatched_bold_always_fails(before in "[a-z ]{0,30}", after in "[a-z ]{0,30}") {
        let text = format!("{before}**{after}");
        let err = split_by_delimiter(vec![InlineNode::plain(text)], "**", Style::Bold).unwrap_err();
        let is_unclosed = matches!(err, Error::UnclosedDelimiter { .. });
        prop_assert!(is_unclosed);
    }

    /// Serializing the same tree twice gives the same string.
    #[test]
    fn serialization_is_idempotent(words in proptest::collection::vec("[a-z]{1,8}", 1..10)) {
        let document = words.join("\n\n");
        let tree = md_html::markdown_to_html_node(&document).unwrap();
        prop_assert_eq!(tree.to_html().unwrap(), tree.to_html().unwrap());
    }
}
