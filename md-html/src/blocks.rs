//! Block segmentation and classification.
//!
//! A document is cut on blank lines into trimmed blocks, and each block gets
//! exactly one [`BlockType`]. Classification is total: anything that does not
//! match a structural rule is a paragraph.

use crate::types::{Block, BlockType};

const CODE_FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Split `document` into blocks separated by one or more empty lines.
///
/// Each block is trimmed; blocks that end up empty are dropped.
pub fn segment_blocks(document: &str) -> Vec<String> {
    let normalised = document.replace("\r\n", "\n");

    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in normalised.split('\n') {
        if line.is_empty() {
            push_block(&mut blocks, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_block(&mut blocks, &current);

    blocks
}

fn push_block(blocks: &mut Vec<String>, lines: &[&str]) {
    let joined = lines.join("\n");
    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        blocks.push(trimmed.to_string());
    }
}

/// Segment and classify a whole document.
pub fn parse_blocks(document: &str) -> Vec<Block> {
    segment_blocks(document)
        .into_iter()
        .map(|text| {
            let block_type = classify(&text);
            log::debug!("classified block as {block_type:?}: {:?}", first_line(&text));
            Block { text, block_type }
        })
        .collect()
}

fn first_line(text: &str) -> &str {
    text.split('\n').next().unwrap_or_default()
}

/// Determine the structural type of a single block. First match wins:
/// heading, code, quote, unordered list, ordered list, paragraph.
pub fn classify(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        BlockType::Heading(level)
    } else if is_code(block) {
        BlockType::Code
    } else if is_quote(block) {
        BlockType::Quote
    } else if is_unordered_list(block) {
        BlockType::UnorderedList
    } else if is_ordered_list(block) {
        BlockType::OrderedList
    } else {
        BlockType::Paragraph
    }
}

/// Number of leading `#` when the block opens with 1..=6 of them followed by
/// a space.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&hashes) {
        return None;
    }
    if block[hashes..].starts_with(' ') {
        u8::try_from(hashes).ok()
    } else {
        None
    }
}

fn is_code(block: &str) -> bool {
    block.starts_with(CODE_FENCE) && block.ends_with(CODE_FENCE)
}

fn is_quote(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with('>'))
}

fn is_unordered_list(block: &str) -> bool {
    block.split('\n').all(|line| line.starts_with("- "))
}

/// Every line must read `N. ` with `N` counting up from 1.
fn is_ordered_list(block: &str) -> bool {
    block
        .split('\n')
        .enumerate()
        .all(|(i, line)| ordinal(line) == Some(i + 1))
}

/// The number before the first `. ` in `line`, if it is all digits.
fn ordinal(line: &str) -> Option<usize> {
    let (prefix, _) = line.split_once(". ")?;
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

// ------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------
