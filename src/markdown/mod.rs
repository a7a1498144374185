//! Markdown segmentation into code and text blocks.
//!
//! A document is scanned top to bottom and decomposed into an ordered
//! sequence of [`Segment`]s: fenced code blocks are kept whole (fence lines
//! included), while every other line becomes its own single-line text
//! segment. Reassembling the segments in order reproduces the document.

/// Fence marker that opens and closes a code block.
const FENCE: &str = "```";

/// Classification of a markdown segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A fenced code block. Never translated.
    Code,
    /// A single non-fenced source line.
    Text,
}

/// A contiguous run of source lines: one whole fenced code block, or exactly
/// one plain text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub lines: Vec<String>,
}

impl Segment {
    fn text(line: &str) -> Self {
        Self {
            kind: SegmentKind::Text,
            lines: vec![line.to_string()],
        }
    }

    fn code(lines: Vec<String>) -> Self {
        Self {
            kind: SegmentKind::Code,
            lines,
        }
    }
}

/// Returns `true` if the line toggles fenced-code state.
fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(FENCE)
}

/// Splits a markdown document into an ordered sequence of segments.
///
/// Adjacent text lines are never merged: each one is its own segment. A code
/// segment's lines always begin and end with a fence marker line. Lines are
/// carried verbatim, with no trimming or normalization.
///
/// A document that ends inside an unterminated fence drops the open block;
/// its lines are scanned but never emitted.
pub fn segment(document: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut in_code = false;
    let mut code_lines: Vec<String> = Vec::new();

    for line in document.lines() {
        if is_fence(line) && !in_code {
            in_code = true;
            code_lines.push(line.to_string());
        } else if is_fence(line) && in_code {
            in_code = false;
            code_lines.push(line.to_string());
            segments.push(Segment::code(std::mem::take(&mut code_lines)));
        } else if in_code {
            code_lines.push(line.to_string());
        } else {
            segments.push(Segment::text(line));
        }
    }

    segments
}
