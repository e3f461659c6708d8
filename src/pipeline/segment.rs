//! Markdown segmentation: one chunk per output slide.

use crate::model::ContentChunk;

/// Splits raw markdown into ordered content chunks.
///
/// A line that is exactly `---` after trimming is a separator. Chunks are
/// trimmed of surrounding whitespace and discarded when empty; surviving
/// chunks are numbered from zero in input order. Chunk order is the only
/// place slide order is determined.
pub fn segment(markdown: &str) -> Vec<ContentChunk> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in markdown.lines() {
        if line.trim() == "---" {
            push_chunk(&mut chunks, &mut current);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_chunk(&mut chunks, &mut current);

    chunks
}

fn push_chunk(chunks: &mut Vec<ContentChunk>, current: &mut String) {
    let text = current.trim();
    if !text.is_empty() {
        chunks.push(ContentChunk::new(chunks.len(), text));
    }
    current.clear();
}
