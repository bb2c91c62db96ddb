use crate::model::TextBuffer;

// NOTE: c locale isspace, including vertical tab and form feed
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_space_at(buffer: &TextBuffer, index: usize) -> bool {
    buffer.get(index).is_some_and(is_space)
}

/// Skips the word under the cursor and the whitespace behind it.
pub fn forward(buffer: &TextBuffer, index: usize) -> usize {
    let mut index = index.min(buffer.len());
    while index < buffer.len() && !is_space_at(buffer, index) {
        index += 1;
    }

    while index < buffer.len() && is_space_at(buffer, index) {
        index += 1;
    }
    index
}

/// Mirrors `forward`: skips non space bytes, then whitespace, walking
/// towards the buffer start.
pub fn backward(buffer: &TextBuffer, index: usize) -> usize {
    let mut index = index.min(buffer.len());
    while index > 0 && !is_space_at(buffer, index) {
        index -= 1;
    }

    while index > 0 && is_space_at(buffer, index) {
        index -= 1;
    }
    index
}
