use crate::model::TextBuffer;

pub const TAB_WIDTH: usize = 8;

/// Screen column after drawing `byte` at `column`. Tabs jump to the next
/// multiple of `TAB_WIDTH`, carriage returns take no space.
pub fn advance_column(column: usize, byte: u8) -> usize {
    match byte {
        b'\t' => column + TAB_WIDTH - column % TAB_WIDTH,
        b'\r' => column,
        _ => column + 1,
    }
}

/// Offset just past the nearest `\n` before `index`, or `0`.
pub fn line_start(buffer: &TextBuffer, index: usize) -> usize {
    let bytes = buffer.as_bytes();
    let index = index.min(bytes.len());

    match bytes[..index].iter().rposition(|byte| *byte == b'\n') {
        Some(newline) => newline + 1,
        None => 0,
    }
}

/// Offset just past the next `\n` at or after `index`. Saturates at the
/// last byte and never returns `len`.
pub fn next_line_start(buffer: &TextBuffer, index: usize) -> usize {
    let last_index = match buffer.last_index() {
        Some(it) => it,
        None => return 0,
    };

    let bytes = buffer.as_bytes();
    let index = index.min(bytes.len());
    let next = match bytes[index..].iter().position(|byte| *byte == b'\n') {
        Some(newline) => index + newline + 1,
        None => bytes.len(),
    };

    next.min(last_index)
}

/// Byte before the start of the next line. On the last line this inherits
/// the saturation of `next_line_start`.
pub fn line_end(buffer: &TextBuffer, index: usize) -> usize {
    next_line_start(buffer, index).saturating_sub(1)
}

/// Walks forward from `index` within its line until the screen column
/// reaches `column`.
pub fn column_adjust(buffer: &TextBuffer, index: usize, column: usize) -> usize {
    let mut index = index.min(buffer.len());
    let mut current = 0;
    while current < column {
        match buffer.get(index) {
            Some(b'\n') | None => break,
            Some(byte) => current = advance_column(current, byte),
        }
        index += 1;
    }
    index
}
