use std::collections::VecDeque;

use crate::{model::viewport::ScreenPosition, model::TextBuffer, update::line::advance_column};

/// Result of laying out a page starting at a given offset.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Walk {
    pub cursor: Option<ScreenPosition>,
    pub end_column: usize,
    pub end_row: usize,
    pub exhausted: bool,
    pub page_end: usize,
}

impl Walk {
    pub fn marker_row(&self, height: usize) -> Option<usize> {
        let row = self.end_row + 1;
        if self.exhausted && row < height {
            Some(row)
        } else {
            None
        }
    }

    /// Whether the cursor landed on screen. A cursor on the end of the
    /// document additionally needs room for the end marker.
    pub fn fits(&self, cursor: usize, len: usize, height: usize) -> bool {
        if self.cursor.is_none() {
            return false;
        }

        cursor < len || height < 2 || self.marker_row(height).is_some()
    }
}

/// Walks the buffer from `page_start` row by row, calling `draw` for every
/// visible byte except `\r`. Rows break on `\n` and soft wrap once the
/// column reaches `width`.
pub fn walk<F>(
    buffer: &TextBuffer,
    page_start: usize,
    cursor: usize,
    width: usize,
    height: usize,
    mut draw: F,
) -> Walk
where
    F: FnMut(usize, usize, u8),
{
    let mut index = page_start;
    let mut row = 0;
    let mut column = 0;
    let mut position = None;

    loop {
        if index == cursor && row < height {
            position = Some(ScreenPosition::new(row, column));
        }

        if row >= height {
            break;
        }

        let byte = match buffer.get(index) {
            Some(it) => it,
            None => break,
        };

        if byte != b'\r' {
            draw(row, column, byte);
            column = advance_column(column, byte);
        }

        if byte == b'\n' || column >= width {
            row += 1;
            column = 0;
        }

        index += 1;
    }

    Walk {
        cursor: position,
        end_column: column,
        end_row: row,
        exhausted: index >= buffer.len(),
        page_end: index,
    }
}

/// Offset of the screen row following the one starting at `index`.
pub fn next_row_start(buffer: &TextBuffer, index: usize, width: usize) -> usize {
    row_end(buffer, index, width).0
}

/// End of the row starting at `index`, and whether a newline or the width
/// broke it. An unbroken row runs into the end of the buffer.
fn row_end(buffer: &TextBuffer, index: usize, width: usize) -> (usize, bool) {
    let mut index = index;
    let mut column = 0;
    while let Some(byte) = buffer.get(index) {
        index += 1;
        if byte == b'\n' {
            return (index, true);
        }

        column = advance_column(column, byte);
        if column >= width {
            return (index, true);
        }
    }
    (index, false)
}

/// Start of the topmost row of a `rows` high window whose last row holds
/// `index`. Rows are counted from `page_start`, which the result never
/// passes backwards.
pub fn row_start_above(
    buffer: &TextBuffer,
    page_start: usize,
    index: usize,
    width: usize,
    rows: usize,
) -> usize {
    let mut starts = VecDeque::with_capacity(rows);
    let mut start = page_start;
    loop {
        if starts.len() >= rows {
            starts.pop_front();
        }
        starts.push_back(start);

        let (next, broken) = row_end(buffer, start, width);
        if index < next || !broken {
            break;
        }
        start = next;
    }

    starts.front().copied().unwrap_or(page_start)
}
