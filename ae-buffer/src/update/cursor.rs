use crate::{
    message::CursorDirection,
    model::{viewport::ViewPort, Cursor, TextBuffer},
};

use super::{line, word};

pub fn update_cursor_by_direction(
    viewport: &ViewPort,
    buffer: &TextBuffer,
    cursor: &mut Cursor,
    direction: &CursorDirection,
) {
    let column = viewport.cursor_position.column;
    cursor.index = match direction {
        CursorDirection::Bottom => buffer.last_index().unwrap_or_default(),
        CursorDirection::Down => {
            line::column_adjust(buffer, line::next_line_start(buffer, cursor.index), column)
        }
        CursorDirection::Left => cursor.index.saturating_sub(1),
        CursorDirection::LineEnd => line::line_end(buffer, cursor.index),
        CursorDirection::LineStart => line::line_start(buffer, cursor.index),
        CursorDirection::Right => (cursor.index + 1).min(buffer.len()),
        CursorDirection::Top => 0,
        CursorDirection::Up => {
            let previous = line::line_start(buffer, cursor.index).saturating_sub(1);
            line::column_adjust(buffer, line::line_start(buffer, previous), column)
        }
        CursorDirection::WordBackward => word::backward(buffer, cursor.index),
        CursorDirection::WordForward => word::forward(buffer, cursor.index),
    };
}

pub fn set_outbound_cursor_to_inbound_position(cursor: &mut Cursor, buffer: &TextBuffer) {
    if cursor.index > buffer.len() {
        cursor.index = buffer.len();
    }
}
