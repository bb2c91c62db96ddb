use crate::{
    layout,
    message::{CursorDirection, ViewPortDirection},
    model::{viewport::ViewPort, Cursor, TextBuffer},
};

use super::{cursor, line};

/// Page start that puts the line holding `cursor` on the bottom row of a
/// screen with `height` rows. One row less is used when the page runs into
/// the end of the buffer, leaving room for the end marker.
pub fn derive_page_start(buffer: &TextBuffer, cursor: usize, height: usize) -> usize {
    let mut page_start = line::next_line_start(buffer, cursor);
    let steps = if Some(page_start) == buffer.last_index() {
        height.saturating_sub(1)
    } else {
        height
    };

    for _ in 0..steps {
        page_start = line::line_start(buffer, page_start.saturating_sub(1));
    }
    page_start.min(line::line_start(buffer, cursor))
}

pub fn update_by_cursor(viewport: &mut ViewPort, buffer: &TextBuffer, cursor: &Cursor) {
    let index = cursor.index;
    let height = usize::from(viewport.height);
    let width = usize::from(viewport.width);

    if index < viewport.page_start {
        viewport.page_start = line::line_start(buffer, index);
    }

    if viewport.page_end <= index {
        viewport.page_start = derive_page_start(buffer, index, height);
    }

    if height == 0 || width == 0 || viewport.page_start >= index {
        return;
    }

    // NOTE: soft wrapped lines can push the cursor below the last row
    let walk = layout::walk(
        buffer,
        viewport.page_start,
        index,
        width,
        height,
        |_, _, _| {},
    );
    if walk.fits(index, buffer.len(), height) {
        return;
    }

    let rows = if index == buffer.len() && height >= 2 {
        height - 1
    } else {
        height
    };

    tracing::trace!("cursor off page, scrolling to its row: {:?}", walk);
    viewport.page_start =
        layout::row_start_above(buffer, viewport.page_start, index, width, rows);
}

pub fn update_by_direction(
    viewport: &mut ViewPort,
    buffer: &TextBuffer,
    cursor: &mut Cursor,
    direction: &ViewPortDirection,
) {
    match direction {
        ViewPortDirection::PageDown => {
            let page_start = line::line_start(buffer, viewport.page_end.saturating_sub(1));
            viewport.page_start = page_start;
            cursor.index = page_start;

            for _ in 0..viewport.cursor_position.row {
                cursor::update_cursor_by_direction(
                    viewport,
                    buffer,
                    cursor,
                    &CursorDirection::Down,
                );
            }

            viewport.page_end = buffer.last_index().unwrap_or_default();
        }
        ViewPortDirection::PageUp => {
            for _ in 1..viewport.height {
                viewport.page_start =
                    line::line_start(buffer, viewport.page_start.saturating_sub(1));
                cursor::update_cursor_by_direction(viewport, buffer, cursor, &CursorDirection::Up);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::viewport::ScreenPosition;

    fn numbered_lines(count: usize) -> TextBuffer {
        let content: String = (0..count).map(|i| format!("{}\n", i % 10)).collect();
        TextBuffer::from(content.as_str())
    }

    fn viewport(width: u16, height: u16) -> ViewPort {
        ViewPort {
            height,
            width,
            ..Default::default()
        }
    }

    #[test]
    fn derive_page_start_puts_cursor_line_at_bottom() {
        let buffer = numbered_lines(10);

        assert_eq!(6, derive_page_start(&buffer, 10, 3));
        assert_eq!(0, derive_page_start(&buffer, 2, 3));
        assert_eq!(0, derive_page_start(&buffer, 0, 3));
    }

    #[test]
    fn derive_page_start_leaves_room_at_buffer_end() {
        let buffer = numbered_lines(5);

        assert_eq!(6, derive_page_start(&buffer, 9, 3));
        assert_eq!(6, derive_page_start(&buffer, 10, 3));
    }

    #[test]
    fn derive_page_start_never_passes_cursor_line() {
        let buffer = TextBuffer::from("abc");

        assert_eq!(0, derive_page_start(&buffer, 0, 1));
    }

    #[test]
    fn derive_page_start_on_empty_buffer() {
        assert_eq!(0, derive_page_start(&TextBuffer::default(), 0, 5));
    }

    #[test]
    fn update_by_cursor_scrolls_up_to_line_start() {
        let buffer = numbered_lines(10);
        let mut viewport = viewport(10, 3);
        viewport.page_start = 8;
        viewport.page_end = 14;

        update_by_cursor(&mut viewport, &buffer, &Cursor::new(5));

        assert_eq!(4, viewport.page_start);
    }

    #[test]
    fn update_by_cursor_keeps_page_while_cursor_inside() {
        let buffer = numbered_lines(10);
        let mut viewport = viewport(10, 3);
        viewport.page_start = 4;
        viewport.page_end = 10;

        update_by_cursor(&mut viewport, &buffer, &Cursor::new(8));

        assert_eq!(4, viewport.page_start);
    }

    #[test]
    fn update_by_cursor_scrolls_down_past_page_end() {
        let buffer = numbered_lines(10);
        let mut viewport = viewport(10, 3);
        viewport.page_start = 0;
        viewport.page_end = 6;

        update_by_cursor(&mut viewport, &buffer, &Cursor::new(6));

        assert_eq!(2, viewport.page_start);
    }

    #[test]
    fn update_by_cursor_scrolls_rows_of_wrapped_lines() {
        let buffer = TextBuffer::from("abcdefghij\nk\n");
        let mut viewport = viewport(2, 3);

        update_by_cursor(&mut viewport, &buffer, &Cursor::new(9));

        assert_eq!(4, viewport.page_start);
    }

    #[test]
    fn update_by_cursor_jumps_to_cursor_row_on_long_line() {
        let content = format!("{}\n", "x".repeat(1000));
        let buffer = TextBuffer::from(content.as_str());
        let mut viewport = viewport(10, 3);

        update_by_cursor(&mut viewport, &buffer, &Cursor::new(995));

        assert_eq!(970, viewport.page_start);
    }

    #[test]
    fn update_by_cursor_leaves_marker_row_for_cursor_at_end() {
        let buffer = TextBuffer::from("x".repeat(100).as_str());
        let mut viewport = viewport(10, 3);

        update_by_cursor(&mut viewport, &buffer, &Cursor::new(100));

        assert_eq!(90, viewport.page_start);
        let walk = layout::walk(&buffer, 90, 100, 10, 3, |_, _, _| {});
        assert!(walk.fits(100, buffer.len(), 3));
    }

    #[test]
    fn update_by_cursor_matches_row_by_row_scrolling() {
        let contents = [
            "abcdefghij\nk\n",
            "first line\n\tindented\r\n\nwrapped line that is long\nx\n",
            "\t\t\tx\n\n\nabcdefghijklmnopqrstuvwxyz",
            "abc",
        ];

        for content in contents {
            let buffer = TextBuffer::from(content);
            for height in 1..5 {
                for index in 0..=buffer.len() {
                    let mut expected = viewport(4, height);
                    let mut actual = viewport(4, height);

                    scroll_row_by_row(&mut expected, &buffer, index);
                    update_by_cursor(&mut actual, &buffer, &Cursor::new(index));

                    assert_eq!(
                        expected.page_start, actual.page_start,
                        "{:?} height {} cursor {}",
                        content, height, index
                    );
                }
            }
        }
    }

    fn scroll_row_by_row(viewport: &mut ViewPort, buffer: &TextBuffer, index: usize) {
        let height = usize::from(viewport.height);
        let width = usize::from(viewport.width);
        if viewport.page_end <= index {
            viewport.page_start = derive_page_start(buffer, index, height);
        }

        while viewport.page_start < index {
            let page_start = viewport.page_start;
            let walk = layout::walk(buffer, page_start, index, width, height, |_, _, _| {});
            if walk.fits(index, buffer.len(), height) {
                break;
            }
            viewport.page_start = layout::next_row_start(buffer, viewport.page_start, width);
        }
    }

    #[test]
    fn page_down_starts_at_last_visible_line() {
        let buffer = numbered_lines(20);
        let mut viewport = viewport(10, 5);
        viewport.page_start = 0;
        viewport.page_end = 10;
        viewport.cursor_position = ScreenPosition::new(2, 0);

        let mut cursor = Cursor::new(4);
        update_by_direction(&mut viewport, &buffer, &mut cursor, &ViewPortDirection::PageDown);

        assert_eq!(8, viewport.page_start);
        assert_eq!(12, cursor.index);
        assert_eq!(39, viewport.page_end);
    }

    #[test]
    fn page_up_moves_page_and_cursor_by_height_minus_one() {
        let buffer = numbered_lines(20);
        let mut viewport = viewport(10, 5);
        viewport.page_start = 20;
        viewport.page_end = 30;

        let mut cursor = Cursor::new(24);
        update_by_direction(&mut viewport, &buffer, &mut cursor, &ViewPortDirection::PageUp);

        assert_eq!(12, viewport.page_start);
        assert_eq!(16, cursor.index);
    }

    #[test]
    fn page_up_saturates_at_top() {
        let buffer = numbered_lines(20);
        let mut viewport = viewport(10, 5);
        viewport.page_start = 2;
        viewport.page_end = 12;

        let mut cursor = Cursor::new(4);
        update_by_direction(&mut viewport, &buffer, &mut cursor, &ViewPortDirection::PageUp);

        assert_eq!(0, viewport.page_start);
        assert_eq!(0, cursor.index);
    }
}
