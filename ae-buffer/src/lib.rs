use message::BufferMessage;
use model::{Buffer, BufferResult};
use ratatui::layout::{Position, Rect};

pub mod layout;
pub mod message;
pub mod model;
mod update;
mod view;

pub use update::{line, viewport::derive_page_start};
pub use view::EOF_MARKER;

pub fn update(buffer: &mut Buffer, messages: Vec<&BufferMessage>) -> Vec<BufferResult> {
    messages
        .into_iter()
        .flat_map(|message| update::update_buffer(buffer, message))
        .collect()
}

/// Reconciles the page with the cursor and draws it into `surface`.
/// Returns the absolute screen position of the cursor.
pub fn view(
    buffer: &mut Buffer,
    surface: &mut ratatui::buffer::Buffer,
    rect: Rect,
) -> Option<Position> {
    view::view(buffer, surface, rect)
}

#[cfg(test)]
mod tests {
    use ratatui::{buffer::Buffer as Surface, layout::Rect};

    use super::*;
    use crate::{
        message::{CursorDirection, TextModification, ViewPortDirection},
        model::{Cursor, TextBuffer},
    };

    fn buffer(content: &str) -> Buffer {
        Buffer {
            content: TextBuffer::from(content),
            ..Default::default()
        }
    }

    fn render(buffer: &mut Buffer, width: u16, height: u16) -> Option<Position> {
        let rect = Rect::new(0, 0, width, height);
        view(buffer, &mut Surface::empty(rect), rect)
    }

    #[test]
    fn update_reports_changes_only_for_mutations() {
        let mut buffer = buffer("hello world");

        let motion = BufferMessage::MoveCursor(CursorDirection::WordForward);
        assert!(update(&mut buffer, vec![&motion]).is_empty());
        assert_eq!(Cursor::new(6), buffer.cursor);

        let insert = BufferMessage::Modification(TextModification::Insert("big ".to_string()));
        assert_eq!(vec![BufferResult::Changed], update(&mut buffer, vec![&insert]));
        assert_eq!(b"hello big world", buffer.content.as_bytes());
        assert_eq!(Cursor::new(10), buffer.cursor);
    }

    #[test]
    fn vertical_motion_uses_rendered_column() {
        let mut buffer = buffer("\tab\n12345678901\n");
        buffer.cursor = Cursor::new(2);
        render(&mut buffer, 40, 10);

        let down = BufferMessage::MoveCursor(CursorDirection::Down);
        update(&mut buffer, vec![&down]);

        assert_eq!(13, buffer.cursor.index);

        render(&mut buffer, 40, 10);
        let up = BufferMessage::MoveCursor(CursorDirection::Up);
        update(&mut buffer, vec![&up]);

        assert_eq!(2, buffer.cursor.index);
    }

    #[test]
    fn page_down_and_up_keep_cursor_on_screen() {
        let content: String = (0..50).map(|i| format!("line {}\n", i)).collect();
        let mut buffer = buffer(&content);
        render(&mut buffer, 20, 10);

        let page_down = BufferMessage::MoveViewPort(ViewPortDirection::PageDown);
        update(&mut buffer, vec![&page_down]);
        let position = render(&mut buffer, 20, 10);

        assert_eq!(Some(Position::new(0, 0)), position);
        assert!(buffer.view_port.contains(buffer.cursor.index));
        assert_eq!(
            line::line_start(&buffer.content, buffer.cursor.index),
            buffer.view_port.page_start
        );

        let page_up = BufferMessage::MoveViewPort(ViewPortDirection::PageUp);
        update(&mut buffer, vec![&page_up]);
        render(&mut buffer, 20, 10);

        assert_eq!(0, buffer.view_port.page_start);
        assert_eq!(0, buffer.cursor.index);
    }

    #[test]
    fn cursor_never_leaves_buffer_after_update() {
        let mut buffer = buffer("ab");
        buffer.cursor = Cursor::new(2);

        let right = BufferMessage::MoveCursor(CursorDirection::Right);
        update(&mut buffer, vec![&right, &right]);

        assert_eq!(Cursor::new(2), buffer.cursor);
    }
}
