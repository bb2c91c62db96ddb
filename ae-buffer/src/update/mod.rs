use crate::{
    message::BufferMessage,
    model::{Buffer, BufferResult},
    update::cursor::{set_outbound_cursor_to_inbound_position, update_cursor_by_direction},
};

mod cursor;
pub mod line;
mod modification;
pub mod viewport;
mod word;

pub fn update_buffer(buffer: &mut Buffer, message: &BufferMessage) -> Vec<BufferResult> {
    tracing::debug!("handling buffer message: {:?}", message);

    let result = match message {
        // NOTE: mode is owned by the caller, the buffer keeps its cursor on mode change
        BufferMessage::ChangeMode(_, _) => Vec::new(),
        BufferMessage::Modification(modification) => {
            modification::update(&mut buffer.content, &mut buffer.cursor, modification)
                .into_iter()
                .collect()
        }
        BufferMessage::MoveCursor(direction) => {
            update_cursor_by_direction(
                &buffer.view_port,
                &buffer.content,
                &mut buffer.cursor,
                direction,
            );
            Vec::new()
        }
        BufferMessage::MoveViewPort(direction) => {
            viewport::update_by_direction(
                &mut buffer.view_port,
                &buffer.content,
                &mut buffer.cursor,
                direction,
            );
            Vec::new()
        }
    };

    set_outbound_cursor_to_inbound_position(&mut buffer.cursor, &buffer.content);

    result
}
