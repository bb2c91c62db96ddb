use ae_buffer::{message::BufferMessage, model::BufferResult};
use ae_keymap::message::KeymapMessage;

use crate::{action::Action, model::Model};

mod mode;
pub mod save;

#[tracing::instrument(skip(model))]
pub fn update_model(model: &mut Model, messages: Vec<KeymapMessage>) -> Vec<Action> {
    messages
        .iter()
        .flat_map(|message| update_with_message(model, message))
        .collect()
}

fn update_with_message(model: &mut Model, message: &KeymapMessage) -> Vec<Action> {
    tracing::debug!("handling keymap message: {:?}", message);

    match message {
        KeymapMessage::Buffer(BufferMessage::ChangeMode(from, to)) => mode::change(model, from, to),
        KeymapMessage::Buffer(message) => {
            let result = ae_buffer::update(&mut model.buffer, vec![message]);
            if result.contains(&BufferResult::Changed) {
                model.modified = true;
                model.status = None;
            }
            Vec::new()
        }
        KeymapMessage::Quit => vec![Action::Quit],
        KeymapMessage::Redraw => vec![Action::Redraw],
        KeymapMessage::Save => vec![Action::Save],
    }
}
