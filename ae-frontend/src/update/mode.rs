use ae_buffer::{message::BufferMessage, model::Mode};

use crate::{action::Action, model::Model};

pub fn change(model: &mut Model, from: &Mode, to: &Mode) -> Vec<Action> {
    if from == to || &model.mode == to {
        return Vec::new();
    }

    tracing::debug!("changing mode from {:?} to {:?}", from, to);

    model.mode = to.clone();
    model.status = None;

    let message = BufferMessage::ChangeMode(from.clone(), to.clone());
    ae_buffer::update(&mut model.buffer, vec![&message]);

    vec![Action::ModeChanged]
}
