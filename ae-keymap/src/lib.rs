use std::collections::VecDeque;

use ae_buffer::{
    message::{BufferMessage, TextModification},
    model::Mode,
};
use key::Key;
use map::KeyMap;
use message::KeymapMessage;

pub mod conversion;
pub mod key;
mod map;
pub mod message;

#[derive(Debug, Default)]
pub struct MessageResolver {
    pub mode: Mode,
    map: KeyMap,
}

impl MessageResolver {
    pub fn add_keys(&mut self, mut keys: VecDeque<Key>) -> Vec<KeymapMessage> {
        let mut messages = Vec::new();
        while let Some(key) = keys.pop_front() {
            messages.extend(self.add_key(key));
        }
        messages
    }

    /// Resolves a single keystroke against the bindings of the current mode.
    /// Mode changes emitted by a binding are applied to the resolver right
    /// away, so the next key resolves in the new mode.
    pub fn add_key(&mut self, key: Key) -> Vec<KeymapMessage> {
        let messages = match self.map.get(&self.mode, &key) {
            Some(message) => vec![message.clone()],
            None => get_passthrough(&self.mode, &key),
        };

        for message in messages.iter() {
            if let KeymapMessage::Buffer(BufferMessage::ChangeMode(_, to)) = message {
                self.mode = to.clone();
            }
        }

        messages
    }
}

fn get_passthrough(mode: &Mode, key: &Key) -> Vec<KeymapMessage> {
    if !mode.is_insert() {
        return Vec::new();
    }

    match key.to_insertable() {
        Some(text) => vec![KeymapMessage::Buffer(BufferMessage::Modification(
            TextModification::Insert(text),
        ))],
        None => Vec::new(),
    }
}
