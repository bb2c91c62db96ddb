use ae_keymap::{conversion, message::KeymapMessage, MessageResolver};
use crossterm::event::{Event, EventStream};
use futures::StreamExt;

use crate::error::AppError;

pub struct EventReader {
    reader: EventStream,
    pub resolver: MessageResolver,
}

impl EventReader {
    pub fn new() -> Self {
        Self {
            reader: EventStream::new(),
            resolver: MessageResolver::default(),
        }
    }

    /// Waits for the next event worth a render. Returns `None` once the
    /// terminal closes the event stream.
    pub async fn next(&mut self) -> Result<Option<Vec<KeymapMessage>>, AppError> {
        while let Some(event) = self.reader.next().await {
            if let Some(messages) = handle_crossterm_event(&mut self.resolver, event?) {
                return Ok(Some(messages));
            }
        }

        Ok(None)
    }
}

fn handle_crossterm_event(
    resolver: &mut MessageResolver,
    event: Event,
) -> Option<Vec<KeymapMessage>> {
    match event {
        Event::Key(key) => {
            let key = conversion::to_key(&key)?;
            Some(resolver.add_key(key))
        }
        Event::Resize(_, _) => Some(Vec::new()),
        Event::FocusLost | Event::FocusGained | Event::Paste(_) | Event::Mouse(_) => None,
    }
}
