use std::collections::HashMap;

use ae_buffer::{
    message::{BufferMessage, CursorDirection, TextModification, ViewPortDirection},
    model::Mode,
};

use crate::{
    key::{Key, KeyCode, KeyModifier},
    message::KeymapMessage,
};

#[derive(Debug)]
pub struct KeyMap {
    mappings: HashMap<Mode, HashMap<Key, KeymapMessage>>,
}

impl KeyMap {
    pub fn get(&self, mode: &Mode, key: &Key) -> Option<&KeymapMessage> {
        self.mappings.get(mode).and_then(|mappings| mappings.get(key))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        let mut mappings = HashMap::new();

        add_mapping(
            &mut mappings,
            Mode::Normal,
            vec![
                (char_key('h'), motion(CursorDirection::Left)),
                (char_key('l'), motion(CursorDirection::Right)),
                (char_key('k'), motion(CursorDirection::Up)),
                (char_key('j'), motion(CursorDirection::Down)),
                (char_key('b'), motion(CursorDirection::WordBackward)),
                (char_key('w'), motion(CursorDirection::WordForward)),
                (char_key('0'), motion(CursorDirection::LineStart)),
                (char_key('$'), motion(CursorDirection::LineEnd)),
                (char_key('t'), motion(CursorDirection::Top)),
                (
                    Key::new(KeyCode::from_char('g'), vec![KeyModifier::Shift]),
                    motion(CursorDirection::Bottom),
                ),
                (ctrl_key('d'), viewport(ViewPortDirection::PageDown)),
                (ctrl_key('u'), viewport(ViewPortDirection::PageUp)),
                (
                    char_key('i'),
                    KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Normal, Mode::Insert)),
                ),
                (
                    char_key('x'),
                    modification(TextModification::DeleteCharOnCursor),
                ),
                (ctrl_key('s'), KeymapMessage::Save),
                (ctrl_key('r'), KeymapMessage::Redraw),
                (ctrl_key('q'), KeymapMessage::Quit),
            ],
        );

        add_mapping(
            &mut mappings,
            Mode::Insert,
            vec![
                (
                    Key::new(KeyCode::Esc, vec![]),
                    KeymapMessage::Buffer(BufferMessage::ChangeMode(Mode::Insert, Mode::Normal)),
                ),
                (
                    Key::new(KeyCode::Backspace, vec![]),
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    Key::new(KeyCode::Delete, vec![]),
                    modification(TextModification::DeleteCharBeforeCursor),
                ),
                (
                    Key::new(KeyCode::Enter, vec![]),
                    modification(TextModification::InsertLineBreak),
                ),
                (
                    Key::new(KeyCode::Tab, vec![]),
                    modification(TextModification::Insert("\t".to_string())),
                ),
            ],
        );

        Self { mappings }
    }
}

fn add_mapping(
    mappings: &mut HashMap<Mode, HashMap<Key, KeymapMessage>>,
    mode: Mode,
    bindings: Vec<(Key, KeymapMessage)>,
) {
    mappings.entry(mode).or_default().extend(bindings);
}

fn char_key(c: char) -> Key {
    Key::new(KeyCode::from_char(c), vec![])
}

fn ctrl_key(c: char) -> Key {
    Key::new(KeyCode::from_char(c), vec![KeyModifier::Ctrl])
}

fn motion(direction: CursorDirection) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::MoveCursor(direction))
}

fn modification(modification: TextModification) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::Modification(modification))
}

fn viewport(direction: ViewPortDirection) -> KeymapMessage {
    KeymapMessage::Buffer(BufferMessage::MoveViewPort(direction))
}
