use std::collections::VecDeque;

use crossterm::event::{self, KeyEvent, KeyEventKind};

use crate::key::{Key, KeyCode, KeyModifier};

pub fn from_keycode_string(keycodes: &str) -> VecDeque<Key> {
    let mut keys = VecDeque::new();

    let regex = regex::Regex::new(r"<[^>]*>|.").expect("Failed to compile regex");
    for capture in regex.find_iter(keycodes).map(|m| m.as_str()) {
        if let Some(key) = Key::from_keycode_string(capture) {
            keys.push_back(key);
        }
    }

    keys
}

pub fn to_key(event: &KeyEvent) -> Option<Key> {
    let mut modifier: Vec<_> = event
        .modifiers
        .iter_names()
        .flat_map(|(s, _)| to_modifier(s))
        .collect();

    match event.code {
        event::KeyCode::Backspace => resolve(event.kind, KeyCode::Backspace, modifier),
        event::KeyCode::Enter => resolve(event.kind, KeyCode::Enter, modifier),
        event::KeyCode::Tab => resolve(event.kind, KeyCode::Tab, modifier),
        event::KeyCode::Delete => resolve(event.kind, KeyCode::Delete, modifier),
        event::KeyCode::Char(c) => {
            // shift is carried by the case of letters only
            modifier.retain(|m| *m != KeyModifier::Shift);
            if c.is_uppercase() {
                modifier.push(KeyModifier::Shift);
            }
            resolve(event.kind, KeyCode::from_char(c), modifier)
        }
        event::KeyCode::Esc => resolve(event.kind, KeyCode::Esc, modifier),
        _ => None,
    }
}

fn resolve(kind: KeyEventKind, code: KeyCode, modifier: Vec<KeyModifier>) -> Option<Key> {
    if kind != KeyEventKind::Press {
        return None;
    }

    Some(Key::new(code, modifier))
}

fn to_modifier(modifier: &str) -> Option<KeyModifier> {
    match modifier {
        "ALT" => Some(KeyModifier::Alt),
        "CONTROL" => Some(KeyModifier::Ctrl),
        "META" => Some(KeyModifier::Alt),
        "SHIFT" => Some(KeyModifier::Shift),
        _ => None,
    }
}
