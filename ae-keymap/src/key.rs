use std::{collections::VecDeque, hash::Hash};

#[derive(Clone, Debug, Eq)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: Vec<KeyModifier>,
}

impl Key {
    pub fn new(key: KeyCode, modifiers: Vec<KeyModifier>) -> Self {
        Self {
            code: key,
            modifiers,
        }
    }

    pub fn to_keycode_string(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        match self.code {
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            _ => get_key_string(self.code.to_string(), modifiers, true),
        }
    }

    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        let regex = regex::Regex::new(r"[^-<>]+|^-$|--").expect("Failed to compile regex");
        let mut codes = regex
            .find_iter(keycode)
            .map(|m| m.as_str())
            .collect::<VecDeque<_>>();

        let mut modifiers = Vec::new();
        let mut last = codes.pop_back()?;
        if last == "--" {
            last = "-";
        }

        if last.chars().count() == 1 && last.chars().last()?.is_uppercase() {
            modifiers.push(KeyModifier::Shift);
        }

        for modifier in codes {
            match modifier.to_ascii_uppercase().as_str() {
                "A" => modifiers.push(KeyModifier::Alt),
                "C" => modifiers.push(KeyModifier::Ctrl),
                "S" => modifiers.push(KeyModifier::Shift),
                _ => (),
            }
        }

        KeyCode::from_keycode_string(last).map(|code| Self { code, modifiers })
    }

    /// Text a key stands for while typing. Keys with modifiers other than
    /// shift insert nothing.
    pub fn to_insertable(&self) -> Option<String> {
        if self
            .modifiers
            .iter()
            .any(|modifier| *modifier != KeyModifier::Shift)
        {
            return None;
        }

        let text = match self.code {
            KeyCode::Backslash => String::from("\\"),
            KeyCode::Bar => String::from("|"),
            KeyCode::Char(c) => {
                if self.modifiers.contains(&KeyModifier::Shift) {
                    c.to_uppercase().to_string()
                } else {
                    c.to_string()
                }
            }
            KeyCode::LessThan => String::from("<"),
            KeyCode::Space => String::from(" "),
            KeyCode::Tab => String::from("\t"),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Enter | KeyCode::Esc => return None,
        };

        Some(text)
    }
}

impl Hash for Key {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }

        if self.modifiers.len() != other.modifiers.len() {
            return false;
        }

        for modifier in &self.modifiers {
            if !other.modifiers.contains(modifier) {
                return false;
            }
        }

        true
    }
}

impl ToString for Key {
    fn to_string(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort();

        match self.code {
            KeyCode::Char(_) => {
                if modifiers.contains(&KeyModifier::Shift) {
                    modifiers.retain(|modifier| *modifier != KeyModifier::Shift);
                    get_key_string(self.code.to_string().to_uppercase(), modifiers, false)
                } else {
                    get_key_string(self.code.to_string(), modifiers, false)
                }
            }
            KeyCode::Bar => get_key_string(String::from("|"), modifiers, false),
            KeyCode::Backslash => get_key_string(String::from("\\"), modifiers, false),
            KeyCode::LessThan => get_key_string(String::from("<"), modifiers, false),
            KeyCode::Space => get_key_string(String::from(" "), modifiers, false),
            KeyCode::Tab => get_key_string(String::from("\\t"), modifiers, false),
            _ => get_key_string(self.code.to_string(), modifiers, true),
        }
    }
}

fn get_key_string(code: String, modifiers: Vec<KeyModifier>, force_ltgt: bool) -> String {
    if modifiers.is_empty() && !force_ltgt {
        return code;
    }

    let mut result = String::from("<");
    for modifier in modifiers {
        match modifier {
            KeyModifier::Alt => result.push_str("A-"),
            KeyModifier::Ctrl => result.push_str("C-"),
            KeyModifier::Shift => result.push_str("S-"),
        };
    }

    result.push_str(&code);
    result.push('>');

    result
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum KeyCode {
    Backslash,
    Backspace,
    Bar,
    Char(char),
    Delete,
    Enter,
    Esc,
    LessThan,
    Space,
    Tab,
}

impl KeyCode {
    pub fn from_keycode_string(keycode: &str) -> Option<Self> {
        match keycode {
            "bslash" => Some(KeyCode::Backslash),
            "bs" => Some(KeyCode::Backspace),
            "bar" => Some(KeyCode::Bar),
            "del" => Some(KeyCode::Delete),
            "cr" => Some(KeyCode::Enter),
            "esc" => Some(KeyCode::Esc),
            "lt" => Some(KeyCode::LessThan),
            "space" => Some(KeyCode::Space),
            "tab" => Some(KeyCode::Tab),
            code => {
                if code.chars().count() == 1 {
                    code.chars().next().map(Self::from_char)
                } else {
                    None
                }
            }
        }
    }

    pub fn from_char(c: char) -> KeyCode {
        match c {
            '\\' => KeyCode::Backslash,
            '|' => KeyCode::Bar,
            '<' => KeyCode::LessThan,
            ' ' => KeyCode::Space,
            '\t' => KeyCode::Tab,
            passed => KeyCode::Char(passed.to_lowercase().next().unwrap_or(passed)),
        }
    }
}

impl ToString for KeyCode {
    fn to_string(&self) -> String {
        match self {
            KeyCode::Backslash => String::from("bslash"),
            KeyCode::Backspace => String::from("bs"),
            KeyCode::Bar => String::from("bar"),
            KeyCode::Char(c) => c.to_string().to_lowercase(),
            KeyCode::Delete => String::from("del"),
            KeyCode::Enter => String::from("cr"),
            KeyCode::Esc => String::from("esc"),
            KeyCode::LessThan => String::from("lt"),
            KeyCode::Space => String::from("space"),
            KeyCode::Tab => String::from("tab"),
        }
    }
}

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum KeyModifier {
    Alt,
    Ctrl,
    Shift,
}
