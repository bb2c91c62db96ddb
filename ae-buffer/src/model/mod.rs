use self::viewport::ViewPort;

pub mod viewport;

#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    Insert,
    #[default]
    Normal,
}

impl Mode {
    pub fn is_insert(&self) -> bool {
        matches!(self, Mode::Insert)
    }
}

impl ToString for Mode {
    fn to_string(&self) -> String {
        match self {
            Mode::Insert => "insert".to_string(),
            Mode::Normal => "normal".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Buffer {
    pub cursor: Cursor,
    pub content: TextBuffer,
    pub view_port: ViewPort,
}

/// Offset into the text buffer. Valid positions are `0..=len`, where `len`
/// addresses the end of the document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
}

impl TextBuffer {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Index of the final byte, `None` for an empty buffer.
    pub fn last_index(&self) -> Option<usize> {
        self.bytes.len().checked_sub(1)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn insert(&mut self, index: usize, bytes: &[u8]) -> usize {
        let index = index.min(self.bytes.len());
        self.bytes.splice(index..index, bytes.iter().copied());
        bytes.len()
    }

    pub fn remove(&mut self, index: usize) -> Option<u8> {
        if index < self.bytes.len() {
            Some(self.bytes.remove(index))
        } else {
            None
        }
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        Self::new(value.as_bytes().to_vec())
    }
}

impl From<Vec<u8>> for TextBuffer {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum BufferResult {
    Changed,
}
