use std::path::PathBuf;

use ae_buffer::model::{Buffer, Mode, TextBuffer};

#[derive(Debug, Default)]
pub struct Model {
    pub buffer: Buffer,
    pub mode: Mode,
    pub modified: bool,
    pub path: PathBuf,
    pub status: Option<String>,
}

impl Model {
    pub fn new(path: PathBuf, content: Vec<u8>) -> Self {
        Self {
            buffer: Buffer {
                content: TextBuffer::from(content),
                ..Default::default()
            },
            path,
            ..Default::default()
        }
    }
}
