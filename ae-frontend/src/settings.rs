use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct Settings {
    pub path: PathBuf,
}
