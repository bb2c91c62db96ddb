use crate::{file, model::Model};

/// Writes the buffer back to its file. Failures end up in the status line,
/// buffer and cursor stay untouched either way.
#[tracing::instrument(skip(model))]
pub fn buffer(model: &mut Model) {
    let length = model.buffer.content.len();
    match file::save(&model.path, model.buffer.content.as_bytes()) {
        Ok(()) => {
            model.modified = false;
            model.status = Some(format!("{} bytes written", length));
        }
        Err(error) => {
            model.status = Some(format!("save failed: {}", error));
        }
    }
}
