use ratatui::Frame;

use crate::{error::AppError, layout::AppLayout, model::Model, terminal::TerminalWrapper};

mod statusline;

pub fn render_model(terminal: &mut TerminalWrapper, model: &mut Model) -> Result<(), AppError> {
    terminal.draw(|frame| view(model, frame))
}

fn view(model: &mut Model, frame: &mut Frame) {
    let layout = AppLayout::new(frame.area());

    let position = ae_buffer::view(&mut model.buffer, frame.buffer_mut(), layout.buffer);
    statusline::view(model, frame, layout.statusline);

    if let Some(position) = position {
        frame.set_cursor_position(position);
    }
}
