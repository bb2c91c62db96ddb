use ratatui::prelude::{Constraint, Direction, Layout, Rect};

#[derive(Clone, Debug)]
pub struct AppLayout {
    pub buffer: Rect,
    pub statusline: Rect,
}

impl AppLayout {
    pub fn new(rect: Rect) -> Self {
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(rect);

        Self {
            buffer: main[0],
            statusline: main[1],
        }
    }
}
