use ratatui::{
    prelude::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::model::Model;

pub fn view(model: &Model, frame: &mut Frame, rect: Rect) {
    let file = get_file_content(model);
    let position = get_position_content(model);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(position.width() as u16),
        ])
        .split(rect);

    frame.render_widget(
        Block::default().style(Style::default().bg(Color::Black)),
        rect,
    );

    frame.render_widget(Paragraph::new(file), layout[0]);
    frame.render_widget(Paragraph::new(position), layout[1]);
}

fn get_file_content(model: &Model) -> Line {
    let style = Style::default().fg(Color::Gray);

    let mut content = vec![Span::styled(model.path.to_string_lossy().to_string(), style)];
    if model.modified {
        content.push(Span::styled(" [+]", Style::default().fg(Color::Yellow)));
    }

    if model.mode.is_insert() {
        content.push(Span::styled(
            format!(" -- {} --", model.mode.to_string().to_uppercase()),
            style.add_modifier(Modifier::BOLD),
        ));
    }

    if let Some(status) = &model.status {
        content.push(Span::styled(format!("  {}", status), style));
    }

    Line::from(content)
}

fn get_position_content(model: &Model) -> Line {
    let content = format!(
        "{}/{}",
        model.buffer.cursor.index,
        model.buffer.content.len()
    );

    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
}
