use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
};

use crate::{layout, model::Buffer, update::viewport};

pub const EOF_MARKER: &str = "<< EOF >>";

pub fn view(
    model: &mut Buffer,
    surface: &mut ratatui::buffer::Buffer,
    rect: Rect,
) -> Option<Position> {
    let rect = rect.intersection(surface.area);
    model.view_port.height = rect.height;
    model.view_port.width = rect.width;

    if rect.is_empty() {
        return None;
    }

    viewport::update_by_cursor(&mut model.view_port, &model.content, &model.cursor);

    clear(surface, rect);

    let height = usize::from(rect.height);
    let walk = layout::walk(
        &model.content,
        model.view_port.page_start,
        model.cursor.index,
        usize::from(rect.width),
        height,
        |row, column, byte| draw_byte(surface, rect, row, column, byte),
    );

    model.view_port.page_end = walk.page_end;

    if let Some(row) = walk.marker_row(height) {
        surface.set_stringn(
            rect.x,
            rect.y + row as u16,
            EOF_MARKER,
            usize::from(rect.width),
            Style::default().add_modifier(Modifier::DIM),
        );
    }

    let position = walk.cursor?;
    model.view_port.cursor_position = position;

    Some(Position::new(
        rect.x + position.column as u16,
        rect.y + position.row as u16,
    ))
}

fn clear(surface: &mut ratatui::buffer::Buffer, rect: Rect) {
    for y in rect.top()..rect.bottom() {
        for x in rect.left()..rect.right() {
            if let Some(cell) = surface.cell_mut((x, y)) {
                cell.reset();
            }
        }
    }
}

fn draw_byte(
    surface: &mut ratatui::buffer::Buffer,
    rect: Rect,
    row: usize,
    column: usize,
    byte: u8,
) {
    // NOTE: tab stops and line ends stay blank after clear
    if matches!(byte, b'\t' | b'\n') || column >= usize::from(rect.width) {
        return;
    }

    let position = (rect.x + column as u16, rect.y + row as u16);
    if let Some(cell) = surface.cell_mut(position) {
        cell.set_char(to_char(byte));
    }
}

fn to_char(byte: u8) -> char {
    if byte == b' ' || byte.is_ascii_graphic() || byte >= 0xa0 {
        char::from(byte)
    } else {
        '?'
    }
}
