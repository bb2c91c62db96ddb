/// The byte range `[page_start, page_end)` rendered by the last view call.
///
/// `page_end` is a byproduct of rendering and only consumed by the next
/// render to decide whether the cursor left the page.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ViewPort {
    pub cursor_position: ScreenPosition,
    pub height: u16,
    pub page_end: usize,
    pub page_start: usize,
    pub width: u16,
}

impl ViewPort {
    pub fn contains(&self, index: usize) -> bool {
        self.page_start <= index && index < self.page_end
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ScreenPosition {
    pub row: usize,
    pub column: usize,
}

impl ScreenPosition {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}
