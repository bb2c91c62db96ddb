#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    ModeChanged,
    Quit,
    Redraw,
    Save,
}
