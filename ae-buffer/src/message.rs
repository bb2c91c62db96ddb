use crate::model::Mode;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BufferMessage {
    ChangeMode(Mode, Mode),
    Modification(TextModification),
    MoveCursor(CursorDirection),
    MoveViewPort(ViewPortDirection),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum TextModification {
    DeleteCharBeforeCursor,
    DeleteCharOnCursor,
    Insert(String),
    InsertLineBreak,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum CursorDirection {
    Bottom,
    Down,
    Left,
    LineEnd,
    LineStart,
    Right,
    Top,
    Up,
    WordBackward,
    WordForward,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum ViewPortDirection {
    PageDown,
    PageUp,
}
