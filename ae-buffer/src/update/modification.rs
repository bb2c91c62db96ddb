use crate::{
    message::TextModification,
    model::{BufferResult, Cursor, TextBuffer},
};

pub fn update(
    buffer: &mut TextBuffer,
    cursor: &mut Cursor,
    modification: &TextModification,
) -> Option<BufferResult> {
    match modification {
        TextModification::DeleteCharBeforeCursor => {
            if cursor.index == 0 {
                return None;
            }

            cursor.index -= 1;
            buffer.remove(cursor.index)?;
        }
        TextModification::DeleteCharOnCursor => {
            // NOTE: the final byte stays, so a trailing newline survives x
            if cursor.index + 1 >= buffer.len() {
                return None;
            }

            buffer.remove(cursor.index)?;
        }
        TextModification::Insert(raw) => {
            if raw.is_empty() {
                return None;
            }

            cursor.index += buffer.insert(cursor.index, raw.as_bytes());
        }
        TextModification::InsertLineBreak => {
            cursor.index += buffer.insert(cursor.index, b"\n");
        }
    }

    Some(BufferResult::Changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modify(content: &str, index: usize, modifications: &[TextModification]) -> (String, usize) {
        let mut buffer = TextBuffer::from(content);
        let mut cursor = Cursor::new(index);
        for modification in modifications {
            update(&mut buffer, &mut cursor, modification);
        }

        let content = String::from_utf8_lossy(buffer.as_bytes()).to_string();
        (content, cursor.index)
    }

    #[test]
    fn insert_then_line_break_at_start() {
        let result = modify(
            "ab",
            0,
            &[
                TextModification::Insert("X".to_string()),
                TextModification::InsertLineBreak,
            ],
        );

        assert_eq!(("X\nab".to_string(), 2), result);
    }

    #[test]
    fn insert_then_delete_before_cursor_restores_content() {
        for index in 0..=3 {
            let result = modify(
                "abc",
                index,
                &[
                    TextModification::Insert("z".to_string()),
                    TextModification::DeleteCharBeforeCursor,
                ],
            );

            assert_eq!(("abc".to_string(), index), result);
        }
    }

    #[test]
    fn insert_multibyte_advances_by_bytes() {
        let result = modify("ab", 1, &[TextModification::Insert("é".to_string())]);

        assert_eq!(("aéb".to_string(), 3), result);
    }

    #[test]
    fn delete_before_cursor_at_start_is_noop() {
        let mut buffer = TextBuffer::from("abc");
        let mut cursor = Cursor::new(0);

        let result = update(
            &mut buffer,
            &mut cursor,
            &TextModification::DeleteCharBeforeCursor,
        );

        assert_eq!(None, result);
        assert_eq!(b"abc", buffer.as_bytes());
    }

    #[test]
    fn delete_on_cursor_removes_byte() {
        let result = modify("abc", 1, &[TextModification::DeleteCharOnCursor]);

        assert_eq!(("ac".to_string(), 1), result);
    }

    #[test]
    fn delete_on_cursor_keeps_final_byte() {
        let delete = [TextModification::DeleteCharOnCursor];

        assert_eq!(("abc".to_string(), 2), modify("abc", 2, &delete));
        assert_eq!(("abc".to_string(), 3), modify("abc", 3, &delete));
        assert_eq!((String::new(), 0), modify("", 0, &delete));
    }
}
