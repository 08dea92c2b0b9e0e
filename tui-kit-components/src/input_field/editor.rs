//! Cursor editing over a host-owned value
//!
//! The value is borrowed on every call; edits return the new string and the
//! host decides whether to accept it.

/// Cursor position as a byte offset, always on a char boundary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EditCursor {
    offset: usize,
}

impl EditCursor {
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Pull the cursor back inside `value` after an outside change
    pub fn clamp(&mut self, value: &str) {
        let mut offset = self.offset.min(value.len());
        while !value.is_char_boundary(offset) {
            offset -= 1;
        }
        self.offset = offset;
    }

    /// Characters before the cursor, i.e. its display column
    pub fn column(&self, value: &str) -> usize {
        value[..self.offset].chars().count()
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self, value: &str) {
        self.offset = value.len();
    }

    pub fn left(&mut self, value: &str) {
        if let Some((i, _)) = value[..self.offset].char_indices().next_back() {
            self.offset = i;
        }
    }

    pub fn right(&mut self, value: &str) {
        if let Some(c) = value[self.offset..].chars().next() {
            self.offset += c.len_utf8();
        }
    }

    pub fn insert(&mut self, value: &str, c: char) -> String {
        let mut new_value = String::with_capacity(value.len() + c.len_utf8());
        new_value.push_str(&value[..self.offset]);
        new_value.push(c);
        new_value.push_str(&value[self.offset..]);
        self.offset += c.len_utf8();
        new_value
    }

    /// Backspace; `None` at the start of the value
    pub fn backspace(&mut self, value: &str) -> Option<String> {
        let (start, _) = value[..self.offset].char_indices().next_back()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..start]);
        new_value.push_str(&value[self.offset..]);
        self.offset = start;
        Some(new_value)
    }

    /// Forward delete; `None` at the end of the value
    pub fn delete(&self, value: &str) -> Option<String> {
        let c = value[self.offset..].chars().next()?;
        let mut new_value = String::with_capacity(value.len());
        new_value.push_str(&value[..self.offset]);
        new_value.push_str(&value[self.offset + c.len_utf8()..]);
        Some(new_value)
    }
}
