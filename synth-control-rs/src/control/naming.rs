//! Patch name entry with the main encoder.

use heapless::String;

use crate::display::Display;
use crate::RENAME_MAX_CHARS;

/// Characters offered while naming a patch, in encoder order.
pub const NAMING_ALPHABET: [char; 64] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', ' ', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K',
    'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '1', '2', '3',
    '4', '5', '6', '7', '8', '9', '0',
];

/// The name typed so far and the character under the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameEditor {
    typed: String<RENAME_MAX_CHARS>,
    cursor: usize,
}

impl NameEditor {
    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn candidate(&self) -> char {
        NAMING_ALPHABET[self.cursor % NAMING_ALPHABET.len()]
    }

    /// Start over with nothing typed.
    pub fn clear(&mut self) {
        self.typed.clear();
        self.cursor = 0;
    }

    /// Move the cursor through the alphabet, wrapping both ways.
    pub fn scroll(&mut self, delta: i32) {
        let len = NAMING_ALPHABET.len() as i64;
        self.cursor = (self.cursor as i64 + i64::from(delta)).rem_euclid(len) as usize;
    }

    /// Append the candidate and return the cursor to the start of the
    /// alphabet. Returns `false` once [`RENAME_MAX_CHARS`] are typed.
    pub fn accept(&mut self) -> bool {
        if self.typed.push(self.candidate()).is_err() {
            return false;
        }
        self.cursor = 0;
        true
    }

    pub fn show<D: Display + ?Sized>(&self, display: &mut D) {
        display.show_renaming(&self.typed, self.candidate());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_wraps_both_ways() {
        let mut editor = NameEditor::default();
        editor.scroll(-1);
        assert_eq!(editor.candidate(), '0');
        editor.scroll(1);
        assert_eq!(editor.candidate(), 'a');
        editor.scroll(27);
        assert_eq!(editor.candidate(), 'A');
    }

    #[test]
    fn accept_appends_and_resets_cursor() {
        let mut editor = NameEditor::default();
        editor.scroll(2);
        assert!(editor.accept());
        editor.scroll(26);
        assert!(editor.accept());
        assert_eq!(editor.typed(), "c ");
        assert_eq!(editor.candidate(), 'a');
    }

    #[test]
    fn stops_at_twelve_characters() {
        let mut editor = NameEditor::default();
        for _ in 0..RENAME_MAX_CHARS {
            assert!(editor.accept());
        }
        assert!(!editor.accept());
        assert_eq!(editor.typed().len(), RENAME_MAX_CHARS);
        editor.clear();
        assert_eq!(editor.typed(), "");
    }
}
