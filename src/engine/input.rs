//! Mapping raw key names onto engine commands

/// Something the player asked the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Letter(char),
    Remove,
    Submit,
}

impl Command {
    /// Map a physical key name ("a", "Enter", "Backspace")
    ///
    /// Anything else, including modifiers and multi-character names, maps
    /// to `None`.
    #[must_use]
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" => Some(Self::Remove),
            other => single_letter(other).map(Self::Letter),
        }
    }

    /// Map an on-screen key ("Q", "ENTER", "REMOVE")
    #[must_use]
    pub fn from_virtual_key(key: &str) -> Option<Self> {
        match key {
            "ENTER" => Some(Self::Submit),
            "REMOVE" => Some(Self::Remove),
            other => single_letter(other).map(Self::Letter),
        }
    }
}

fn single_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn physical_keys() {
        assert_eq!(Command::from_key_name("a"), Some(Command::Letter('a')));
        assert_eq!(Command::from_key_name("Q"), Some(Command::Letter('q')));
        assert_eq!(Command::from_key_name("Enter"), Some(Command::Submit));
        assert_eq!(Command::from_key_name("Backspace"), Some(Command::Remove));
    }

    #[test]
    fn physical_keys_ignored() {
        for key in ["Shift", "1", " ", "Tab", "ab", "", "ENTER", "é"] {
            assert_eq!(Command::from_key_name(key), None, "key {key:?}");
        }
    }

    #[test]
    fn virtual_keys() {
        assert_eq!(Command::from_virtual_key("Z"), Some(Command::Letter('z')));
        assert_eq!(Command::from_virtual_key("ENTER"), Some(Command::Submit));
        assert_eq!(Command::from_virtual_key("REMOVE"), Some(Command::Remove));
        assert_eq!(Command::from_virtual_key(""), None);
    }
}
