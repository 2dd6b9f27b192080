/// Normalized identity of a pressed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A letter key, stored lowercase.
    Char(char),
    /// A digit key on the main row, 0-9.
    Digit(u8),
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a key label case-insensitively.
    /// Accepts browser-style arrow names ("ArrowLeft", "Left") and bare
    /// characters ("k", "K", "7"). Anything else is not a key this layer
    /// dispatches on.
    pub fn parse(label: &str) -> Option<Key> {
        match label.to_ascii_lowercase().as_str() {
            "arrowleft" | "left" => Some(Key::ArrowLeft),
            "arrowright" | "right" => Some(Key::ArrowRight),
            "arrowup" | "up" => Some(Key::ArrowUp),
            "arrowdown" | "down" => Some(Key::ArrowDown),
            other => {
                let mut chars = other.chars();
                let c = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                if let Some(d) = c.to_digit(10) {
                    Some(Key::Digit(d as u8))
                } else if c.is_ascii_alphabetic() {
                    Some(Key::Char(c))
                } else {
                    None
                }
            }
        }
    }

    /// Canonical label, the inverse of [`Key::parse`].
    pub fn label(&self) -> String {
        match self {
            Key::Char(c) => c.to_string(),
            Key::Digit(d) => d.to_string(),
            Key::ArrowLeft => "ArrowLeft".to_string(),
            Key::ArrowRight => "ArrowRight".to_string(),
            Key::ArrowUp => "ArrowUp".to_string(),
            Key::ArrowDown => "ArrowDown".to_string(),
        }
    }
}

/// A single keydown as delivered by the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl KeyEvent {
    /// Event with no modifiers held.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            ctrl: false,
            alt: false,
            meta: false,
        }
    }

    /// Event with shift held.
    pub fn shifted(key: Key) -> Self {
        Self {
            shift: true,
            ..Self::new(key)
        }
    }

    /// Modifier guard: Ctrl, Alt, and Meta abort dispatch so OS and
    /// browser shortcuts pass through untouched. Shift never blocks; it is
    /// itself part of the track-navigation bindings.
    pub fn has_blocking_modifier(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}
