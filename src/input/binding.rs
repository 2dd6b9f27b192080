use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::input::key::Key;

const BINDINGS_FILE: &str = "keybindings.json";

/// Player actions addressable from the keyboard.
/// キーボードから呼び出せるプレイヤー操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    SeekBack,
    SeekForward,
    SeekBackLong,
    SeekForwardLong,
    VolumeUp,
    VolumeDown,
    TogglePlay,
    ToggleMute,
    NextTrack,
    PreviousTrack,
}

impl PlayerAction {
    pub fn all() -> &'static [PlayerAction] {
        &[
            PlayerAction::SeekBack,
            PlayerAction::SeekForward,
            PlayerAction::SeekBackLong,
            PlayerAction::SeekForwardLong,
            PlayerAction::VolumeUp,
            PlayerAction::VolumeDown,
            PlayerAction::TogglePlay,
            PlayerAction::ToggleMute,
            PlayerAction::NextTrack,
            PlayerAction::PreviousTrack,
        ]
    }

    /// Actions that stay active while a text field is focused.
    /// Seeking and volume keep working mid-typing; everything else yields
    /// to the text field.
    pub fn bypasses_typing_guard(&self) -> bool {
        matches!(
            self,
            PlayerAction::SeekBack
                | PlayerAction::SeekForward
                | PlayerAction::VolumeUp
                | PlayerAction::VolumeDown
        )
    }
}

/// Serializable key representation using string labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SerializableKey(pub String);

impl SerializableKey {
    pub fn from_key(key: Key) -> Self {
        Self(key.label())
    }

    pub fn to_key(&self) -> Option<Key> {
        Key::parse(&self.0)
    }
}

impl From<Key> for SerializableKey {
    fn from(key: Key) -> Self {
        Self::from_key(key)
    }
}

/// One key plus an optional shift requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyChord {
    pub key: SerializableKey,
    #[serde(default)]
    pub shift: bool,
}

impl KeyChord {
    pub fn plain(key: Key) -> Self {
        Self {
            key: key.into(),
            shift: false,
        }
    }

    pub fn shifted(key: Key) -> Self {
        Self {
            key: key.into(),
            shift: true,
        }
    }

    /// Whether this chord matches a normalized (key, shift) pair.
    /// A chord that requires shift only matches shifted events; a plain
    /// chord matches regardless of shift, since the normalized key is the
    /// same either way.
    pub fn matches(&self, key: Key, shift: bool) -> bool {
        if self.shift && !shift {
            return false;
        }
        self.key.to_key() == Some(key)
    }
}

/// Configurable shortcut table mapping actions to key chords.
/// 操作とキーの対応表。
///
/// Digit keys 0-9 (the percent jump) are handled structurally by the
/// dispatcher and do not appear here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BindingConfig {
    pub bindings: HashMap<PlayerAction, KeyChord>,
}

impl Default for BindingConfig {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        bindings.insert(PlayerAction::SeekBack, KeyChord::plain(Key::ArrowLeft));
        bindings.insert(PlayerAction::SeekForward, KeyChord::plain(Key::ArrowRight));
        bindings.insert(PlayerAction::SeekBackLong, KeyChord::plain(Key::Char('j')));
        bindings.insert(
            PlayerAction::SeekForwardLong,
            KeyChord::plain(Key::Char('l')),
        );
        bindings.insert(PlayerAction::VolumeUp, KeyChord::plain(Key::ArrowUp));
        bindings.insert(PlayerAction::VolumeDown, KeyChord::plain(Key::ArrowDown));
        bindings.insert(PlayerAction::TogglePlay, KeyChord::plain(Key::Char('k')));
        bindings.insert(PlayerAction::ToggleMute, KeyChord::plain(Key::Char('m')));
        bindings.insert(PlayerAction::NextTrack, KeyChord::shifted(Key::Char('n')));
        bindings.insert(
            PlayerAction::PreviousTrack,
            KeyChord::shifted(Key::Char('p')),
        );
        Self { bindings }
    }
}

impl BindingConfig {
    /// Load the shortcut table from the default file.
    /// 既定のファイルから対応表を読み込む。
    pub fn load() -> Result<Self> {
        Self::load_from(BINDINGS_FILE)
    }

    /// Load the shortcut table from a path.
    /// A missing file yields the defaults; a partial table is merged with
    /// them.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&content)?;
        config.normalize();
        Ok(config)
    }

    /// Save the shortcut table to the default file.
    /// 既定のファイルへ対応表を保存する。
    pub fn save(&self) -> Result<()> {
        self.save_to(BINDINGS_FILE)
    }

    /// Save the shortcut table to a path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Find the action bound to a normalized (key, shift) pair.
    /// Walks actions in declaration order so conflicting chords resolve
    /// deterministically.
    pub fn match_action(&self, key: Key, shift: bool) -> Option<PlayerAction> {
        PlayerAction::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|chord| chord.matches(key, shift))
        })
    }

    /// Action pairs bound to the same (key, shift) combination.
    /// The table invariant is one chord per combination; conflicts are
    /// reported so the dispatcher can warn about them.
    pub fn duplicate_chords(&self) -> Vec<(PlayerAction, PlayerAction)> {
        let actions = PlayerAction::all();
        let mut conflicts = Vec::new();
        for (i, a) in actions.iter().enumerate() {
            let Some(chord_a) = self.bindings.get(a) else {
                continue;
            };
            let Some(key_a) = chord_a.key.to_key() else {
                continue;
            };
            for b in &actions[i + 1..] {
                let duplicate = self.bindings.get(b).is_some_and(|chord_b| {
                    chord_b.key.to_key() == Some(key_a) && chord_b.shift == chord_a.shift
                });
                if duplicate {
                    conflicts.push((*a, *b));
                }
            }
        }
        conflicts
    }

    fn normalize(&mut self) {
        for (action, chord) in Self::default().bindings {
            self.bindings.entry(action).or_insert(chord);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_all_actions() {
        let config = BindingConfig::default();
        for action in PlayerAction::all() {
            assert!(config.bindings.contains_key(action));
        }
        assert!(config.duplicate_chords().is_empty());
    }

    #[test]
    fn test_default_table() {
        let config = BindingConfig::default();
        assert_eq!(
            config.match_action(Key::ArrowLeft, false),
            Some(PlayerAction::SeekBack)
        );
        assert_eq!(
            config.match_action(Key::Char('l'), false),
            Some(PlayerAction::SeekForwardLong)
        );
        assert_eq!(
            config.match_action(Key::Char('k'), false),
            Some(PlayerAction::TogglePlay)
        );
        assert_eq!(
            config.match_action(Key::Char('n'), true),
            Some(PlayerAction::NextTrack)
        );
    }

    #[test]
    fn test_bare_n_and_p_are_unbound() {
        let config = BindingConfig::default();
        assert_eq!(config.match_action(Key::Char('n'), false), None);
        assert_eq!(config.match_action(Key::Char('p'), false), None);
    }

    #[test]
    fn test_plain_chord_ignores_shift() {
        // Shift+K still normalizes to the same key; the toggle-play chord
        // does not require shift, so it matches.
        let config = BindingConfig::default();
        assert_eq!(
            config.match_action(Key::Char('k'), true),
            Some(PlayerAction::TogglePlay)
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = BindingConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BindingConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_json_readable() {
        let config = BindingConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(json.contains("\"ArrowLeft\""));
        assert!(json.contains("\"toggle_play\""));
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = BindingConfig::load_from(dir.path().join("missing.json")).unwrap();
        assert_eq!(config, BindingConfig::default());
    }

    #[test]
    fn test_load_partial_file_merges_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keybindings.json");
        std::fs::write(&path, r#"{"bindings":{"toggle_play":{"key":"x"}}}"#).unwrap();

        let config = BindingConfig::load_from(&path).unwrap();
        assert_eq!(
            config.match_action(Key::Char('x'), false),
            Some(PlayerAction::TogglePlay)
        );
        // Untouched actions come back as defaults.
        assert_eq!(
            config.match_action(Key::ArrowLeft, false),
            Some(PlayerAction::SeekBack)
        );
        assert_eq!(config.match_action(Key::Char('k'), false), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keybindings.json");

        let mut config = BindingConfig::default();
        config
            .bindings
            .insert(PlayerAction::TogglePlay, KeyChord::plain(Key::Char('x')));
        config.save_to(&path).unwrap();

        let loaded = BindingConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_duplicate_chords_reported() {
        let mut config = BindingConfig::default();
        config
            .bindings
            .insert(PlayerAction::ToggleMute, KeyChord::plain(Key::Char('k')));
        let conflicts = config.duplicate_chords();
        assert_eq!(
            conflicts,
            vec![(PlayerAction::TogglePlay, PlayerAction::ToggleMute)]
        );
        // Declaration order wins.
        assert_eq!(
            config.match_action(Key::Char('k'), false),
            Some(PlayerAction::TogglePlay)
        );
    }

    #[test]
    fn test_shifted_chord_differs_from_plain() {
        let mut config = BindingConfig::default();
        config
            .bindings
            .insert(PlayerAction::ToggleMute, KeyChord::shifted(Key::Char('k')));
        // k-plain and k-shift are distinct combinations, not duplicates.
        assert!(config.duplicate_chords().is_empty());
    }
}
