//! Key normalization, focus guard, and the shortcut table.
//!
//! This module provides:
//! - [`Key`] / [`KeyEvent`]: normalized keys and keydown events
//! - [`FocusedElement`]: focus context for the typing guard
//! - [`BindingConfig`]: the shortcut table with save/load

mod binding;
mod focus;
mod key;

pub use binding::{BindingConfig, KeyChord, PlayerAction, SerializableKey};
pub use focus::{FocusedElement, is_typing_context};
pub use key::{Key, KeyEvent};
