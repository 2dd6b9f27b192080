//! Registration against a host-provided shortcut facility, as an
//! alternative to feeding raw keydowns into the dispatcher.

use anyhow::Result;
use tracing::{info, warn};

use crate::input::{BindingConfig, KeyChord, PlayerAction};

/// Host facility that accepts shortcut registrations directly.
pub trait ShortcutRegistrar {
    fn register(&mut self, action: PlayerAction, chord: &KeyChord) -> Result<()>;
}

/// Register every binding in the table, in declaration order.
/// A failed registration is logged and skipped so the remaining bindings
/// still register. Returns the number of successful registrations.
pub fn register_bindings<R: ShortcutRegistrar>(registrar: &mut R, config: &BindingConfig) -> usize {
    let mut registered = 0;
    for action in PlayerAction::all() {
        let Some(chord) = config.bindings.get(action) else {
            continue;
        };
        match registrar.register(*action, chord) {
            Ok(()) => registered += 1,
            Err(e) => warn!("failed to register shortcut for {:?}: {:#}", action, e),
        }
    }
    info!("registered {} shortcut(s)", registered);
    registered
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct FlakyRegistrar {
        registered: Vec<PlayerAction>,
        reject: Option<PlayerAction>,
    }

    impl ShortcutRegistrar for FlakyRegistrar {
        fn register(&mut self, action: PlayerAction, _chord: &KeyChord) -> Result<()> {
            if self.reject == Some(action) {
                bail!("registration refused");
            }
            self.registered.push(action);
            Ok(())
        }
    }

    #[test]
    fn test_registers_whole_table() {
        let mut registrar = FlakyRegistrar {
            registered: Vec::new(),
            reject: None,
        };
        let count = register_bindings(&mut registrar, &BindingConfig::default());
        assert_eq!(count, PlayerAction::all().len());
        assert_eq!(registrar.registered, PlayerAction::all());
    }

    #[test]
    fn test_failure_skips_only_that_binding() {
        let mut registrar = FlakyRegistrar {
            registered: Vec::new(),
            reject: Some(PlayerAction::VolumeUp),
        };
        let count = register_bindings(&mut registrar, &BindingConfig::default());
        assert_eq!(count, PlayerAction::all().len() - 1);
        assert!(!registrar.registered.contains(&PlayerAction::VolumeUp));
        // Bindings after the failing one still register.
        assert!(registrar.registered.contains(&PlayerAction::PreviousTrack));
    }
}
