//! The keydown entry point: guards, table lookup, handler invocation.

use anyhow::Result;
use tracing::{debug, warn};

use crate::control::{
    MuteStrategy, PlayStrategy, SEEK_STEP_LONG_MS, SEEK_STEP_MS, VolumeControl, jump_to_tenth,
    seek_by, toggle_play,
};
use crate::input::{BindingConfig, FocusedElement, Key, KeyEvent, PlayerAction, is_typing_context};
use crate::traits::host::PlayerHost;
use crate::traits::notify::Notifier;
use crate::traits::time::{SystemTimeProvider, TimeProvider};

/// Verdict for a single keydown. `Handled` tells the caller to suppress
/// the default UI action for the key (page scroll on arrows, digit entry
/// outside text fields).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    Unhandled,
}

impl Dispatch {
    pub fn is_handled(self) -> bool {
        self == Dispatch::Handled
    }
}

/// Translates keydown events into player-control calls.
///
/// Owns the shortcut table, the volume throttle, and the strategies
/// resolved from the host capabilities. One instance per player, created
/// at startup and held for the process lifetime.
pub struct Dispatcher<T: TimeProvider = SystemTimeProvider> {
    bindings: BindingConfig,
    volume: VolumeControl,
    play_strategy: PlayStrategy,
    time: T,
}

impl Dispatcher<SystemTimeProvider> {
    /// Create a dispatcher for the given host, probing its capabilities
    /// once.
    pub fn new<H: PlayerHost>(host: &H, bindings: BindingConfig) -> Self {
        Self::with_time_provider(host, bindings, SystemTimeProvider::new())
    }
}

impl<T: TimeProvider> Dispatcher<T> {
    /// Create a dispatcher with an explicit time source.
    pub fn with_time_provider<H: PlayerHost>(host: &H, bindings: BindingConfig, time: T) -> Self {
        for (a, b) in bindings.duplicate_chords() {
            warn!("duplicate key binding: {:?} and {:?} share a chord", a, b);
        }
        let caps = host.capabilities();
        Self {
            bindings,
            volume: VolumeControl::new(MuteStrategy::detect(&caps)),
            play_strategy: PlayStrategy::detect(&caps),
            time,
        }
    }

    pub fn bindings(&self) -> &BindingConfig {
        &self.bindings
    }

    /// Handle one keydown. Synchronous, at most one player mutation.
    ///
    /// Guard order: blocking modifiers abort everything; a matched action
    /// then only runs outside a typing context unless it is one of the
    /// always-available ones; unmatched keys fall through to the digit
    /// percent jump.
    pub fn handle<H: PlayerHost, N: Notifier>(
        &mut self,
        host: &mut H,
        notifier: &mut N,
        event: &KeyEvent,
        focus: Option<FocusedElement>,
    ) -> Dispatch {
        if event.has_blocking_modifier() {
            return Dispatch::Unhandled;
        }
        let typing = is_typing_context(focus);

        if let Some(action) = self.bindings.match_action(event.key, event.shift) {
            if typing && !action.bypasses_typing_guard() {
                return Dispatch::Unhandled;
            }
            return match self.run(host, notifier, action) {
                Ok(verdict) => verdict,
                Err(e) => {
                    // One failing binding must not take the others down.
                    warn!("action {:?} failed: {:#}", action, e);
                    Dispatch::Handled
                }
            };
        }

        if let Key::Digit(digit) = event.key {
            if typing {
                return Dispatch::Unhandled;
            }
            return match jump_to_tenth(host, digit) {
                Ok(Some(position)) => {
                    debug!("jump to {} ms", position);
                    Dispatch::Handled
                }
                // No track loaded: leave the digit for the focused element.
                Ok(None) => Dispatch::Unhandled,
                Err(e) => {
                    warn!("percent jump failed: {:#}", e);
                    Dispatch::Handled
                }
            };
        }

        Dispatch::Unhandled
    }

    fn run<H: PlayerHost, N: Notifier>(
        &mut self,
        host: &mut H,
        notifier: &mut N,
        action: PlayerAction,
    ) -> Result<Dispatch> {
        match action {
            PlayerAction::SeekBack => Ok(seek_verdict(seek_by(host, -(SEEK_STEP_MS as i64))?)),
            PlayerAction::SeekForward => Ok(seek_verdict(seek_by(host, SEEK_STEP_MS as i64)?)),
            PlayerAction::SeekBackLong => {
                Ok(seek_verdict(seek_by(host, -(SEEK_STEP_LONG_MS as i64))?))
            }
            PlayerAction::SeekForwardLong => {
                Ok(seek_verdict(seek_by(host, SEEK_STEP_LONG_MS as i64)?))
            }
            PlayerAction::VolumeUp | PlayerAction::VolumeDown => {
                let increase = action == PlayerAction::VolumeUp;
                let now_ms = self.time.now_ms();
                if let Some(volume) = self.volume.try_change(host, increase, now_ms)? {
                    let percent = (volume * 100.0).round() as u32;
                    notify(notifier, &format!("Volume: {}%", percent));
                }
                // A throttled press still consumed a volume key.
                Ok(Dispatch::Handled)
            }
            PlayerAction::TogglePlay => {
                let playing = toggle_play(host, self.play_strategy)?;
                notify(notifier, if playing { "Playing" } else { "Paused" });
                Ok(Dispatch::Handled)
            }
            PlayerAction::ToggleMute => {
                let muted = self.volume.toggle_mute(host)?;
                notify(notifier, if muted { "Muted" } else { "Unmuted" });
                Ok(Dispatch::Handled)
            }
            PlayerAction::NextTrack => {
                host.next_track()?;
                notify(notifier, "Next track");
                Ok(Dispatch::Handled)
            }
            PlayerAction::PreviousTrack => {
                host.previous_track()?;
                notify(notifier, "Previous track");
                Ok(Dispatch::Handled)
            }
        }
    }
}

/// A seek with no track loaded stays unhandled so the key keeps its
/// default behavior.
fn seek_verdict(committed: Option<u64>) -> Dispatch {
    match committed {
        Some(_) => Dispatch::Handled,
        None => Dispatch::Unhandled,
    }
}

fn notify<N: Notifier>(notifier: &mut N, message: &str) {
    if let Err(e) = notifier.notify(message) {
        debug!("notification failed: {:#}", e);
    }
}
