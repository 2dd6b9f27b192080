use anyhow::Result;

use crate::traits::host::{HostCapabilities, PlayerHost};

/// How play/pause is implemented against the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayStrategy {
    /// Host has a single-call play/pause toggle.
    NativeToggle,
    /// Call play() or pause() keyed on the current playing state.
    PlayPause,
}

impl PlayStrategy {
    /// Resolve the strategy once from the host capabilities.
    pub fn detect(caps: &HostCapabilities) -> Self {
        if caps.native_toggle_play {
            PlayStrategy::NativeToggle
        } else {
            PlayStrategy::PlayPause
        }
    }
}

/// Flip the playing state. Exactly one host mutation per call, so one key
/// press is one state flip. Returns whether the player is playing
/// afterwards.
pub fn toggle_play<H: PlayerHost>(host: &mut H, strategy: PlayStrategy) -> Result<bool> {
    match strategy {
        PlayStrategy::NativeToggle => host.toggle_play()?,
        PlayStrategy::PlayPause => {
            if host.is_playing() {
                host.pause()?;
            } else {
                host.play()?;
            }
        }
    }
    Ok(host.is_playing())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::mocks::MockHost;

    #[test]
    fn test_native_toggle_single_call() {
        let mut host = MockHost::with_track(60_000, 0);
        host.playing = true;

        let playing = toggle_play(&mut host, PlayStrategy::NativeToggle).unwrap();
        assert!(!playing);
        assert_eq!(host.play_toggles, 1);
        assert_eq!(host.plays, 0);
        assert_eq!(host.pauses, 0);
    }

    #[test]
    fn test_fallback_pauses_when_playing() {
        let mut host = MockHost::with_track(60_000, 0);
        host.playing = true;

        let playing = toggle_play(&mut host, PlayStrategy::PlayPause).unwrap();
        assert!(!playing);
        assert_eq!(host.pauses, 1);
        assert_eq!(host.plays, 0);
    }

    #[test]
    fn test_fallback_plays_when_paused() {
        let mut host = MockHost::with_track(60_000, 0);

        let playing = toggle_play(&mut host, PlayStrategy::PlayPause).unwrap();
        assert!(playing);
        assert_eq!(host.plays, 1);
        assert_eq!(host.pauses, 0);
    }

    #[test]
    fn test_two_presses_return_to_start() {
        let mut host = MockHost::with_track(60_000, 0);

        toggle_play(&mut host, PlayStrategy::PlayPause).unwrap();
        toggle_play(&mut host, PlayStrategy::PlayPause).unwrap();
        assert!(!host.playing);
        assert_eq!(host.plays, 1);
        assert_eq!(host.pauses, 1);
    }

    #[test]
    fn test_strategy_detection() {
        let native = HostCapabilities {
            native_toggle_play: true,
            ..HostCapabilities::default()
        };
        assert_eq!(PlayStrategy::detect(&native), PlayStrategy::NativeToggle);
        assert_eq!(
            PlayStrategy::detect(&HostCapabilities::default()),
            PlayStrategy::PlayPause
        );
    }
}
