use anyhow::Result;

use crate::traits::host::{HostCapabilities, PlayerHost};

/// Volume change per keypress.
pub const VOLUME_STEP: f32 = 0.05;
/// Minimum interval between two committed volume changes, in milliseconds.
pub const VOLUME_THROTTLE_MS: i64 = 100;
/// Volume restored by the fallback unmute. The fallback is lossy: the
/// pre-mute volume is not remembered.
pub const FALLBACK_UNMUTE_VOLUME: f32 = 0.5;

/// How mute is implemented against the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteStrategy {
    /// Host has a native mute toggle.
    NativeToggle,
    /// Snap volume to zero and back to a fixed level.
    VolumeFallback,
}

impl MuteStrategy {
    /// Resolve the strategy once from the host capabilities.
    pub fn detect(caps: &HostCapabilities) -> Self {
        if caps.native_toggle_mute {
            MuteStrategy::NativeToggle
        } else {
            MuteStrategy::VolumeFallback
        }
    }
}

/// Rate limit on volume commits. OS key repeat can deliver dozens of
/// keydowns per second; at most one commit goes through per window.
#[derive(Debug)]
pub struct VolumeThrottle {
    window_ms: i64,
    last_commit_ms: Option<i64>,
}

impl VolumeThrottle {
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            last_commit_ms: None,
        }
    }

    /// Whether a change may commit at `now_ms`. Records the commit time
    /// when it may.
    pub fn admit(&mut self, now_ms: i64) -> bool {
        if let Some(last) = self.last_commit_ms {
            if now_ms - last < self.window_ms {
                return false;
            }
        }
        self.last_commit_ms = Some(now_ms);
        true
    }
}

/// Volume and mute handling, with the mute strategy resolved at startup.
#[derive(Debug)]
pub struct VolumeControl {
    throttle: VolumeThrottle,
    strategy: MuteStrategy,
}

impl VolumeControl {
    pub fn new(strategy: MuteStrategy) -> Self {
        Self {
            throttle: VolumeThrottle::new(VOLUME_THROTTLE_MS),
            strategy,
        }
    }

    pub fn strategy(&self) -> MuteStrategy {
        self.strategy
    }

    /// Step the volume up or down, clamped to [0, 1].
    /// Returns the committed volume, or None when the throttle window has
    /// not elapsed; the host is not called in that case.
    pub fn try_change<H: PlayerHost>(
        &mut self,
        host: &mut H,
        increase: bool,
        now_ms: i64,
    ) -> Result<Option<f32>> {
        if !self.throttle.admit(now_ms) {
            return Ok(None);
        }
        let step = if increase { VOLUME_STEP } else { -VOLUME_STEP };
        let volume = (host.volume() + step).clamp(0.0, 1.0);
        host.set_volume(volume)?;
        Ok(Some(volume))
    }

    /// Toggle mute. Returns whether the player is muted afterwards.
    pub fn toggle_mute<H: PlayerHost>(&self, host: &mut H) -> Result<bool> {
        match self.strategy {
            MuteStrategy::NativeToggle => {
                host.toggle_mute()?;
                Ok(host.is_muted())
            }
            MuteStrategy::VolumeFallback => {
                if host.volume() > 0.0 {
                    host.set_volume(0.0)?;
                    Ok(true)
                } else {
                    host.set_volume(FALLBACK_UNMUTE_VOLUME)?;
                    Ok(false)
                }
            }
        }
    }
}
