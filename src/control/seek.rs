use anyhow::Result;

use crate::traits::host::PlayerHost;

/// Seek step for the arrow keys, in milliseconds.
pub const SEEK_STEP_MS: u64 = 5_000;
/// Seek step for the J/L keys, in milliseconds.
pub const SEEK_STEP_LONG_MS: u64 = 10_000;

/// Seek relative to the current position, clamped to [0, duration].
/// Returns the committed position, or None when no track is loaded; the
/// host is not called in that case.
pub fn seek_by<H: PlayerHost>(host: &mut H, delta_ms: i64) -> Result<Option<u64>> {
    let duration = host.duration_ms();
    if duration == 0 {
        return Ok(None);
    }
    let progress = host.progress_ms();
    let target = if delta_ms < 0 {
        progress.saturating_sub(delta_ms.unsigned_abs())
    } else {
        progress.saturating_add(delta_ms as u64)
    }
    .min(duration);
    host.seek(target)?;
    Ok(Some(target))
}

/// Jump to a tenth of the track: digit d lands at d * duration / 10.
/// No track loaded is a silent no-op returning None, so digit keys keep
/// typing normally into whatever is focused.
pub fn jump_to_tenth<H: PlayerHost>(host: &mut H, digit: u8) -> Result<Option<u64>> {
    debug_assert!(digit <= 9);
    let duration = host.duration_ms();
    if duration == 0 {
        return Ok(None);
    }
    let target = duration * u64::from(digit) / 10;
    host.seek(target)?;
    Ok(Some(target))
}
