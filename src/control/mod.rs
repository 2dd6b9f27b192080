//! Player-control handlers: seek, volume, transport.
//!
//! Each handler reads host state once, commits at most one change through
//! the host API, and returns what happened for notification purposes.

mod seek;
mod transport;
mod volume;

pub use seek::{SEEK_STEP_LONG_MS, SEEK_STEP_MS, jump_to_tenth, seek_by};
pub use transport::{PlayStrategy, toggle_play};
pub use volume::{
    FALLBACK_UNMUTE_VOLUME, MuteStrategy, VOLUME_STEP, VOLUME_THROTTLE_MS, VolumeControl,
    VolumeThrottle,
};
