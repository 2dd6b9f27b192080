use anyhow::Result;

/// What the host can do natively. Queried once at dispatcher construction
/// and resolved into fixed strategies, never re-checked per keypress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HostCapabilities {
    /// Host exposes a single-call play/pause toggle.
    pub native_toggle_play: bool,
    /// Host exposes a single-call mute toggle.
    pub native_toggle_mute: bool,
}

/// Abstraction over the external media-player control surface.
/// Implementations: host-specific adapters (production), MockHost (testing).
///
/// Player state is owned entirely by the host; handlers read it through
/// this trait once per invocation and never cache it.
pub trait PlayerHost {
    /// Total length of the current track in milliseconds. 0 means no track
    /// is loaded.
    fn duration_ms(&self) -> u64;

    /// Current playback position in milliseconds.
    fn progress_ms(&self) -> u64;

    /// Jump to an absolute position in milliseconds.
    fn seek(&mut self, position_ms: u64) -> Result<()>;

    /// Current volume (0.0..=1.0).
    fn volume(&self) -> f32;

    /// Set volume (0.0..=1.0).
    fn set_volume(&mut self, volume: f32) -> Result<()>;

    fn is_playing(&self) -> bool;

    /// Single-call play/pause flip. Only called when capabilities report it.
    fn toggle_play(&mut self) -> Result<()>;

    fn play(&mut self) -> Result<()>;

    fn pause(&mut self) -> Result<()>;

    fn is_muted(&self) -> bool;

    /// Native mute flip. Only called when capabilities report it.
    fn toggle_mute(&mut self) -> Result<()>;

    fn next_track(&mut self) -> Result<()>;

    fn previous_track(&mut self) -> Result<()>;

    fn capabilities(&self) -> HostCapabilities;
}
