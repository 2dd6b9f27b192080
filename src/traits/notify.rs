use anyhow::Result;
use tracing::info;

/// Transient user feedback for shortcut actions ("Volume: 55%", "Paused").
/// Implementations: LogNotifier (tracing), NullNotifier, host adapters.
///
/// Strictly best-effort: the dispatcher logs and swallows errors, so a
/// failing notifier never blocks an action.
pub trait Notifier {
    fn notify(&mut self, message: &str) -> Result<()>;
}

/// Notifier that writes messages to the log.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, message: &str) -> Result<()> {
        info!("{}", message);
        Ok(())
    }
}

/// Notifier that discards all messages.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }
}
