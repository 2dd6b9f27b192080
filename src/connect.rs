//! Host acquisition: the player API may not be initialized when the
//! shortcut layer starts.

use std::thread;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("player host unavailable after {attempts} attempts")]
    Unavailable { attempts: u32 },
}

/// Fixed-backoff polling for a host that is not ready yet.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Delay between attempts.
    pub delay: Duration,
    /// Give up after this many attempts. None retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            max_attempts: None,
        }
    }
}

/// Poll `probe` until it produces a host, sleeping `policy.delay` between
/// attempts. The default policy never gives up: hosts that load
/// asynchronously always come up eventually, and starting without one
/// would leave every shortcut dead.
pub fn acquire_host<H, F>(mut probe: F, policy: &RetryPolicy) -> Result<H, HostError>
where
    F: FnMut() -> Option<H>,
{
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        if let Some(host) = probe() {
            info!("player host available after {} attempt(s)", attempts);
            return Ok(host);
        }
        if let Some(max) = policy.max_attempts {
            if attempts >= max {
                return Err(HostError::Unavailable { attempts });
            }
        }
        debug!("player host not ready, retrying in {:?}", policy.delay);
        if !policy.delay.is_zero() {
            thread::sleep(policy.delay);
        }
    }
}
