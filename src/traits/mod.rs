//! Trait seams toward the embedding application.
//!
//! This module provides:
//! - [`host::PlayerHost`]: the external player control surface
//! - [`notify::Notifier`]: best-effort transient user feedback
//! - [`time::TimeProvider`]: injectable clock for the volume throttle

pub mod host;
pub mod notify;
pub mod time;
