//! Error taxonomy for sessions and configuration loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by a [`DeviceSession`](crate::session::DeviceSession).
///
/// Open and attach failures carry the failing path and the underlying OS
/// reason so a caller can decide whether to retry with elevated privileges,
/// pick a different device, or give up.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The OS refused or failed to open the device node.
    #[error("failed to open {} ({source})", .path.display())]
    DeviceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The node opened but could not be attached as an absolute-axis device.
    #[error("failed to attach device {} ({source})", .path.display())]
    DeviceAttach {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading pending events from the attached device failed, e.g. the
    /// device disappeared mid-session.
    #[error("device read failed ({source})")]
    Read {
        #[source]
        source: io::Error,
    },

    /// The event stream violated protocol-level consistency. Indicates an
    /// environment or driver fault, not a normal runtime condition.
    #[error("input protocol violation: {0}")]
    Protocol(String),

    /// `poll` was called before a successful `start`.
    #[error("session not started")]
    NotStarted,

    /// `start` was called while the session is already running.
    #[error("session already started")]
    AlreadyStarted,

    /// The session was closed, either explicitly or by an earlier failed
    /// `start`, and cannot be restarted.
    #[error("session closed")]
    Closed,
}

/// Errors loading a [`SessionConfig`](crate::config::SessionConfig) file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {} ({source})", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {} ({source})", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
