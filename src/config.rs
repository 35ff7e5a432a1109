//! Session configuration.
//!
//! [`SessionConfig`] controls the coordinate transform and which event classes
//! the decoder emits. The device node path is deliberately not part of the
//! config: it is a parameter of
//! [`DeviceSession::start`](crate::session::DeviceSession::start), so one
//! config can serve several devices.
//!
//! Configs can be loaded from a TOML file; missing keys fall back to their
//! defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Decoder and transform settings for one session.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Upper bound of the transformed coordinate space. `1.0` yields
    /// normalized `[0, 1]` coordinates; a screen width/height maps the device
    /// onto pixels.
    pub range: f64,
    /// Emit tip contact transitions. Turning this off moves them into the
    /// silently ignored set.
    pub decode_tip: bool,
    /// Emit absolute position samples. Turning this off moves them into the
    /// silently ignored set.
    pub decode_axis: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            range: 1.0,
            decode_tip: true,
            decode_axis: true,
        }
    }
}

impl SessionConfig {
    /// Loads a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
