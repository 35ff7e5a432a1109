//! Decoded pen events.
//!
//! A session reports decoded input as small immutable records ([`PenEvent`])
//! tagged with a [`PenEventKind`], returned in arrival order from
//! [`DeviceSession::poll`](crate::session::DeviceSession::poll).
//!
//! ## Value conventions
//! - **Coordinates:** `x`/`y` are the device's absolute position mapped into
//!   `[0, range]`; the default range of `1.0` gives normalized coordinates
//!   (see [`SessionConfig`](crate::config::SessionConfig)).
//! - **Tip state:** press/release edges of the tool tip, not level state.
//!
//! Fields that do not apply to an event's kind always hold their fixed
//! defaults (`false` / `0.0`), never a value carried over from an earlier
//! decode. The [`PenEvent::tip`] and [`PenEvent::axis`] constructors keep that
//! invariant.

use serde::{Deserialize, Serialize};

/// What a [`PenEvent`] describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PenEventKind {
    /// The tool tip touched or left the surface.
    TipTransition,
    /// A new absolute position sample.
    AxisSample,
}

/// One decoded occurrence.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PenEvent {
    /// Event classification; selects which of the fields below apply.
    pub kind: PenEventKind,
    /// Tip contact state. Meaningful only for [`PenEventKind::TipTransition`].
    pub tip_is_down: bool,
    /// Transformed X coordinate. Meaningful only for [`PenEventKind::AxisSample`].
    pub x: f64,
    /// Transformed Y coordinate. Meaningful only for [`PenEventKind::AxisSample`].
    pub y: f64,
}

impl PenEvent {
    /// A tip contact transition.
    pub fn tip(tip_is_down: bool) -> Self {
        Self {
            kind: PenEventKind::TipTransition,
            tip_is_down,
            x: 0.0,
            y: 0.0,
        }
    }

    /// An absolute position sample.
    pub fn axis(x: f64, y: f64) -> Self {
        Self {
            kind: PenEventKind::AxisSample,
            tip_is_down: false,
            x,
            y,
        }
    }
}
