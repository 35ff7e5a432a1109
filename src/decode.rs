//! Raw-event classification.
//!
//! [`Decoder`] turns the evdev event stream into [`PenEvent`]s. Tip
//! transitions are emitted as they arrive; axis samples are accumulated per
//! hardware frame and emitted once at the `SYN_REPORT` frame boundary with
//! both coordinates populated. Every other event kind is silently ignored;
//! ignoring is still full consumption, nothing is left queued.

use evdev::{AbsoluteAxisType, InputEvent, InputEventKind, Key, Synchronization};

use crate::config::SessionConfig;
use crate::event::PenEvent;

/// Extent of one absolute axis as reported by the device.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    /// Maps a raw axis value into `[0, range]`.
    ///
    /// `range` of `1.0` yields the normalized coordinate space. Arithmetic is
    /// done in `f64` so extreme extents cannot overflow.
    pub fn transform(&self, value: i32, range: f64) -> f64 {
        let span = f64::from(self.max) - f64::from(self.min);
        if span <= 0.0 {
            return 0.0;
        }
        (f64::from(value) - f64::from(self.min)) / span * range
    }
}

/// Stateful per-device decoder.
///
/// Coordinates persist across frames: a frame that updates only one axis
/// reports the other axis's last transformed value, matching how absolute
/// tablets report movement along a single axis.
#[derive(Debug)]
pub struct Decoder {
    x_range: AxisRange,
    y_range: AxisRange,
    range: f64,
    decode_tip: bool,
    decode_axis: bool,
    x: f64,
    y: f64,
    frame_dirty: bool,
}

impl Decoder {
    pub fn new(config: &SessionConfig, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            x_range,
            y_range,
            range: config.range,
            decode_tip: config.decode_tip,
            decode_axis: config.decode_axis,
            x: 0.0,
            y: 0.0,
            frame_dirty: false,
        }
    }

    /// Feeds one raw event; returns a decoded event if this one completes it.
    pub fn feed(&mut self, event: InputEvent) -> Option<PenEvent> {
        match event.kind() {
            InputEventKind::Key(key) if self.decode_tip && key == Key::BTN_TOUCH => {
                match event.value() {
                    0 => Some(PenEvent::tip(false)),
                    1 => Some(PenEvent::tip(true)),
                    // Autorepeat never applies to the tip switch.
                    _ => None,
                }
            }
            InputEventKind::AbsAxis(axis) if self.decode_axis && axis == AbsoluteAxisType::ABS_X => {
                self.x = self.x_range.transform(event.value(), self.range);
                self.frame_dirty = true;
                None
            }
            InputEventKind::AbsAxis(axis) if self.decode_axis && axis == AbsoluteAxisType::ABS_Y => {
                self.y = self.y_range.transform(event.value(), self.range);
                self.frame_dirty = true;
                None
            }
            InputEventKind::Synchronization(sync)
                if sync == Synchronization::SYN_REPORT && self.frame_dirty =>
            {
                self.frame_dirty = false;
                Some(PenEvent::axis(self.x, self.y))
            }
            _ => None,
        }
    }
}
