//! Privileged device-node access.
//!
//! Input device nodes usually require elevated privileges to open. The session
//! never opens the OS path itself; it goes through a [`DeviceAccessor`], so an
//! embedding application can route the open through its own privilege broker
//! and tests can substitute a fake that never touches real devices.
//!
//! The accessor owns the whole privileged surface the session needs: attaching
//! the node as an [`evdev::Device`], releasing that handle, and querying
//! absolute-axis extents at attach time. Open flags and non-blocking mode are
//! the protocol library's concern; `evdev` opens its devices non-blocking.

use std::io;
use std::path::Path;

use evdev::{AbsoluteAxisType, Device};

use crate::decode::AxisRange;

/// OS boundary used by a session to acquire and release its device.
pub trait DeviceAccessor {
    /// Opens the device node at `path`. The error carries the OS errno.
    fn open(&self, path: &Path) -> io::Result<Device>;

    /// Releases a device obtained from [`open`](Self::open).
    ///
    /// Called exactly once per successful open; the default releases it by
    /// dropping.
    fn close(&self, device: Device) {
        drop(device);
    }

    /// Reports the extent of an absolute axis on the opened device.
    fn abs_range(&self, device: &Device, axis: AbsoluteAxisType) -> io::Result<AxisRange> {
        let state = device.get_abs_state()?;
        let info = state[axis.0 as usize];
        Ok(AxisRange {
            min: info.minimum,
            max: info.maximum,
        })
    }
}

/// Direct accessor: opens device nodes with the calling process's own
/// privileges.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemAccessor;

impl DeviceAccessor for SystemAccessor {
    fn open(&self, path: &Path) -> io::Result<Device> {
        Device::open(path)
    }
}
