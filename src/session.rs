//! Device session lifecycle.
//!
//! [`DeviceSession`] owns one device node for its lifetime. The lifecycle has
//! two phases so construction never fails: [`DeviceSession::new`] allocates
//! nothing, [`DeviceSession::start`] acquires the OS resources.
//!
//! State machine: `Uninitialized -> Ready` on a successful `start`,
//! `Uninitialized -> Closed` on a failed one, `Ready -> Closed` on close or
//! drop. No partial state is reachable: a failed `start` leaves nothing open,
//! and a closed session cannot be restarted.
//!
//! A session holds exclusive mutable access to an OS resource; it is not
//! shareable across threads without external serialization.

use std::io;
use std::mem;
use std::path::Path;

use evdev::{AbsoluteAxisType, Device};

use crate::accessor::{DeviceAccessor, SystemAccessor};
use crate::config::SessionConfig;
use crate::decode::Decoder;
use crate::error::SessionError;
use crate::event::PenEvent;

/// Safety valve: maximum number of event fetches drained per `poll()` call.
///
/// Prevents a runaway device from pinning the caller's loop if it produces
/// data faster than the host is polling.
const MAX_FETCHES_PER_POLL: usize = 32;

enum State {
    Uninitialized,
    Ready(Context),
    Closed,
}

/// Live protocol context: the attached device plus its frame decoder.
struct Context {
    device: Device,
    decoder: Decoder,
}

/// Stateful owner of one pen/tablet device node.
pub struct DeviceSession {
    config: SessionConfig,
    accessor: Box<dyn DeviceAccessor>,
    state: State,
}

impl DeviceSession {
    /// Session with direct OS access. Never fails; nothing is opened until
    /// [`start`](Self::start).
    pub fn new(config: SessionConfig) -> Self {
        Self::with_accessor(config, SystemAccessor)
    }

    /// Session routed through a caller-supplied accessor (privilege broker,
    /// test fake).
    pub fn with_accessor(config: SessionConfig, accessor: impl DeviceAccessor + 'static) -> Self {
        Self {
            config,
            accessor: Box::new(accessor),
            state: State::Uninitialized,
        }
    }

    /// True once `start` has succeeded and the session has not been closed.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Opens and attaches the device node at `path`.
    ///
    /// Acquisition is atomic in effect: on success the session is fully
    /// initialized, on failure every partially acquired resource is released
    /// and the session is closed.
    pub fn start(&mut self, path: impl AsRef<Path>) -> Result<(), SessionError> {
        match self.state {
            State::Ready(_) => return Err(SessionError::AlreadyStarted),
            State::Closed => return Err(SessionError::Closed),
            State::Uninitialized => {}
        }
        let path = path.as_ref();

        let device = match self.accessor.open(path) {
            Ok(device) => device,
            Err(source) => {
                log::warn!("failed to open {} ({source})", path.display());
                self.state = State::Closed;
                return Err(SessionError::DeviceOpen {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        match self.attach(&device) {
            Ok(decoder) => {
                self.state = State::Ready(Context { device, decoder });
                Ok(())
            }
            Err(source) => {
                log::warn!("failed to attach device {} ({source})", path.display());
                self.accessor.close(device);
                self.state = State::Closed;
                Err(SessionError::DeviceAttach {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    /// Queries the axis extents that drive the coordinate transform.
    fn attach(&self, device: &Device) -> io::Result<Decoder> {
        let x_range = self.accessor.abs_range(device, AbsoluteAxisType::ABS_X)?;
        let y_range = self.accessor.abs_range(device, AbsoluteAxisType::ABS_Y)?;
        for extent in [x_range, y_range] {
            if extent.max <= extent.min {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "degenerate absolute axis extent",
                ));
            }
        }
        Ok(Decoder::new(&self.config, x_range, y_range))
    }

    /// Drains everything currently pending on the device and returns the
    /// decoded events in arrival order.
    ///
    /// Non-blocking: with nothing pending this returns an empty `Vec`
    /// immediately, so it is safe to call at any rate from a latency-sensitive
    /// loop.
    pub fn poll(&mut self) -> Result<Vec<PenEvent>, SessionError> {
        let ctx = match &mut self.state {
            State::Ready(ctx) => ctx,
            _ => return Err(SessionError::NotStarted),
        };

        let mut events = Vec::new();

        for _ in 0..MAX_FETCHES_PER_POLL {
            let batch = match ctx.device.fetch_events() {
                Ok(batch) => batch,
                Err(err) => match err.kind() {
                    io::ErrorKind::WouldBlock => break,
                    io::ErrorKind::Interrupted => continue,
                    // The protocol library reports stream-consistency faults
                    // as invalid data; everything else is an ordinary read
                    // failure (unplug, revoked access).
                    io::ErrorKind::InvalidData => {
                        return Err(SessionError::Protocol(err.to_string()))
                    }
                    _ => return Err(SessionError::Read { source: err }),
                },
            };
            for raw in batch {
                if let Some(event) = ctx.decoder.feed(raw) {
                    log::trace!("decoded {event:?}");
                    events.push(event);
                }
            }
        }

        Ok(events)
    }

    /// Releases the device, if held, and closes the session.
    pub fn close(&mut self) {
        if let State::Ready(ctx) = mem::replace(&mut self.state, State::Closed) {
            self.accessor.close(ctx.device);
        }
    }
}

impl Drop for DeviceSession {
    fn drop(&mut self) {
        self.close();
    }
}
