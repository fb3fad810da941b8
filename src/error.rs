//! Error taxonomy for the rendering core.
//!
//! The original firmware fired bus writes blind and never looked back; here
//! every transport call surfaces a [`BusError`] and the core propagates it
//! instead of continuing with stale state. Out-of-range coordinates in
//! `dot`/`line` stay silent no-ops by design and never reach this type.

use core::fmt;

/// Failure reported by the bus transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The peer did not acknowledge an address or data byte.
    Nack,
    /// Arbitration lost or the bus is otherwise unusable.
    Bus,
    /// The transport cannot perform reads (needed by hardware-readback mode).
    ReadUnsupported,
    /// A transaction exceeded the transport's buffering capacity.
    Overrun,
    /// Anything the underlying HAL reports that has no mapping above.
    Other,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusError::Nack => write!(f, "no acknowledgment from panel"),
            BusError::Bus => write!(f, "bus unusable"),
            BusError::ReadUnsupported => write!(f, "transport does not support reads"),
            BusError::Overrun => write!(f, "transaction overran transport buffer"),
            BusError::Other => write!(f, "bus transport error"),
        }
    }
}

/// Top-level driver error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A bus transaction failed.
    Bus(BusError),
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Error::Bus(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Bus(e) => write!(f, "bus: {}", e),
        }
    }
}
