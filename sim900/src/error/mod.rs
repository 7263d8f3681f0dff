mod connection_error;

pub use connection_error::ConnectionError;

use crate::hardware::PinNumbering;

/// Errors returned by the crate
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The serial device could not be opened
    Connection(ConnectionError),
    /// Serial read error
    Read,
    /// Serial write error
    Write,
    /// Command does not fit in the command buffer
    Overflow,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Connection(e) => write!(f, "Failed to open serial device: {}", e),
            Self::Read => write!(f, "Serial read error"),
            Self::Write => write!(f, "Serial write error"),
            Self::Overflow => write!(f, "Command exceeds {} bytes", crate::MAX_COMMAND_LEN),
        }
    }
}

impl std::error::Error for Error {}

/// Errors returned by [`hardware::init`](crate::hardware::init)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HardwareError {
    /// A different pin numbering mode is already active for this process
    AlreadyInitialized(PinNumbering),
}

impl core::fmt::Display for HardwareError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::AlreadyInitialized(mode) => {
                write!(f, "Pin numbering already initialized as {:?}", mode)
            }
        }
    }
}

impl std::error::Error for HardwareError {}
