/// Reason the serial device could not be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionError {
    Unknown,
    NoDevice,
    PermissionDenied,
    Busy,
    InvalidSettings,
}

impl From<&serialport::Error> for ConnectionError {
    fn from(e: &serialport::Error) -> Self {
        use std::io::ErrorKind as Io;

        match e.kind() {
            serialport::ErrorKind::NoDevice => Self::NoDevice,
            serialport::ErrorKind::InvalidInput => Self::InvalidSettings,
            serialport::ErrorKind::Io(Io::NotFound) => Self::NoDevice,
            serialport::ErrorKind::Io(Io::PermissionDenied) => Self::PermissionDenied,
            serialport::ErrorKind::Io(Io::AddrInUse | Io::WouldBlock) => Self::Busy,
            serialport::ErrorKind::Io(Io::InvalidInput) => Self::InvalidSettings,
            _ => Self::Unknown,
        }
    }
}

impl core::fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unknown => write!(f, "Unknown"),
            Self::NoDevice => write!(f, "No such device"),
            Self::PermissionDenied => write!(f, "Permission denied"),
            Self::Busy => write!(f, "Device busy"),
            Self::InvalidSettings => write!(f, "Invalid port settings"),
        }
    }
}
