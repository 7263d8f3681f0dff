use embedded_io::{ErrorType, Read, ReadReady, Write};
use log::{error, info};
use serialport::SerialPort;

use crate::{error::ConnectionError, Config, Error};

/// A host serial port, exposed through the `embedded-io` traits the
/// [`Modem`](crate::Modem) is generic over.
///
/// The device is closed when this is dropped.
pub struct SerialDevice {
    port: Box<dyn SerialPort>,
}

impl SerialDevice {
    /// Open `path` with the baud rate and read timeout from `config`.
    pub fn open(path: &str, config: &Config) -> Result<Self, Error> {
        let timeout = core::time::Duration::from_micros(config.read_timeout.as_micros());

        let port = serialport::new(path, config.baud_rate)
            .timeout(timeout)
            .open()
            .map_err(|e| {
                error!("Failed to open serial port {}: {}", path, e);
                Error::Connection(ConnectionError::from(&e))
            })?;

        info!("Opened serial port {} at {} baud", path, config.baud_rate);
        Ok(Self { port })
    }

    /// Device path, if the platform reports one
    pub fn name(&self) -> Option<String> {
        self.port.name()
    }
}

impl ErrorType for SerialDevice {
    type Error = std::io::Error;
}

impl Read for SerialDevice {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        std::io::Read::read(&mut self.port, buf)
    }
}

impl ReadReady for SerialDevice {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(self.port.bytes_to_read()? > 0)
    }
}

impl Write for SerialDevice {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        std::io::Write::write(&mut self.port, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        std::io::Write::flush(&mut self.port)
    }
}
