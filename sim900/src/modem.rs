use embassy_time::Duration;
use embedded_io::{Error as _, ErrorKind, Read, ReadReady, Write};
use heapless::Vec;
use log::{debug, error, trace};

use crate::{
    blocking_timer::{self, BlockingTimer},
    command::Command,
    helpers::{decode, LossyStr},
    serial::SerialDevice,
    AtClient, Config, Error, ReadMode,
};

/// Longest response returned by a single read. Anything beyond stays queued
/// on the port for the next read.
pub const MAX_RESPONSE_LEN: usize = 1024;

/// Pause between two polls of an idle port while draining.
const IDLE_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Client responsible for writing commands to the modem and reading back its
/// responses over a single, exclusively owned serial port.
///
/// All operations take `&mut self`; a host sharing one modem between threads
/// wraps it in a single mutex.
pub struct Modem<P>
where
    P: Read + Write + ReadReady,
{
    port: P,
    config: Config,
    cooldown_timer: Option<BlockingTimer>,
}

impl Modem<SerialDevice> {
    /// Open the serial device at `path` (e.g. `/dev/ttyS0`).
    ///
    /// Fails with [`Error::Connection`] if the device cannot be opened.
    pub fn open(path: &str, config: Config) -> Result<Self, Error> {
        let port = SerialDevice::open(path, &config)?;
        Ok(Self::new(port, config))
    }
}

impl<P> Modem<P>
where
    P: Read + Write + ReadReady,
{
    /// Wrap an already open port.
    pub fn new(port: P, config: Config) -> Self {
        Self {
            port,
            config,
            cooldown_timer: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Give back the underlying port.
    pub fn release(self) -> P {
        self.port
    }

    /// Close the port.
    pub fn close(self) {
        debug!("Closing modem port");
        drop(self.port);
    }

    /// Read a single line, up to and including its `\n`.
    ///
    /// Returns early with whatever has been received once the read timeout
    /// expires, which may be nothing at all.
    pub fn read_line(&mut self) -> Result<String, Error> {
        let mut buf: Vec<u8, MAX_RESPONSE_LEN> = Vec::new();
        let deadline = BlockingTimer::after(self.config.read_timeout);
        let mut byte = [0; 1];

        loop {
            if buf.is_full() {
                error!("Response overflow! Buffer: {:?}", LossyStr(&buf));
                break;
            }

            match self.port.read(&mut byte) {
                Ok(0) => break,
                Ok(_) => {
                    buf.push(byte[0]).map_err(|_| Error::Overflow)?;
                    if byte[0] == b'\n' {
                        break;
                    }
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => break,
                Err(e) => return Err(Self::read_error(e)),
            }

            if deadline.is_expired() {
                trace!("Line read timed out");
                break;
            }
        }

        Ok(Self::finish(&buf))
    }

    /// Read every byte queued on the port.
    ///
    /// Returns as soon as the port has had nothing to offer for the
    /// configured drain quiescence window. With a zero window a response
    /// arriving in two bursts may be returned as two partial responses.
    pub fn drain(&mut self) -> Result<String, Error> {
        let mut buf: Vec<u8, MAX_RESPONSE_LEN> = Vec::new();
        let mut chunk = [0; 64];
        let mut idle = BlockingTimer::after(self.config.drain_quiescence);

        loop {
            if !self.port.read_ready().map_err(Self::read_error)? {
                if idle.is_expired() {
                    break;
                }
                blocking_timer::sleep(IDLE_POLL_INTERVAL);
                continue;
            }

            let room = buf.capacity() - buf.len();
            if room == 0 {
                error!("Response overflow! Buffer: {:?}", LossyStr(&buf));
                break;
            }

            let len = room.min(chunk.len());
            match self.port.read(&mut chunk[..len]) {
                Ok(0) => break,
                Ok(n) => {
                    trace!("Read {:?}", LossyStr(&chunk[..n]));
                    buf.extend_from_slice(&chunk[..n])
                        .map_err(|_| Error::Overflow)?;
                    idle = BlockingTimer::after(self.config.drain_quiescence);
                }
                Err(e) if e.kind() == ErrorKind::TimedOut => {}
                Err(e) => return Err(Self::read_error(e)),
            }
        }

        Ok(Self::finish(&buf))
    }

    fn finish(buf: &[u8]) -> String {
        if buf.is_empty() {
            debug!("No response");
        } else {
            debug!("Received response: {:?}", LossyStr(buf));
        }
        decode(buf)
    }

    fn read_error(e: P::Error) -> Error {
        error!("Got serial read error {:?}", e.kind());
        Error::Read
    }

    fn send_inner(&mut self, cmd: &[u8]) -> Result<(), Error> {
        debug!("Sending command: {:?}", LossyStr(cmd));

        self.port.write_all(cmd).map_err(|e| {
            error!("Got serial write error {:?}", e.kind());
            Error::Write
        })?;
        self.port.flush().map_err(|e| {
            error!("Got serial flush error {:?}", e.kind());
            Error::Write
        })?;
        Ok(())
    }

    fn start_cooldown_timer(&mut self) {
        self.cooldown_timer = Some(BlockingTimer::after(self.config.cmd_cooldown));
    }

    fn wait_cooldown_timer(&mut self) {
        if let Some(cooldown) = self.cooldown_timer.take() {
            cooldown.wait();
        }
    }
}

impl<P> AtClient for Modem<P>
where
    P: Read + Write + ReadReady,
{
    fn send(&mut self, cmd: &Command) -> Result<(), Error> {
        self.wait_cooldown_timer();

        self.send_inner(cmd.as_bytes())?;

        self.start_cooldown_timer();
        Ok(())
    }

    fn read_response(&mut self) -> Result<String, Error> {
        match self.config.read_mode {
            ReadMode::Line => self.read_line(),
            ReadMode::Drain => self.drain(),
        }
    }
}
