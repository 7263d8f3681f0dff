//! AT command bodies understood by the SIM900 and the buffer they are sent
//! from.
//!
//! AT is short for ATtention; every command line starts with `AT` and ends
//! with a carriage return + line feed.
use heapless::String;

use crate::Error;

/// Longest command, terminator included, that can be sent.
pub const MAX_COMMAND_LEN: usize = 128;

/// Line terminator appended to every command body.
pub const TERMINATOR: &str = "\r\n";

/// Device status. Answers `OK` or `ERROR`.
pub const STATUS: &str = "AT";
/// Manufacturer identification, e.g. `SIMCOM_Ltd`.
pub const MANUFACTURER: &str = "AT+CGMI";
/// Model identification, e.g. `SIMCOM_SIM900A`.
pub const MODEL: &str = "AT+CGMM";
/// IMEI, e.g. `359771032619408`.
pub const IMEI: &str = "AT+CGSN";
/// Software revision, e.g. `Revision:1137B11SIM900A32_ST`.
pub const SOFTWARE_VERSION: &str = "AT+CGMR";
/// Command echo, followed by `1` (on) or `0` (off).
pub const ECHO: &str = "ATE";
/// New SMS message indications.
pub const SUBSCRIBE_SMS: &str = "AT+CNMI";
/// SMS message format. `1` selects text mode, `0` PDU mode.
pub const MESSAGE_FORMAT: &str = "AT+CMGF";

/// Echo status used when none is given.
pub const DEFAULT_ECHO_STATUS: &str = "0";
/// `<mode>,<mt>,<bm>,<ds>,<bfr>` used when none is given: buffer indications
/// while the link is reserved and report new messages by storage index.
pub const DEFAULT_SUBSCRIBE_PARAMS: &str = "3,1,0,0,0";

/// A single terminated command line, ready to be written to the port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    buf: String<MAX_COMMAND_LEN>,
}

impl Command {
    /// Terminate `body` with `\r\n`.
    pub fn new(body: &str) -> Result<Self, Error> {
        Self::from_parts(&[body])
    }

    /// Concatenate `parts` into one body and terminate it.
    pub fn from_parts(parts: &[&str]) -> Result<Self, Error> {
        let mut buf = String::new();
        for part in parts.iter().chain(core::iter::once(&TERMINATOR)) {
            buf.push_str(part).map_err(|_| Error::Overflow)?;
        }
        Ok(Self { buf })
    }

    /// `<name>=<params>`
    pub fn set(name: &str, params: &str) -> Result<Self, Error> {
        Self::from_parts(&[name, "=", params])
    }

    /// The command line including its terminator
    pub fn as_bytes(&self) -> &[u8] {
        self.buf.as_bytes()
    }

    /// The command body without its terminator
    pub fn body(&self) -> &str {
        &self.buf[..self.buf.len() - TERMINATOR.len()]
    }
}
