//! A blocking client for SIM900/SIM900A GSM modems, speaking plain AT command
//! lines over a serial port.
//!
//! The client writes a command body terminated by `\r\n` and reads back
//! whatever the modem answers as text. There is no response parsing beyond
//! that: success is decided by looking for `OK` in the returned text.
//!
//! Responses are read with one of two strategies, selected through
//! [`Config`]:
//!
//! - [`ReadMode::Line`] blocks, up to the read timeout, for a single `\n`
//!   terminated line.
//! - [`ReadMode::Drain`] returns every byte currently queued on the port,
//!   optionally waiting a short quiescence window for further bursts.
//!
//! # Example
//!
//! ```no_run
//! use sim900::{hardware, prelude::*, Config, Modem, PinNumbering, ReadMode};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     hardware::init(PinNumbering::Board)?;
//!
//!     let mut modem = Modem::open("/dev/ttyS0", Config::new(ReadMode::Line))?;
//!     modem.set_echo_default()?;
//!     modem.set_text_mode()?;
//!     modem.subscribe_default()?;
//!
//!     if modem.ping()? {
//!         let response = modem.read_response()?;
//!         println!("{}", response);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Any port implementing the `embedded-io` [`Read`], [`Write`] and
//! [`ReadReady`] traits can be driven through [`Modem::new`] instead of
//! [`Modem::open`].
//!
//! [`Read`]: embedded_io::Read
//! [`Write`]: embedded_io::Write
//! [`ReadReady`]: embedded_io::ReadReady

mod blocking_timer;
pub mod command;
mod config;
mod error;
pub mod hardware;
pub mod helpers;
mod modem;
mod serial;
mod traits;

#[cfg(test)]
mod port_mock;

pub use self::command::{Command, MAX_COMMAND_LEN};
pub use self::config::{Config, ReadMode};
pub use self::error::{ConnectionError, Error, HardwareError};
pub use self::hardware::PinNumbering;
pub use self::modem::{Modem, MAX_RESPONSE_LEN};
pub use self::serial::SerialDevice;
pub use self::traits::AtClient;

pub mod prelude {
    //! The prelude is a collection of all the traits in this crate
    //!
    //! The traits have been renamed to avoid collisions with other items when
    //! performing a glob import.
    pub use crate::AtClient as _sim900_AtClient;
}
