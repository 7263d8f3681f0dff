//! Process-wide GPIO pin numbering.
//!
//! Boards that wire the modem's power or reset lines to GPIO need a pin
//! numbering scheme selected before any pin is touched. The modem client never
//! does this itself: the process entry point calls [`init`] once.
use core::sync::atomic::{AtomicU8, Ordering};

use log::info;

use crate::error::HardwareError;

const UNINITIALIZED: u8 = 0;

static PIN_NUMBERING: AtomicU8 = AtomicU8::new(UNINITIALIZED);

/// How GPIO pins are addressed.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum PinNumbering {
    /// Physical pin numbers on the board header
    Board = 1,
    /// Broadcom SoC channel numbers
    Bcm = 2,
}

impl PinNumbering {
    fn from_raw(v: u8) -> Option<Self> {
        match v {
            1 => Some(Self::Board),
            2 => Some(Self::Bcm),
            _ => None,
        }
    }
}

/// Select the pin numbering mode for this process.
///
/// Repeating the active mode is a no-op. Selecting a different mode once one
/// is active fails.
pub fn init(mode: PinNumbering) -> Result<(), HardwareError> {
    match PIN_NUMBERING.compare_exchange(
        UNINITIALIZED,
        mode as u8,
        Ordering::AcqRel,
        Ordering::Acquire,
    ) {
        Ok(_) => {
            info!("GPIO pin numbering set to {:?}", mode);
            Ok(())
        }
        Err(active) if active == mode as u8 => Ok(()),
        Err(active) => Err(HardwareError::AlreadyInitialized(
            PinNumbering::from_raw(active).unwrap_or(mode),
        )),
    }
}

/// The active pin numbering mode, if [`init`] has been called.
pub fn pin_numbering() -> Option<PinNumbering> {
    PinNumbering::from_raw(PIN_NUMBERING.load(Ordering::Acquire))
}
