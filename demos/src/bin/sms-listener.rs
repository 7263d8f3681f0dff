use std::time::Duration;

use sim900::{hardware, prelude::*, Modem, PinNumbering};
use sim900_demos::common;

/// Pause after a read that returned nothing, so an idle modem is not polled
/// in a tight loop.
const IDLE_PAUSE: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::init_logger();
    hardware::init(PinNumbering::Board)?;

    let mut modem = Modem::open(&common::port(), common::config())?;

    modem.set_echo_default()?;
    modem.read_reply()?;
    modem.set_text_mode()?;
    modem.read_reply()?;
    modem.subscribe_default()?;
    modem.read_reply()?;

    if !modem.ping()? {
        log::warn!("Modem did not answer OK, listening anyway");
    }

    loop {
        let response = modem.read_response()?;
        let response = response.trim();
        if response.is_empty() {
            std::thread::sleep(IDLE_PAUSE);
        } else {
            log::info!("{}", response);
        }
    }
}
