use std::process::ExitCode;

use sim900::{hardware, prelude::*, Error, Modem, PinNumbering};
use sim900_demos::common;

fn main() -> ExitCode {
    common::init_logger();

    if let Err(e) = hardware::init(PinNumbering::Board) {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            log::error!("Modem did not answer OK");
            ExitCode::FAILURE
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<bool, Error> {
    let mut modem = Modem::open(&common::port(), common::config())?;

    modem.set_echo_default()?;
    // Consume the whole reply to ATE0, echo included
    modem.read_reply()?;

    if !modem.ping()? {
        return Ok(false);
    }

    println!("Manufacturer:     {}", modem.manufacturer()?);
    println!("Model:            {}", modem.model()?);
    println!("IMEI:             {}", modem.imei()?);
    println!("Software version: {}", modem.software_version()?);

    modem.close();
    Ok(true)
}
