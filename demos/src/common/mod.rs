use std::{env, fs::OpenOptions, io::Write};

use embassy_time::Duration;
use log::warn;
use sim900::{Config, ReadMode};

pub const DEFAULT_PORT: &str = "/dev/ttyS0";

/// Install the logger, filtered by `RUST_LOG` (default `debug`). Records go to
/// stderr, or are appended to `SIM900_LOG_FILE` when that is set.
pub fn init_logger() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            buf.timestamp_millis(),
            record.target(),
            record.level(),
            record.args()
        )
    });

    let log_file = env::var("SIM900_LOG_FILE").ok().and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| eprintln!("Cannot open log file {}: {}", path, e))
            .ok()
    });
    if let Some(file) = log_file {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
}

/// Serial device path from `SIM900_PORT`.
pub fn port() -> String {
    env::var("SIM900_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_owned())
}

/// Client configuration from `SIM900_BAUD`, `SIM900_READ_MODE` and
/// `SIM900_QUIESCENCE_MS`, falling back to the defaults for anything unset or
/// unparsable.
pub fn config() -> Config {
    let mut config = Config::default();

    if let Some(baud) = parse_var::<u32>("SIM900_BAUD") {
        config = config.baud_rate(baud);
    }
    if let Some(mode) = parse_var::<ReadMode>("SIM900_READ_MODE") {
        config = config.read_mode(mode);
    }
    if let Some(ms) = parse_var::<u64>("SIM900_QUIESCENCE_MS") {
        config = config.drain_quiescence(Duration::from_millis(ms));
    }

    config
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let value = env::var(name).ok()?;
    match value.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("Ignoring invalid {}={:?}", name, value);
            None
        }
    }
}
