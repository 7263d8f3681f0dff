use core::str::FromStr;

use embassy_time::Duration;

/// Strategy used by [`Modem::read_response`] to decide where a response ends.
///
/// [`Modem::read_response`]: crate::Modem::read_response
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Default)]
pub enum ReadMode {
    /// Block, up to the read timeout, until a single `\n` terminated line has
    /// been received.
    #[default]
    Line,
    /// Read whatever bytes are queued on the port, and return once nothing
    /// more arrives within the drain quiescence window.
    Drain,
}

impl FromStr for ReadMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("line") => Ok(Self::Line),
            s if s.eq_ignore_ascii_case("drain") => Ok(Self::Drain),
            _ => Err(()),
        }
    }
}

/// Configuration of both the serial connection and the AT client.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) baud_rate: u32,
    pub(crate) read_timeout: Duration,
    pub(crate) read_mode: ReadMode,
    pub(crate) cmd_cooldown: Duration,
    pub(crate) drain_quiescence: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            read_timeout: Duration::from_secs(1),
            read_mode: ReadMode::Line,
            cmd_cooldown: Duration::from_millis(20),
            drain_quiescence: Duration::from_ticks(0),
        }
    }
}

impl Config {
    #[must_use]
    pub fn new(read_mode: ReadMode) -> Self {
        Self {
            read_mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Timeout applied both to the serial port and to a whole line read.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn read_mode(mut self, read_mode: ReadMode) -> Self {
        self.read_mode = read_mode;
        self
    }

    /// Minimum time between two consecutive commands.
    #[must_use]
    pub const fn cmd_cooldown(mut self, cooldown: Duration) -> Self {
        self.cmd_cooldown = cooldown;
        self
    }

    /// How long a drain keeps waiting for another burst of bytes after the
    /// port has run dry. Zero returns as soon as nothing is queued.
    #[must_use]
    pub const fn drain_quiescence(mut self, window: Duration) -> Self {
        self.drain_quiescence = window;
        self
    }

    pub const fn get_baud_rate(&self) -> u32 {
        self.baud_rate
    }

    pub const fn get_read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub const fn get_read_mode(&self) -> ReadMode {
        self.read_mode
    }

    pub const fn get_cmd_cooldown(&self) -> Duration {
        self.cmd_cooldown
    }

    pub const fn get_drain_quiescence(&self) -> Duration {
        self.drain_quiescence
    }
}
