use crate::command::{self, Command};
use crate::helpers::is_final_result;
use crate::{Error, MAX_RESPONSE_LEN};

/// Blocking AT client. Everything beyond [`send`] and [`read_response`] is
/// built on top of those two primitives.
///
/// [`send`]: AtClient::send
/// [`read_response`]: AtClient::read_response
pub trait AtClient {
    /// Write an already terminated command to the modem. Does not wait for a
    /// response.
    fn send(&mut self, cmd: &Command) -> Result<(), Error>;

    /// Read one response from the modem, according to the configured
    /// [`ReadMode`](crate::ReadMode).
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than reported, so
    /// this only fails on I/O errors.
    fn read_response(&mut self) -> Result<String, Error>;

    /// Terminate `command` with `\r\n` and write it to the modem.
    fn send_command(&mut self, command: &str) -> Result<(), Error> {
        self.send(&Command::new(command)?)
    }

    /// Keep reading responses until a final result code (`OK`, `ERROR`,
    /// `+CME ERROR`, `+CMS ERROR`) has arrived, a read comes back empty, or
    /// [`MAX_RESPONSE_LEN`] bytes have been collected. Returns everything read,
    /// echo and blank lines included.
    ///
    /// This consumes the whole reply to one command, so the next command's
    /// reply is not mixed up with leftovers.
    fn read_reply(&mut self) -> Result<String, Error> {
        let mut reply = String::new();
        loop {
            let part = self.read_response()?;
            if part.is_empty() {
                break;
            }
            reply.push_str(&part);
            if reply.lines().any(is_final_result) || reply.len() >= MAX_RESPONSE_LEN {
                break;
            }
        }
        Ok(reply)
    }

    /// Send `AT` and check whether the modem answers `OK`.
    ///
    /// An `ERROR` reply and no reply at all are both reported as `false`.
    fn ping(&mut self) -> Result<bool, Error> {
        self.send_command(command::STATUS)?;
        let reply = self.read_reply()?;
        Ok(reply.contains("OK"))
    }

    /// Select SMS text mode (`AT+CMGF=1`).
    fn set_text_mode(&mut self) -> Result<(), Error> {
        self.send(&Command::set(command::MESSAGE_FORMAT, "1")?)
    }

    /// Turn command echo on (`"1"`) or off (`"0"`).
    fn set_echo(&mut self, status: &str) -> Result<(), Error> {
        self.send(&Command::from_parts(&[command::ECHO, status])?)
    }

    /// `ATE0`
    fn set_echo_default(&mut self) -> Result<(), Error> {
        self.set_echo(command::DEFAULT_ECHO_STATUS)
    }

    /// Subscribe to new SMS indications with the given `AT+CNMI` parameters.
    fn subscribe(&mut self, params: &str) -> Result<(), Error> {
        self.send(&Command::set(command::SUBSCRIBE_SMS, params)?)
    }

    /// `AT+CNMI=3,1,0,0,0`
    fn subscribe_default(&mut self) -> Result<(), Error> {
        self.subscribe(command::DEFAULT_SUBSCRIBE_PARAMS)
    }

    /// Send `command` and return the information text of its reply: every
    /// non-blank line except the command echo and the final result code,
    /// trimmed and joined with `\n`.
    fn query(&mut self, command: &str) -> Result<String, Error> {
        self.send_command(command)?;
        let reply = self.read_reply()?;

        let lines: Vec<&str> = reply
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && *line != command && !is_final_result(line))
            .collect();
        Ok(lines.join("\n"))
    }

    fn manufacturer(&mut self) -> Result<String, Error> {
        self.query(command::MANUFACTURER)
    }

    fn model(&mut self) -> Result<String, Error> {
        self.query(command::MODEL)
    }

    fn imei(&mut self) -> Result<String, Error> {
        self.query(command::IMEI)
    }

    fn software_version(&mut self) -> Result<String, Error> {
        self.query(command::SOFTWARE_VERSION)
    }
}
