use log::error;

/// Debug formatter for raw serial bytes. Valid UTF-8 runs are printed as
/// text, anything else as escaped hex.
pub struct LossyStr<'a>(pub &'a [u8]);

impl core::fmt::Debug for LossyStr<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "\"")?;
        for chunk in self.0.utf8_chunks() {
            write!(f, "{}", chunk.valid().escape_debug())?;
            for b in chunk.invalid() {
                write!(f, "\\x{:02X}", b)?;
            }
        }
        write!(f, "\"")
    }
}

/// Decode a response as UTF-8. Malformed input is logged and decoded lossily,
/// so this never fails.
pub fn decode(buf: &[u8]) -> String {
    match core::str::from_utf8(buf) {
        Ok(s) => s.to_owned(),
        Err(e) => {
            error!("Failed to decode response ({}): {:?}", e, LossyStr(buf));
            String::from_utf8_lossy(buf).into_owned()
        }
    }
}

/// Whether `line` is a final result code, ending the reply to a command.
pub fn is_final_result(line: &str) -> bool {
    let line = line.trim();
    line == "OK"
        || line == "ERROR"
        || line.starts_with("+CME ERROR:")
        || line.starts_with("+CMS ERROR:")
}
