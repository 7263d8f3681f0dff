use std::collections::VecDeque;
use std::io;

use embedded_io::{ErrorType, Read, ReadReady, Write};

enum Rx {
    Bytes(Vec<u8>),
    /// Number of polls during which nothing is ready
    Gap(usize),
}

/// Scripted serial port. Reads are served from queued chunks, writes are
/// captured.
#[derive(Default)]
pub struct PortMock {
    rx: VecDeque<Rx>,
    tx: Vec<u8>,
    polls: usize,
    fail_reads: bool,
    fail_writes: bool,
}

impl PortMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rx(mut self, bytes: &[u8]) -> Self {
        self.rx.push_back(Rx::Bytes(bytes.to_vec()));
        self
    }

    pub fn with_gap(mut self, polls: usize) -> Self {
        self.rx.push_back(Rx::Gap(polls));
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn tx(&self) -> &[u8] {
        &self.tx
    }

    /// Number of `read_ready` calls so far
    pub fn polls(&self) -> usize {
        self.polls
    }

    /// Bytes still queued for reading
    pub fn pending(&self) -> usize {
        self.rx
            .iter()
            .map(|rx| match rx {
                Rx::Bytes(b) => b.len(),
                Rx::Gap(_) => 0,
            })
            .sum()
    }

    /// Let one poll's worth of time pass over a gap at the front of the queue.
    fn elapse_gap(&mut self) {
        if let Some(Rx::Gap(polls)) = self.rx.front_mut() {
            *polls = polls.saturating_sub(1);
            if *polls == 0 {
                self.rx.pop_front();
            }
        }
    }
}

impl ErrorType for PortMock {
    type Error = io::Error;
}

impl Read for PortMock {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"));
        }

        match self.rx.front_mut() {
            Some(Rx::Bytes(bytes)) => {
                let n = buf.len().min(bytes.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                bytes.drain(..n);
                if bytes.is_empty() {
                    self.rx.pop_front();
                }
                Ok(n)
            }
            Some(Rx::Gap(_)) => {
                self.elapse_gap();
                Err(io::Error::new(io::ErrorKind::TimedOut, "timed out"))
            }
            None => Err(io::Error::new(io::ErrorKind::TimedOut, "timed out")),
        }
    }
}

impl ReadReady for PortMock {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        self.polls += 1;
        if self.fail_reads {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"));
        }

        match self.rx.front() {
            Some(Rx::Bytes(_)) => Ok(true),
            Some(Rx::Gap(_)) => {
                self.elapse_gap();
                Ok(false)
            }
            None => Ok(false),
        }
    }
}

impl Write for PortMock {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "device unplugged"));
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
