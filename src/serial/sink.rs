use std::io::Write;

use crate::log_warn;

/// Byte-oriented output the serial printer talks to.
///
/// A sink takes each rendered message as one write. It has no way to report
/// failure back to the caller: buffering, baud rate and error handling belong
/// to the implementation.
pub trait SerialSink {
    fn write_bytes(&mut self, bytes: &[u8]);
}

impl<S: SerialSink + ?Sized> SerialSink for &mut S {
    fn write_bytes(&mut self, bytes: &[u8]) {
        (**self).write_bytes(bytes);
    }
}

/// Adapts any [`std::io::Write`] (stdout, a file, a tty device) into a sink.
///
/// I/O failures are logged and counted, never returned.
pub struct IoSink<W: Write> {
    inner: W,
    errors: usize,
}

impl<W: Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, errors: 0 }
    }

    /// Number of writes that failed since the sink was created.
    pub fn errors(&self) -> usize {
        self.errors
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> SerialSink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        let result = self
            .inner
            .write_all(bytes)
            .and_then(|_| self.inner.flush());
        if let Err(e) = result {
            self.errors += 1;
            log_warn!("IoSink", "Dropped {} bytes: {}", bytes.len(), e);
        }
    }
}

/// Records every write separately. Handy for tests and host-side tools.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    writes: Vec<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[Vec<u8>] {
        &self.writes
    }

    /// All writes joined together, as the far end of the line would see them.
    pub fn contents(&self) -> Vec<u8> {
        self.writes.concat()
    }

    pub fn contents_lossy(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }
}

impl SerialSink for MemorySink {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.writes.push(bytes.to_vec());
    }
}
