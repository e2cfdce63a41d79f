use core::fmt::{self, Write};

use super::buffer::{FormatBuffer, FORMAT_BUFFER_SIZE};
use super::sink::SerialSink;
use crate::config::{TruncationPolicy, WriterConfig};
use crate::error::SerialError;
use crate::log_debug;

/// Render `args` into a stack buffer and send the result to `sink` in one write.
///
/// Text longer than `FORMAT_BUFFER_SIZE - 1` bytes is cut to fit and sent
/// anyway; nothing tells the caller. Use [`SerialWriter`] with
/// [`TruncationPolicy::Report`] to find out about it.
pub fn serial_printf<S: SerialSink + ?Sized>(sink: &mut S, args: fmt::Arguments<'_>) {
    let mut buf = FormatBuffer::<FORMAT_BUFFER_SIZE>::new();
    let _ = buf.write_fmt(args);
    sink.write_bytes(buf.as_bytes());
}

/// `printf`-style front end for [`serial_printf`], checked at compile time.
///
/// ```
/// use serial_utils::serial::MemorySink;
///
/// let mut sink = MemorySink::new();
/// serial_utils::serial_printf!(&mut sink, "temp={} id={:x}", 21, 255);
/// assert_eq!(sink.contents_lossy(), "temp=21 id=ff");
/// ```
#[macro_export]
macro_rules! serial_printf {
    ($sink:expr, $($arg:tt)*) => {
        $crate::serial::serial_printf($sink, format_args!($($arg)*))
    };
}

/// Serial printer bound to one sink, with a configurable truncation policy.
pub struct SerialWriter<S: SerialSink, const N: usize = FORMAT_BUFFER_SIZE> {
    sink: S,
    config: WriterConfig,
}

impl<S: SerialSink> SerialWriter<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(sink, WriterConfig::default())
    }

    pub fn with_config(sink: S, config: WriterConfig) -> Self {
        Self { sink, config }
    }
}

impl<S: SerialSink, const N: usize> SerialWriter<S, N> {
    /// Like [`SerialWriter::with_config`] but with an `N`-byte render buffer.
    pub fn with_buffer(sink: S, config: WriterConfig) -> Self {
        Self { sink, config }
    }

    /// Render and send `args`. Returns the number of bytes sent.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<usize, SerialError> {
        let mut buf = FormatBuffer::<N>::new();
        let _ = buf.write_fmt(args);
        self.emit(&buf)
    }

    /// Like [`print`](Self::print), followed by `"\r\n"`.
    ///
    /// The line ending shares the buffer with the text. When both bytes no
    /// longer fit it is left off entirely and the output counts as truncated.
    pub fn println(&mut self, args: fmt::Arguments<'_>) -> Result<usize, SerialError> {
        let mut buf = FormatBuffer::<N>::new();
        let _ = buf.write_fmt(args);
        buf.push_str_whole("\r\n");
        self.emit(&buf)
    }

    fn emit(&mut self, buf: &FormatBuffer<N>) -> Result<usize, SerialError> {
        let sent = buf.len();
        self.sink.write_bytes(buf.as_bytes());

        if !buf.is_truncated() {
            return Ok(sent);
        }

        log_debug!("SerialWriter", "Output truncated to {} bytes", sent);
        match self.config.truncation {
            TruncationPolicy::Silent => Ok(sent),
            TruncationPolicy::Report => Err(SerialError::Truncated { capacity: N, sent }),
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_inner(self) -> S {
        self.sink
    }
}
