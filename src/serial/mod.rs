pub mod buffer;
pub mod sink;
pub mod writer;

pub use buffer::{FormatBuffer, FORMAT_BUFFER_SIZE};
pub use sink::{IoSink, MemorySink, SerialSink};
pub use writer::{serial_printf, SerialWriter};
