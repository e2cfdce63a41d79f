pub mod decode;
pub mod log;
pub mod url;

pub use decode::url_decode;
pub use log::{
    set_global_log_handler, set_global_log_level, ConsoleLogger, LogHandler, LogLevel,
};
pub use url::{percent_encode, url_encode, url_encode_cstr, PercentEncode};
