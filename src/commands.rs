use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::config::WriterConfig;
use crate::serial::{SerialSink, SerialWriter};
use crate::utils;
use crate::log_info;

/// Load the writer config (or the default one) and apply its log level.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<WriterConfig> {
    let config = match path {
        Some(path) => WriterConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => WriterConfig::default(),
    };
    config.apply_log_level();
    Ok(config)
}

/// `encode <input> [--hex]`
pub fn encode<W: Write>(out: &mut W, input: &str, is_hex: bool) -> anyhow::Result<()> {
    let bytes = if is_hex {
        hex::decode(input).context("input is not valid hex")?
    } else {
        input.as_bytes().to_vec()
    };
    writeln!(out, "{}", utils::url_encode(&bytes))?;
    Ok(())
}

/// `decode <input> [--hex]`
pub fn decode<W: Write>(out: &mut W, input: &str, as_hex: bool) -> anyhow::Result<()> {
    let bytes = utils::url_decode(input)?;
    if as_hex {
        writeln!(out, "{}", hex::encode(&bytes))?;
    } else {
        writeln!(out, "{}", String::from_utf8_lossy(&bytes))?;
    }
    Ok(())
}

/// `print <words>... [--line]`. Fails when the config asks for truncation to be reported.
pub fn print_message<S: SerialSink>(
    sink: S,
    config: WriterConfig,
    message: &str,
    line: bool,
) -> anyhow::Result<usize> {
    let mut writer = SerialWriter::with_config(sink, config);
    let sent = if line {
        writer.println(format_args!("{}", message))?
    } else {
        writer.print(format_args!("{}", message))?
    };
    log_info!("print", "Sent {} bytes", sent);
    Ok(sent)
}
