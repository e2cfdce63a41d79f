use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serial_utils::commands;
use serial_utils::serial::IoSink;

#[derive(Parser)]
#[command(version, about = "Serial printing and URL percent-encoding helpers")]
struct Cli {
    /// JSON file with writer settings (truncation policy, log level)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Percent-encode text (or raw bytes given as hex)
    Encode {
        input: String,
        /// Treat the input as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },
    /// Decode percent-encoded text
    Decode {
        input: String,
        /// Print the decoded bytes as hex
        #[arg(long)]
        hex: bool,
    },
    /// Send a message through the bounded serial printer
    Print {
        #[arg(required = true)]
        words: Vec<String>,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Terminate the message with CRLF
        #[arg(long)]
        line: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Encode { input, hex } => commands::encode(&mut io::stdout(), &input, hex),
        Command::Decode { input, hex } => commands::decode(&mut io::stdout(), &input, hex),
        Command::Print {
            words,
            output,
            line,
        } => {
            let message = words.join(" ");
            let sent = match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    commands::print_message(IoSink::new(file), config, &message, line)
                }
                None => commands::print_message(IoSink::new(io::stdout()), config, &message, line),
            };
            sent.map(|_| ())
        }
    }
}
