//! packettest - fire datagrams at 127.0.0.1:26001
//!
//! With no arguments sends an empty datagram followed by a fixed line of
//! text. Positional arguments replace those payloads, sent in order.
//!
//! Usage:
//!   cargo run --bin packettest
//!   cargo run --bin packettest -- "do not go gently" "into that good night"

use clap::Parser;
use tracing::error;

use packettest::logging::setup_console_logging;
use packettest::{send_all, Result, DEFAULT_PAYLOADS};

#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct Args {
    /// ASCII payloads to send, one datagram each (default: built-in pair)
    #[clap(value_name("PAYLOAD"))]
    payloads: Vec<String>,

    #[clap(long("log-level"), value_name("LEVEL"), default_value("info"))]
    log_level: String,
}

fn run(args: &Args) -> Result<()> {
    if args.payloads.is_empty() {
        send_all(DEFAULT_PAYLOADS)?;
    } else {
        send_all(&args.payloads)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_console_logging(&args.log_level);

    if let Err(e) = run(&args) {
        error!("send failed: {}", e);
        eprintln!("packettest: {}", e);
        std::process::exit(1);
    }
}
