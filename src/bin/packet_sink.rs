//! Packet Sink Binary
//!
//! Stand-in receiver for the dev loop: binds the port packettest fires at
//! and logs every datagram that arrives.
//!
//! Usage:
//!   cargo run --bin packet_sink -- [OPTIONS]

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use clap::Parser;
use tracing::{error, info, warn};

use packettest::logging::setup_console_logging;
use packettest::{PacketSink, Result, DEFAULT_TARGET};

/// How long a single poll waits before re-checking the stop conditions
const POLL_SLICE: Duration = Duration::from_millis(250);
const PREVIEW_LEN: usize = 96;

#[derive(Debug, Parser)]
#[clap(author, about = "Log UDP datagrams arriving on a loopback port", version)]
struct Args {
    #[clap(short('b'), long("bind"), value_name("ADDR"), default_value_t = DEFAULT_TARGET)]
    bind: SocketAddr,

    /// Send every datagram back to its source
    #[clap(short('e'), long("echo"))]
    echo: bool,

    /// Exit after this many datagrams
    #[clap(short('n'), long("count"), value_name("N"))]
    count: Option<u64>,

    /// Exit after this many seconds without traffic
    #[clap(long("idle-timeout"), value_name("SECS"))]
    idle_timeout: Option<u64>,

    #[clap(long("log-level"), value_name("LEVEL"), default_value("info"))]
    log_level: String,
}

#[derive(Debug, Default)]
struct SinkStats {
    datagrams: u64,
    bytes: u64,
    empty: u64,
    echoed: u64,
}

impl SinkStats {
    fn print_stats(&self, uptime: Duration) {
        println!("\nSink stats (uptime: {:.1}s)", uptime.as_secs_f64());
        println!("   Datagrams:   {}", self.datagrams);
        println!("   Empty:       {}", self.empty);
        println!("   Bytes:       {}", self.bytes);
        if self.echoed > 0 {
            println!("   Echoed:      {}", self.echoed);
        }
    }
}

fn run_sink(args: &Args) -> Result<SinkStats> {
    let mut sink = PacketSink::bind(args.bind)?;
    info!("listening on {}", sink.local_addr()?);

    let idle_limit = args.idle_timeout.map(Duration::from_secs);
    let mut stats = SinkStats::default();
    let mut last_seen = Instant::now();

    loop {
        if let Some(limit) = args.count {
            if stats.datagrams >= limit {
                break;
            }
        }
        if let Some(limit) = idle_limit {
            if last_seen.elapsed() >= limit {
                info!("idle for {:?}, stopping", limit);
                break;
            }
        }

        let Some(datagram) = sink.recv_timeout(POLL_SLICE)? else {
            continue;
        };
        last_seen = Instant::now();

        stats.datagrams += 1;
        stats.bytes += datagram.len() as u64;
        if datagram.is_empty() {
            stats.empty += 1;
        }

        info!(
            "[{}] {} bytes from {}: \"{}\"",
            stats.datagrams,
            datagram.len(),
            datagram.source,
            datagram.preview(PREVIEW_LEN)
        );

        if args.echo {
            match sink.echo(&datagram) {
                Ok(_) => stats.echoed += 1,
                // The peer may already be gone; keep listening
                Err(e) => warn!("echo failed: {}", e),
            }
        }
    }

    Ok(stats)
}

fn main() {
    let args = Args::parse();
    setup_console_logging(&args.log_level);

    let start = Instant::now();
    match run_sink(&args) {
        Ok(stats) => stats.print_stats(start.elapsed()),
        Err(e) => {
            error!("sink error: {}", e);
            eprintln!("packet_sink: {}", e);
            std::process::exit(1);
        }
    }
}
