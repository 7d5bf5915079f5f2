//! packettest - loopback UDP datagram firing
//!
//! Sends ASCII payloads as single UDP datagrams to a fixed local endpoint
//! (127.0.0.1:26001) so a receiver under development has something to chew
//! on. No framing, no replies, no retries.
//!
//! Modules:
//! - `payload`: ASCII text <-> bytes
//! - `sender`: one fresh socket per datagram
//! - `sink`: mio-based loopback receiver for observing what was sent

pub mod error;
pub mod logging;
pub mod payload;
pub mod sender;
pub mod sink;

pub use error::{Error, Result};
pub use payload::{decode_ascii, Payload};
pub use sender::{
    send_all, send_all_to, send_packet, send_packet_to, DEFAULT_PAYLOADS, DEFAULT_TARGET,
};
pub use sink::{Datagram, PacketSink};
