//! Packet Sender
//!
//! One operation: encode a payload, open a fresh UDP socket, aim it at the
//! target and push the bytes out as a single datagram. Nothing is waited
//! for afterwards.
//!
//! Each call owns its socket for exactly the duration of the call; it is
//! dropped (closed) on every return path, success or error.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, UdpSocket};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::payload::Payload;

pub const DEFAULT_HOST: Ipv4Addr = Ipv4Addr::LOCALHOST;
pub const DEFAULT_PORT: u16 = 26001;
pub const DEFAULT_TARGET: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(DEFAULT_HOST, DEFAULT_PORT));

/// Payloads fired by the driver when none are given on the command line
pub const DEFAULT_PAYLOADS: [&str; 2] = [
    "",
    "do not go gently into the good night. Rage, rage against the dying of the light",
];

/// Send `payload` to 127.0.0.1:26001 as one datagram.
///
/// Returns the number of bytes the local stack accepted. That says nothing
/// about whether anything is listening.
pub fn send_packet(payload: &str) -> Result<usize> {
    send_packet_to(DEFAULT_TARGET, payload)
}

/// Same as [`send_packet`] toward an explicit target
pub fn send_packet_to(target: SocketAddr, payload: &str) -> Result<usize> {
    // Encode before touching the network: a bad payload never opens a socket
    let payload = Payload::from_ascii(payload)?;

    let socket = UdpSocket::bind(unspecified_for(target)).map_err(Error::Resource)?;
    socket
        .connect(target)
        .map_err(|source| Error::Transport { target, source })?;

    if let Ok(local) = socket.local_addr() {
        debug!("socket {} associated with {}", local, target);
    }

    let sent = socket
        .send(payload.as_bytes())
        .map_err(|source| Error::Transport { target, source })?;

    if sent != payload.len() {
        return Err(Error::ShortSend {
            target,
            sent,
            expected: payload.len(),
        });
    }

    info!("sent {} byte datagram to {}", sent, target);
    Ok(sent)
}

/// Send each payload in order to 127.0.0.1:26001, one socket per datagram.
///
/// Stops at the first error; payloads after it are never attempted.
/// Returns the number of datagrams sent.
pub fn send_all<I, S>(payloads: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    send_all_to(DEFAULT_TARGET, payloads)
}

/// Same as [`send_all`] toward an explicit target
pub fn send_all_to<I, S>(target: SocketAddr, payloads: I) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sent = 0;
    for payload in payloads {
        send_packet_to(target, payload.as_ref())?;
        sent += 1;
    }
    Ok(sent)
}

/// Ephemeral wildcard bind address of the same family as `target`
fn unspecified_for(target: SocketAddr) -> SocketAddr {
    match target {
        SocketAddr::V4(_) => SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0)),
        SocketAddr::V6(_) => SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0)),
    }
}
