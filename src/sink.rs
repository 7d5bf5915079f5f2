//! Loopback packet sink
//!
//! Readiness-driven UDP receiver used to observe what the sender emits.
//! Uses mio so a single thread can wait for a datagram with a bounded
//! timeout instead of blocking forever on `recv_from`.
//!
//! mio readiness is edge-triggered: after one readable event the socket is
//! read until `WouldBlock` before polling again, otherwise queued datagrams
//! would sit unseen.

use std::io;
use std::net::SocketAddr;
use std::time::{Duration, Instant};

use mio::net::UdpSocket;
use mio::{Events, Interest, Poll, Token};
use tracing::{debug, trace};

use crate::error::{Error, Result};

const SINK_TOKEN: Token = Token(0);
const EVENTS_CAPACITY: usize = 16;

/// Largest IPv4 UDP payload (65535 - 20 IP header - 8 UDP header), rounded up
const RECV_BUFFER_SIZE: usize = 64 * 1024;

/// One datagram as observed by the sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub source: SocketAddr,
    pub payload: Vec<u8>,
}

impl Datagram {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Printable rendition: ASCII graphic bytes as-is, everything else escaped
    pub fn preview(&self, max: usize) -> String {
        let mut out: String = self
            .payload
            .iter()
            .take(max)
            .flat_map(|&b| std::ascii::escape_default(b))
            .map(char::from)
            .collect();
        if self.payload.len() > max {
            out.push_str("...");
        }
        out
    }
}

pub struct PacketSink {
    poll: Poll,
    socket: UdpSocket,
    events: Events,
    // Pre-allocated, reused for every receive
    buffer: Box<[u8]>,
}

impl PacketSink {
    /// Bind a non-blocking UDP socket on `addr` and register it for reads
    pub fn bind(addr: SocketAddr) -> Result<Self> {
        let poll = Poll::new().map_err(Error::Resource)?;
        let mut socket = UdpSocket::bind(addr).map_err(Error::Resource)?;

        poll.registry()
            .register(&mut socket, SINK_TOKEN, Interest::READABLE)
            .map_err(Error::Resource)?;

        debug!("packet sink bound to {}", addr);

        Ok(Self {
            poll,
            socket,
            events: Events::with_capacity(EVENTS_CAPACITY),
            buffer: vec![0u8; RECV_BUFFER_SIZE].into_boxed_slice(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// Next datagram, or `None` when `timeout` passes without one.
    ///
    /// Zero-length datagrams are returned like any other.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<Option<Datagram>> {
        let deadline = Instant::now() + timeout;

        loop {
            // Drain first: something may already be queued from an earlier event
            match self.socket.recv_from(&mut self.buffer) {
                Ok((n, source)) => {
                    trace!("received {} bytes from {}", n, source);
                    return Ok(Some(Datagram {
                        source,
                        payload: self.buffer[..n].to_vec(),
                    }));
                }
                Err(ref e) if e.kind() == io::ErrorKind::WouldBlock => {}
                Err(e) => return Err(Error::Io(e)),
            }

            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }

            match self.poll.poll(&mut self.events, Some(deadline - now)) {
                Ok(()) => {}
                Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::Io(e)),
            }
        }
    }

    /// Send `datagram`'s payload back to where it came from
    pub fn echo(&self, datagram: &Datagram) -> Result<usize> {
        let target = datagram.source;
        let sent = self
            .socket
            .send_to(&datagram.payload, target)
            .map_err(|source| Error::Transport { target, source })?;

        if sent != datagram.payload.len() {
            return Err(Error::ShortSend {
                target,
                sent,
                expected: datagram.payload.len(),
            });
        }
        Ok(sent)
    }
}
