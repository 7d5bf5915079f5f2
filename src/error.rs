//! Crate-wide error type
//!
//! Nothing here is retried. Every variant propagates with `?` up to the
//! binary, which logs it and exits non-zero.

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Payload text contains a character outside 0..=127
    #[error("payload is not ASCII: {character:?} at index {index}")]
    Encoding { index: usize, character: char },

    #[error("byte 0x{byte:02x} at offset {index} is not ASCII")]
    Decoding { index: usize, byte: u8 },

    /// Socket could not be created or bound
    #[error("socket acquisition failed: {0}")]
    Resource(#[source] io::Error),

    /// Local stack rejected connect/send synchronously
    #[error("transport error towards {target}: {source}")]
    Transport {
        target: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("short send towards {target}: {sent} of {expected} bytes")]
    ShortSend {
        target: SocketAddr,
        sent: usize,
        expected: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
