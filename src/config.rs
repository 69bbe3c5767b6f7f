//! Fixed process-wide configuration.
//!
//! The server takes no command-line arguments, configuration file, or
//! environment overrides: bind address, port, receive buffer capacity, and
//! listen backlog are compiled in. `Config::fixed` is the only production
//! constructor; the fields are public so tests can stand up a server on an
//! ephemeral port.

use std::net::{IpAddr, Ipv4Addr};

/// Port the listener binds on.
const PORT: u16 = 8000;

/// Capacity of the per-connection receive buffer, in bytes. At most this
/// many request bytes are consumed before the response is written.
const RECV_BUFFER: usize = 30_000;

/// Pending-connection queue depth handed to the OS at listen time.
const BACKLOG: i32 = 10;

/// Immutable server configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind to.
    pub host: IpAddr,
    /// TCP port to listen on.
    pub port: u16,
    /// Bytes consumed from a connection in a single read.
    pub recv_buffer: usize,
    /// Listen backlog depth.
    pub backlog: i32,
}

impl Config {
    /// The fixed production configuration: all interfaces, port 8000.
    pub fn fixed() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: PORT,
            recv_buffer: RECV_BUFFER,
            backlog: BACKLOG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_config() {
        let config = Config::fixed();
        assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        assert_eq!(config.port, 8000);
        assert_eq!(config.recv_buffer, 30_000);
        assert_eq!(config.backlog, 10);
    }
}
