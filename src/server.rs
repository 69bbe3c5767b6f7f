//! Sequential fixed-response TCP server.
//!
//! One thread of control, no tasks, no timeouts: accept a connection, drain
//! one read of request bytes, write the constant response, close, repeat.
//! Connections are served strictly one at a time in the order the OS
//! delivers them from the listen backlog; a client that never sends and
//! never closes stalls the whole server.

use crate::config::Config;
use crate::response::RESPONSE;
use bytes::BytesMut;
use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use tracing::{debug, info};

/// Server instance holding the bound listener.
pub struct Server {
    listener: TcpListener,
    recv_buffer: usize,
}

impl Server {
    /// Create the listening socket: reuse-address, bind, listen.
    ///
    /// Reuse-address permits immediate rebinding after a restart while the
    /// prior instance's socket is still in its post-close wait state. Each
    /// failing step maps to its own `StartError` variant; there is no retry.
    pub fn bind(config: &Config) -> Result<Server, StartError> {
        let addr = SocketAddr::new(config.host, config.port);

        let socket = socket2::Socket::new(
            match addr {
                SocketAddr::V4(_) => socket2::Domain::IPV4,
                SocketAddr::V6(_) => socket2::Domain::IPV6,
            },
            socket2::Type::STREAM,
            Some(socket2::Protocol::TCP),
        )
        .map_err(StartError::Socket)?;

        socket
            .set_reuse_address(true)
            .map_err(StartError::ReuseAddr)?;
        socket
            .bind(&addr.into())
            .map_err(|e| StartError::Bind(addr, e))?;
        socket.listen(config.backlog).map_err(StartError::Listen)?;

        info!(address = %addr, backlog = config.backlog, "Listener bound");

        Ok(Server {
            listener: socket.into(),
            recv_buffer: config.recv_buffer,
        })
    }

    /// Local address of the bound listener.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve connections forever, strictly one at a time.
    ///
    /// An accept failure aborts the server; the error propagates to the
    /// caller and takes the process down. Per-connection read and write
    /// failures are logged and ignored: a client gets either the full
    /// response or a dropped connection, never an error status.
    pub fn run(self) -> Result<(), StartError> {
        loop {
            let (stream, peer) = self.listener.accept().map_err(StartError::Accept)?;
            debug!(peer = %peer, "New connection");
            self.serve(stream);
        }
    }

    /// Handle one connection: a single best-effort read, then the constant
    /// response, then close. The request bytes are never inspected, and a
    /// short, empty, or failed read all proceed identically.
    fn serve(&self, mut stream: TcpStream) {
        let mut buffer = BytesMut::zeroed(self.recv_buffer);

        match stream.read(&mut buffer) {
            Ok(n) => debug!(bytes = n, "Request drained"),
            Err(e) => debug!(error = %e, "Read failed"),
        }

        if let Err(e) = stream.write_all(RESPONSE) {
            debug!(error = %e, "Write failed");
        }

        // Dropping the stream closes the connection; default close
        // semantics, no linger or shutdown negotiation.
    }
}

/// Fatal listener errors. Any of these terminates the process.
#[derive(Debug)]
pub enum StartError {
    Socket(io::Error),
    ReuseAddr(io::Error),
    Bind(SocketAddr, io::Error),
    Listen(io::Error),
    Accept(io::Error),
}

impl std::fmt::Display for StartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartError::Socket(e) => write!(f, "Failed to create socket: {}", e),
            StartError::ReuseAddr(e) => write!(f, "Failed to set reuse-address: {}", e),
            StartError::Bind(addr, e) => write!(f, "Failed to bind {}: {}", addr, e),
            StartError::Listen(e) => write!(f, "Failed to listen: {}", e),
            StartError::Accept(e) => write!(f, "Failed to accept connection: {}", e),
        }
    }
}

impl std::error::Error for StartError {}
