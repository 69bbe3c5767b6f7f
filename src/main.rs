//! hellod: a fixed-response connection server
//!
//! Listens on TCP port 8000 and serves connections strictly one at a time:
//! accept, drain one read of request bytes, write a constant HTTP response,
//! close. The request is never parsed; there is no routing and no
//! configuration surface.

mod config;
mod response;
mod server;

use config::Config;
use server::Server;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::fixed();

    info!(
        host = %config.host,
        port = config.port,
        backlog = config.backlog,
        recv_buffer = config.recv_buffer,
        "Starting hellod"
    );

    let server = Server::bind(&config)?;

    // println! rather than a tracing event: the startup notice must reach
    // stdout even when RUST_LOG filters info-level events.
    println!("Server started at http://localhost:{}", config.port);

    server.run()?;
    Ok(())
}
