//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;

/// Port used when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to listen on.
    pub host: IpAddr,
    /// Port to listen on.
    pub port: u16,
    /// Maximum time a request may take before it is answered with 408.
    pub request_timeout: Duration,
    /// How long in-flight requests get to finish after a shutdown signal.
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(15),
            shutdown_grace: Duration::from_secs(15),
        }
    }
}

impl ServerConfig {
    /// Address to bind the listener to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Command-line and environment options for the server binary.
#[derive(Debug, Parser)]
#[command(name = "qce-server")]
#[command(author, version, about = "Quantum Circuit Editor backend", long_about = None)]
pub struct ServerArgs {
    /// Interface to listen on
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on [default: 8080]
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Request timeout in seconds
    #[arg(long, env = "QCE_REQUEST_TIMEOUT_SECS", default_value_t = 15)]
    pub request_timeout_secs: u64,

    /// Shutdown grace period in seconds
    #[arg(long, env = "QCE_SHUTDOWN_GRACE_SECS", default_value_t = 15)]
    pub shutdown_grace_secs: u64,
}

impl ServerArgs {
    /// Whether the port fell back to [`DEFAULT_PORT`].
    pub fn uses_default_port(&self) -> bool {
        self.port.is_none()
    }

    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port.unwrap_or(DEFAULT_PORT),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            shutdown_grace: Duration::from_secs(self.shutdown_grace_secs),
        }
    }
}
