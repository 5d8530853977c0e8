//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over TCP. Every accepted connection is an
//! independent MCP session sharing the server's Brevo client.

use rmcp::ServiceExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("Accepted connection from {}", peer_addr);

                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Failed to set TCP_NODELAY for {}: {}", peer_addr, e);
                    }

                    let server = server.clone();
                    tokio::spawn(async move {
                        Self::handle_connection(server, stream, peer_addr).await;
                    });
                }
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // Avoid spinning on persistent errors (e.g. fd exhaustion)
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    async fn handle_connection(server: McpServer, stream: TcpStream, peer_addr: std::net::SocketAddr) {
        let service = match server.serve(stream).await {
            Ok(s) => s,
            Err(e) => {
                warn!("Failed to initialize session for {}: {}", peer_addr, e);
                return;
            }
        };

        match service.waiting().await {
            Ok(_) => info!("Client {} disconnected", peer_addr),
            Err(e) => warn!("Session with {} ended with error: {}", peer_addr, e),
        }
    }
}
