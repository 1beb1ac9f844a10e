//! HTTP protocol implementation.
//!
//! A deliberately small HTTP/1.1 subset: one request per connection, no
//! request bodies, no keep-alive.
//!
//! # Architecture
//!
//! - **`connection`**: Per-connection state machine
//! - **`parser`**: Parses the request line, query string and headers from a byte buffer
//! - **`request`**: Request representation
//! - **`response`**: Status codes and the (status, content type, body) response
//! - **`writer`**: Serializes and writes responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for request line + headers
//!        └──────┬──────┘
//!               │ Request parsed          (parse error / timeout → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Route and run the handler
//!        └──────┬───────────┘
//!               │ Response ready          (abort policy → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               ▼
//!            Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use shopfront::app::App;
//! use shopfront::catalog::Catalog;
//! use shopfront::config::PagesConfig;
//! use shopfront::http::connection::{Connection, ConnectionSettings};
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8088").await?;
//!     let app = Arc::new(App::new(Catalog::seeded(), PagesConfig::default()));
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         let app = Arc::clone(&app);
//!         tokio::spawn(async move {
//!             let mut conn = Connection::new(socket, app, ConnectionSettings::default());
//!             if let Err(e) = conn.run().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
