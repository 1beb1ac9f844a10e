//! Shopfront - hand-rolled HTTP/1.1 catalog server
//!
//! Parses requests straight off the TCP stream, routes them to a handful of
//! page handlers and serves an in-memory product catalog.

pub mod app;
pub mod catalog;
pub mod config;
pub mod http;
pub mod request_log;
pub mod routes;
pub mod server;
