//! HTTP surface of the host service.
//!
//! The real request handlers live outside this crate; what ships here is
//! the serving shell they mount into, plus a health endpoint that reads the
//! live configuration snapshot on every request.

pub mod server;

pub use server::HttpServer;
