//! HTTP server plumbing.
//!
//! Binds the service endpoint, flips the readiness flag once the listener is
//! held, and drains connections gracefully on SIGTERM/SIGINT. The service
//! speaks plain HTTP: TLS termination is the orchestrating environment's job.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
