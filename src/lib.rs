//! Arcana - Golden Dawn tarot reading service.
//!
//! An HTTP service that draws and interprets tarot readings using the Golden
//! Dawn system. Exposes a JSON API (cards, spreads, readings) plus a health
//! endpoint for container orchestration, and persists completed readings as
//! JSON files in a volume-mounted directory.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod startup;
pub mod state;
pub mod store;
pub mod tarot;

pub use error::AppError;
