//! Optional HTTP API (feature = "api")
//!
//! Exposes course generation to the surrounding application with the fixed
//! error-code vocabulary from `crate::error`.

pub mod handlers;
pub mod models;
pub mod server;

pub use server::start_http_server;
