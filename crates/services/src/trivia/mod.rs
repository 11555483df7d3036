mod client;
mod config;
pub mod wire;

pub use client::OpenTdbClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, TriviaConfig};
