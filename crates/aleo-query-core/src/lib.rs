pub mod client;
pub mod config;
pub mod decode;
pub mod endpoint;
pub mod error;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_util;

pub use client::LedgerClient;
pub use config::ClientConfig;
pub use error::QueryError;
pub use transport::CallContext;
