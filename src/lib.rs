//! # wikiquery
//!
//! Client bindings for a small slice of the English Wikipedia query API:
//! resolve a free-text search term to a canonical article title, then fetch
//! raw revision content, a short plain-text extract, or representative
//! image URLs for that title. "Fuzzy term in, normalized article data out",
//! without the caller touching the HTTP/JSON protocol.
//!
//! ## Architecture
//!
//! The library is organized into a few small modules:
//!
//! - [`client`]: the API client and the four lookup operations
//! - [`config`]: constructor-supplied client configuration
//! - [`error`]: the crate error type
//! - [`models`]: public data types
//!
//! ## Example
//!
//! ```no_run
//! use wikiquery::{Error, WikipediaClient};
//!
//! fn main() -> Result<(), Error> {
//!     let client = WikipediaClient::new()?;
//!     match client.extract("robert downey jr") {
//!         Ok(summary) => println!("{}", summary),
//!         Err(err) if err.is_negative() => println!("{}", err),
//!         Err(err) => return Err(err),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use client::WikipediaClient;
pub use config::ClientConfig;
pub use error::Error;
pub use models::ImagePair;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
