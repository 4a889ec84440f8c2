//! eCloud Provider
//!
//! Read-only data sources for the UKFast/ANS eCloud platform. Each data
//! source turns its arguments into equality filters, lists one eCloud
//! collection and resolves the result to exactly one record.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - **ProviderService trait**: The surface a host drives (schema, configure, read)
//! - **ECloudProvider**: The provider, with all 26 eCloud data sources registered
//! - **Lookup trait**: Describes one domain; [`resolve`] runs the shared template
//! - **ListClient trait**: The REST seam, implemented by [`HttpClient`] over `reqwest`
//! - **Schema types**: Attribute schemas and diagnostics for data sources
//! - **Error types**: [`ProviderError`] with fixed messages for each failure class
//! - **Logging**: Integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```no_run
//! use ecloud_provider::{ECloudProvider, ProviderService};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     ecloud_provider::init_logging();
//!
//!     let provider = ECloudProvider::new();
//!     let diagnostics = provider.configure(json!({"api_key": "my-key"})).await?;
//!     assert!(diagnostics.is_empty());
//!
//!     let state = provider
//!         .read_data_source("ecloud_vpn_gateway", json!({"name": "office"}))
//!         .await?;
//!     println!("{}", state["vpn_gateway_id"]);
//!     Ok(())
//! }
//! ```
//!
//! # Resolution
//!
//! Every lookup ends in the same classification:
//!
//! - no matching record: `no <domain> found with provided arguments`
//! - more than one: `more than 1 <domain> found with provided arguments`
//! - remote failure: `error retrieving <domain> list: <cause>`
//!
//! On success the state always carries `id`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod data_source;
pub mod data_sources;
pub mod error;
pub mod filter;
pub mod logging;
pub mod path;
pub mod provider;
pub mod resolve;
pub mod schema;
pub mod testing;
pub mod validation;

// Re-export main types at crate root
pub use client::{ClientError, HttpClient, ListClient};
pub use config::ProviderConfig;
pub use data_source::{DataSource, DataSourceRegistry};
pub use error::ProviderError;
pub use filter::LookupQuery;
pub use logging::{init_logging, init_logging_with_default, try_init_logging};
pub use path::CollectionPath;
pub use provider::{ECloudProvider, ProviderMetadata, ProviderService};
pub use resolve::{resolve, Lookup, Resolved};
pub use schema::ProviderSchema;
pub use validation::{is_valid, validate, validate_result};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

// Re-export commonly used external types
pub use serde_json;
pub use tracing;
