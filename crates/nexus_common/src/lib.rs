//! Nexus Common - shared pieces for the nexuscat category probe
//!
//! Config loading, the HTTP transport, category records, the
//! fetch-with-fallback lookup and table rendering.

pub mod category;
pub mod client;
pub mod config;
pub mod error;
pub mod fetch;
pub mod render;

pub use category::CategoryRecord;
pub use client::{ApiResponse, FakeTransport, HttpNexusClient, NexusTransport};
pub use config::ApiConfig;
pub use error::NexusError;
pub use fetch::{fetch_categories, CategoryFetch, CategorySource, PrimaryIssue};
pub use render::{render, OutputFormat};
