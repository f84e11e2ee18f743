//! Web search collaborator for the Share of Voice pipeline.
//!
//! Exposes the [`SearchProvider`] seam the ingester depends on and a
//! Google Custom Search JSON API implementation of it.

pub mod client;
pub mod error;
pub mod provider;
mod retry;
pub mod types;

pub use client::GoogleSearchClient;
pub use error::SearchError;
pub use provider::SearchProvider;
pub use types::SearchResultItem;
