//! Search client for the provreg event registry service.
//!
//! This crate provides:
//! - `SearchFilter` for assembling per-invocation search constraints
//! - `EventSearch`, the search seam trait
//! - `RegistryClient`, the blocking HTTP implementation
//!
//! One client call is one request/response exchange; there is no retry,
//! pagination, or streaming. The client never mutates server state.

#![deny(missing_docs)]

/// Registry search client.
pub mod client;
/// Error types for client operations.
pub mod error;
/// Search filter assembly.
pub mod filter;

pub use client::{EventSearch, RegistryClient};
pub use error::ClientError;
pub use filter::SearchFilter;
