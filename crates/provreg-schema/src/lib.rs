//! Event schema for the provreg registry client.
//!
//! This crate declares the shape of a stored registry event and the static
//! attribute registry derived from it, plus the resolution of `--fields`
//! selections against that registry. Resolution is pure validation; it runs
//! before any request is sent.

#![deny(missing_docs)]

/// The registry event entity and its declared attributes.
pub mod event;
/// Field-selection resolution.
pub mod fields;

pub use event::{Event, EVENT_ATTRIBUTES};
pub use fields::{resolve_fields, FieldError};
