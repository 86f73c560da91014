//! Field-selection resolution against the declared event attributes.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::event::EVENT_ATTRIBUTES;

/// Selection sentinel that expands to every declared attribute.
pub const ALL_FIELDS: &str = "all";

/// Errors that can occur while resolving a field selection.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// One or more requested names are not declared event attributes.
    #[error("unknown event field(s): {}", .names.join(", "))]
    UnknownFields {
        /// Offending names, in request order.
        names: Vec<String>,
    },
}

/// Resolves a requested field list against the declared event attributes.
///
/// The single literal `all` expands to the full attribute set. Any other
/// request must name declared attributes exactly (case-sensitive); unknown
/// names fail the whole resolution, so nothing reaches the network with a
/// bad selection. Duplicates collapse and ordering is irrelevant.
pub fn resolve_fields(requested: &[&str]) -> Result<BTreeSet<String>, FieldError> {
    if requested.len() == 1 && requested[0] == ALL_FIELDS {
        return Ok(EVENT_ATTRIBUTES.iter().map(|s| s.to_string()).collect());
    }

    let unknown: Vec<String> = requested
        .iter()
        .copied()
        .filter(|name| !EVENT_ATTRIBUTES.contains(name))
        .map(str::to_string)
        .collect();
    if !unknown.is_empty() {
        return Err(FieldError::UnknownFields { names: unknown });
    }

    Ok(requested.iter().copied().map(str::to_string).collect())
}
