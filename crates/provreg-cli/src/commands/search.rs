//! Event search command implementation.

use std::collections::BTreeSet;

use clap::Args;
use serde_json::Value;
use tracing::debug;

use provreg_client::{EventSearch, RegistryClient, SearchFilter};
use provreg_schema::resolve_fields;

use crate::output;

/// Flags accepted by `provreg event search`.
#[derive(Debug, Args)]
pub struct SearchOptions {
    /// Event id to filter on
    #[arg(long, default_value = "")]
    pub id: String,
    /// Event name to filter on
    #[arg(long, default_value = "")]
    pub name: String,
    /// Event version to filter on
    #[arg(long, default_value = "")]
    pub version: String,
    /// Space-delimited list of fields, or 'all' for every known attribute
    #[arg(long, default_value = "id name version multipass")]
    pub fields: String,
    /// JSONPath expression to apply to the output
    #[arg(long, default_value = "")]
    pub jsonpath: String,
    /// Registry base URL
    #[arg(long, default_value = "http://localhost:8042")]
    pub url: String,
    /// Preview the search without contacting the registry
    #[arg(long)]
    pub dry_run: bool,
    /// Do not indent the JSON output
    #[arg(long)]
    pub no_indent: bool,
}

pub fn run(options: SearchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let requested: Vec<&str> = options.fields.split_whitespace().collect();
    let fields = resolve_fields(&requested)?;

    let filter = SearchFilter::new()
        .id(&options.id)
        .name(&options.name)
        .version(&options.version);

    if options.dry_run {
        debug!("dry run; skipping search request");
        println!("id: {}", options.id);
        println!(
            "fields: {}",
            fields.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
        );
        return Ok(());
    }

    let client = RegistryClient::new(&options.url)?;
    let rendered = execute(
        &client,
        &filter,
        &fields,
        &options.jsonpath,
        options.no_indent,
    )?;
    println!("{}", rendered);
    Ok(())
}

/// Runs the search against `client` and renders the result document.
fn execute(
    client: &impl EventSearch,
    filter: &SearchFilter,
    fields: &BTreeSet<String>,
    jsonpath: &str,
    compact: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    let events: Vec<Value> = client.search(filter, fields)?;
    Ok(output::render(&events, jsonpath, compact)?)
}
