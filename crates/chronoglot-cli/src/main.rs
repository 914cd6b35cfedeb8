//! `chronoglot` command line interface.
//!
//! Resolves a natural-language date/time phrase against an anchor
//! instant and prints the result, as a bare RFC 3339 line or as the
//! full JSON report.

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "chronoglot",
    version,
    about = "Resolve loose date/time phrases to absolute timestamps"
)]
struct Cli {
    /// The phrase to resolve; multiple words are joined with spaces
    #[arg(required = true, value_name = "EXPRESSION")]
    expression: Vec<String>,

    /// Anchor instant (RFC 3339); defaults to the current UTC time
    #[arg(long, value_name = "RFC3339")]
    now: Option<String>,

    /// Print the full resolution report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let now: DateTime<FixedOffset> = match &cli.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now anchor '{raw}'"))?,
        None => Utc::now().fixed_offset(),
    };

    let expression = cli.expression.join(" ");
    let report = chronoglot::resolve(&expression, now)
        .with_context(|| format!("cannot resolve '{expression}'"))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.rfc3339);
    }
    Ok(())
}
