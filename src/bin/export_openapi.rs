//! Export the OpenAPI document as JSON
//!
//! Usage:
//!   cargo run --bin export_openapi > openapi.json
//!   cargo run --bin export_openapi -- --output docs/openapi.json

use anyhow::Context;
use clap::Parser;
use utoipa::OpenApi;

use arith_api::gateway::openapi::ApiDoc;

#[derive(Parser, Debug)]
#[command(about = "Print or write the gateway OpenAPI document")]
struct Args {
    /// Write to this file instead of stdout.
    #[arg(long)]
    output: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let json = ApiDoc::openapi()
        .to_pretty_json()
        .context("failed to serialize OpenAPI document")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json).with_context(|| format!("failed to write {}", path))?;
            eprintln!("OpenAPI document exported to: {}", path);
        }
        None => println!("{}", json),
    }
    Ok(())
}
