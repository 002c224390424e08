//! Arith API gateway entry point
//!
//! ```text
//! defaults ─▶ config/<env>.yaml ─▶ $PORT ─▶ CLI flags ─▶ Server::bind ─▶ run
//! ```

use anyhow::Context;
use clap::Parser;

use arith_api::config::{AppConfig, InputPolicy};
use arith_api::gateway::Server;

#[derive(Parser, Debug)]
#[command(version, about = "HTTP arithmetic service")]
struct Args {
    /// Config environment, loads `<config-dir>/<env>.yaml` when present.
    #[arg(short, long, default_value = "dev")]
    env: String,
    /// Directory holding the YAML config files.
    #[arg(long, default_value = "config")]
    config_dir: String,
    /// Port to listen on. Overrides the config file and $PORT.
    #[arg(long)]
    port: Option<u16>,
    /// Address to bind.
    #[arg(long)]
    host: Option<String>,
    /// Reject missing or malformed operands with 400 instead of answering null.
    #[arg(long)]
    strict: bool,
}

fn resolve_config(args: &Args) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load(&args.config_dir, &args.env)?;
    config.apply_port_env(std::env::var("PORT").ok().as_deref())?;
    if let Some(port) = args.port {
        config.gateway.port = port;
    }
    if let Some(host) = &args.host {
        config.gateway.host = host.clone();
    }
    if args.strict {
        config.gateway.input_policy = InputPolicy::Strict;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args).context("failed to load configuration")?;
    let _log_guard = arith_api::logging::init_logging(&config);

    tracing::info!(
        env = %args.env,
        addr = %config.bind_addr(),
        input_policy = config.gateway.input_policy.as_str(),
        "Starting arith_api {}",
        env!("CARGO_PKG_VERSION")
    );

    let server = match Server::bind(&config.gateway).await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("FATAL: {:#}", e);
            return Err(e);
        }
    };
    server.run().await
}
