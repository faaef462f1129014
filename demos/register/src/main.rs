use std::time::Duration;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::{info, warn};

use eureka_client::{ClientConfig, RegistryClient};
use eureka_model::{ApiVersion, Instance, InstanceStatus};
use eureka_observe::{LoggerConfig, LoggerFormat, LoggerLevel, init_logger};

/// Register an instance with a Eureka registry, heartbeat until Ctrl+C, then deregister.
#[derive(Debug, Parser)]
#[command(name = "register", version)]
struct Args {
    /// Registry address(es), comma separated.
    #[arg(long, env = "EUREKA_SERVER", default_value = "http://localhost:8761/eureka/")]
    server: String,

    /// Registry API version (1 or 2).
    #[arg(long, env = "EUREKA_API_VERSION", default_value = "v1")]
    api_version: ApiVersion,

    /// Application name.
    #[arg(long, env = "EUREKA_APP")]
    app: String,

    /// Address advertised to the registry.
    #[arg(long, env = "EUREKA_IP", default_value = "127.0.0.1")]
    ip: String,

    /// Port advertised to the registry.
    #[arg(long, env = "EUREKA_PORT")]
    port: u16,

    /// Initial status (up, down, starting, out_of_service, unknown).
    #[arg(long, env = "EUREKA_STATUS", default_value = "up")]
    status: InstanceStatus,

    /// Heartbeat cadence in seconds.
    #[arg(long, env = "EUREKA_HEARTBEAT_SECS", default_value_t = 60)]
    heartbeat_secs: u64,

    /// Log every registry exchange.
    #[arg(long, env = "EUREKA_LOG")]
    log_exchanges: bool,

    /// Log filter directive.
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: LoggerLevel,

    /// Log output: text, json or journald.
    #[arg(long, env = "LOG_FORMAT", default_value = "text")]
    log_format: LoggerFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 1) Logger
    let cfg = LoggerConfig {
        level: args.log_level.clone(),
        format: args.log_format,
        ..Default::default()
    };
    init_logger(&cfg)?;
    info!("logger initialized");

    // 2) Clients, one per registry address
    let config = ClientConfig {
        api_version: args.api_version,
        log_enabled: args.log_exchanges,
        ..Default::default()
    }
    .with_heartbeat_interval(Duration::from_secs(args.heartbeat_secs));
    config.validate().context("invalid client config")?;

    let clients = RegistryClient::from_urls(&args.server, &config);
    if clients.is_empty() {
        bail!("no usable registry address in {:?}", args.server);
    }
    info!(registries = clients.len(), "registry clients ready");

    // 3) Register
    let instance = Instance::new(args.app, args.ip, args.status, args.port);
    info!(%instance, "registering");
    for client in &clients {
        let root = client.endpoint().root().to_string();
        match client.register(instance.clone()).await {
            Ok(true) => info!(registry = %root, "registered"),
            Ok(false) => warn!(registry = %root, "registration failed"),
            Err(e) => warn!(registry = %root, error = %e, "registration refused"),
        }
    }

    // 4) Keep running
    info!("press Ctrl+C to stop");
    tokio::signal::ctrl_c().await?;
    info!("shutting down...");

    // 5) Deregister
    for client in &clients {
        let root = client.endpoint().root().to_string();
        if client.deregister().await {
            info!(registry = %root, "deregistered");
        } else {
            warn!(registry = %root, "deregistration failed; lease will expire");
        }
    }

    Ok(())
}
