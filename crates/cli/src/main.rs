use clap::Parser;
use rootward_domain::{CliOverrides, Config, RootHints};
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "rootward")]
#[command(version)]
#[command(about = "rootward - iterative DNS resolver that walks delegations down from the root servers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting rootward v{}", env!("CARGO_PKG_VERSION"));

    match cli.config.clone().or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration file loaded"),
        None => info!("No configuration file found, using defaults"),
    }

    let dns_services = di::DnsServices::new(&config, RootHints::builtin());
    info!(
        roots = dns_services.handler_use_case.root_hints().len(),
        listen = %config.listen_address(),
        "Resolver ready"
    );

    tokio::select! {
        result = server::start_dns_server(config.listen_address(), dns_services.packet_handler) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
