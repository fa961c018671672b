use apexdns_domain::config::CliOverrides;
use clap::Parser;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "apexdns")]
#[command(version)]
#[command(about = "apexdns - authoritative DNS for zone apexes with CNAME flattening")]
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

    info!("Starting apexdns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = match di::DnsServices::new(&config).await {
        Ok(services) => services,
        Err(e) => {
            error!(error = %e, "Failed to initialize DNS services");
            return Err(e);
        }
    };

    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let tcp_idle_timeout = std::time::Duration::from_secs(config.server.tcp_idle_timeout_secs);

    tokio::select! {
        result = server::start_dns_server(dns_addr, dns_services.handler, tcp_idle_timeout) => {
            if let Err(e) = result {
                error!(error = %e, "DNS server error");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
