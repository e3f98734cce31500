use anyhow::Context;
use clap::Parser;
use lanscout_domain::CliOverrides;
use std::net::SocketAddr;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "lanscout")]
#[command(version)]
#[command(about = "Lanscout - local network discovery and SSH known_hosts service")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// known_hosts file to maintain (default: ~/.ssh/known_hosts)
    #[arg(long, value_name = "FILE")]
    known_hosts: Option<String>,

    /// Write the effective configuration to FILE and exit
    #[arg(long, value_name = "FILE")]
    write_config: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        known_hosts_path: cli.known_hosts.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    if let Some(path) = cli.write_config.as_deref() {
        config.save(path)?;
        println!("Configuration written to {}", path);
        return Ok(());
    }

    bootstrap::init_logging(&config);

    info!("Starting Lanscout v{}", env!("CARGO_PKG_VERSION"));

    let adapters = di::Adapters::new(&config)?;
    let use_cases = di::UseCases::new(&config, &adapters);
    let app_state = use_cases.into_app_state();

    let web_addr: SocketAddr = format!("{}:{}", config.server.bind_address, config.server.web_port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.bind_address, config.server.web_port
            )
        })?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
