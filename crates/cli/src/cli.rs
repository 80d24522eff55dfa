use clap::Parser;
use tezcache_domain::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "tezcache")]
#[command(version)]
#[command(about = "Caching reverse proxy for Tezos RPC nodes")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Bind address for both listeners
    #[arg(short = 'b', long)]
    pub bind: Option<String>,

    /// Proxy listener port
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Admin listener port (0 disables it)
    #[arg(short = 'a', long)]
    pub admin_port: Option<u16>,

    /// Log level: trace, debug, info, warn or error
    #[arg(short = 'l', long)]
    pub log_level: Option<String>,

    /// Upstream node base URL; repeat to build the pool
    #[arg(short = 'n', long = "node")]
    pub nodes: Vec<String>,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            bind_address: self.bind.clone(),
            proxy_port: self.port,
            admin_port: self.admin_port,
            log_level: self.log_level.clone(),
            nodes: self.nodes.clone(),
        }
    }
}
