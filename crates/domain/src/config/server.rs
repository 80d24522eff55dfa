use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_proxy_port")]
    pub proxy_port: u16,

    /// Admin API port (health, cache stats). `0` disables the admin server.
    #[serde(default = "default_admin_port")]
    pub admin_port: u16,
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_proxy_port() -> u16 {
    8787
}

fn default_admin_port() -> u16 {
    8788
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            proxy_port: default_proxy_port(),
            admin_port: default_admin_port(),
        }
    }
}

impl ServerConfig {
    /// `bind_address` is a bare IP, v4 or v6, without brackets.
    pub fn bind_ip(&self) -> Result<IpAddr, ConfigError> {
        self.bind_address.parse().map_err(|_| {
            ConfigError::Validation(format!(
                "server.bind_address must be an IP address: {}",
                self.bind_address
            ))
        })
    }

    pub fn proxy_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.proxy_port))
    }

    /// `None` when the admin server is disabled.
    pub fn admin_addr(&self) -> Result<Option<SocketAddr>, ConfigError> {
        if self.admin_port == 0 {
            return Ok(None);
        }
        Ok(Some(SocketAddr::new(self.bind_ip()?, self.admin_port)))
    }
}
