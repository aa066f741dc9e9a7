//! Server configuration from command-line flags and environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::{builder::FalseyValueParser, Parser};

#[derive(Parser, Debug, Clone)]
#[command(name = "health-records-server")]
#[command(version)]
#[command(about = "Patient lookup service for the health records dashboards", long_about = None)]
pub struct ServerConfig {
    /// Interface to bind
    #[arg(long, env = "HEALTH_RECORDS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "health_server=debug")
    #[arg(long, env = "HEALTH_RECORDS_LOG", default_value = "info")]
    pub log_level: String,

    /// Start with an empty directory instead of the demo patients
    #[arg(long, env = "HEALTH_RECORDS_NO_SEED", value_parser = FalseyValueParser::new())]
    pub no_seed: bool,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
