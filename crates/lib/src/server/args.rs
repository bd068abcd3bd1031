use crate::{constant::DEFAULT_PORT, log::LoggingFormat};
use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Action server arguments
#[derive(Debug, Parser)]
pub struct ServerArgs {
    /// HTTP port to listen on for action requests
    #[arg(short = 'p', long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Output format for logs (standard or json)
    #[arg(long, value_enum, default_value_t = LoggingFormat::Standard)]
    pub logging_format: LoggingFormat,
}

impl ServerArgs {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
