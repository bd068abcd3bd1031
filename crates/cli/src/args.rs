use clap::Parser;
use donate_lib::constant::DEFAULT_RPC_URL;

pub const DEFAULT_CONFIG_PATH: &str = "donate.toml";

/// Global arguments used by all subcommands
#[derive(Debug, Parser)]
#[command(name = "donate")]
pub struct GlobalArgs {
    /// Solana RPC endpoint URL
    #[arg(long, env = "RPC_URL", default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Path to the configuration file (TOML format). When the default file
    /// is missing, built-in defaults are used.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

impl GlobalArgs {
    pub fn is_default_config(&self) -> bool {
        self.config == DEFAULT_CONFIG_PATH
    }
}
