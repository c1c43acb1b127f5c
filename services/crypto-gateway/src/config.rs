use clap::Parser;
use cryptogate_core::{Config, LogFormat, Result};
use std::path::PathBuf;

/// Command-line arguments for the gateway binary.
#[derive(Debug, Parser)]
#[command(name = "crypto-gateway")]
#[command(about = "Hash, sign and verify over HTTP behind bearer-token auth", long_about = None)]
pub struct Args {
    /// Path to a TOML config file; environment variables override it.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Listen address, overriding both file and environment.
    #[arg(short, long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

impl Args {
    /// Loads the layered configuration and applies command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        if let Some(bind) = &self.bind {
            config.server.bind_addr = bind.clone();
        }
        if self.json_logs {
            config.server.log_format = LogFormat::Json;
        }
        Ok(config)
    }
}
