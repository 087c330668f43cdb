//! Process configuration for the `hsnd` server binary

use std::path::PathBuf;

use clap::Parser;

/// HSN code validation service
#[derive(Debug, Parser)]
#[command(
    name = "hsnd",
    version,
    about = "Validate HSN codes against a master dataset over HTTP"
)]
pub struct Config {
    /// Path to the master data JSON file
    #[arg(long, env = "HSN_DATA_PATH", default_value = "data/hsn_master_data.json")]
    pub data: PathBuf,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Maximum number of codes accepted per batch request
    #[arg(long, env = "HSN_MAX_BATCH_SIZE", default_value_t = 100)]
    pub max_batch_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse_from(["hsnd"]);
        assert_eq!(config.port, 5000);
        assert_eq!(config.max_batch_size, 100);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config =
            Config::parse_from(["hsnd", "--port", "8080", "--data", "/tmp/codes.json"]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.data, PathBuf::from("/tmp/codes.json"));
    }
}
