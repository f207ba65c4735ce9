//! Service configuration from environment variables

use std::net::SocketAddr;
use std::path::PathBuf;

/// Functions service configuration
#[derive(Debug, Clone)]
pub struct FunctionsConfig {
    /// Address to listen on (`INSTITUTE_LISTEN_ADDR`, default `0.0.0.0:8888`)
    pub listen_addr: SocketAddr,
    /// Directory holding the enquiry database (`INSTITUTE_DATA_DIR`, default `./data`)
    pub data_dir: PathBuf,
    /// Keep enquiries in memory only (`INSTITUTE_EPHEMERAL=1`)
    pub ephemeral: bool,
}

impl Default for FunctionsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8888)),
            data_dir: PathBuf::from("./data"),
            ephemeral: false,
        }
    }
}

impl FunctionsConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup
    ///
    /// Unparseable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let listen_addr = lookup("INSTITUTE_LISTEN_ADDR")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.listen_addr);

        let data_dir = lookup("INSTITUTE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let ephemeral = lookup("INSTITUTE_EPHEMERAL")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(defaults.ephemeral);

        Self {
            listen_addr,
            data_dir,
            ephemeral,
        }
    }

    /// Path of the enquiry database
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("enquiries.db")
    }
}
