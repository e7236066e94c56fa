//! Configuration for Zookeepr
//!
//! Centralized configuration with sensible defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Port used when neither `--port` nor `PORT` is given
pub const DEFAULT_PORT: u16 = 3001;

/// Main configuration for a Zookeepr instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Backing JSON document holding the collection
    /// Layout:
    ///   { "animals": [ { "id": "0", ... }, ... ] }
    pub data_file: PathBuf,

    // -------------------------------------------------------------------------
    // Static Files
    // -------------------------------------------------------------------------
    /// Directory served as static assets; `index.html` is the landing page
    pub public_dir: PathBuf,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: SocketAddr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("./data/animals.json"),
            public_dir: PathBuf::from("./public"),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path of the landing page
    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the backing document path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the static asset directory
    pub fn public_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.public_dir = path.into();
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: SocketAddr) -> Self {
        self.config.listen_addr = addr;
        self
    }

    /// Set only the port of the listen address
    pub fn port(mut self, port: u16) -> Self {
        self.config.listen_addr.set_port(port);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
