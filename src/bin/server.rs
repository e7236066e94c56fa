//! Zookeepr Server Binary
//!
//! Starts the HTTP API for Zookeepr.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};
use zookeepr::http::Server;
use zookeepr::{AnimalStore, Config};

/// Zookeepr Server
#[derive(Parser, Debug)]
#[command(name = "zookeepr-server")]
#[command(about = "HTTP API serving a JSON-backed animal collection")]
#[command(version)]
struct Args {
    /// Backing JSON document
    #[arg(short, long, default_value = "./data/animals.json")]
    data_file: String,

    /// Directory of static files (landing page is index.html)
    #[arg(short, long, default_value = "./public")]
    public_dir: String,

    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to bind
    #[arg(long, env = "PORT", default_value_t = zookeepr::config::DEFAULT_PORT)]
    port: u16,
}

impl Args {
    /// Runtime config from the parsed flags
    ///
    /// The port resolves as `--port`, then `PORT`, then the default.
    fn to_config(&self) -> Config {
        Config::builder()
            .data_file(&self.data_file)
            .public_dir(&self.public_dir)
            .listen_addr(SocketAddr::new(self.host, self.port))
            .build()
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,zookeepr=debug,tower_http=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("Zookeepr Server v{}", zookeepr::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Public directory: {}", args.public_dir);

    let config = args.to_config();

    // Open store
    let store = match AnimalStore::open(&config) {
        Ok(s) => Arc::new(s),
        Err(e) => {
            tracing::error!("Failed to open store: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Store initialized with {} animals", store.len());

    // Start server
    let server = Server::new(config, store);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
