//! Server configuration from flags and environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use algoflow_core::ActivityLog;
use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "algoflow-vis")]
#[command(about = "Interactive data structure and algorithm visualizer")]
pub struct VisConfig {
    /// TCP address to bind the web server
    #[arg(long, env = "ALGOFLOW_BIND", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Simulation log lines kept per session
    #[arg(long, env = "ALGOFLOW_LOG_CAPACITY", default_value_t = ActivityLog::DEFAULT_CAPACITY)]
    pub log_capacity: usize,

    /// Serve the client from this directory instead of the built-in page
    #[arg(long, env = "ALGOFLOW_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

impl Default for VisConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_capacity: ActivityLog::DEFAULT_CAPACITY,
            static_dir: None,
        }
    }
}
