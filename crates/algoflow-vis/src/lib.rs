//! # AlgoFlow Visualizer Server
//!
//! Serves the browser client and runs one [`Session`] per WebSocket. Each
//! session owns a navigation controller whose history writes are forwarded
//! to the browser, and a virtual clock that fires simulation ticks as
//! their deadlines pass.

pub mod config;
pub mod error;
pub mod server;
pub mod session;

pub use config::VisConfig;
pub use error::{Error, Result};
pub use server::VisServer;
pub use session::{drive, ClientCommand, ClientHistory, ServerMessage, Session};
