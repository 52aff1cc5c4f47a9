//! Development server with hot reload for lacquer sites.
//!
//! Rebuilds the site on file changes and pushes updates to connected
//! browsers over WebSocket. Demo edits update the affected preview blocks
//! in place; everything else triggers a full reload.

pub mod server;
pub mod watcher;
pub mod websocket;

pub use server::{DevServer, DevServerConfig, ServerError};
pub use watcher::{FileWatcher, WatchEvent};
pub use websocket::{HmrHub, HmrMessage};
