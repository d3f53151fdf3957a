//! pragma-outline - marker-based code outline
//!
//! This crate builds a flat outline of a source file from `#pragma region` /
//! `#pragma endregion` markers and C++ access specifiers, following the Elm
//! Architecture pattern: host events become messages, `update` turns them
//! into commands, and the runtime carries the commands out.

pub mod cancel;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod fs_watcher;
pub mod host;
pub mod messages;
pub mod model;
pub mod outline;
pub mod render;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::OutlineConfig;
pub use messages::Msg;
pub use model::DocumentSession;
pub use outline::{Entry, OutlineIndex, RegionKind};
