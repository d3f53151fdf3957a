//! Runtime module - host integration
//!
//! - `app` - owns a session, turns host events into messages and carries out commands

pub mod app;

pub use app::OutlineRuntime;
