//! Update functions for the Elm-style architecture
//!
//! All session state transformations flow through these functions.

mod outline;
mod worker;

use crate::commands::Cmd;
use crate::messages::{Msg, OutlineMsg, WorkerMsg};
use crate::model::DocumentSession;

pub use outline::update_outline;
pub use worker::update_worker;

/// Main update function - dispatches to sub-handlers
pub fn update(session: &mut DocumentSession, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = tracing::debug_span!("update", msg = %msg_name).entered();
    tracing::trace!(target: "message", msg = %msg_name, "processing");

    match msg {
        Msg::Outline(m) => outline::update_outline(session, m),
        Msg::Worker(m) => worker::update_worker(session, m),
    }
}

/// Short message name for log output
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Outline(m) => match m {
            OutlineMsg::Rebuild { trigger, .. } => format!("Outline::Rebuild({:?})", trigger),
            OutlineMsg::Close => "Outline::Close".to_string(),
            OutlineMsg::CaretMoved { .. } => "Outline::CaretMoved".to_string(),
            OutlineMsg::EntryActivated { .. } => "Outline::EntryActivated".to_string(),
        },
        Msg::Worker(WorkerMsg::ScanCompleted { revision, .. }) => {
            format!("Worker::ScanCompleted(rev {})", revision)
        }
    }
}
