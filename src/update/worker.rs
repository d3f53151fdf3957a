//! Background scan completion handlers

use crate::commands::Cmd;
use crate::messages::WorkerMsg;
use crate::model::DocumentSession;

use super::outline::replay_pending_scroll;

/// Handle results posted by background workers
pub fn update_worker(session: &mut DocumentSession, msg: WorkerMsg) -> Option<Cmd> {
    match msg {
        WorkerMsg::ScanCompleted {
            revision,
            token,
            entries,
        } => {
            if !session.rebuild.is_current(&token) {
                tracing::debug!("Discarding superseded scan rev={}", revision);
                return None;
            }
            if session.revision != revision {
                tracing::debug!(
                    "Discarding stale scan: session revision {} != result revision {}",
                    session.revision,
                    revision
                );
                return None;
            }

            tracing::debug!("Applying scan rev={}: {} entries", revision, entries.len());
            session.index.replace_all(entries);
            session.in_flight = None;

            let scroll = match replay_pending_scroll(session) {
                Some(cmd) => cmd,
                None => Cmd::ScrollToCaret,
            };
            Some(Cmd::batch(vec![Cmd::Publish, scroll]))
        }
    }
}
