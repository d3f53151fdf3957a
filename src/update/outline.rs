//! Outline update handlers
//!
//! Rebuild, close, caret and activation messages. Every rebuild or scroll
//! request supersedes the one before it by renewing its cancel scope.

use crate::commands::Cmd;
use crate::messages::OutlineMsg;
use crate::model::{DocumentSession, PendingScroll};

/// Handle outline messages
pub fn update_outline(session: &mut DocumentSession, msg: OutlineMsg) -> Option<Cmd> {
    match msg {
        OutlineMsg::Rebuild { trigger, source } => {
            let token = session.rebuild.renew();
            session.revision += 1;

            let Some(source) = source else {
                // Nothing to scan: keep the current entries, release any parked scroll
                tracing::debug!("Rebuild ({:?}) skipped: no document text", trigger);
                session.in_flight = None;
                return replay_pending_scroll(session);
            };

            tracing::debug!(
                "Rebuild ({:?}) → RunScan rev={} ({} bytes)",
                trigger,
                session.revision,
                source.len()
            );
            session.in_flight = Some(session.revision);
            Some(Cmd::RunScan {
                revision: session.revision,
                source,
                token,
            })
        }

        OutlineMsg::Close => {
            session.rebuild.renew();
            session.scroll.cancel();
            session.revision += 1;
            session.reset();
            tracing::debug!("Document closing, outline cleared");
            Some(Cmd::Publish)
        }

        OutlineMsg::CaretMoved { line } => {
            let token = session.scroll.renew();

            if session.is_rebuilding() {
                // Index is about to change; scroll once the new one is published
                session.pending_scroll = Some(PendingScroll { line, token });
                return None;
            }

            session.pending_scroll = None;
            let line = line?;
            let target = session.scroll_target(line);
            session.apply_scroll(target);
            Some(Cmd::Scroll {
                first_visible: target.first_visible,
                focused: target.focused,
                token,
            })
        }

        OutlineMsg::EntryActivated {
            line_number,
            document_lines,
        } => {
            let in_range = line_number >= 1 && document_lines.is_some_and(|n| n >= line_number);
            if !in_range {
                tracing::debug!(
                    "Ignoring activation of line {} (document has {:?} lines)",
                    line_number,
                    document_lines
                );
                return None;
            }

            let focused = session.index.position_of(line_number);
            session.focused = focused;
            Some(Cmd::batch(vec![
                Cmd::NavigateTo { line_number },
                Cmd::Focus { focused },
            ]))
        }
    }
}

/// Run a scroll that was parked behind a rebuild, if it is still wanted
pub(super) fn replay_pending_scroll(session: &mut DocumentSession) -> Option<Cmd> {
    let pending = session.pending_scroll.take()?;
    if !session.scroll.is_current(&pending.token) {
        return None;
    }
    let target = session.scroll_target(pending.line?);
    session.apply_scroll(target);
    Some(Cmd::Scroll {
        first_visible: target.first_visible,
        focused: target.focused,
        token: pending.token,
    })
}
