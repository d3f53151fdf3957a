use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::commands::Cmd;
use crate::host::{DocumentHost, OutlineView};
use crate::messages::{HostEvent, Msg, OutlineMsg, RebuildTrigger, WorkerMsg};
use crate::model::DocumentSession;
use crate::outline::scan_cancellable;
use crate::update::update;

/// How long `run_until_idle` blocks per poll while scans are running
const WORKER_POLL: Duration = Duration::from_millis(5);

/// Drives one [`DocumentSession`] against a host document and a view
///
/// Every update, publish and host call happens on the thread that owns the
/// runtime. Scans run on spawned threads and report back over a channel.
pub struct OutlineRuntime<H: DocumentHost, V: OutlineView> {
    session: DocumentSession,
    host: H,
    view: V,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
    workers: Vec<JoinHandle<()>>,
}

impl<H: DocumentHost, V: OutlineView> OutlineRuntime<H, V> {
    pub fn new(session: DocumentSession, host: H, view: V) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            session,
            host,
            view,
            msg_tx,
            msg_rx,
            workers: Vec::new(),
        }
    }

    pub fn session(&self) -> &DocumentSession {
        &self.session
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Sender for posting messages from other threads
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    /// Turn a host signal into a message, snapshotting host state now
    pub fn handle_event(&mut self, event: HostEvent) {
        let msg = match event {
            HostEvent::DocumentOpened => self.rebuild_msg(RebuildTrigger::Opened),
            HostEvent::TextChanged => self.rebuild_msg(RebuildTrigger::TextChanged),
            HostEvent::DocumentSaved => self.rebuild_msg(RebuildTrigger::Saved),
            HostEvent::WindowActivated => self.rebuild_msg(RebuildTrigger::Activated),
            HostEvent::DocumentClosing => OutlineMsg::Close,
            HostEvent::CaretMoved => OutlineMsg::CaretMoved {
                line: self.host.current_line(),
            },
            HostEvent::EntryActivated { line_number } => OutlineMsg::EntryActivated {
                line_number,
                document_lines: self.host.line_count(),
            },
        };
        self.dispatch(Msg::Outline(msg));
    }

    fn rebuild_msg(&self, trigger: RebuildTrigger) -> OutlineMsg {
        OutlineMsg::Rebuild {
            trigger,
            source: self.host.document_text(),
        }
    }

    /// Run a message through update and carry out the resulting command
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.session, msg) {
            self.process_cmd(cmd);
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::RunScan {
                revision,
                source,
                token,
            } => {
                let tx = self.msg_tx.clone();
                let handle = std::thread::spawn(move || {
                    let Some(entries) = scan_cancellable(&source, &token) else {
                        return;
                    };
                    let _ = tx.send(Msg::Worker(WorkerMsg::ScanCompleted {
                        revision,
                        token,
                        entries,
                    }));
                });
                self.workers.push(handle);
            }
            Cmd::Publish => {
                self.view.publish(self.session.index.entries());
            }
            Cmd::ScrollToCaret => {
                let line = self.host.current_line();
                self.dispatch(Msg::Outline(OutlineMsg::CaretMoved { line }));
            }
            Cmd::Scroll {
                first_visible,
                focused,
                token,
            } => {
                if !self.session.scroll.is_current(&token) {
                    tracing::debug!("Dropping superseded scroll to {}", first_visible);
                    return;
                }
                self.view.scroll_to(first_visible);
                self.view.focus(focused);
            }
            Cmd::Focus { focused } => {
                self.view.focus(focused);
            }
            Cmd::NavigateTo { line_number } => {
                self.host.move_caret_to_line(line_number);
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    /// Handle every message already waiting; returns whether the view changed
    pub fn process_async_messages(&mut self) -> bool {
        let mut view_changed = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.session, msg) {
                if cmd.touches_view() {
                    view_changed = true;
                }
                self.process_cmd(cmd);
            }
        }
        view_changed
    }

    /// Block up to `timeout` for one message and handle it
    pub fn wait_for_message(&mut self, timeout: Duration) -> bool {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Handle messages until no scan is running and the queue is empty
    pub fn run_until_idle(&mut self) {
        loop {
            let busy = self.reap_workers();
            let msg = if busy {
                match self.msg_rx.recv_timeout(WORKER_POLL) {
                    Ok(msg) => msg,
                    Err(_) => continue,
                }
            } else {
                match self.msg_rx.try_recv() {
                    Ok(msg) => msg,
                    Err(_) => break,
                }
            };
            self.dispatch(msg);
        }
    }

    /// Number of scan threads not yet joined
    pub fn running_scans(&self) -> usize {
        self.workers.len()
    }

    /// Cancel outstanding work and wait for every scan thread
    pub fn shutdown(&mut self) {
        self.session.rebuild.cancel();
        self.session.scroll.cancel();
        for handle in self.workers.drain(..) {
            if handle.join().is_err() {
                tracing::error!("Scan worker panicked during shutdown");
            }
        }
    }

    /// Join finished workers; returns whether any are still running
    fn reap_workers(&mut self) -> bool {
        let (done, running): (Vec<_>, Vec<_>) =
            self.workers.drain(..).partition(|h| h.is_finished());
        for handle in done {
            if handle.join().is_err() {
                tracing::error!("Scan worker panicked");
            }
        }
        self.workers = running;
        !self.workers.is_empty()
    }
}
