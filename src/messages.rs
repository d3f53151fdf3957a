//! Message types for the Elm-style architecture
//!
//! All state changes to a [`DocumentSession`](crate::model::DocumentSession)
//! flow through these message types.

use crate::cancel::CancelToken;
use crate::outline::Entry;

/// Signals raised by the host editor. They carry no document data; the
/// runtime snapshots whatever the handler needs when it receives one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// A document window was shown for the first time
    DocumentOpened,
    /// The text changed and the host considers the edit settled
    TextChanged,
    /// The document is about to be saved
    DocumentSaved,
    /// The document window gained focus
    WindowActivated,
    /// The document is closing
    DocumentClosing,
    /// The caret moved
    CaretMoved,
    /// An outline row was activated (clicked)
    EntryActivated { line_number: usize },
}

impl HostEvent {
    /// Events answered by a full outline rebuild
    pub fn triggers_rebuild(&self) -> bool {
        matches!(
            self,
            HostEvent::DocumentOpened
                | HostEvent::TextChanged
                | HostEvent::DocumentSaved
                | HostEvent::WindowActivated
        )
    }
}

/// Why a rebuild was requested
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebuildTrigger {
    Opened,
    TextChanged,
    Saved,
    Activated,
}

/// Outline messages, carrying host snapshots taken on the owning thread
#[derive(Debug, Clone)]
pub enum OutlineMsg {
    /// Rebuild from `source`; `None` means the host had no text to offer
    Rebuild {
        trigger: RebuildTrigger,
        source: Option<String>,
    },
    /// Document closing: drop every entry
    Close,
    /// Caret now on `line` (`None` when the host could not tell)
    CaretMoved { line: Option<usize> },
    /// Row for `line_number` activated; `document_lines` bounds the jump
    EntryActivated {
        line_number: usize,
        document_lines: Option<usize>,
    },
}

/// Results posted back by background scans
#[derive(Debug, Clone)]
pub enum WorkerMsg {
    ScanCompleted {
        revision: u64,
        token: CancelToken,
        entries: Vec<Entry>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Outline(OutlineMsg),
    Worker(WorkerMsg),
}
