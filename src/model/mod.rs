//! Session model - the complete outline state for one open document
//!
//! Only the thread that owns the runtime touches a [`DocumentSession`];
//! background scans see nothing but a text snapshot and a cancel token.

use crate::cancel::{CancelScope, CancelToken};
use crate::config::OutlineConfig;
use crate::outline::{focus_window, OutlineIndex};

/// Caret scroll requested while a rebuild was in flight
#[derive(Debug, Clone)]
pub struct PendingScroll {
    /// Caret line when the scroll was requested (`None`: unknown)
    pub line: Option<usize>,
    pub token: CancelToken,
}

/// Viewport position computed for a caret line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollTarget {
    /// First entry shown at the top of the view
    pub first_visible: usize,
    /// Entry containing the caret (`None`: caret before the first entry)
    pub focused: Option<usize>,
}

/// Outline state of a single document
#[derive(Debug)]
pub struct DocumentSession {
    pub index: OutlineIndex,
    /// Bumped by every rebuild or close; completions carrying an older value are stale
    pub revision: u64,
    /// Revision of the scan currently running, if any
    pub in_flight: Option<u64>,
    pub rebuild: CancelScope,
    pub scroll: CancelScope,
    pub pending_scroll: Option<PendingScroll>,
    pub focused: Option<usize>,
    pub first_visible: usize,
    pub config: OutlineConfig,
}

impl DocumentSession {
    pub fn new(config: OutlineConfig) -> Self {
        Self {
            index: OutlineIndex::new(),
            revision: 0,
            in_flight: None,
            rebuild: CancelScope::new(),
            scroll: CancelScope::new(),
            pending_scroll: None,
            focused: None,
            first_visible: 0,
            config,
        }
    }

    /// Whether a scan has been started and not yet applied or superseded
    pub fn is_rebuilding(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Viewport that puts the entry containing `line` near the top
    pub fn scroll_target(&self, line: usize) -> ScrollTarget {
        let focused = self.index.nearest_at_or_before(line);
        ScrollTarget {
            first_visible: focus_window(focused, self.config.entries_above_focus),
            focused,
        }
    }

    /// Record a viewport as the one now shown
    pub fn apply_scroll(&mut self, target: ScrollTarget) {
        self.first_visible = target.first_visible;
        self.focused = target.focused;
    }

    /// Drop every entry and all viewport state
    pub fn reset(&mut self) {
        self.index.clear();
        self.in_flight = None;
        self.pending_scroll = None;
        self.focused = None;
        self.first_visible = 0;
    }
}

impl Default for DocumentSession {
    fn default() -> Self {
        Self::new(OutlineConfig::default())
    }
}
