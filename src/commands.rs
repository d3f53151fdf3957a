//! Commands returned by update functions
//!
//! Update functions stay pure; anything touching threads, the host or the
//! view is described here and carried out by the runtime.

use crate::cancel::CancelToken;

#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Scan `source` off the owning thread
    /// Sends Msg::Worker(ScanCompleted) unless `token` is cancelled first
    RunScan {
        revision: u64,
        source: String,
        token: CancelToken,
    },
    /// Push the current index to the view
    Publish,
    /// Read the host caret and scroll to it
    ScrollToCaret,
    /// Apply a viewport computed for the scroll token `token`
    Scroll {
        first_visible: usize,
        focused: Option<usize>,
        token: CancelToken,
    },
    /// Highlight a row without scrolling
    Focus { focused: Option<usize> },
    /// Ask the host to move its caret
    NavigateTo { line_number: usize },
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Whether the view changes once this command has run
    pub fn touches_view(&self) -> bool {
        match self {
            Cmd::None => false,
            // The view changes later, when the scan result is applied
            Cmd::RunScan { .. } => false,
            Cmd::Publish => true,
            Cmd::ScrollToCaret => true,
            Cmd::Scroll { .. } => true,
            Cmd::Focus { .. } => true,
            Cmd::NavigateTo { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.touches_view()),
        }
    }
}
