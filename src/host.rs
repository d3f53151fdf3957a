//! Host collaborator boundary
//!
//! The outline never owns the document or the widgets that show it. It reads
//! text and caret position through [`DocumentHost`] and pushes results through
//! [`OutlineView`]. [`TextDocument`] is an in-memory host backed by a rope,
//! used by the CLI and by tests.

use std::path::{Path, PathBuf};

use ropey::Rope;

use crate::outline::Entry;

/// Source of document state. Every getter may report "unavailable".
pub trait DocumentHost {
    /// Full text of the active document
    fn document_text(&self) -> Option<String>;

    /// 1-based caret line
    fn current_line(&self) -> Option<usize>;

    /// Number of lines in the active document
    fn line_count(&self) -> Option<usize>;

    /// Move the caret to the start of a 1-based line
    fn move_caret_to_line(&mut self, line_number: usize);
}

/// Render collaborator. Calls arrive on the thread that owns the runtime.
pub trait OutlineView {
    /// Replace every visible row
    fn publish(&mut self, entries: &[Entry]);

    /// Scroll so that the row at `first_visible` is the top one
    fn scroll_to(&mut self, first_visible: usize);

    /// Highlight the row at `entry_id`; `None` clears the highlight
    fn focus(&mut self, entry_id: Option<usize>);
}

/// In-memory document
#[derive(Debug, Clone)]
pub struct TextDocument {
    pub buffer: Rope,
    pub file_path: Option<PathBuf>,
    /// 1-based caret line
    pub caret_line: usize,
    /// Closed documents report no text and no caret
    pub is_open: bool,
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl TextDocument {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            caret_line: 1,
            is_open: true,
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> std::io::Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)?;
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path),
            caret_line: 1,
            is_open: true,
        })
    }

    /// Re-read the backing file, keeping the caret where it was
    pub fn reload(&mut self) -> std::io::Result<()> {
        if let Some(path) = &self.file_path {
            let content = std::fs::read_to_string(path)?;
            self.buffer = Rope::from(content);
        }
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from(text);
    }

    /// Insert `text` at the start of a 1-based line (appends past the end)
    pub fn insert_at_line(&mut self, line_number: usize, text: &str) {
        let line_idx = line_number.saturating_sub(1);
        let char_idx = if line_idx < self.buffer.len_lines() {
            self.buffer.line_to_char(line_idx)
        } else {
            self.buffer.len_chars()
        };
        self.buffer.insert(char_idx, text);
    }

    pub fn set_caret_line(&mut self, line_number: usize) {
        self.caret_line = line_number.max(1);
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }
}

impl DocumentHost for TextDocument {
    fn document_text(&self) -> Option<String> {
        self.is_open.then(|| self.buffer.to_string())
    }

    fn current_line(&self) -> Option<usize> {
        self.is_open.then_some(self.caret_line)
    }

    fn line_count(&self) -> Option<usize> {
        self.is_open.then(|| self.buffer.len_lines())
    }

    fn move_caret_to_line(&mut self, line_number: usize) {
        self.set_caret_line(line_number);
    }
}
