//! Terminal rendering of the outline
//!
//! [`TerminalView`] is the CLI's [`OutlineView`]: it keeps the last published
//! rows plus scroll/focus state and formats them as colored text or JSON.

use serde::Serialize;

use crate::config::OutlineConfig;
use crate::host::OutlineView;
use crate::outline::style::{label_for, style_for};
use crate::outline::Entry;

const RESET: &str = "\x1b[0m";
const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_line_numbers: bool,
    pub color: bool,
    /// Rows shown from `first_visible`; `None` shows everything
    pub visible_rows: Option<usize>,
}

impl RenderOptions {
    pub fn from_config(config: &OutlineConfig) -> Self {
        Self {
            show_line_numbers: config.show_line_numbers,
            color: config.color,
            visible_rows: None,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&OutlineConfig::default())
    }
}

/// Outline view that renders to a string
#[derive(Debug, Clone, Default)]
pub struct TerminalView {
    entries: Vec<Entry>,
    first_visible: usize,
    focused: Option<usize>,
    /// Number of publishes received
    generation: u64,
    pub options: RenderOptions,
}

#[derive(Serialize)]
struct JsonOutline<'a> {
    first_visible: usize,
    focused: Option<usize>,
    entries: &'a [Entry],
}

impl TerminalView {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rows currently in the viewport, with their entry ids
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Entry)> {
        let rows = self.options.visible_rows.unwrap_or(usize::MAX);
        self.entries
            .iter()
            .enumerate()
            .skip(self.first_visible)
            .take(rows)
    }

    /// Format the viewport, one row per line
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (id, entry) in self.visible() {
            out.push_str(&self.format_row(entry, self.focused == Some(id)));
            out.push('\n');
        }
        out
    }

    /// Whole outline plus viewport state as pretty JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonOutline {
            first_visible: self.first_visible,
            focused: self.focused,
            entries: &self.entries,
        })
    }

    fn format_row(&self, entry: &Entry, focused: bool) -> String {
        let style = style_for(entry.kind);
        let marker = if focused { '>' } else { ' ' };
        let number = if self.options.show_line_numbers {
            format!("{:>6} ", entry.line_number)
        } else {
            String::new()
        };
        let indent = INDENT.repeat(entry.indent_level as usize);
        let body = format!("{} {}", style.icon.glyph(), label_for(entry));

        if self.options.color {
            format!(
                "{marker}{number}{indent}{}{body}{RESET}",
                style.color.ansi_fg()
            )
        } else {
            format!("{marker}{number}{indent}{body}")
        }
    }
}

impl OutlineView for TerminalView {
    fn publish(&mut self, entries: &[Entry]) {
        self.entries = entries.to_vec();
        self.generation += 1;
        // Old ids mean nothing against the new rows
        self.focused = None;
        if self.first_visible >= self.entries.len() {
            self.first_visible = 0;
        }
    }

    fn scroll_to(&mut self, first_visible: usize) {
        self.first_visible = first_visible.min(self.entries.len().saturating_sub(1));
    }

    fn focus(&mut self, entry_id: Option<usize>) {
        self.focused = entry_id.filter(|&id| id < self.entries.len());
    }
}
