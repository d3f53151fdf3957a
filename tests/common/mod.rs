//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use pragma_outline::config::OutlineConfig;
use pragma_outline::host::{OutlineView, TextDocument};
use pragma_outline::model::DocumentSession;
use pragma_outline::outline::Entry;
use pragma_outline::runtime::OutlineRuntime;

/// Everything the runtime pushed to the view, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Publish(Vec<Entry>),
    ScrollTo(usize),
    Focus(Option<usize>),
}

/// View that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn publishes(&self) -> Vec<&Vec<Entry>> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Publish(entries) => Some(entries),
                _ => None,
            })
            .collect()
    }

    pub fn last_published(&self) -> Option<&Vec<Entry>> {
        self.publishes().last().copied()
    }

    pub fn last_scroll(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::ScrollTo(first) => Some(*first),
            _ => None,
        })
    }

    pub fn last_focus(&self) -> Option<Option<usize>> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Focus(id) => Some(*id),
            _ => None,
        })
    }
}

impl OutlineView for RecordingView {
    fn publish(&mut self, entries: &[Entry]) {
        self.calls.push(ViewCall::Publish(entries.to_vec()));
    }

    fn scroll_to(&mut self, first_visible: usize) {
        self.calls.push(ViewCall::ScrollTo(first_visible));
    }

    fn focus(&mut self, entry_id: Option<usize>) {
        self.calls.push(ViewCall::Focus(entry_id));
    }
}

pub type TestRuntime = OutlineRuntime<TextDocument, RecordingView>;

/// Runtime over an in-memory document with the caret on `caret_line`
pub fn test_runtime(text: &str, caret_line: usize) -> TestRuntime {
    let mut document = TextDocument::with_text(text);
    document.set_caret_line(caret_line);
    OutlineRuntime::new(
        DocumentSession::new(OutlineConfig::default()),
        document,
        RecordingView::default(),
    )
}

/// Class with a methods container holding `count` methods, one per 2 lines
pub fn methods_source(count: usize) -> String {
    let mut text = String::from("#pragma region Methods\n");
    for i in 0..count {
        text.push_str(&format!("#pragma region method m{i}\n#pragma endregion\n"));
    }
    text.push_str("#pragma endregion\n");
    text
}

/// A header exercising containers, items and both access styles
pub const WIDGET_HEADER: &str = "\
#pragma region Headers
#include <string>
#pragma endregion

#pragma region namespace ui
#pragma region Classes
#pragma region class Widget
class Widget
{
public:
#pragma region Constructors
    Widget();
#pragma endregion
#pragma region Methods
#pragma region method Draw
    void Draw();
#pragma endregion
#pragma endregion
private:
#pragma region Fields
#pragma region field m_name
    std::string m_name;
#pragma endregion
#pragma endregion
#pragma endregion
};
#pragma endregion
#pragma endregion
";
