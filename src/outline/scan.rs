//! Line-oriented marker scanner
//!
//! Walks the document once, top to bottom, and turns marker lines into
//! [`Entry`] rows. Each line is tried against three mutually exclusive
//! matchers in priority order: access specifier, `#pragma region`,
//! `#pragma endregion`. Every other line is ordinary code and ignored.

use std::sync::OnceLock;

use regex::Regex;

use super::{classify, AccessLevel, Entry, RegionKind};
use crate::cancel::CancelToken;

/// `public:` / `protected:` / `private:` on a line of its own
fn specifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(public|protected|private)\s*:\s*$").expect("valid specifier regex")
    })
}

/// `#pragma region Public` and friends
fn region_access_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*#pragma\s+region\s+((?i:public|protected|private))")
            .expect("valid region access regex")
    })
}

fn region_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*#pragma\s+region\s+(\S+)\s*(.*)").expect("valid region regex")
    })
}

fn endregion_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*#pragma\s+endregion\s*$").expect("valid endregion regex"))
}

/// An open access block and the level to restore when it closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AccessScope {
    /// Raw indent at which the block was opened
    depth: i64,
    restore: AccessLevel,
}

/// Nesting state carried between lines
///
/// `indent_level` is never clamped here; it may go negative on unbalanced
/// `#pragma endregion` lines or exceed the stored maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanState {
    pub indent_level: i64,
    /// Indent at which the implicit (bare specifier) access block was opened
    pub access_root_indent: Option<i64>,
    pub current_access: AccessLevel,
    access_scopes: Vec<AccessScope>,
}

impl ScanState {
    fn open_access_scope(&mut self, level: AccessLevel) {
        self.access_scopes.push(AccessScope {
            depth: self.indent_level,
            restore: self.current_access,
        });
        self.current_access = level;
    }

    fn close_access_scopes(&mut self) {
        while let Some(scope) = self.access_scopes.last().copied() {
            if scope.depth < self.indent_level {
                break;
            }
            self.access_scopes.pop();
            self.current_access = scope.restore;
        }
    }
}

/// Incremental scanner: feed it lines in document order
#[derive(Debug, Clone, Default)]
pub struct OutlineBuilder {
    state: ScanState,
    line_number: usize,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Consume the next line, returning the entry it produces (if any)
    pub fn feed_line(&mut self, line: &str) -> Option<Entry> {
        self.line_number += 1;

        if let Some(entry) = self.match_access(line) {
            return Some(entry);
        }
        if let Some(entry) = self.match_region(line) {
            return Some(entry);
        }
        self.match_endregion(line);
        None
    }

    fn match_access(&mut self, line: &str) -> Option<Entry> {
        let (word, is_specifier) = if let Some(caps) = specifier_re().captures(line) {
            (caps.get(1)?.as_str(), true)
        } else {
            let caps = region_access_re().captures(line)?;
            (caps.get(1)?.as_str(), false)
        };
        let level = AccessLevel::from_keyword(word)?;
        let kind = RegionKind::from_access(level)?;

        let state = &mut self.state;
        let entry_indent = match state.access_root_indent {
            None => state.indent_level,
            Some(_) => state.indent_level - 1,
        };

        if is_specifier {
            if state.access_root_indent.is_none() {
                state.access_root_indent = Some(state.indent_level);
                state.open_access_scope(level);
                state.indent_level += 1;
            } else {
                state.current_access = level;
            }
        } else {
            state.open_access_scope(level);
            state.indent_level += 1;
        }

        Some(Entry::new(self.line_number, kind, "", entry_indent, level))
    }

    fn match_region(&mut self, line: &str) -> Option<Entry> {
        let caps = region_re().captures(line)?;
        let tag = caps.get(1).map_or("", |m| m.as_str());
        let description = caps.get(2).map_or("", |m| m.as_str());
        let class = classify(tag, description);

        let state = &mut self.state;
        let entry = Entry::new(
            self.line_number,
            class.kind,
            class.display_text,
            state.indent_level,
            state.current_access,
        );
        state.indent_level += 1;
        Some(entry)
    }

    fn match_endregion(&mut self, line: &str) {
        if !endregion_re().is_match(line) {
            return;
        }
        let state = &mut self.state;
        state.indent_level -= 1;
        if state.access_root_indent == Some(state.indent_level) {
            // The implicit access block has no endregion of its own
            state.access_root_indent = None;
            state.indent_level -= 1;
        }
        state.close_access_scopes();
    }
}

/// Split `text` on `\r\n`, `\n` or a lone `\r`
///
/// A terminator at the very end does not start another line.
pub fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(|c| c == '\r' || c == '\n') else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
        Some(line)
    })
}

/// Scan a whole document into entries ordered by line number
pub fn scan(text: &str) -> Vec<Entry> {
    let mut builder = OutlineBuilder::new();
    lines(text).filter_map(|line| builder.feed_line(line)).collect()
}

/// Scan while `keep_going(lines_consumed)` holds
///
/// The predicate is consulted before the first line, between lines and once
/// more at the end. Returns `None` as soon as it says stop; partial results
/// are never handed out.
pub fn scan_while(text: &str, mut keep_going: impl FnMut(usize) -> bool) -> Option<Vec<Entry>> {
    let mut builder = OutlineBuilder::new();
    let mut entries = Vec::new();
    for line in lines(text) {
        if !keep_going(builder.line_number()) {
            tracing::debug!(
                "Scan stopped after {} lines, discarding {} entries",
                builder.line_number(),
                entries.len()
            );
            return None;
        }
        entries.extend(builder.feed_line(line));
    }

    if !keep_going(builder.line_number()) {
        return None;
    }
    Some(entries)
}

/// Scan unless `token` is cancelled first; a cancelled scan yields nothing
pub fn scan_cancellable(text: &str, token: &CancelToken) -> Option<Vec<Entry>> {
    if token.is_cancelled() {
        return None;
    }
    scan_while(text, |_| !token.is_cancelled())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_state(text: &str) -> ScanState {
        let mut builder = OutlineBuilder::new();
        for line in lines(text) {
            builder.feed_line(line);
        }
        builder.state().clone()
    }

    #[test]
    fn test_nested_class_region() {
        let entries = scan(
            "#pragma region Classes\n#pragma region class Foo\n#pragma endregion\n#pragma endregion\n",
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line_number, 1);
        assert_eq!(entries[0].kind, RegionKind::Classes);
        assert_eq!(entries[0].display_text, "Classes");
        assert_eq!(entries[0].indent_level, 0);
        assert_eq!(entries[1].line_number, 2);
        assert_eq!(entries[1].kind, RegionKind::Class);
        assert_eq!(entries[1].display_text, "Foo");
        assert_eq!(entries[1].indent_level, 1);
    }

    #[test]
    fn test_bare_specifier_opens_implicit_block_once() {
        let text = "#pragma region class Foo\n\
                    {\n\
                    public:\n\
                    \x20   int a;\n\
                    private:\n\
                    \x20   int b;\n\
                    #pragma endregion\n";
        let entries = scan(text);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].kind, RegionKind::Public);
        assert_eq!(entries[1].line_number, 3);
        assert_eq!(entries[1].indent_level, 1);
        assert_eq!(entries[2].kind, RegionKind::Private);
        assert_eq!(entries[2].indent_level, 1);

        let state = final_state(text);
        assert_eq!(state.indent_level, 0);
        assert_eq!(state.access_root_indent, None);
        assert_eq!(state.current_access, AccessLevel::None);
    }

    #[test]
    fn test_bare_specifier_bumps_indent_by_one() {
        let mut builder = OutlineBuilder::new();
        builder.feed_line("#pragma region class Foo");
        builder.feed_line("{");
        assert_eq!(builder.state().indent_level, 1);
        let entry = builder.feed_line("public:").unwrap();
        assert_eq!(entry.indent_level, 1);
        assert_eq!(builder.state().indent_level, 2);
        assert_eq!(builder.state().access_root_indent, Some(1));
    }

    #[test]
    fn test_region_style_access_is_balanced() {
        let text = "#pragma region class Foo\n\
                    #pragma region Public\n\
                    #pragma region Methods\n\
                    #pragma region method Run\n\
                    #pragma endregion\n\
                    #pragma endregion\n\
                    #pragma endregion\n\
                    #pragma endregion\n";
        let entries = scan(text);
        let indents: Vec<u8> = entries.iter().map(|e| e.indent_level).collect();
        assert_eq!(indents, vec![0, 1, 2, 3]);
        assert_eq!(entries[1].kind, RegionKind::Public);
        assert_eq!(entries[3].access, AccessLevel::Public);
        assert_eq!(final_state(text).indent_level, 0);
    }

    #[test]
    fn test_access_context_restored_after_block() {
        let text = "#pragma region class Foo\n\
                    #pragma region Private\n\
                    #pragma region field x\n\
                    #pragma endregion\n\
                    #pragma endregion\n\
                    #pragma region field y\n\
                    #pragma endregion\n\
                    #pragma endregion\n";
        let entries = scan(text);
        assert_eq!(entries[2].display_text, "x");
        assert_eq!(entries[2].access, AccessLevel::Private);
        assert_eq!(entries[3].display_text, "y");
        assert_eq!(entries[3].access, AccessLevel::None);
    }

    #[test]
    fn test_unbalanced_endregion_goes_negative() {
        let text = "#pragma endregion\n#pragma endregion\n#pragma region Methods\n";
        let entries = scan(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].indent_level, 0);
        assert_eq!(final_state(text).indent_level, -1);
    }

    #[test]
    fn test_deep_nesting_is_clamped_on_entries_only() {
        let text = (0..7)
            .map(|i| format!("#pragma region function f{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let entries = scan(&text);
        assert_eq!(entries.last().unwrap().indent_level, 4);
        assert_eq!(final_state(&text).indent_level, 7);
    }

    #[test]
    fn test_ordinary_lines_are_ignored() {
        let entries = scan("int main() {\n  return 0; // #pragma region nope\n}\n");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_region_access_matches_word_prefix() {
        let text = "#pragma region Publications\n";
        let entries = scan(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, RegionKind::Public);
        assert_eq!(entries[0].display_text, "");
        assert_eq!(entries[0].indent_level, 0);
        assert_eq!(final_state(text).indent_level, 1);

        let entries = scan("#pragma region Private_Impl\n#pragma region function run\n");
        assert_eq!(entries[0].kind, RegionKind::Private);
        assert_eq!(entries[1].indent_level, 1);
        assert_eq!(entries[1].access, AccessLevel::Private);
    }

    #[test]
    fn test_lone_carriage_returns_split_lines() {
        let entries = scan("#pragma region Methods\r#pragma region method a\r#pragma endregion\r\n\n#pragma region Fields");
        let lines: Vec<_> = entries.iter().map(|e| e.line_number).collect();
        assert_eq!(lines, vec![1, 2, 5]);
        assert_eq!(entries[2].indent_level, 1);
    }

    #[test]
    fn test_lines_splits_on_every_terminator() {
        let split: Vec<_> = lines("a\rb\r\nc\n\nd\r").collect();
        assert_eq!(split, vec!["a", "b", "c", "", "d"]);
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn test_cancelled_token_yields_nothing() {
        let token = CancelToken::new();
        token.cancel();
        assert!(scan_cancellable("#pragma region Methods\n", &token).is_none());

        let live = CancelToken::new();
        let entries = scan_cancellable("#pragma region Methods\n", &live).unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_scan_stopped_midway_yields_nothing() {
        let text = "#pragma region Methods\n#pragma region method a\n#pragma endregion\n";
        assert!(scan_while(text, |consumed| consumed < 2).is_none());
        assert_eq!(scan_while(text, |_| true).map(|e| e.len()), Some(2));
    }
}
