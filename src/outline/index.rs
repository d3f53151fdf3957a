//! Sorted, line-keyed storage of outline entries
//!
//! Entries live in a vector kept in strictly increasing `line_number` order,
//! so rendering iterates in document order and nearest-line lookups are a
//! binary search.

use super::Entry;

/// Ordered outline entries with at most one entry per line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineIndex {
    entries: Vec<Entry>,
}

impl OutlineIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in increasing line order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Entry at position `id` in line order
    pub fn get(&self, id: usize) -> Option<&Entry> {
        self.entries.get(id)
    }

    /// Entry starting exactly at `line_number`
    pub fn entry_at_line(&self, line_number: usize) -> Option<&Entry> {
        self.position_of(line_number).map(|id| &self.entries[id])
    }

    /// Position of the entry starting exactly at `line_number`
    pub fn position_of(&self, line_number: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&line_number, |e| e.line_number)
            .ok()
    }

    /// Insert an entry, replacing any entry already at its line
    pub fn insert(&mut self, entry: Entry) {
        match self
            .entries
            .binary_search_by_key(&entry.line_number, |e| e.line_number)
        {
            Ok(id) => self.entries[id] = entry,
            Err(id) => self.entries.insert(id, entry),
        }
    }

    /// Remove the entry at `line_number`, if any
    pub fn remove(&mut self, line_number: usize) -> Option<Entry> {
        let id = self.position_of(line_number)?;
        Some(self.entries.remove(id))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replace the whole contents in one step
    ///
    /// Input order does not matter; when two entries share a line the later
    /// one wins, matching repeated [`insert`](Self::insert) calls.
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = Entry>) {
        let mut fresh: Vec<Entry> = entries.into_iter().collect();
        let already_sorted = fresh
            .windows(2)
            .all(|w| w[0].line_number < w[1].line_number);

        if !already_sorted {
            fresh.sort_by_key(|e| e.line_number);
            // Keep the last of each run of equal lines
            fresh.reverse();
            fresh.dedup_by_key(|e| e.line_number);
            fresh.reverse();
        }

        self.entries = fresh;
    }

    /// Position of the entry with the greatest line number `<= target_line`
    ///
    /// `None` means the target lies before the first entry.
    pub fn nearest_at_or_before(&self, target_line: usize) -> Option<usize> {
        self.entries
            .partition_point(|e| e.line_number <= target_line)
            .checked_sub(1)
    }

    /// Entry found by [`nearest_at_or_before`](Self::nearest_at_or_before)
    pub fn entry_at_or_before(&self, target_line: usize) -> Option<&Entry> {
        self.nearest_at_or_before(target_line)
            .map(|id| &self.entries[id])
    }
}

impl<'a> IntoIterator for &'a OutlineIndex {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// First entry to show so that `entry_id` sits `entries_above` rows down
///
/// "Before first" scrolls to the top.
pub fn focus_window(entry_id: Option<usize>, entries_above: usize) -> usize {
    entry_id.map_or(0, |id| id.saturating_sub(entries_above))
}
