//! File watching for watch mode
//!
//! Uses the `notify` crate with debouncing to detect changes to the outlined
//! file. The parent directory is watched so editors that save by replacing
//! the file are still seen.

use notify_debouncer_mini::{new_debouncer, DebouncedEventKind, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

type DebounceResult = Result<Vec<notify_debouncer_mini::DebouncedEvent>, notify::Error>;

/// Debounced watcher for a single file
pub struct FileWatcher {
    /// The debouncer handles watching and event coalescing
    _debouncer: Debouncer<notify::RecommendedWatcher>,
    rx: Receiver<DebounceResult>,
    file: PathBuf,
}

impl FileWatcher {
    /// Watch `file`, coalescing bursts of changes within `debounce`
    pub fn new(file: &Path, debounce: Duration) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let mut debouncer = new_debouncer(debounce, tx)?;

        let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
        let dir = file
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        debouncer
            .watcher()
            .watch(&dir, notify::RecursiveMode::NonRecursive)?;

        tracing::info!("Watching {} (debounce {:?})", file.display(), debounce);

        Ok(Self {
            _debouncer: debouncer,
            rx,
            file,
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Wait up to `timeout` for settled changes; true if the file changed
    pub fn wait_for_change(&self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => {
                let changed = self.is_relevant(result);
                self.poll_changed() || changed
            }
            Err(_) => false,
        }
    }

    /// Drain pending events without blocking; true if the file changed
    pub fn poll_changed(&self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            changed |= self.is_relevant(result);
        }
        changed
    }

    fn is_relevant(&self, result: DebounceResult) -> bool {
        match result {
            Ok(events) => events.iter().any(|event| {
                // Continuous events fire during active writes
                event.kind != DebouncedEventKind::AnyContinuous && self.matches(&event.path)
            }),
            Err(e) => {
                tracing::warn!("File watcher error: {:?}", e);
                false
            }
        }
    }

    fn matches(&self, path: &Path) -> bool {
        path == self.file || path.file_name() == self.file.file_name()
    }
}
