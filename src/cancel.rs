//! Cancellation by supersession
//!
//! Every triggering event takes a fresh [`CancelToken`] from a [`CancelScope`];
//! taking one cancels the token handed out before it. Long-running work polls
//! its token and stops quietly once it has been superseded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared flag checked by in-flight work
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Whether both handles refer to the same token
    pub fn same_as(&self, other: &CancelToken) -> bool {
        Arc::ptr_eq(&self.cancelled, &other.cancelled)
    }
}

impl PartialEq for CancelToken {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for CancelToken {}

/// Source of tokens for one concern (rebuilds, scrolling)
#[derive(Debug, Default)]
pub struct CancelScope {
    current: Option<CancelToken>,
}

impl CancelScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the outstanding token and hand out a fresh one
    pub fn renew(&mut self) -> CancelToken {
        self.cancel();
        let token = CancelToken::new();
        self.current = Some(token.clone());
        token
    }

    /// Cancel the outstanding token, if any
    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            previous.cancel();
        }
    }

    /// Whether `token` is still the live token of this scope
    pub fn is_current(&self, token: &CancelToken) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| current.same_as(token) && !current.is_cancelled())
    }

    /// Outstanding, not yet cancelled token
    pub fn current(&self) -> Option<&CancelToken> {
        self.current.as_ref().filter(|t| !t.is_cancelled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renew_cancels_previous() {
        let mut scope = CancelScope::new();
        let first = scope.renew();
        let second = scope.renew();
        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert!(!scope.is_current(&first));
        assert!(scope.is_current(&second));
    }

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
        assert_eq!(token, clone);
        assert_ne!(token, CancelToken::new());
    }

    #[test]
    fn test_scopes_are_independent() {
        let mut rebuild = CancelScope::new();
        let mut scroll = CancelScope::new();
        let rebuild_token = rebuild.renew();
        let _ = scroll.renew();
        let _ = scroll.renew();
        assert!(!rebuild_token.is_cancelled());
    }

    #[test]
    fn test_cancel_clears_current() {
        let mut scope = CancelScope::new();
        let token = scope.renew();
        scope.cancel();
        assert!(token.is_cancelled());
        assert!(scope.current().is_none());
    }
}
