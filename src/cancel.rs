use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{SearchError, SearchResult};

/// Cooperative cancellation flag shared between the thread running a search and whoever wants to
/// stop it. Clones observe the same flag.
///
/// The search checks the flag once per expansion cycle, so a cancelled run stops after finishing
/// at most one more "close a node, open its children" step.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> CancellationToken {
        CancellationToken::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Returns [SearchError::Cancelled] once cancellation has been requested.
    pub fn check(&self) -> SearchResult<()> {
        if self.is_cancelled() {
            Err(SearchError::Cancelled)
        } else {
            Ok(())
        }
    }
}
