//! Latest-wins coordination for overlapping extractions
//!
//! A caller that lets a user re-upload while an extraction is in flight
//! must not apply the stale result when it eventually arrives. Each
//! extraction begins by taking a [`RunToken`] from a shared
//! [`ExtractionSession`]; beginning a new run supersedes every earlier
//! token. The discard is advisory at the call site: nothing is injected
//! into an in-flight decode or clustering run.
//!
//! ```
//! use pixel_palette::session::ExtractionSession;
//!
//! let session = ExtractionSession::new();
//! let first = session.begin();
//! let second = session.begin();
//!
//! assert!(first.keep("stale palette").is_none());
//! assert_eq!(second.keep("fresh palette"), Some("fresh palette"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Issues run tokens; the newest token is the only current one
#[derive(Debug, Clone, Default)]
pub struct ExtractionSession {
    latest: Arc<AtomicU64>,
}

impl ExtractionSession {
    /// Create a session with no runs started
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run, superseding all previously issued tokens
    pub fn begin(&self) -> RunToken {
        let id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RunToken {
            id,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// Handle identifying one extraction run
#[derive(Debug)]
pub struct RunToken {
    id: u64,
    latest: Arc<AtomicU64>,
}

impl RunToken {
    /// Whether this run is still the most recently started one
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.id
    }

    /// Pass `value` through only if this run has not been superseded
    pub fn keep<T>(&self, value: T) -> Option<T> {
        self.is_current().then_some(value)
    }
}
