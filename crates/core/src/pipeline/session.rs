use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Logical owner of at-most-one active pipeline run.
///
/// Clones share the same underlying flag, so every holder of the handle sees
/// the same Idle/Running state. Starting a run while one is active is a caller
/// error and is rejected rather than queued.
#[derive(Clone)]
pub struct TranscriptionSession {
    active: Arc<AtomicBool>,
}

impl TranscriptionSession {
    pub fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Claims the session for a run. Returns None while another run holds it;
    /// the returned guard releases the session when dropped, on every exit
    /// path.
    pub fn try_begin(&self) -> Option<ActiveRun> {
        self.active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| ActiveRun {
                active: self.active.clone(),
            })
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }
}

impl Default for TranscriptionSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard proving the session is claimed; dropping it returns the session to
/// Idle.
pub struct ActiveRun {
    active: Arc<AtomicBool>,
}

impl Drop for ActiveRun {
    fn drop(&mut self) {
        self.active.store(false, Ordering::SeqCst);
    }
}
