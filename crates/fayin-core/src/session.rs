/// Lifecycle of a results view between mount and its first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    WaitingForData,
    Ready,
}

/// What the caller should do with a query it just submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The dataset is available; run the search immediately.
    RunNow(String),
    /// Held until the dataset settles; replayed by `data_loaded`/`timed_out`.
    Queued,
}

/// Readiness state machine for the results view.
///
/// Searches submitted before the dataset has settled are queued, keeping
/// only the most recent one. The queued query is replayed exactly once,
/// either when the readiness signal arrives or when the wait times out;
/// the timeout path marks the session degraded so the view can surface an
/// error notice instead of hanging.
#[derive(Debug)]
pub struct SearchSession {
    state: SessionState,
    pending: Option<String>,
    degraded: bool,
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            pending: None,
            degraded: false,
        }
    }

    /// Enter the waiting phase. No-op once past Uninitialized.
    pub fn mount(&mut self) {
        if self.state == SessionState::Uninitialized {
            self.state = SessionState::WaitingForData;
        }
    }

    /// Submit a query. Before Ready it replaces any earlier pending query.
    pub fn submit(&mut self, query: impl Into<String>) -> Submission {
        match self.state {
            SessionState::Ready => Submission::RunNow(query.into()),
            _ => {
                self.pending = Some(query.into());
                Submission::Queued
            }
        }
    }

    /// Readiness signal arrived; returns the query to replay, if any.
    pub fn data_loaded(&mut self) -> Option<String> {
        if self.state == SessionState::Ready {
            return None;
        }
        self.state = SessionState::Ready;
        self.pending.take()
    }

    /// The wait timed out; enter Ready in degraded form and replay.
    pub fn timed_out(&mut self) -> Option<String> {
        if self.state == SessionState::Ready {
            return None;
        }
        self.state = SessionState::Ready;
        self.degraded = true;
        self.pending.take()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
