//! Events flowing from the backend worker to the UI thread.

use shared::domain::ListSnapshot;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    BackendReady,
    Snapshot(ListSnapshot),
    /// The worker could not start or lost its driver. Carries operator detail
    /// for the log; the UI shows a generic banner.
    BackendFailed(String),
}
