//! Folds backend events into the state the UI renders from.

use shared::domain::{FetchState, ListSnapshot};

use crate::controller::events::UiEvent;

const BACKEND_FAILURE_BANNER: &str = "Tag service unavailable. Restart the application.";

#[derive(Debug, Clone, Default)]
pub struct ListViewModel {
    pub snapshot: ListSnapshot,
    pub backend_ready: bool,
    /// Sticky banner for a backend that is gone for good.
    pub status: Option<String>,
    /// Transient dispatch notice; cleared by the next snapshot.
    pub notice: Option<String>,
}

impl ListViewModel {
    pub fn apply(&mut self, event: UiEvent) {
        match event {
            UiEvent::BackendReady => {
                self.backend_ready = true;
                self.status = None;
            }
            UiEvent::Snapshot(snapshot) => {
                // Snapshots from an older generation never replace newer ones.
                if snapshot.generation >= self.snapshot.generation {
                    self.snapshot = snapshot;
                }
                self.notice = None;
            }
            UiEvent::BackendFailed(detail) => {
                tracing::error!("backend failure: {detail}");
                self.backend_ready = false;
                self.status = Some(BACKEND_FAILURE_BANNER.to_string());
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.snapshot.state, FetchState::Idle | FetchState::Loading)
            && self.status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend_bridge::commands::BackendCommand;
    use crate::controller::orchestration::dispatch_backend_command;
    use crossbeam_channel::bounded;
    use shared::domain::{QueryParameters, TagRecord};

    fn snapshot(generation: u64, state: FetchState) -> ListSnapshot {
        ListSnapshot {
            parameters: QueryParameters::default(),
            state,
            generation,
        }
    }

    #[test]
    fn starts_loading_until_first_snapshot_settles() {
        let mut view = ListViewModel::default();
        assert!(view.is_loading());

        view.apply(UiEvent::BackendReady);
        view.apply(UiEvent::Snapshot(snapshot(1, FetchState::Loading)));
        assert!(view.is_loading());

        view.apply(UiEvent::Snapshot(snapshot(
            1,
            FetchState::Success(vec![TagRecord::new("rust", 1)]),
        )));
        assert!(!view.is_loading());
        assert_eq!(view.snapshot.state.items().map(<[_]>::len), Some(1));
    }

    #[test]
    fn ignores_snapshots_from_older_generations() {
        let mut view = ListViewModel::default();
        view.apply(UiEvent::Snapshot(snapshot(3, FetchState::Loading)));
        view.apply(UiEvent::Snapshot(snapshot(2, FetchState::Success(Vec::new()))));
        assert_eq!(view.snapshot.generation, 3);
        assert_eq!(view.snapshot.state, FetchState::Loading);
    }

    #[test]
    fn backend_failure_shows_generic_banner() {
        let mut view = ListViewModel::default();
        view.apply(UiEvent::BackendReady);
        view.apply(UiEvent::BackendFailed(
            "failed to build HTTP client: tls backend".into(),
        ));
        assert!(!view.backend_ready);
        assert_eq!(view.status.as_deref(), Some(BACKEND_FAILURE_BANNER));
        assert!(!view.is_loading());
    }

    #[test]
    fn full_queue_notice_clears_on_next_snapshot() {
        let mut view = ListViewModel::default();
        view.apply(UiEvent::BackendReady);
        view.apply(UiEvent::Snapshot(snapshot(1, FetchState::Success(Vec::new()))));

        let (tx, rx) = bounded(1);
        dispatch_backend_command(&tx, BackendCommand::Retry, &mut view);
        dispatch_backend_command(&tx, BackendCommand::SetPageIndex { page_index: 1 }, &mut view);
        assert!(view.notice.as_deref().is_some_and(|n| n.contains("full")));
        assert!(view.status.is_none());

        assert_eq!(rx.try_recv().expect("queued"), BackendCommand::Retry);
        view.apply(UiEvent::Snapshot(snapshot(
            2,
            FetchState::Success(vec![TagRecord::new("rust", 1)]),
        )));
        assert!(view.notice.is_none());
        assert!(view.status.is_none());
        assert_eq!(view.snapshot.generation, 2);
    }

    #[test]
    fn backend_failure_banner_survives_snapshots() {
        let mut view = ListViewModel::default();
        view.apply(UiEvent::BackendFailed("worker thread panicked".into()));
        view.apply(UiEvent::Snapshot(snapshot(1, FetchState::Loading)));
        assert_eq!(view.status.as_deref(), Some(BACKEND_FAILURE_BANNER));
    }
}
