//! Async driver that owns a [`RemoteListController`] and runs its fetches.
//!
//! Setters publish [`ListCommand`]s on a single-writer channel. The driver
//! task applies them in order, spawns one service call per issued ticket and
//! feeds completions back into the controller, which rejects any response
//! that is not from the latest generation. Each visible transition is
//! published on a `watch` channel.

use std::{num::NonZeroU32, sync::Arc};

use shared::{
    domain::{ListSnapshot, QueryParameters, SortField, SortOrder, TagRecord},
    error::FetchError,
};
use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
};
use tracing::{debug, info};

use crate::{
    controller::{FetchTicket, RemoteListController},
    error::ClientError,
    service::TagService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListCommand {
    SetPageIndex(u32),
    SetPageSize(NonZeroU32),
    SetSortField(SortField),
    SetSortOrder(SortOrder),
    Retry,
}

impl ListCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ListCommand::SetPageIndex(_) => "set_page_index",
            ListCommand::SetPageSize(_) => "set_page_size",
            ListCommand::SetSortField(_) => "set_sort_field",
            ListCommand::SetSortOrder(_) => "set_sort_order",
            ListCommand::Retry => "retry",
        }
    }

    fn apply(self, controller: &mut RemoteListController) -> Option<FetchTicket> {
        match self {
            ListCommand::SetPageIndex(n) => controller.set_page_index(n),
            ListCommand::SetPageSize(n) => controller.set_page_size(n),
            ListCommand::SetSortField(f) => controller.set_sort_field(f),
            ListCommand::SetSortOrder(o) => controller.set_sort_order(o),
            ListCommand::Retry => Some(controller.fetch()),
        }
    }
}

/// Cloneable front end of a running tag list driver.
#[derive(Clone)]
pub struct RemoteListHandle {
    commands: mpsc::UnboundedSender<ListCommand>,
    snapshots: watch::Receiver<ListSnapshot>,
}

impl RemoteListHandle {
    pub fn set_page_index(&self, page_index: u32) -> Result<(), ClientError> {
        self.send(ListCommand::SetPageIndex(page_index))
    }

    pub fn set_page_size(&self, page_size: NonZeroU32) -> Result<(), ClientError> {
        self.send(ListCommand::SetPageSize(page_size))
    }

    pub fn set_sort_field(&self, sort_field: SortField) -> Result<(), ClientError> {
        self.send(ListCommand::SetSortField(sort_field))
    }

    pub fn set_sort_order(&self, sort_order: SortOrder) -> Result<(), ClientError> {
        self.send(ListCommand::SetSortOrder(sort_order))
    }

    /// Re-issues the current parameters, e.g. after a failure.
    pub fn retry(&self) -> Result<(), ClientError> {
        self.send(ListCommand::Retry)
    }

    pub fn send(&self, command: ListCommand) -> Result<(), ClientError> {
        self.commands
            .send(command)
            .map_err(|_| ClientError::Closed)
    }

    pub fn snapshot(&self) -> ListSnapshot {
        self.snapshots.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ListSnapshot> {
        self.snapshots.clone()
    }
}

/// Starts the driver on the current tokio runtime and issues the initial
/// fetch. The driver stops once every handle has been dropped.
pub fn spawn_remote_list(
    service: Arc<dyn TagService>,
    initial: QueryParameters,
) -> (RemoteListHandle, JoinHandle<()>) {
    let controller = RemoteListController::new(initial);
    let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let task = tokio::spawn(drive(controller, service, command_rx, snapshot_tx));
    (
        RemoteListHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
        },
        task,
    )
}

type Completion = (u64, Result<Vec<TagRecord>, FetchError>);

async fn drive(
    mut controller: RemoteListController,
    service: Arc<dyn TagService>,
    mut commands: mpsc::UnboundedReceiver<ListCommand>,
    snapshots: watch::Sender<ListSnapshot>,
) {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();

    let initial = controller.fetch();
    snapshots.send_replace(controller.snapshot());
    launch(&service, &done_tx, initial);

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                debug!(command = command.name(), "applying list command");
                if let Some(ticket) = command.apply(&mut controller) {
                    snapshots.send_replace(controller.snapshot());
                    launch(&service, &done_tx, ticket);
                }
            }
            Some((generation, outcome)) = done_rx.recv() => {
                if controller.settle(generation, outcome) {
                    snapshots.send_replace(controller.snapshot());
                }
            }
        }
    }

    info!("tag list driver stopped");
}

fn launch(
    service: &Arc<dyn TagService>,
    done: &mpsc::UnboundedSender<Completion>,
    ticket: FetchTicket,
) {
    let service = Arc::clone(service);
    let done = done.clone();
    tokio::spawn(async move {
        let outcome = service.fetch_tags(&ticket.parameters).await;
        // The driver may already be gone; nothing left to update then.
        let _ = done.send((ticket.generation, outcome));
    });
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
