//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{spawn_remote_list, HttpTagService, Settings};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

/// Spawns the backend worker thread. It owns a tokio runtime running the tag
/// list driver, forwards UI commands to it and streams snapshots back.
pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let service = match HttpTagService::from_settings(&settings) {
            Ok(service) => service,
            Err(err) => {
                tracing::error!("failed to build tag service: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(format!(
                    "backend worker startup failure: {err}"
                )));
                return;
            }
        };

        let handle = runtime.block_on(async {
            let (handle, _driver) =
                spawn_remote_list(Arc::new(service), settings.initial_parameters());
            handle
        });
        tracing::info!(
            base_url = %settings.api_base_url,
            site = %settings.site,
            "backend worker ready"
        );
        let _ = ui_tx.try_send(UiEvent::BackendReady);

        let mut snapshots = handle.subscribe();
        let snapshot_tx = ui_tx.clone();
        runtime.spawn(async move {
            loop {
                let snapshot = snapshots.borrow_and_update().clone();
                if snapshot_tx.send(UiEvent::Snapshot(snapshot)).is_err() {
                    break;
                }
                if snapshots.changed().await.is_err() {
                    break;
                }
            }
        });

        while let Ok(cmd) = cmd_rx.recv() {
            if let Err(err) = handle.send(cmd.list_command()) {
                tracing::error!(command = cmd.name(), "tag list driver unavailable: {err}");
                let _ = ui_tx.try_send(UiEvent::BackendFailed(err.to_string()));
                break;
            }
        }

        tracing::info!("backend worker shutting down");
        drop(handle);
        runtime.shutdown_background();
    });
}
