//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::reducer::ListViewModel;

/// A full queue is transient and only sets `view.notice`; a disconnected
/// backend sets the sticky `view.status` banner.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    view: &mut ListViewModel,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue full");
            view.notice = Some("UI command queue is full; please retry".to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            view.status = Some(
                "Backend command processor disconnected; restart the application".to_string(),
            );
        }
    }
}
