//! Client side of the tags explorer: the remote tag service, the list
//! controller state machine and the async driver that ties them together.

pub mod config;
pub mod controller;
pub mod error;
pub mod runtime;
pub mod service;

pub use config::{load_settings, Settings};
pub use controller::{FetchTicket, RemoteListController};
pub use error::ClientError;
pub use runtime::{spawn_remote_list, ListCommand, RemoteListHandle};
pub use service::{HttpTagService, TagService};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
