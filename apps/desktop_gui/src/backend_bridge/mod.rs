//! Bridge between the egui thread and the tokio worker that drives the tag list.

pub mod commands;
pub mod runtime;
