//! Backend commands queued from UI to backend worker.

use std::num::NonZeroU32;

use client_core::ListCommand;
use shared::domain::{SortField, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendCommand {
    SetPageIndex { page_index: u32 },
    SetPageSize { page_size: NonZeroU32 },
    SetSortField { sort_field: SortField },
    SetSortOrder { sort_order: SortOrder },
    Retry,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        self.list_command().name()
    }

    pub fn list_command(self) -> ListCommand {
        match self {
            BackendCommand::SetPageIndex { page_index } => ListCommand::SetPageIndex(page_index),
            BackendCommand::SetPageSize { page_size } => ListCommand::SetPageSize(page_size),
            BackendCommand::SetSortField { sort_field } => ListCommand::SetSortField(sort_field),
            BackendCommand::SetSortOrder { sort_order } => ListCommand::SetSortOrder(sort_order),
            BackendCommand::Retry => ListCommand::Retry,
        }
    }
}
