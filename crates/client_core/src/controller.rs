//! Pagination/sort state machine for the remote tag list.
//!
//! The controller never performs I/O. Setters hand back a [`FetchTicket`]
//! describing the request the caller must issue, and completions come back
//! through [`RemoteListController::settle`], which applies a result only when
//! it belongs to the most recently issued request.

use std::num::NonZeroU32;

use shared::{
    domain::{FetchState, ListSnapshot, QueryParameters, SortField, SortOrder, TagRecord},
    error::{FetchError, USER_FAILURE_MESSAGE},
};
use tracing::{debug, error};

/// A request the caller must run and later report back via `settle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub parameters: QueryParameters,
}

#[derive(Debug, Clone)]
pub struct RemoteListController {
    parameters: QueryParameters,
    state: FetchState,
    issued_generation: u64,
}

impl RemoteListController {
    pub fn new(parameters: QueryParameters) -> Self {
        Self {
            parameters,
            state: FetchState::Idle,
            issued_generation: 0,
        }
    }

    pub fn parameters(&self) -> QueryParameters {
        self.parameters
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn issued_generation(&self) -> u64 {
        self.issued_generation
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            parameters: self.parameters,
            state: self.state.clone(),
            generation: self.issued_generation,
        }
    }

    pub fn set_page_index(&mut self, page_index: u32) -> Option<FetchTicket> {
        if self.parameters.page_index == page_index {
            return None;
        }
        self.parameters.page_index = page_index;
        Some(self.fetch())
    }

    /// Changing the page size returns to the first page so the user is never
    /// left past the end of a shorter listing.
    pub fn set_page_size(&mut self, page_size: NonZeroU32) -> Option<FetchTicket> {
        if self.parameters.page_size == page_size {
            return None;
        }
        self.parameters.page_size = page_size;
        self.parameters.page_index = 0;
        Some(self.fetch())
    }

    pub fn set_sort_field(&mut self, sort_field: SortField) -> Option<FetchTicket> {
        if self.parameters.sort_field == sort_field {
            return None;
        }
        self.parameters.sort_field = sort_field;
        Some(self.fetch())
    }

    pub fn set_sort_order(&mut self, sort_order: SortOrder) -> Option<FetchTicket> {
        if self.parameters.sort_order == sort_order {
            return None;
        }
        self.parameters.sort_order = sort_order;
        Some(self.fetch())
    }

    /// Enters `Loading` and issues a new generation for the current parameters.
    pub fn fetch(&mut self) -> FetchTicket {
        self.issued_generation += 1;
        self.state = FetchState::Loading;
        debug!(
            generation = self.issued_generation,
            page = self.parameters.page_number(),
            page_size = self.parameters.page_size.get(),
            sort = self.parameters.sort_field.as_str(),
            order = self.parameters.sort_order.as_str(),
            "issuing tag request"
        );
        FetchTicket {
            generation: self.issued_generation,
            parameters: self.parameters,
        }
    }

    /// Applies a completed request. Returns `false` when the outcome was
    /// superseded by a later request and therefore discarded.
    pub fn settle(
        &mut self,
        generation: u64,
        outcome: Result<Vec<TagRecord>, FetchError>,
    ) -> bool {
        if generation != self.issued_generation {
            debug!(
                generation,
                latest = self.issued_generation,
                "discarding superseded tag response"
            );
            return false;
        }

        self.state = match outcome {
            Ok(items) => {
                debug!(generation, items = items.len(), "tag request succeeded");
                FetchState::Success(items)
            }
            Err(err) => {
                error!(
                    generation,
                    kind = err.kind().as_str(),
                    error = %err,
                    "failed to fetch tags"
                );
                FetchState::Failure(USER_FAILURE_MESSAGE.to_string())
            }
        };
        true
    }
}

impl Default for RemoteListController {
    fn default() -> Self {
        Self::new(QueryParameters::default())
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
