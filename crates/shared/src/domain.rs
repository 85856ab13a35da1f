use std::{fmt, num::NonZeroU32, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ParseParameterError;

pub const DEFAULT_PAGE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => unreachable!(),
};

/// Page sizes offered by pagination widgets.
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

macro_rules! wire_enum {
    ($name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseParameterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    _ => Err(ParseParameterError::new(stringify!($name), s)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    #[default]
    Popular,
    Name,
}

wire_enum!(SortField {
    Popular => "popular",
    Name => "name",
});

impl SortField {
    pub fn label(self) -> &'static str {
        match self {
            SortField::Popular => "Popular",
            SortField::Name => "Name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

wire_enum!(SortOrder {
    Asc => "asc",
    Desc => "desc",
});

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

/// User-controlled inputs that drive each tag request.
///
/// `page_index` is zero-based; the remote service numbers pages from one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryParameters {
    pub page_index: u32,
    pub page_size: NonZeroU32,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
}

impl QueryParameters {
    /// One-based page number as sent on the wire.
    pub fn page_number(&self) -> u64 {
        u64::from(self.page_index) + 1
    }
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: SortField::default(),
            sort_order: SortOrder::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagRecord {
    pub name: String,
    pub count: u64,
}

impl TagRecord {
    pub fn new(name: impl Into<String>, count: u64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<TagRecord>),
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// True once the latest request has produced either items or a failure.
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchState::Success(_) | FetchState::Failure(_))
    }

    pub fn items(&self) -> Option<&[TagRecord]> {
        match self {
            FetchState::Success(items) => Some(items),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            FetchState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

/// What a rendering surface observes after every controller transition.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListSnapshot {
    pub parameters: QueryParameters,
    pub state: FetchState,
    /// Generation of the most recently issued request; zero before the first.
    pub generation: u64,
}
