use crate::{SortDirection, SortKey};

use ud_core::Role;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Client-only view state. Derived page content is rebuilt from this plus
/// the base record set on every input change; the state itself survives
/// refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableViewState {
    pub search_text: String,
    pub role_filter: Option<Role>,
    /// Active sort column and direction; None = server fetch order.
    pub sort: Option<(SortKey, SortDirection)>,
    pub page_size: usize,
    pub current_page: usize,
}

impl TableViewState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            role_filter: None,
            sort: None,
            page_size: DEFAULT_PAGE_SIZE,
            current_page: 1,
        }
    }
}
