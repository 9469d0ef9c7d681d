//! Pagination types and traits
//!
//! Defines the abstractions shared by every pager: a page of results that
//! may carry a continuation cursor, and a list operation whose `start`
//! parameter the pager controls.

use crate::operation::Operation;
use serde::de::DeserializeOwned;

/// A page returned by a list operation
pub trait Page: DeserializeOwned {
    /// Element type of the page
    type Item;

    /// Cursor of the following page; `None` when this is the last page
    fn next_start(&self) -> Option<String>;

    /// Consume the page, yielding its items in server order
    fn into_items(self) -> Vec<Self::Item>;
}

/// A list operation driven by an opaque `start` cursor
pub trait ListOperation: Operation + Clone {
    /// Current cursor
    fn start(&self) -> Option<&str>;

    /// Replace the cursor
    fn set_start(&mut self, start: Option<String>);
}

/// Progress of a pager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    /// Cursor for the next request; `None` requests the first page
    pub cursor: Option<String>,
    /// Pages received so far
    pub pages_fetched: usize,
    /// Items received so far
    pub total_fetched: usize,
    /// Whether more pages may exist
    pub has_next: bool,
}

impl PaginationState {
    /// Create a state positioned before the first page
    pub fn new() -> Self {
        Self {
            cursor: None,
            pages_fetched: 0,
            total_fetched: 0,
            has_next: true,
        }
    }

    /// Record a received page
    pub fn record_page(&mut self, items: usize, next: Option<String>) {
        self.pages_fetched += 1;
        self.total_fetched += items;
        self.has_next = next.is_some();
        self.cursor = next;
    }

    /// Mark pagination as exhausted
    pub fn finish(&mut self) {
        self.cursor = None;
        self.has_next = false;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::new()
    }
}
