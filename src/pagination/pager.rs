//! Cursor pager
//!
//! Walks a list operation page by page by echoing each page's `next.start`
//! back as the `start` query parameter of the following request.

use super::types::{ListOperation, Page, PaginationState};
use crate::error::{Error, Result};
use crate::service::IamPolicyManagement;
use futures::stream::{self, Stream};
use tracing::debug;

/// Items of the page type produced by a list operation
pub type PageItem<O> = <<O as crate::operation::Operation>::Output as Page>::Item;

/// Pager over one list operation
#[derive(Debug, Clone)]
pub struct Pager<O> {
    client: IamPolicyManagement,
    options: O,
    state: PaginationState,
}

impl<O> Pager<O>
where
    O: ListOperation,
    O::Output: Page,
{
    /// Create a pager from a copy of `options`.
    ///
    /// Fails when `options` already carries a non-empty `start` cursor.
    pub fn new(client: &IamPolicyManagement, options: &O) -> Result<Self> {
        if options.start().is_some_and(|s| !s.is_empty()) {
            return Err(Error::invalid_field(
                "start",
                "the 'start' field should not be set when creating a pager",
            ));
        }
        Ok(Self {
            client: client.clone(),
            options: options.clone(),
            state: PaginationState::new(),
        })
    }

    /// Whether another page may be fetched
    pub fn has_next(&self) -> bool {
        self.state.has_next
    }

    /// Pagination progress
    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    /// Fetch the next page.
    ///
    /// Once exhausted this returns an empty page without calling the service.
    /// A successful response without a body ends pagination.
    pub async fn get_next(&mut self) -> Result<Vec<PageItem<O>>> {
        if !self.state.has_next {
            return Ok(Vec::new());
        }

        self.options.set_start(self.state.cursor.clone());
        let response = self.client.execute(&self.options).await?;

        let Some(page) = response.result else {
            self.state.finish();
            return Ok(Vec::new());
        };

        let next = page.next_start();
        let items = page.into_items();
        self.state.record_page(items.len(), next);
        debug!(
            "Fetched page {} ({} items, has_next={})",
            self.state.pages_fetched,
            items.len(),
            self.state.has_next
        );
        Ok(items)
    }

    /// Fetch every remaining page and concatenate the items in order.
    ///
    /// Any failed page aborts the walk and discards what was collected.
    pub async fn get_all(&mut self) -> Result<Vec<PageItem<O>>> {
        let mut all = Vec::new();
        while self.has_next() {
            let page = self.get_next().await?;
            all.extend(page);
        }
        Ok(all)
    }

    /// Turn the pager into a stream of pages
    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<PageItem<O>>>> {
        stream::try_unfold(self, |mut pager| async move {
            if !pager.has_next() {
                return Ok(None);
            }
            let page = pager.get_next().await?;
            Ok::<_, Error>(Some((page, pager)))
        })
    }
}
