//! Paginated list cache shared by the campaign, tweet and link stores.
//!
//! DESIGN
//! ======
//! Every list screen follows the same lifecycle (load a page, mutate one
//! record, surface the last error), so the reducers live here once and the
//! resource stores wrap a `Collection<T>` with their own filters.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use records::{AffiliateLink, Campaign, Pagination, Tweet};

/// Records with a stable backend identifier.
pub trait Identified {
    fn key(&self) -> i64;
}

impl Identified for Campaign {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Identified for Tweet {
    fn key(&self) -> i64 {
        self.id
    }
}

impl Identified for AffiliateLink {
    fn key(&self) -> i64 {
        self.id
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Collection<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
    /// A page fetch is in flight.
    pub loading: bool,
    /// A create/update/delete is in flight.
    pub saving: bool,
    pub error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new(), pagination: None, loading: false, saving: false, error: None }
    }
}

impl<T: Identified> Collection<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<T>, pagination: Pagination) {
        self.items = items;
        self.pagination = Some(pagination);
        self.loading = false;
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.error = None;
    }

    /// Insert a newly created record at the top of the list.
    pub fn prepend(&mut self, item: T) {
        let key = item.key();
        self.items.retain(|existing| existing.key() != key);
        self.items.insert(0, item);
        if let Some(pagination) = self.pagination.as_mut() {
            pagination.total += 1;
        }
        self.saving = false;
    }

    /// Swap in an updated record; unknown ids are ignored.
    pub fn replace(&mut self, item: T) {
        let key = item.key();
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.key() == key) {
            *slot = item;
        }
        self.saving = false;
    }

    pub fn remove(&mut self, key: i64) {
        let before = self.items.len();
        self.items.retain(|existing| existing.key() != key);
        if self.items.len() < before {
            if let Some(pagination) = self.pagination.as_mut() {
                pagination.total = pagination.total.saturating_sub(1);
            }
        }
        self.saving = false;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.saving = false;
        self.error = Some(message);
    }

    pub fn get(&self, key: i64) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.as_ref().map_or(1, |p| p.page)
    }
}
