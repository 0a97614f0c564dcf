//! Affiliate link cache and filters.

#[cfg(test)]
#[path = "affiliate_links_test.rs"]
mod affiliate_links_test;

use records::query::AffiliateLinkQuery;
use records::{AffiliateLink, LinkPerformance, LinkSearchResults};

use super::collection::Collection;

#[derive(Clone, Debug, Default)]
pub struct AffiliateLinksState {
    pub list: Collection<AffiliateLink>,
    pub search: String,
    pub active_only: bool,
    pub page: u32,
    /// Stats panel for the link picked in the table.
    pub performance: Option<LinkPerformance>,
    pub categories: Vec<String>,
    /// Commission-ordered catalog search results.
    pub catalog: Option<LinkSearchResults>,
}

impl AffiliateLinksState {
    pub fn query(&self) -> AffiliateLinkQuery {
        AffiliateLinkQuery {
            page: Some(self.page.max(1)),
            per_page: None,
            search: Some(self.search.clone()),
            active_only: self.active_only.then_some(true),
        }
    }

    /// Links offered when attaching a link to a tweet.
    pub fn active(&self) -> Vec<AffiliateLink> {
        self.list.items.iter().filter(|l| l.is_active).cloned().collect()
    }
}
