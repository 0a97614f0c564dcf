//! Campaign list and detail cache.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use records::query::ListQuery;
use records::{Campaign, CampaignId, Tweet};
use serde_json::Value;

use super::collection::Collection;

#[derive(Clone, Debug, Default)]
pub struct CampaignsState {
    pub list: Collection<Campaign>,
    /// Empty string means "all statuses".
    pub status_filter: String,
    pub page: u32,
    /// Campaign shown on `/campaigns/:id`.
    pub selected: Option<Campaign>,
    pub selected_tweets: Collection<Tweet>,
    pub selected_performance: Option<Value>,
}

impl CampaignsState {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.page.max(1)),
            status: Some(self.status_filter.clone()).filter(|s| !s.is_empty()),
            ..ListQuery::default()
        }
    }

    pub fn select(&mut self, campaign: Campaign) {
        if self.selected.as_ref().map(|c| c.id) != Some(campaign.id) {
            self.selected_tweets = Collection::default();
            self.selected_performance = None;
        }
        self.selected = Some(campaign);
    }

    /// Apply an updated record to both the list and the detail view.
    pub fn replace(&mut self, campaign: Campaign) {
        if self.selected.as_ref().is_some_and(|c| c.id == campaign.id) {
            self.selected = Some(campaign.clone());
        }
        self.list.replace(campaign);
    }

    pub fn remove(&mut self, id: CampaignId) {
        if self.selected.as_ref().is_some_and(|c| c.id == id) {
            self.selected = None;
            self.selected_tweets = Collection::default();
            self.selected_performance = None;
        }
        self.list.remove(id);
    }

    /// Look up a campaign name for display in tweet rows.
    pub fn name_of(&self, id: CampaignId) -> Option<String> {
        self.list
            .get(id)
            .or(self.selected.as_ref().filter(|c| c.id == id))
            .map(|c| c.name.clone())
    }
}
