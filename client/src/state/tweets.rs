//! Tweet list cache and filters for `/tweets`.

#[cfg(test)]
#[path = "tweets_test.rs"]
mod tweets_test;

use records::CampaignId;
use records::query::ListQuery;
use records::Tweet;

use super::collection::Collection;

#[derive(Clone, Debug, Default)]
pub struct TweetsState {
    pub list: Collection<Tweet>,
    /// Empty string means "all statuses".
    pub status_filter: String,
    pub campaign_filter: Option<CampaignId>,
    pub page: u32,
    /// Latest tweets for the overview, fetched without the page filters.
    pub recent: Vec<Tweet>,
}

/// Tweets loaded for the overview's recent and upcoming panels.
pub const OVERVIEW_PAGE_SIZE: u32 = 20;

/// First page of all tweets, independent of the `/tweets` filters.
pub fn overview_query() -> ListQuery {
    ListQuery { page: Some(1), per_page: Some(OVERVIEW_PAGE_SIZE), status: None, campaign_id: None }
}

impl TweetsState {
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: Some(self.page.max(1)),
            per_page: None,
            status: Some(self.status_filter.clone()).filter(|s| !s.is_empty()),
            campaign_id: self.campaign_filter,
        }
    }

    /// Swap a changed tweet into the overview cache.
    pub fn replace_recent(&mut self, tweet: &Tweet) {
        if let Some(slot) = self.recent.iter_mut().find(|t| t.id == tweet.id) {
            slot.clone_from(tweet);
        }
    }

    /// Next scheduled tweets from the overview cache, soonest first.
    pub fn upcoming(&self, limit: usize) -> Vec<Tweet> {
        let mut scheduled: Vec<Tweet> = self
            .recent
            .iter()
            .filter(|t| t.status.can_cancel() && t.scheduled_time.is_some())
            .cloned()
            .collect();
        scheduled.sort_by(|a, b| a.scheduled_time.cmp(&b.scheduled_time));
        scheduled.truncate(limit);
        scheduled
    }
}
