//! Tweet actions, including schedule/cancel/post-now transitions.

#[cfg(test)]
#[path = "tweets_test.rs"]
mod tweets_test;

use leptos::prelude::*;
use records::{
    AffiliateLinkId, ApiError, CampaignId, NewTweet, ScheduleTweet, Tweet, TweetId, TweetUpdate, validate,
};

use super::{reject, report, succeed};
use crate::net;
use crate::state::Stores;
use crate::state::tweets::overview_query;
use crate::util::format;

const INVALID_TIME: &str = "Enter a valid date and time.";

/// Composer contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TweetDraft {
    pub content: String,
    pub campaign_id: Option<CampaignId>,
    pub affiliate_link_id: Option<AffiliateLinkId>,
    /// Raw `datetime-local` value; empty means "save as draft".
    pub scheduled_local: String,
}

fn scheduled_time(local: &str) -> Result<Option<String>, &'static str> {
    if local.trim().is_empty() {
        return Ok(None);
    }
    format::to_backend(local).map(Some).ok_or(INVALID_TIME)
}

impl TweetDraft {
    pub(crate) fn to_new_tweet(&self) -> Result<NewTweet, &'static str> {
        Ok(NewTweet {
            content: validate::tweet_content(&self.content)?,
            campaign_id: self.campaign_id,
            affiliate_link_id: self.affiliate_link_id,
            scheduled_time: scheduled_time(&self.scheduled_local)?,
            media: Vec::new(),
            status: None,
        })
    }

    pub(crate) fn to_update(&self) -> Result<TweetUpdate, &'static str> {
        Ok(TweetUpdate {
            content: Some(validate::tweet_content(&self.content)?),
            affiliate_link_id: self.affiliate_link_id,
            scheduled_time: scheduled_time(&self.scheduled_local)?,
            media: None,
        })
    }
}

/// Apply a changed tweet wherever it is cached.
fn apply(stores: Stores, tweet: Tweet) {
    stores.campaigns.update(|c| c.selected_tweets.replace(tweet.clone()));
    stores.tweets.update(|t| {
        t.replace_recent(&tweet);
        t.list.replace(tweet);
    });
}

fn fail(stores: Stores, message: String) {
    stores.tweets.update(|t| t.list.fail(message));
}

pub async fn load(stores: Stores) {
    let query = stores.tweets.with_untracked(|t| t.query());
    stores.tweets.update(|t| t.list.begin_load());
    match net::tweets::list(&query).await {
        Ok(page) => stores.tweets.update(|t| t.list.loaded(page.tweets, page.pagination)),
        Err(err) => fail(stores, report(stores, &err)),
    }
}

/// Unfiltered latest tweets for the overview; failures only log.
pub async fn load_recent(stores: Stores) {
    match net::tweets::list(&overview_query()).await {
        Ok(page) => stores.tweets.update(|t| t.recent = page.tweets),
        Err(err) => leptos::logging::warn!("recent tweets unavailable: {err}"),
    }
}

/// Returns `true` when the tweet was created.
pub async fn create(stores: Stores, draft: TweetDraft) -> bool {
    let tweet = match draft.to_new_tweet() {
        Ok(tweet) => tweet,
        Err(msg) => {
            fail(stores, reject(stores, msg));
            return false;
        }
    };
    stores.tweets.update(|t| t.list.begin_save());
    match net::tweets::create(&tweet).await {
        Ok(envelope) => {
            let created = envelope.tweet;
            if stores.campaigns.with_untracked(|c| c.selected.as_ref().map(|s| s.id)) == created.campaign_id {
                stores.campaigns.update(|c| c.selected_tweets.prepend(created.clone()));
            }
            stores.tweets.update(|t| t.list.prepend(created));
            succeed(stores, envelope.message, "Tweet saved");
            true
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            false
        }
    }
}

pub async fn update(stores: Stores, id: TweetId, draft: TweetDraft) -> bool {
    let update = match draft.to_update() {
        Ok(update) => update,
        Err(msg) => {
            fail(stores, reject(stores, msg));
            return false;
        }
    };
    stores.tweets.update(|t| t.list.begin_save());
    match net::tweets::update(id, &update).await {
        Ok(envelope) => {
            apply(stores, envelope.tweet);
            succeed(stores, envelope.message, "Tweet updated");
            true
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            false
        }
    }
}

pub async fn delete(stores: Stores, id: TweetId) -> bool {
    stores.tweets.update(|t| t.list.begin_save());
    match net::tweets::delete(id).await {
        Ok(envelope) => {
            stores.campaigns.update(|c| c.selected_tweets.remove(id));
            stores.tweets.update(|t| t.list.remove(id));
            succeed(stores, envelope.message, "Tweet deleted");
            true
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            false
        }
    }
}

/// A failed post can still move the tweet to `failed` server-side, so the
/// tweet is re-read and applied after an error.
pub async fn post_now(stores: Stores, id: TweetId) {
    stores.tweets.update(|t| t.list.begin_save());
    match net::tweets::post_now(id).await {
        Ok(posted) => {
            apply(stores, posted.tweet);
            succeed(stores, posted.message, "Tweet posted");
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            if matches!(err, ApiError::Unauthorized) {
                return;
            }
            match net::tweets::get(id).await {
                Ok(tweet) => apply(stores, tweet),
                Err(refetch) => leptos::logging::warn!("tweet {id} refresh after failed post: {refetch}"),
            }
        }
    }
}

pub async fn schedule(stores: Stores, id: TweetId, local: String) -> bool {
    let scheduled_time = match scheduled_time(&local) {
        Ok(Some(time)) => time,
        Ok(None) | Err(_) => {
            fail(stores, reject(stores, INVALID_TIME));
            return false;
        }
    };
    stores.tweets.update(|t| t.list.begin_save());
    match net::tweets::schedule(id, &ScheduleTweet { scheduled_time }).await {
        Ok(envelope) => {
            apply(stores, envelope.tweet);
            succeed(stores, envelope.message, "Tweet scheduled");
            true
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            false
        }
    }
}

pub async fn cancel(stores: Stores, id: TweetId) {
    stores.tweets.update(|t| t.list.begin_save());
    match net::tweets::cancel(id).await {
        Ok(envelope) => {
            apply(stores, envelope.tweet);
            succeed(stores, envelope.message, "Schedule cancelled");
        }
        Err(err) => fail(stores, report(stores, &err)),
    }
}
