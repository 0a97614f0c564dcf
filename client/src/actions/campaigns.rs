//! Campaign actions.

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod campaigns_test;

use leptos::prelude::*;
use records::query::ListQuery;
use records::{CampaignId, CampaignStatus, CampaignUpdate, NewCampaign, validate};

use super::{reject, report, succeed};
use crate::net;
use crate::state::Stores;

pub async fn load(stores: Stores) {
    let query = stores.campaigns.with_untracked(|c| c.query());
    stores.campaigns.update(|c| c.list.begin_load());
    match net::campaigns::list(&query).await {
        Ok(page) => stores.campaigns.update(|c| c.list.loaded(page.campaigns, page.pagination)),
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.list.fail(message));
        }
    }
}

/// Load one campaign with its tweets and performance report.
pub async fn load_one(stores: Stores, id: CampaignId) {
    stores.campaigns.update(|c| c.selected_tweets.begin_load());
    let campaign = match net::campaigns::get(id).await {
        Ok(campaign) => campaign,
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.selected_tweets.fail(message));
            return;
        }
    };
    stores.campaigns.update(|c| c.select(campaign));

    let query = ListQuery::default();
    let (tweets, performance) =
        futures::join!(net::campaigns::tweets(id, &query), net::campaigns::performance(id));
    match tweets {
        Ok(page) => stores.campaigns.update(|c| c.selected_tweets.loaded(page.tweets, page.pagination)),
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.selected_tweets.fail(message));
        }
    }
    match performance {
        Ok(value) => stores.campaigns.update(|c| c.selected_performance = Some(value)),
        Err(err) => leptos::logging::warn!("campaign performance unavailable: {err}"),
    }
}

/// Returns `true` when the campaign was created.
pub async fn create(stores: Stores, name: String, niche: String, description: String, status: CampaignStatus) -> bool {
    let name = match validate::campaign_name(&name) {
        Ok(name) => name,
        Err(msg) => {
            let message = reject(stores, msg);
            stores.campaigns.update(|c| c.list.fail(message));
            return false;
        }
    };
    let campaign = NewCampaign {
        name,
        description: description.trim().to_owned(),
        niche: validate::optional(&niche),
        status: Some(status),
        schedule: None,
    };
    stores.campaigns.update(|c| c.list.begin_save());
    match net::campaigns::create(&campaign).await {
        Ok(envelope) => {
            stores.campaigns.update(|c| c.list.prepend(envelope.campaign));
            succeed(stores, envelope.message, "Campaign created");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.list.fail(message));
            false
        }
    }
}

pub async fn update(stores: Stores, id: CampaignId, update: CampaignUpdate) -> bool {
    if let Some(name) = update.name.as_deref() {
        if let Err(msg) = validate::campaign_name(name) {
            let message = reject(stores, msg);
            stores.campaigns.update(|c| c.list.fail(message));
            return false;
        }
    }
    stores.campaigns.update(|c| c.list.begin_save());
    match net::campaigns::update(id, &update).await {
        Ok(envelope) => {
            stores.campaigns.update(|c| c.replace(envelope.campaign));
            succeed(stores, envelope.message, "Campaign updated");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.list.fail(message));
            false
        }
    }
}

pub async fn delete(stores: Stores, id: CampaignId) -> bool {
    stores.campaigns.update(|c| c.list.begin_save());
    match net::campaigns::delete(id).await {
        Ok(envelope) => {
            stores.campaigns.update(|c| c.remove(id));
            succeed(stores, envelope.message, "Campaign deleted");
            true
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.list.fail(message));
            false
        }
    }
}

pub async fn activate(stores: Stores, id: CampaignId) {
    stores.campaigns.update(|c| c.list.begin_save());
    match net::campaigns::activate(id).await {
        Ok(envelope) => {
            stores.campaigns.update(|c| c.replace(envelope.campaign));
            succeed(stores, envelope.message, "Campaign activated");
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.list.fail(message));
        }
    }
}

pub async fn pause(stores: Stores, id: CampaignId) {
    stores.campaigns.update(|c| c.list.begin_save());
    match net::campaigns::pause(id).await {
        Ok(envelope) => {
            stores.campaigns.update(|c| c.replace(envelope.campaign));
            succeed(stores, envelope.message, "Campaign paused");
        }
        Err(err) => {
            let message = report(stores, &err);
            stores.campaigns.update(|c| c.list.fail(message));
        }
    }
}
