//! Affiliate link actions.

#[cfg(test)]
#[path = "affiliate_links_test.rs"]
mod affiliate_links_test;

use leptos::prelude::*;
use records::query::{LinkSearchQuery, PeriodQuery};
use records::{AffiliateLinkId, NewAffiliateLink, validate};

use super::{reject, report, succeed};
use crate::net;
use crate::state::Stores;

/// Link form contents as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkDraft {
    pub original_url: String,
    pub product_name: String,
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub commission_rate: String,
    pub category: String,
}

impl LinkDraft {
    pub(crate) fn to_new_link(&self) -> Result<NewAffiliateLink, &'static str> {
        Ok(NewAffiliateLink {
            original_url: validate::link_url(&self.original_url)?,
            product_name: validate::product_name(&self.product_name)?,
            commission_rate: validate::commission_rate(&self.commission_rate)?,
            category: validate::optional(&self.category),
            utm_source: validate::optional(&self.utm_source),
            utm_medium: validate::optional(&self.utm_medium),
            utm_campaign: validate::optional(&self.utm_campaign),
        })
    }
}

fn fail(stores: Stores, message: String) {
    stores.links.update(|l| l.list.fail(message));
}

pub async fn load(stores: Stores) {
    let query = stores.links.with_untracked(|l| l.query());
    stores.links.update(|l| l.list.begin_load());
    match net::affiliate_links::list(&query).await {
        Ok(page) => stores.links.update(|l| l.list.loaded(page.affiliate_links, page.pagination)),
        Err(err) => fail(stores, report(stores, &err)),
    }
}

/// Returns `true` when the link was created.
pub async fn create(stores: Stores, draft: LinkDraft) -> bool {
    let link = match draft.to_new_link() {
        Ok(link) => link,
        Err(msg) => {
            fail(stores, reject(stores, msg));
            return false;
        }
    };
    stores.links.update(|l| l.list.begin_save());
    match net::affiliate_links::create(&link).await {
        Ok(envelope) => {
            stores.links.update(|l| l.list.prepend(envelope.affiliate_link));
            succeed(stores, envelope.message, "Affiliate link created");
            true
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            false
        }
    }
}

pub async fn delete(stores: Stores, id: AffiliateLinkId) -> bool {
    stores.links.update(|l| l.list.begin_save());
    match net::affiliate_links::delete(id).await {
        Ok(envelope) => {
            stores.links.update(|l| l.list.remove(id));
            succeed(stores, envelope.message, "Affiliate link deleted");
            true
        }
        Err(err) => {
            fail(stores, report(stores, &err));
            false
        }
    }
}

pub async fn toggle_status(stores: Stores, id: AffiliateLinkId) {
    stores.links.update(|l| l.list.begin_save());
    match net::affiliate_links::toggle_status(id).await {
        Ok(envelope) => {
            let fallback = if envelope.affiliate_link.is_active { "Link activated" } else { "Link deactivated" };
            stores.links.update(|l| l.list.replace(envelope.affiliate_link));
            succeed(stores, envelope.message, fallback);
        }
        Err(err) => fail(stores, report(stores, &err)),
    }
}

/// Open the stats panel for one link.
pub async fn load_performance(stores: Stores, id: AffiliateLinkId, days: u32) {
    match net::affiliate_links::performance(id, PeriodQuery { days }).await {
        Ok(performance) => stores.links.update(|l| l.performance = Some(performance)),
        Err(err) => {
            report(stores, &err);
        }
    }
}

/// Category suggestions for the create form; failures only log.
pub async fn load_categories(stores: Stores) {
    match net::affiliate_links::categories().await {
        Ok(body) => stores.links.update(|l| l.categories = body.categories),
        Err(err) => leptos::logging::warn!("link categories unavailable: {err}"),
    }
}

/// Catalog search by text and minimum commission, as typed.
pub async fn search_catalog(stores: Stores, text: String, min_commission: String) {
    let min_commission = if min_commission.trim().is_empty() {
        None
    } else {
        match validate::commission_rate(&min_commission) {
            Ok(rate) => Some(rate),
            Err(msg) => {
                reject(stores, msg);
                return;
            }
        }
    };
    let query = LinkSearchQuery { text: Some(text), min_commission, ..LinkSearchQuery::default() };
    match net::affiliate_links::search(&query).await {
        Ok(results) => stores.links.update(|l| l.catalog = Some(results)),
        Err(err) => {
            report(stores, &err);
        }
    }
}
