//! Analytics loading.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;
use records::query::{
    AffiliatePerformanceQuery, CampaignPerformanceQuery, CompareQuery, PeriodQuery, ReportQuery, TopTweetsQuery,
    TrendsQuery,
};
use records::ExportRequest;

use super::{reject, report, succeed};
use crate::net;
use crate::state::Stores;
use crate::state::analytics::export_count;

/// Fetch dashboard stats, trends and top tweets for `days` in parallel.
pub async fn load(stores: Stores, days: u32) {
    let granularity = stores.analytics.with_untracked(|a| a.granularity);
    stores.analytics.update(|a| {
        a.set_days(days);
        a.begin_load();
    });
    let period = PeriodQuery { days };
    let (dashboard, trends, top) = futures::join!(
        net::analytics::dashboard(period),
        net::analytics::engagement_trends(TrendsQuery { period, granularity }),
        net::analytics::top_tweets(TopTweetsQuery { period, ..TopTweetsQuery::default() }),
    );
    match (dashboard, trends, top) {
        (Ok(dashboard), Ok(trends), Ok(top)) => {
            stores.analytics.update(|a| a.loaded(dashboard, trends.trends, top));
        }
        (Err(err), _, _) | (_, Err(err), _) | (_, _, Err(err)) => {
            let message = report(stores, &err);
            stores.analytics.update(|a| a.fail(message));
        }
    }
    load_breakdowns(stores, days).await;
}

/// Campaign and affiliate-link breakdowns; each failure only logs.
pub async fn load_breakdowns(stores: Stores, days: u32) {
    let period = PeriodQuery { days };
    let (campaigns, links) = futures::join!(
        net::analytics::campaign_performance(CampaignPerformanceQuery { period, campaign_id: None }),
        net::analytics::affiliate_performance(AffiliatePerformanceQuery { period, affiliate_link_id: None }),
    );
    match campaigns {
        Ok(value) => stores.analytics.update(|a| a.campaign_breakdown = Some(value)),
        Err(err) => leptos::logging::warn!("campaign breakdown unavailable: {err}"),
    }
    match links {
        Ok(value) => stores.analytics.update(|a| a.link_breakdown = Some(value)),
        Err(err) => leptos::logging::warn!("link breakdown unavailable: {err}"),
    }
}

pub async fn run_report(stores: Stores, query: ReportQuery) {
    stores.analytics.update(|a| a.working = true);
    match net::analytics::report(&query).await {
        Ok(body) => stores.analytics.update(|a| {
            a.report = Some(body);
            a.working = false;
        }),
        Err(err) => {
            report(stores, &err);
            stores.analytics.update(|a| a.working = false);
        }
    }
}

/// `bounds` is `[period1_start, period1_end, period2_start, period2_end]`.
pub async fn compare(stores: Stores, bounds: [String; 4]) {
    let query = match CompareQuery::new(bounds.each_ref().map(String::as_str)) {
        Ok(query) => query,
        Err(msg) => {
            reject(stores, msg);
            return;
        }
    };
    stores.analytics.update(|a| a.working = true);
    match net::analytics::compare(&query).await {
        Ok(body) => stores.analytics.update(|a| {
            a.comparison = Some(body);
            a.working = false;
        }),
        Err(err) => {
            report(stores, &err);
            stores.analytics.update(|a| a.working = false);
        }
    }
}

pub async fn export(stores: Stores, request: ExportRequest) {
    stores.analytics.update(|a| a.working = true);
    let result = net::analytics::export(&request).await;
    stores.analytics.update(|a| a.working = false);
    match result {
        Ok(body) => {
            let count = export_count(&body);
            let message = body.get("message").and_then(|m| m.as_str()).map(str::to_owned);
            succeed(stores, message, &format!("Exported {count} records"));
        }
        Err(err) => {
            report(stores, &err);
        }
    }
}
