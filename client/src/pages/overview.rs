//! Landing page: headline stats for the default window and tweet activity.

use leptos::prelude::*;
use records::query::DEFAULT_DAYS;

use crate::actions;
use crate::components::app_shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::state::use_stores;
use crate::util::auth::signed_in;
use crate::util::format;

#[component]
pub fn OverviewPage() -> impl IntoView {
    let stores = use_stores();
    let analytics = stores.analytics;
    let tweets = stores.tweets;

    let signed_in = signed_in(stores.auth);
    Effect::new(move || {
        if signed_in.get() {
            actions::spawn(actions::analytics::load(stores, DEFAULT_DAYS));
            actions::spawn(actions::tweets::load_recent(stores));
        }
    });

    let stat = move |pick: fn(&records::DashboardStats) -> String| {
        Signal::derive(move || analytics.get().dashboard.as_ref().map_or_else(|| "–".to_owned(), pick))
    };

    let upcoming = move || {
        tweets
            .get()
            .upcoming(5)
            .into_iter()
            .map(|tweet| {
                view! {
                    <li class="activity__item">
                        <span class="activity__time">{format::datetime_or_dash(tweet.scheduled_time.as_deref())}</span>
                        <span class="activity__text">{format::excerpt(&tweet.content, 90)}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    let recent = move || {
        tweets
            .get()
            .recent
            .into_iter()
            .take(5)
            .map(|tweet| {
                view! {
                    <li class="activity__item">
                        <StatusBadge status=tweet.status.to_string()/>
                        <span class="activity__text">{format::excerpt(&tweet.content, 90)}</span>
                    </li>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <AppShell title="Overview">
            <p class="page__hint">{format!("Last {DEFAULT_DAYS} days")}</p>
            <div class="stat-grid">
                <StatCard label="Tweets" value=stat(|d| format::compact(d.total_tweets))/>
                <StatCard label="Posted" value=stat(|d| format::compact(d.posted_tweets))/>
                <StatCard label="Active campaigns" value=stat(|d| d.active_campaigns.to_string())/>
                <StatCard label="Engagement" value=stat(|d| format::compact(d.total_engagement))/>
                <StatCard label="Click-through" value=stat(|d| format::percent(d.click_through_rate))/>
            </div>
            <Show when=move || analytics.get().error.is_some()>
                <p class="page__error">{move || analytics.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="overview-columns">
                <section class="panel">
                    <h2 class="panel__title">"Upcoming"</h2>
                    <ul class="activity">{upcoming}</ul>
                    <Show when=move || tweets.get().upcoming(1).is_empty()>
                        <p class="panel__empty">"Nothing scheduled."</p>
                    </Show>
                </section>
                <section class="panel">
                    <h2 class="panel__title">"Recent tweets"</h2>
                    <ul class="activity">{recent}</ul>
                    <a class="panel__link" href="/tweets">"All tweets →"</a>
                </section>
            </div>
        </AppShell>
    }
}
