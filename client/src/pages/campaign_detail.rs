//! Single campaign: editable fields, metrics and its tweets.

#[cfg(test)]
#[path = "campaign_detail_test.rs"]
mod campaign_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::{Campaign, CampaignMetrics, CampaignStatus, CampaignUpdate};
use serde_json::Value;

use super::parse_id;
use crate::actions;
use crate::components::app_shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::components::status_badge::StatusBadge;
use crate::state::use_stores;
use crate::util::auth::signed_in;
use crate::util::format;

/// Metrics embedded in the campaign, else the `metrics` of the report.
pub(crate) fn metrics_from(campaign: Option<&Campaign>, report: Option<&Value>) -> Option<CampaignMetrics> {
    campaign.and_then(|c| c.performance.clone()).or_else(|| {
        let metrics = report?.get("metrics")?;
        serde_json::from_value(metrics.clone()).ok()
    })
}

/// Only changed fields are sent.
pub(crate) fn diff_update(campaign: &Campaign, name: &str, niche: &str, description: &str) -> CampaignUpdate {
    let changed = |current: Option<&str>, next: &str| {
        let next = next.trim();
        (current.unwrap_or_default() != next).then(|| next.to_owned())
    };
    CampaignUpdate {
        name: changed(Some(&campaign.name), name),
        niche: changed(campaign.niche.as_deref(), niche),
        description: changed(campaign.description.as_deref(), description),
        status: None,
        schedule: None,
    }
}

#[component]
pub fn CampaignDetailPage() -> impl IntoView {
    let stores = use_stores();
    let campaigns = stores.campaigns;
    let params = use_params_map();
    let campaign_id = Memo::new(move |_| params.get().get("id").and_then(|raw| parse_id(&raw)));
    let signed_in = signed_in(stores.auth);

    let name = RwSignal::new(String::new());
    let niche = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let editing = RwSignal::new(false);

    Effect::new(move || {
        if let (true, Some(id)) = (signed_in.get(), campaign_id.get()) {
            actions::spawn(actions::campaigns::load_one(stores, id));
        }
    });

    let selected = move || campaigns.get().selected.filter(|c| Some(c.id) == campaign_id.get());

    let start_edit = move |_| {
        if let Some(c) = selected() {
            name.set(c.name);
            niche.set(c.niche.unwrap_or_default());
            description.set(c.description.unwrap_or_default());
            editing.set(true);
        }
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(campaign) = campaigns.get_untracked().selected else {
            return;
        };
        let update = diff_update(&campaign, &name.get_untracked(), &niche.get_untracked(), &description.get_untracked());
        actions::spawn(async move {
            if actions::campaigns::update(stores, campaign.id, update).await {
                editing.set(false);
            }
        });
    };

    let metric = move |pick: fn(&CampaignMetrics) -> String| {
        Signal::derive(move || {
            let state = campaigns.get();
            metrics_from(state.selected.as_ref(), state.selected_performance.as_ref())
                .as_ref()
                .map_or_else(|| "–".to_owned(), pick)
        })
    };

    let tweet_rows = move || {
        campaigns
            .get()
            .selected_tweets
            .items
            .into_iter()
            .map(|tweet| {
                view! {
                    <tr>
                        <td>{format::excerpt(&tweet.content, 80)}</td>
                        <td>
                            <StatusBadge status=tweet.status.to_string()/>
                        </td>
                        <td>{format::datetime_or_dash(tweet.scheduled_time.as_deref())}</td>
                        <td>{format::datetime_or_dash(tweet.posted_time.as_deref())}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <AppShell title="Campaign">
            <a class="page__back" href="/campaigns">"← Campaigns"</a>
            <Show
                when=move || selected().is_some()
                fallback=move || view! { <p class="panel__empty">"Loading campaign…"</p> }
            >
                <section class="panel">
                    <div class="panel__toolbar">
                        <h2 class="panel__title">{move || selected().map(|c| c.name).unwrap_or_default()}</h2>
                        {move || selected().map(|c| view! { <StatusBadge status=c.status.to_string()/> })}
                        <span class="panel__spacer"></span>
                        <Show
                            when=move || selected().is_some_and(|c| c.status == CampaignStatus::Active)
                            fallback=move || {
                                view! {
                                    <button
                                        class="btn"
                                        on:click=move |_| {
                                            if let Some(id) = campaign_id.get_untracked() {
                                                actions::spawn(actions::campaigns::activate(stores, id));
                                            }
                                        }
                                    >
                                        "Activate"
                                    </button>
                                }
                            }
                        >
                            <button
                                class="btn"
                                on:click=move |_| {
                                    if let Some(id) = campaign_id.get_untracked() {
                                        actions::spawn(actions::campaigns::pause(stores, id));
                                    }
                                }
                            >
                                "Pause"
                            </button>
                        </Show>
                        <button class="btn btn--ghost" on:click=start_edit>
                            "Edit"
                        </button>
                    </div>
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <dl class="details">
                                    <dt>"Niche"</dt>
                                    <dd>{move || selected().and_then(|c| c.niche).unwrap_or_else(|| "–".to_owned())}</dd>
                                    <dt>"Description"</dt>
                                    <dd>{move || selected().and_then(|c| c.description).unwrap_or_else(|| "–".to_owned())}</dd>
                                    <dt>"Created"</dt>
                                    <dd>{move || format::datetime_or_dash(selected().and_then(|c| c.created_at).as_deref())}</dd>
                                    <dt>"Updated"</dt>
                                    <dd>{move || format::datetime_or_dash(selected().and_then(|c| c.updated_at).as_deref())}</dd>
                                </dl>
                            }
                        }
                    >
                        <form class="form-grid" on:submit=on_save>
                            <input
                                class="input"
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                            <input
                                class="input"
                                placeholder="Niche"
                                prop:value=move || niche.get()
                                on:input=move |ev| niche.set(event_target_value(&ev))
                            />
                            <textarea
                                class="input form-grid__wide"
                                prop:value=move || description.get()
                                on:input=move |ev| description.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn btn--primary" type="submit" disabled=move || campaigns.get().list.saving>
                                "Save"
                            </button>
                            <button class="btn" type="button" on:click=move |_| editing.set(false)>
                                "Cancel"
                            </button>
                        </form>
                    </Show>
                </section>

                <div class="stat-grid">
                    <StatCard label="Tweets" value=metric(|m| m.total_tweets.to_string())/>
                    <StatCard label="Posted" value=metric(|m| m.posted_tweets.to_string())/>
                    <StatCard label="Impressions" value=metric(|m| format::compact(m.total_impressions))/>
                    <StatCard label="Engagement" value=metric(|m| format::compact(m.total_engagement))/>
                    <StatCard label="Engagement rate" value=metric(|m| format::percent(m.engagement_rate))/>
                    <StatCard label="Click-through" value=metric(|m| format::percent(m.click_through_rate))/>
                </div>

                <section class="panel">
                    <h2 class="panel__title">"Tweets"</h2>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Content"</th>
                                <th>"Status"</th>
                                <th>"Scheduled"</th>
                                <th>"Posted"</th>
                            </tr>
                        </thead>
                        <tbody>{tweet_rows}</tbody>
                    </table>
                    <Show when=move || campaigns.get().selected_tweets.items.is_empty()>
                        <p class="panel__empty">"No tweets in this campaign."</p>
                    </Show>
                </section>
            </Show>
        </AppShell>
    }
}
