//! Period analytics: headline stats, engagement trend, top tweets,
//! breakdowns, reports, period comparison and export.

use leptos::prelude::*;
use records::query::{Granularity, PERIOD_CHOICES, ReportQuery, ReportType};
use records::{DashboardStats, ExportDataType, ExportFormat, ExportRequest};
use serde_json::Value;

use crate::actions;
use crate::components::app_shell::AppShell;
use crate::components::stat_card::StatCard;
use crate::state::analytics::{bar_percent, metric_rows};
use crate::state::use_stores;
use crate::util::auth::signed_in;
use crate::util::format;

#[component]
pub fn AnalyticsPage() -> impl IntoView {
    let stores = use_stores();
    let analytics = stores.analytics;
    let signed_in = signed_in(stores.auth);

    Effect::new(move || {
        if signed_in.get() {
            let days = analytics.get_untracked().days;
            actions::spawn(actions::analytics::load(stores, days));
        }
    });

    let stat = move |pick: fn(&DashboardStats) -> String| {
        Signal::derive(move || analytics.get().dashboard.as_ref().map_or_else(|| "–".to_owned(), pick))
    };

    let period_buttons = move || {
        PERIOD_CHOICES
            .into_iter()
            .map(|days| {
                let class = move || {
                    if analytics.get().days == days { "segmented__item segmented__item--active" } else { "segmented__item" }
                };
                view! {
                    <button class=class on:click=move |_| actions::spawn(actions::analytics::load(stores, days))>
                        {format!("{days} days")}
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    let on_granularity = move |ev: leptos::ev::Event| {
        if let Some(granularity) = Granularity::parse(&event_target_value(&ev)) {
            analytics.update(|a| a.granularity = granularity);
            let days = analytics.get_untracked().days;
            actions::spawn(actions::analytics::load(stores, days));
        }
    };

    let trend_rows = move || {
        let state = analytics.get();
        let peak = state.peak_engagement();
        state
            .trends
            .into_iter()
            .map(|trend| {
                let width = format!("width: {:.1}%", bar_percent(trend.total_engagement, peak));
                view! {
                    <tr>
                        <td>{format::day_label(&trend.date)}</td>
                        <td>{trend.tweet_count}</td>
                        <td>{format::compact(trend.impressions)}</td>
                        <td>{trend.likes}</td>
                        <td>{trend.retweets}</td>
                        <td>{trend.replies}</td>
                        <td class="trend__bar-cell">
                            <span class="trend__bar" style=width></span>
                            <span class="trend__value">{format::compact(trend.total_engagement)}</span>
                        </td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let top_rows = move || {
        analytics
            .get()
            .top_tweets
            .into_iter()
            .enumerate()
            .map(|(rank, tweet)| {
                view! {
                    <tr>
                        <td>{rank + 1}</td>
                        <td class="table__content">{format::excerpt(&tweet.content, 100)}</td>
                        <td>{format::datetime_or_dash(tweet.posted_time.as_deref())}</td>
                        <td>{format::compact(tweet.impressions)}</td>
                        <td>{tweet.url_clicks}</td>
                        <td>{format::compact(tweet.total_engagement)}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };

    let report_start = RwSignal::new(String::new());
    let report_end = RwSignal::new(String::new());
    let on_report = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let query = ReportQuery {
            start_date: Some(report_start.get_untracked()),
            end_date: Some(report_end.get_untracked()),
            report_type: analytics.get_untracked().report_type,
        };
        actions::spawn(actions::analytics::run_report(stores, query));
    };
    let on_report_type = move |ev: leptos::ev::Event| {
        if let Some(kind) = ReportType::parse(&event_target_value(&ev)) {
            analytics.update(|a| a.report_type = kind);
        }
    };

    let bounds: [RwSignal<String>; 4] = std::array::from_fn(|_| RwSignal::new(String::new()));
    let on_compare = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions::spawn(actions::analytics::compare(stores, bounds.map(|b| b.get_untracked())));
    };
    let bound_input = move |index: usize, label: &'static str| {
        let bound = bounds[index];
        view! {
            <label class="field">
                <span class="field__label">{label}</span>
                <input
                    class="input"
                    type="date"
                    prop:value=move || bound.get()
                    on:input=move |ev| bound.set(event_target_value(&ev))
                />
            </label>
        }
    };

    let export_type = RwSignal::new(ExportDataType::Summary);
    let export_format = RwSignal::new(ExportFormat::Json);
    let on_export = move |_: leptos::ev::MouseEvent| {
        let request = ExportRequest {
            format: export_format.get_untracked(),
            data_type: export_type.get_untracked(),
            start_date: None,
            end_date: None,
        };
        actions::spawn(actions::analytics::export(stores, request));
    };

    let working = move || analytics.get().working;

    view! {
        <AppShell title="Analytics">
            <div class="panel__toolbar">
                <div class="segmented">{period_buttons}</div>
                <select class="input" on:change=on_granularity>
                    {[Granularity::Daily, Granularity::Weekly, Granularity::Monthly]
                        .into_iter()
                        .map(|g| view! { <option value=g.as_str()>{super::capitalize(g.as_str())}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <Show when=move || analytics.get().loading>
                    <span class="panel__loading">"Loading…"</span>
                </Show>
            </div>
            <Show when=move || analytics.get().error.is_some()>
                <p class="page__error">{move || analytics.get().error.unwrap_or_default()}</p>
            </Show>

            <div class="stat-grid">
                <StatCard label="Tweets" value=stat(|d| format::compact(d.total_tweets))/>
                <StatCard label="Posted" value=stat(|d| format::compact(d.posted_tweets))/>
                <StatCard label="Active campaigns" value=stat(|d| d.active_campaigns.to_string())/>
                <StatCard label="Engagement" value=stat(|d| format::compact(d.total_engagement))/>
                <StatCard label="Click-through" value=stat(|d| format::percent(d.click_through_rate)) hint="clicks / impressions"/>
            </div>

            <section class="panel">
                <h2 class="panel__title">"Engagement trend"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Period"</th>
                            <th>"Tweets"</th>
                            <th>"Impressions"</th>
                            <th>"Likes"</th>
                            <th>"Retweets"</th>
                            <th>"Replies"</th>
                            <th>"Engagement"</th>
                        </tr>
                    </thead>
                    <tbody>{trend_rows}</tbody>
                </table>
                <Show when=move || { let a = analytics.get(); !a.loading && a.trends.is_empty() }>
                    <p class="panel__empty">"No engagement recorded in this period."</p>
                </Show>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Top tweets"</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Content"</th>
                            <th>"Posted"</th>
                            <th>"Impressions"</th>
                            <th>"Clicks"</th>
                            <th>"Engagement"</th>
                        </tr>
                    </thead>
                    <tbody>{top_rows}</tbody>
                </table>
            </section>

            <div class="panel-grid">
                <section class="panel">
                    <h2 class="panel__title">"Campaign breakdown"</h2>
                    <MetricTable value=Signal::derive(move || analytics.get().campaign_breakdown)/>
                </section>
                <section class="panel">
                    <h2 class="panel__title">"Affiliate link breakdown"</h2>
                    <MetricTable value=Signal::derive(move || analytics.get().link_breakdown)/>
                </section>
            </div>

            <section class="panel">
                <h2 class="panel__title">"Report"</h2>
                <form class="panel__toolbar" on:submit=on_report>
                    <select class="input" on:change=on_report_type>
                        {ReportType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{super::capitalize(kind.as_str())}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="input"
                        type="date"
                        prop:value=move || report_start.get()
                        on:input=move |ev| report_start.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="date"
                        prop:value=move || report_end.get()
                        on:input=move |ev| report_end.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=working>
                        "Generate"
                    </button>
                </form>
                <MetricTable value=Signal::derive(move || analytics.get().report.map(|r| r.report))/>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Compare periods"</h2>
                <form class="form-grid" on:submit=on_compare>
                    {bound_input(0, "Period 1 start")}
                    {bound_input(1, "Period 1 end")}
                    {bound_input(2, "Period 2 start")}
                    {bound_input(3, "Period 2 end")}
                    <button class="btn" type="submit" disabled=working>
                        "Compare"
                    </button>
                </form>
                <MetricTable value=Signal::derive(move || analytics.get().comparison.map(|c| c.comparison))/>
            </section>

            <section class="panel">
                <h2 class="panel__title">"Export"</h2>
                <div class="panel__toolbar">
                    <select
                        class="input"
                        on:change=move |ev| {
                            if let Some(kind) = ExportDataType::parse(&event_target_value(&ev)) {
                                export_type.set(kind);
                            }
                        }
                    >
                        {ExportDataType::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.as_str().replace('_', " ")}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="input"
                        on:change=move |ev| {
                            let format = if event_target_value(&ev) == "csv" { ExportFormat::Csv } else { ExportFormat::Json };
                            export_format.set(format);
                        }
                    >
                        <option value="json">"JSON"</option>
                        <option value="csv">"CSV"</option>
                    </select>
                    <button class="btn" on:click=on_export disabled=working>
                        "Export"
                    </button>
                </div>
            </section>
        </AppShell>
    }
}

/// Label/value rows for a JSON metrics body of varying shape.
#[component]
fn MetricTable(value: Signal<Option<Value>>) -> impl IntoView {
    let rows = move || {
        value
            .get()
            .map(|v| metric_rows(&v))
            .unwrap_or_default()
            .into_iter()
            .map(|(label, text)| {
                view! {
                    <tr>
                        <th>{label}</th>
                        <td>{text}</td>
                    </tr>
                }
            })
            .collect::<Vec<_>>()
    };
    view! {
        <Show when=move || value.get().is_some() fallback=|| view! { <p class="panel__empty">"Nothing to show yet."</p> }>
            <table class="table table--metrics">
                <tbody>{rows}</tbody>
            </table>
        </Show>
    }
}
