//! Tweet composer and scheduling queue.

#[cfg(test)]
#[path = "tweets_test.rs"]
mod tweets_test;

use leptos::prelude::*;
use records::validate::{TWEET_MAX_CHARS, remaining_chars};
use records::{Tweet, TweetId, TweetStatus};

use super::{filter_options, parse_id};
use crate::actions;
use crate::actions::tweets::TweetDraft;
use crate::components::app_shell::AppShell;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::status_badge::StatusBadge;
use crate::state::use_stores;
use crate::util::auth::signed_in;
use crate::util::format;

/// Counter styling as the composer approaches the limit.
pub(crate) fn counter_class(remaining: i64) -> &'static str {
    match remaining {
        i64::MIN..=-1 => "counter counter--over",
        0..=20 => "counter counter--warn",
        _ => "counter",
    }
}

/// Composer contents for editing an existing tweet.
pub(crate) fn draft_from(tweet: &Tweet) -> TweetDraft {
    TweetDraft {
        content: tweet.content.clone(),
        campaign_id: tweet.campaign_id,
        affiliate_link_id: tweet.affiliate_link_id,
        scheduled_local: tweet.scheduled_time.as_deref().map(format::to_input).unwrap_or_default(),
    }
}

#[component]
pub fn TweetsPage() -> impl IntoView {
    let stores = use_stores();
    let tweets = stores.tweets;
    let campaigns = stores.campaigns;
    let links = stores.links;
    let signed_in = signed_in(stores.auth);

    Effect::new(move || {
        if signed_in.get() {
            actions::spawn(actions::tweets::load(stores));
            actions::spawn(actions::campaigns::load(stores));
            actions::spawn(actions::affiliate_links::load(stores));
        }
    });

    let draft = RwSignal::new(TweetDraft::default());
    let editing = RwSignal::new(None::<TweetId>);
    let schedule_target = RwSignal::new(None::<TweetId>);
    let schedule_time = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<TweetId>);

    let remaining = move || remaining_chars(&draft.get().content);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if tweets.get_untracked().list.saving {
            return;
        }
        let value = draft.get_untracked();
        let target = editing.get_untracked();
        actions::spawn(async move {
            let saved = match target {
                Some(id) => actions::tweets::update(stores, id, value).await,
                None => actions::tweets::create(stores, value).await,
            };
            if saved {
                draft.set(TweetDraft::default());
                editing.set(None);
            }
        });
    };

    let reload = move || actions::spawn(actions::tweets::load(stores));

    let on_status_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        tweets.update(|t| {
            t.status_filter = value;
            t.page = 1;
        });
        reload();
    };

    let on_campaign_filter = move |ev: leptos::ev::Event| {
        let value = parse_id(&event_target_value(&ev));
        tweets.update(|t| {
            t.campaign_filter = value;
            t.page = 1;
        });
        reload();
    };

    let on_page = Callback::new(move |page: u32| {
        tweets.update(|t| t.page = page);
        reload();
    });

    let campaign_options = move || {
        campaigns
            .get()
            .list
            .items
            .into_iter()
            .map(|c| view! { <option value=c.id.to_string()>{c.name}</option> })
            .collect::<Vec<_>>()
    };

    let row = move |tweet: Tweet| {
        let id = tweet.id;
        let status = tweet.status.clone();
        let campaign = tweet.campaign_id.and_then(|cid| campaigns.get_untracked().name_of(cid)).unwrap_or_default();
        let edit_draft = draft_from(&tweet);
        let can_schedule = status.can_schedule();
        let can_cancel = status.can_cancel();
        let can_post = status.can_post();
        let editable = status.is_editable();
        view! {
            <tr>
                <td class="table__content">{format::excerpt(&tweet.content, 100)}</td>
                <td>{campaign}</td>
                <td>
                    <StatusBadge status=status.to_string()/>
                </td>
                <td>
                    {if status == TweetStatus::Posted {
                        format::datetime_or_dash(tweet.posted_time.as_deref())
                    } else {
                        format::datetime_or_dash(tweet.scheduled_time.as_deref())
                    }}
                </td>
                <td class="table__actions">
                    <Show when=move || editable>
                        <button
                            class="btn btn--small btn--ghost"
                            on:click={
                                let edit_draft = edit_draft.clone();
                                move |_| {
                                    draft.set(edit_draft.clone());
                                    editing.set(Some(id));
                                }
                            }
                        >
                            "Edit"
                        </button>
                    </Show>
                    <Show when=move || can_schedule>
                        <button
                            class="btn btn--small"
                            on:click=move |_| {
                                schedule_time.set(String::new());
                                schedule_target.set(Some(id));
                            }
                        >
                            "Schedule"
                        </button>
                    </Show>
                    <Show when=move || can_cancel>
                        <button
                            class="btn btn--small"
                            on:click=move |_| actions::spawn(actions::tweets::cancel(stores, id))
                        >
                            "Cancel"
                        </button>
                    </Show>
                    <Show when=move || can_post>
                        <button
                            class="btn btn--small btn--primary"
                            on:click=move |_| actions::spawn(actions::tweets::post_now(stores, id))
                        >
                            "Post now"
                        </button>
                    </Show>
                    <button class="btn btn--small btn--danger" on:click=move |_| pending_delete.set(Some(id))>
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <AppShell title="Tweets">
            <section class="panel">
                <h2 class="panel__title">
                    {move || if editing.get().is_some() { "Edit tweet" } else { "Compose" }}
                </h2>
                <form class="composer" on:submit=on_submit>
                    <textarea
                        class="input composer__text"
                        placeholder="What's happening?"
                        rows="4"
                        prop:value=move || draft.get().content
                        on:input=move |ev| draft.update(|d| d.content = event_target_value(&ev))
                    ></textarea>
                    <span class=move || counter_class(remaining())>
                        {move || format!("{} of {TWEET_MAX_CHARS} left", remaining())}
                    </span>
                    <div class="composer__options">
                        <select
                            class="input"
                            prop:value=move || draft.get().campaign_id.map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| draft.update(|d| d.campaign_id = parse_id(&event_target_value(&ev)))
                        >
                            <option value="">"No campaign"</option>
                            {campaign_options}
                        </select>
                        <select
                            class="input"
                            prop:value=move || draft.get().affiliate_link_id.map(|id| id.to_string()).unwrap_or_default()
                            on:change=move |ev| {
                                draft.update(|d| d.affiliate_link_id = parse_id(&event_target_value(&ev)));
                            }
                        >
                            <option value="">"No affiliate link"</option>
                            {move || {
                                links
                                    .get()
                                    .active()
                                    .into_iter()
                                    .map(|l| view! { <option value=l.id.to_string()>{l.label().to_owned()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <input
                            class="input"
                            type="datetime-local"
                            title="Leave empty to save as draft"
                            prop:value=move || draft.get().scheduled_local
                            on:input=move |ev| draft.update(|d| d.scheduled_local = event_target_value(&ev))
                        />
                    </div>
                    <div class="composer__actions">
                        <Show when=move || editing.get().is_some()>
                            <button
                                class="btn"
                                type="button"
                                on:click=move |_| {
                                    draft.set(TweetDraft::default());
                                    editing.set(None);
                                }
                            >
                                "Discard"
                            </button>
                        </Show>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || tweets.get().list.saving || remaining() < 0
                        >
                            {move || {
                                if draft.get().scheduled_local.is_empty() { "Save draft" } else { "Schedule" }
                            }}
                        </button>
                    </div>
                </form>
            </section>

            <section class="panel">
                <div class="panel__toolbar">
                    <select class="input" on:change=on_status_filter>
                        {filter_options(TweetStatus::KNOWN.map(|s| s.to_string()))
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select class="input" on:change=on_campaign_filter>
                        <option value="">"All campaigns"</option>
                        {campaign_options}
                    </select>
                    <Show when=move || tweets.get().list.loading>
                        <span class="panel__loading">"Loading…"</span>
                    </Show>
                </div>
                <Show when=move || tweets.get().list.error.is_some()>
                    <p class="page__error">{move || tweets.get().list.error.unwrap_or_default()}</p>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Content"</th>
                            <th>"Campaign"</th>
                            <th>"Status"</th>
                            <th>"When"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{move || tweets.get().list.items.into_iter().map(row).collect::<Vec<_>>()}</tbody>
                </table>
                <Show when=move || { let t = tweets.get(); !t.list.loading && t.list.items.is_empty() }>
                    <p class="panel__empty">"No tweets match these filters."</p>
                </Show>
                <PaginationBar pagination=Signal::derive(move || tweets.get().list.pagination) on_page=on_page/>
            </section>

            <Show when=move || schedule_target.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| schedule_target.set(None)>
                    <div class="dialog" role="dialog" on:click=|ev| ev.stop_propagation()>
                        <h2>"Schedule tweet"</h2>
                        <input
                            class="input"
                            type="datetime-local"
                            prop:value=move || schedule_time.get()
                            on:input=move |ev| schedule_time.set(event_target_value(&ev))
                        />
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| schedule_target.set(None)>
                                "Cancel"
                            </button>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    if let Some(id) = schedule_target.get_untracked() {
                                        let local = schedule_time.get_untracked();
                                        actions::spawn(async move {
                                            if actions::tweets::schedule(stores, id, local).await {
                                                schedule_target.set(None);
                                            }
                                        });
                                    }
                                }
                            >
                                "Schedule"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete tweet"
                message=Signal::derive(|| "This tweet will be removed permanently.".to_owned())
                on_confirm=Callback::new(move |()| {
                    if let Some(id) = pending_delete.get_untracked() {
                        pending_delete.set(None);
                        actions::spawn(async move {
                            actions::tweets::delete(stores, id).await;
                        });
                    }
                })
                on_cancel=Callback::new(move |()| pending_delete.set(None))
            />
        </AppShell>
    }
}
