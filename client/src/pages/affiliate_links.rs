//! Affiliate link catalog: search, create, toggle, delete, per-link stats.

use leptos::prelude::*;
use records::query::DEFAULT_DAYS;
use records::{AffiliateLink, AffiliateLinkId, LinkPerformance};

use crate::actions;
use crate::actions::affiliate_links::LinkDraft;
use crate::components::app_shell::AppShell;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::state::toast::ToastKind;
use crate::state::use_stores;
use crate::util::auth::signed_in;
use crate::util::format;

fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
            return true;
        }
        false
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

#[component]
pub fn AffiliateLinksPage() -> impl IntoView {
    let stores = use_stores();
    let links = stores.links;
    let signed_in = signed_in(stores.auth);

    Effect::new(move || {
        if signed_in.get() {
            actions::spawn(actions::affiliate_links::load(stores));
            actions::spawn(actions::affiliate_links::load_categories(stores));
        }
    });

    let catalog_text = RwSignal::new(String::new());
    let catalog_min = RwSignal::new(String::new());
    let on_catalog = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        actions::spawn(actions::affiliate_links::search_catalog(
            stores,
            catalog_text.get_untracked(),
            catalog_min.get_untracked(),
        ));
    };

    let draft = RwSignal::new(LinkDraft::default());
    let pending_delete = RwSignal::new(None::<(AffiliateLinkId, String)>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if links.get_untracked().list.saving {
            return;
        }
        let value = draft.get_untracked();
        actions::spawn(async move {
            if actions::affiliate_links::create(stores, value).await {
                draft.set(LinkDraft::default());
            }
        });
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        links.update(|l| l.page = 1);
        actions::spawn(actions::affiliate_links::load(stores));
    };

    let on_page = Callback::new(move |page: u32| {
        links.update(|l| l.page = page);
        actions::spawn(actions::affiliate_links::load(stores));
    });

    let text_field = move |placeholder: &'static str, get: fn(&LinkDraft) -> String, set: fn(&mut LinkDraft, String)| {
        view! {
            <input
                class="input"
                placeholder=placeholder
                prop:value=move || get(&draft.get())
                on:input=move |ev| draft.update(|d| set(d, event_target_value(&ev)))
            />
        }
    };

    let row = move |link: AffiliateLink| {
        let id = link.id;
        let share = link.share_url().to_owned();
        let label = link.label().to_owned();
        let active = link.is_active;
        let delete_label = label.clone();
        view! {
            <tr>
                <td>
                    <div class="link__label">{label}</div>
                    <div class="link__original">{format::excerpt(&link.original_url, 60)}</div>
                </td>
                <td class="link__tracked">
                    <code>{share.clone()}</code>
                    <button
                        class="btn btn--small btn--ghost"
                        title="Copy tracked URL"
                        on:click=move |_| {
                            if copy_to_clipboard(&share) {
                                actions::notify(stores, ToastKind::Info, "Link copied");
                            }
                        }
                    >
                        "Copy"
                    </button>
                </td>
                <td>{link.commission_rate.map(format::percent).unwrap_or_else(|| "–".to_owned())}</td>
                <td>
                    <span class=if active { "badge badge--success" } else { "badge" }>
                        {if active { "active" } else { "inactive" }}
                    </span>
                </td>
                <td class="table__actions">
                    <button
                        class="btn btn--small btn--ghost"
                        on:click=move |_| {
                            actions::spawn(actions::affiliate_links::load_performance(stores, id, DEFAULT_DAYS));
                        }
                    >
                        "Stats"
                    </button>
                    <button
                        class="btn btn--small"
                        on:click=move |_| actions::spawn(actions::affiliate_links::toggle_status(stores, id))
                    >
                        {if active { "Deactivate" } else { "Activate" }}
                    </button>
                    <button
                        class="btn btn--small btn--danger"
                        on:click=move |_| pending_delete.set(Some((id, delete_label.clone())))
                    >
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <AppShell title="Affiliate Links">
            <section class="panel">
                <h2 class="panel__title">"New link"</h2>
                <form class="form-grid" on:submit=on_create>
                    <input
                        class="input form-grid__wide"
                        type="url"
                        placeholder="https://shop.example.com/product"
                        prop:value=move || draft.get().original_url
                        on:input=move |ev| draft.update(|d| d.original_url = event_target_value(&ev))
                    />
                    {text_field("Product name", |d| d.product_name.clone(), |d, v| d.product_name = v)}
                    {text_field("Commission %", |d| d.commission_rate.clone(), |d, v| d.commission_rate = v)}
                    <input
                        class="input"
                        placeholder="Category"
                        list="link-categories"
                        prop:value=move || draft.get().category
                        on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                    />
                    <datalist id="link-categories">
                        {move || {
                            links
                                .get()
                                .categories
                                .into_iter()
                                .map(|c| view! { <option value=c></option> })
                                .collect::<Vec<_>>()
                        }}
                    </datalist>
                    {text_field("utm_source", |d| d.utm_source.clone(), |d, v| d.utm_source = v)}
                    {text_field("utm_medium", |d| d.utm_medium.clone(), |d, v| d.utm_medium = v)}
                    {text_field("utm_campaign", |d| d.utm_campaign.clone(), |d, v| d.utm_campaign = v)}
                    <button class="btn btn--primary" type="submit" disabled=move || links.get().list.saving>
                        "Create Link"
                    </button>
                </form>
            </section>

            <section class="panel">
                <form class="panel__toolbar" on:submit=on_search>
                    <input
                        class="input"
                        type="search"
                        placeholder="Search links"
                        prop:value=move || links.get().search
                        on:input=move |ev| links.update(|l| l.search = event_target_value(&ev))
                    />
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || links.get().active_only
                            on:change=move |ev| {
                                links.update(|l| {
                                    l.active_only = event_target_checked(&ev);
                                    l.page = 1;
                                });
                                actions::spawn(actions::affiliate_links::load(stores));
                            }
                        />
                        "Active only"
                    </label>
                    <button class="btn" type="submit">
                        "Search"
                    </button>
                </form>
                <Show when=move || links.get().list.error.is_some()>
                    <p class="page__error">{move || links.get().list.error.unwrap_or_default()}</p>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Product"</th>
                            <th>"Tracked URL"</th>
                            <th>"Commission"</th>
                            <th>"State"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{move || links.get().list.items.into_iter().map(row).collect::<Vec<_>>()}</tbody>
                </table>
                <Show when=move || { let l = links.get(); !l.list.loading && l.list.items.is_empty() }>
                    <p class="panel__empty">"No affiliate links yet."</p>
                </Show>
                <PaginationBar pagination=Signal::derive(move || links.get().list.pagination) on_page=on_page/>
            </section>

            <Show when=move || links.get().performance.is_some()>
                <LinkStats
                    performance=Signal::derive(move || links.get().performance)
                    on_close=Callback::new(move |()| links.update(|l| l.performance = None))
                />
            </Show>

            <section class="panel">
                <h2 class="panel__title">"Catalog search"</h2>
                <form class="panel__toolbar" on:submit=on_catalog>
                    <input
                        class="input"
                        type="search"
                        placeholder="Product, brand or tag"
                        prop:value=move || catalog_text.get()
                        on:input=move |ev| catalog_text.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        placeholder="Min commission %"
                        prop:value=move || catalog_min.get()
                        on:input=move |ev| catalog_min.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Find"
                    </button>
                </form>
                {move || {
                    links
                        .get()
                        .catalog
                        .map(|catalog| {
                            let rows = catalog
                                .results
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <tr>
                                            <td>{link.label().to_owned()}</td>
                                            <td>{link.category.clone().unwrap_or_else(|| "–".to_owned())}</td>
                                            <td>
                                                {link.commission_rate.map(format::percent).unwrap_or_else(|| "–".to_owned())}
                                            </td>
                                            <td>
                                                <code>{link.share_url().to_owned()}</code>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>();
                            view! {
                                <p class="panel__hint">{format!("{} found", catalog.total_found)}</p>
                                <table class="table">
                                    <tbody>{rows}</tbody>
                                </table>
                            }
                        })
                }}
            </section>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete affiliate link"
                message=Signal::derive(move || {
                    pending_delete.get().map(|(_, label)| format!("Delete \"{label}\"?")).unwrap_or_default()
                })
                on_confirm=Callback::new(move |()| {
                    if let Some((id, _)) = pending_delete.get_untracked() {
                        pending_delete.set(None);
                        actions::spawn(async move {
                            actions::affiliate_links::delete(stores, id).await;
                        });
                    }
                })
                on_cancel=Callback::new(move |()| pending_delete.set(None))
            />
        </AppShell>
    }
}

/// Estimated clicks and revenue for one link.
#[component]
fn LinkStats(performance: Signal<Option<LinkPerformance>>, on_close: Callback<()>) -> impl IntoView {
    let rows = move || {
        performance.get().map(|p| {
            let m = p.performance;
            let cells = [
                ("Tweets", m.total_tweets.to_string()),
                ("Impressions", format::compact(m.total_impressions)),
                ("Likes", format::compact(m.total_likes)),
                ("Retweets", format::compact(m.total_retweets)),
                ("Replies", format::compact(m.total_replies)),
                ("Avg engagement", format::percent(m.avg_engagement_rate)),
                ("Est. clicks", format::compact(m.estimated_clicks)),
                ("Est. revenue", format!("${:.2}", m.estimated_revenue)),
            ];
            view! {
                <h2 class="panel__title">{format!("{} · last {} days", p.affiliate_link.label(), p.period_days)}</h2>
                <dl class="metric-list">
                    {cells
                        .into_iter()
                        .map(|(label, value)| view! { <dt>{label}</dt> <dd>{value}</dd> })
                        .collect::<Vec<_>>()}
                </dl>
            }
        })
    };
    view! {
        <section class="panel">
            {rows}
            <button class="btn btn--small" on:click=move |_| on_close.run(())>
                "Close"
            </button>
        </section>
    }
}
