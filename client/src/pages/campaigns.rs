//! Campaign list with status filter, create form and row actions.

use leptos::prelude::*;
use records::{Campaign, CampaignId, CampaignStatus};

use super::{capitalize, filter_options};
use crate::actions;
use crate::components::app_shell::AppShell;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination_bar::PaginationBar;
use crate::components::status_badge::StatusBadge;
use crate::state::use_stores;
use crate::util::auth::signed_in;
use crate::util::format;

#[component]
pub fn CampaignsPage() -> impl IntoView {
    let stores = use_stores();
    let campaigns = stores.campaigns;
    let signed_in = signed_in(stores.auth);

    Effect::new(move || {
        if signed_in.get() {
            actions::spawn(actions::campaigns::load(stores));
        }
    });

    let name = RwSignal::new(String::new());
    let niche = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let status = RwSignal::new(CampaignStatus::Draft.as_str().to_owned());
    let pending_delete = RwSignal::new(None::<(CampaignId, String)>);

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if campaigns.get_untracked().list.saving {
            return;
        }
        let form = (
            name.get_untracked(),
            niche.get_untracked(),
            description.get_untracked(),
            CampaignStatus::from(status.get_untracked()),
        );
        actions::spawn(async move {
            if actions::campaigns::create(stores, form.0, form.1, form.2, form.3).await {
                name.set(String::new());
                niche.set(String::new());
                description.set(String::new());
            }
        });
    };

    let on_filter = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        campaigns.update(|c| {
            c.status_filter = value;
            c.page = 1;
        });
        actions::spawn(actions::campaigns::load(stores));
    };

    let on_page = Callback::new(move |page: u32| {
        campaigns.update(|c| c.page = page);
        actions::spawn(actions::campaigns::load(stores));
    });

    let row = move |campaign: Campaign| {
        let id = campaign.id;
        let is_active = campaign.status == CampaignStatus::Active;
        let label = campaign.name.clone();
        view! {
            <tr>
                <td>
                    <a href=format!("/campaigns/{id}")>{campaign.name}</a>
                </td>
                <td>{campaign.niche.unwrap_or_default()}</td>
                <td>
                    <StatusBadge status=campaign.status.to_string()/>
                </td>
                <td>{format::datetime_or_dash(campaign.created_at.as_deref())}</td>
                <td class="table__actions">
                    <Show
                        when=move || is_active
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| actions::spawn(actions::campaigns::activate(stores, id))
                                >
                                    "Activate"
                                </button>
                            }
                        }
                    >
                        <button
                            class="btn btn--small"
                            on:click=move |_| actions::spawn(actions::campaigns::pause(stores, id))
                        >
                            "Pause"
                        </button>
                    </Show>
                    <button
                        class="btn btn--small btn--danger"
                        on:click=move |_| pending_delete.set(Some((id, label.clone())))
                    >
                        "Delete"
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <AppShell title="Campaigns">
            <section class="panel">
                <h2 class="panel__title">"New campaign"</h2>
                <form class="form-grid" on:submit=on_create>
                    <input
                        class="input"
                        placeholder="Campaign name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="input"
                        placeholder="Niche (e.g. fitness)"
                        prop:value=move || niche.get()
                        on:input=move |ev| niche.set(event_target_value(&ev))
                    />
                    <select class="input" on:change=move |ev| status.set(event_target_value(&ev))>
                        {[CampaignStatus::Draft, CampaignStatus::Active]
                            .into_iter()
                            .map(|s| {
                                let value = s.as_str().to_owned();
                                let selected = value == status.get_untracked();
                                view! {
                                    <option value=value.clone() selected=selected>
                                        {capitalize(&value)}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <textarea
                        class="input form-grid__wide"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || campaigns.get().list.saving>
                        "Create Campaign"
                    </button>
                </form>
            </section>

            <section class="panel">
                <div class="panel__toolbar">
                    <select class="input" on:change=on_filter>
                        {filter_options(CampaignStatus::KNOWN.map(|s| s.to_string()))
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <Show when=move || campaigns.get().list.loading>
                        <span class="panel__loading">"Loading…"</span>
                    </Show>
                </div>
                <Show when=move || campaigns.get().list.error.is_some()>
                    <p class="page__error">{move || campaigns.get().list.error.unwrap_or_default()}</p>
                </Show>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Niche"</th>
                            <th>"Status"</th>
                            <th>"Created"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || campaigns.get().list.items.into_iter().map(row).collect::<Vec<_>>()}
                    </tbody>
                </table>
                <Show when=move || { let c = campaigns.get(); !c.list.loading && c.list.items.is_empty() }>
                    <p class="panel__empty">"No campaigns yet."</p>
                </Show>
                <PaginationBar pagination=Signal::derive(move || campaigns.get().list.pagination) on_page=on_page/>
            </section>

            <ConfirmDialog
                open=Signal::derive(move || pending_delete.get().is_some())
                title="Delete campaign"
                message=Signal::derive(move || {
                    pending_delete
                        .get()
                        .map(|(_, name)| format!("Delete \"{name}\" and all of its tweets?"))
                        .unwrap_or_default()
                })
                on_confirm=Callback::new(move |()| {
                    if let Some((id, _)) = pending_delete.get_untracked() {
                        pending_delete.set(None);
                        actions::spawn(async move {
                            actions::campaigns::delete(stores, id).await;
                        });
                    }
                })
                on_cancel=Callback::new(move |()| pending_delete.set(None))
            />
        </AppShell>
    }
}
