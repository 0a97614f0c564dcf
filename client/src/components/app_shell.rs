//! Authenticated page frame: sidebar, top bar and toast host.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated page renders inside `AppShell`, which also installs the
//! unauthenticated redirect so individual pages do not repeat it.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::{NAV_ITEMS, NAV_STORAGE_KEY, is_active};
use crate::components::toast_host::ToastHost;
use crate::state::use_stores;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AppShell(#[prop(into)] title: String, children: ChildrenFn) -> impl IntoView {
    let stores = use_stores();
    let auth = stores.auth;
    let ui = stores.ui;
    let location = use_location();
    install_unauth_redirect(auth, use_navigate());

    let identity = move || {
        auth.get()
            .user
            .map(|u| (u.username, u.email))
            .unwrap_or_default()
    };

    let on_logout = move |_| crate::actions::spawn(crate::actions::auth::logout(stores));

    let toggle_nav = move |_| {
        let next = !ui.get_untracked().nav_collapsed;
        crate::util::storage::save_json(NAV_STORAGE_KEY, &next);
        ui.update(|u| u.nav_collapsed = next);
    };

    let nav_links = NAV_ITEMS
        .into_iter()
        .map(|item| {
            let href = item.href;
            let class = move || {
                if is_active(&location.pathname.get(), href) { "nav__link nav__link--active" } else { "nav__link" }
            };
            view! {
                <a href=href class=class title=item.label>
                    <span class="nav__icon">{item.icon}</span>
                    <span class="nav__label">{item.label}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class=move || if ui.get().nav_collapsed { "shell shell--collapsed" } else { "shell" }>
            <aside class="shell__sidebar">
                <div class="shell__brand">
                    <span class="shell__logo">"◆"</span>
                    <span class="nav__label">"Affiliate Dashboard"</span>
                </div>
                <nav class="nav">{nav_links}</nav>
                <button class="btn btn--ghost shell__collapse" on:click=toggle_nav title="Collapse navigation">
                    {move || if ui.get().nav_collapsed { "»" } else { "«" }}
                </button>
            </aside>

            <div class="shell__main">
                <header class="topbar">
                    <h1 class="topbar__title">{title}</h1>
                    <span class="topbar__spacer"></span>
                    <button
                        class="btn topbar__dark-toggle"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <span class="topbar__identity">
                        <span class="topbar__username">{move || identity().0}</span>
                        <span class="topbar__email">{move || identity().1}</span>
                    </span>
                    <button class="btn topbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>

                <main class="shell__content">
                    <Show
                        when=move || auth.get().user.is_some()
                        fallback=|| view! { <div class="page-loading">"Loading…"</div> }
                    >
                        {children()}
                    </Show>
                </main>
            </div>
            <ToastHost/>
        </div>
    }
}
