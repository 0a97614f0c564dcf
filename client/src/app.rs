//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    affiliate_links::AffiliateLinksPage, analytics::AnalyticsPage, campaign_detail::CampaignDetailPage,
    campaigns::CampaignsPage, login::LoginPage, overview::OverviewPage, register::RegisterPage, settings::SettingsPage,
    tweets::TweetsPage,
};
use crate::state::Stores;

/// Sidebar entry for an authenticated page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Authenticated pages in sidebar order.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { href: "/", label: "Overview", icon: "◧" },
    NavItem { href: "/campaigns", label: "Campaigns", icon: "◎" },
    NavItem { href: "/tweets", label: "Tweets", icon: "✎" },
    NavItem { href: "/affiliate-links", label: "Affiliate Links", icon: "⛓" },
    NavItem { href: "/analytics", label: "Analytics", icon: "▤" },
    NavItem { href: "/settings", label: "Settings", icon: "⚙" },
];

/// Whether `href` should be highlighted for the current `pathname`.
///
/// `/` only matches itself; other entries also match their sub-paths, so
/// `/campaigns/4` highlights "Campaigns".
pub fn is_active(pathname: &str, href: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

pub(crate) const NAV_STORAGE_KEY: &str = "affiliate_dashboard_nav_collapsed";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store bundle, restores the stored session once hydrated and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let stores = Stores::new();
    provide_context(stores);

    // Effects only run in the browser, after hydration.
    Effect::new(move || {
        let dark = crate::util::dark_mode::read_preference();
        crate::util::dark_mode::apply(dark);
        let collapsed = crate::util::storage::load_json::<bool>(NAV_STORAGE_KEY).unwrap_or(false);
        stores.ui.update(|u| {
            u.dark_mode = dark;
            u.nav_collapsed = collapsed;
        });
        crate::actions::spawn(crate::actions::auth::restore_session(stores));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/affiliate-dashboard.css"/>
        <Title text="Affiliate Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=OverviewPage/>
                <Route path=StaticSegment("campaigns") view=CampaignsPage/>
                <Route path=(StaticSegment("campaigns"), ParamSegment("id")) view=CampaignDetailPage/>
                <Route path=StaticSegment("tweets") view=TweetsPage/>
                <Route path=StaticSegment("affiliate-links") view=AffiliateLinksPage/>
                <Route path=StaticSegment("analytics") view=AnalyticsPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
    }
}
