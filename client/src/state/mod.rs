//! Client-side store modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each store is a plain `Clone + Default` struct wrapped in an `RwSignal` and
//! provided through Leptos context by `app::App`. Stores cache the latest
//! backend response; the backend stays the source of truth.

pub mod affiliate_links;
pub mod analytics;
pub mod auth;
pub mod campaigns;
pub mod collection;
pub mod toast;
pub mod tweets;
pub mod ui;

use leptos::prelude::*;

use self::affiliate_links::AffiliateLinksState;
use self::analytics::AnalyticsState;
use self::auth::AuthState;
use self::campaigns::CampaignsState;
use self::toast::ToastState;
use self::tweets::TweetsState;
use self::ui::UiState;

/// Every store signal, provided once through context.
#[derive(Clone, Copy)]
pub struct Stores {
    pub auth: RwSignal<AuthState>,
    pub campaigns: RwSignal<CampaignsState>,
    pub tweets: RwSignal<TweetsState>,
    pub links: RwSignal<AffiliateLinksState>,
    pub analytics: RwSignal<AnalyticsState>,
    pub toasts: RwSignal<ToastState>,
    pub ui: RwSignal<UiState>,
}

impl Stores {
    pub fn new() -> Self {
        Self {
            auth: RwSignal::new(AuthState::default()),
            campaigns: RwSignal::new(CampaignsState::default()),
            tweets: RwSignal::new(TweetsState::default()),
            links: RwSignal::new(AffiliateLinksState::default()),
            analytics: RwSignal::new(AnalyticsState::default()),
            toasts: RwSignal::new(ToastState::default()),
            ui: RwSignal::new(UiState::default()),
        }
    }

    /// Drop cached account data after sign-out.
    pub fn reset_data(self) {
        self.campaigns.set(CampaignsState::default());
        self.tweets.set(TweetsState::default());
        self.links.set(AffiliateLinksState::default());
        self.analytics.set(AnalyticsState::default());
    }
}

impl Default for Stores {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetch the stores provided by `App`.
pub fn use_stores() -> Stores {
    expect_context::<Stores>()
}
