//! Goalboard Frontend App
//!
//! Top navigation switching between the dashboard and analytics views.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::components::{DashboardView, StatsView};
use crate::config::ApiConfig;

#[derive(Clone, Copy, PartialEq)]
enum Page {
    Dashboard,
    Analytics,
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::from_document();
    log::info!("[App] Starting, api base {:?}", config.base_url);
    provide_context(ApiClient::new(config));

    let (page, set_page) = signal(Page::Dashboard);
    let nav_class = move |which: Page| {
        move || if page.get() == which { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <div class="app-layout">
            <nav class="top-nav">
                <span class="brand">"Goalboard"</span>
                <button class=nav_class(Page::Dashboard) on:click=move |_| set_page.set(Page::Dashboard)>
                    "Dashboard"
                </button>
                <button class=nav_class(Page::Analytics) on:click=move |_| set_page.set(Page::Analytics)>
                    "Analytics"
                </button>
            </nav>

            <main class="main-content">
                {move || match page.get() {
                    Page::Dashboard => view! { <DashboardView /> }.into_any(),
                    Page::Analytics => view! { <StatsView /> }.into_any(),
                }}
            </main>
        </div>
    }
}
