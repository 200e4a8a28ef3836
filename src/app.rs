//! Hostel Portal App
//!
//! Root component. Picks the page from the URL path and provides the app
//! context to everything below it.

use leptos::prelude::*;

use crate::components::NoticeBanner;
use crate::context::{AppContext, Services};
use crate::pages::{AdminDashboard, StudentPortal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    StudentPortal,
    Admin,
}

impl Page {
    /// `/admin` and `/admin.html` open the dashboard; anything else is the portal
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/').rsplit('/').next() {
            Some("admin") | Some("admin.html") => Page::Admin,
            _ => Page::StudentPortal,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::StudentPortal => "Hostel Portal",
            Page::Admin => "Hostel Admin",
        }
    }
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new(Services::browser()));

    let page = Page::from_path(&current_path());
    log::info!("Opening {:?}", page);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>{page.title()}</h1>
            </header>
            <NoticeBanner />
            <main class="main-content">
                {match page {
                    Page::StudentPortal => view! { <StudentPortal /> }.into_any(),
                    Page::Admin => view! { <AdminDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
