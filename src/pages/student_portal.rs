//! Student Portal Page
//!
//! Login/registration when signed out; status, application form, room grid
//! and the assistant when signed in.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{AuthTab, AuthTabs, ChatWidget, RoomGrid, StatusPanel};
use crate::context::use_app_context;
use crate::controllers::portal::{self, LoginForm, PortalView, RegistrationForm};
use crate::grid::GridLayout;
use crate::models::ApplicationStatus;

#[component]
pub fn StudentPortal() -> impl IntoView {
    let ctx = use_app_context();
    let view_state = RwSignal::new(PortalView::Unauthenticated);
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);
    let tab = RwSignal::new(AuthTab::Login);
    let login_email = RwSignal::new(String::new());

    // Restore a remembered login once
    Effect::new(move |_| {
        let services = ctx.services();
        spawn_local(async move {
            let restored = portal::check_login_state(&services.api, services.local.as_ref()).await;
            view_state.set(restored);
            set_loading.set(false);
        });
    });

    let dashboard = Memo::new(move |_| match view_state.get() {
        PortalView::Authenticated(dashboard) => Some(dashboard),
        PortalView::Unauthenticated => None,
    });
    // Only signing in or out swaps the page; a refreshed dashboard keeps the chat open
    let signed_in_as = Memo::new(move |_| dashboard.with(|d| d.as_ref().map(|d| d.email.clone())));

    let on_login = move |form: LoginForm| {
        let services = ctx.services();
        set_busy.set(true);
        spawn_local(async move {
            match portal::login(&services.api, services.local.as_ref(), &form).await {
                Ok(dashboard) => {
                    ctx.dismiss_notice();
                    view_state.set(PortalView::Authenticated(dashboard));
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let on_register = move |form: RegistrationForm| {
        let services = ctx.services();
        set_busy.set(true);
        spawn_local(async move {
            match portal::register(&services.api, &form).await {
                Ok(message) => {
                    ctx.success(message);
                    login_email.set(form.email.trim().to_string());
                    tab.set(AuthTab::Login);
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let on_apply = move |room_type: String| {
        let services = ctx.services();
        set_busy.set(true);
        spawn_local(async move {
            match portal::apply(&services.api, services.local.as_ref(), &room_type).await {
                Ok(outcome) => match outcome.dashboard {
                    Ok(dashboard) => {
                        ctx.success(outcome.message);
                        view_state.set(PortalView::Authenticated(dashboard));
                    }
                    Err(e) => {
                        // The application went through; hide the form until the next reload
                        view_state.update(|v| {
                            if let PortalView::Authenticated(d) = v {
                                d.status.status = ApplicationStatus::Pending;
                            }
                        });
                        ctx.error(format!("{} Could not refresh your status: {}", outcome.message, e));
                    }
                },
                Err(e) => ctx.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let on_logout = move |_| {
        portal::logout(ctx.services().local.as_ref());
        view_state.set(PortalView::Unauthenticated);
        ctx.info("You have been logged out.");
    };

    view! {
        <section class="student-portal">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                {move || match signed_in_as.get() {
                    None => view! {
                        <AuthTabs
                            tab=tab
                            login_email=login_email
                            on_login=on_login
                            on_register=on_register
                            busy=busy
                        />
                    }
                    .into_any(),
                    Some(email) => view! {
                        <div class="dashboard">
                            <div class="dashboard-header">
                                <h2>{format!("Welcome, {}", email)}</h2>
                                <button class="logout" on:click=on_logout>"Logout"</button>
                            </div>
                            <StatusPanel
                                status=Signal::derive(move || {
                                    dashboard.with(|d| d.as_ref().map(|d| d.status.clone()).unwrap_or_default())
                                })
                                on_apply=on_apply
                                busy=busy
                            />
                            <h3>"Room Availability"</h3>
                            <RoomGrid
                                beds=Signal::derive(move || {
                                    dashboard.with(|d| d.as_ref().map(|d| d.rooms.clone()).unwrap_or_default())
                                })
                                layout=GridLayout::Grouped
                            />
                            <ChatWidget />
                        </div>
                    }
                    .into_any(),
                }}
            </Show>
        </section>
    }
}
