//! Admin Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::RoomGrid;
use crate::context::use_app_context;
use crate::controllers::admin::{self, AdminView};
use crate::grid::{occupancy, GridLayout};

/// Browser confirm dialog; a missing window counts as "no"
fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let ctx = use_app_context();
    let view_state = RwSignal::new(AdminView::Unauthenticated);
    let (loading, set_loading) = signal(true);
    let (busy, set_busy) = signal(false);
    let (key_input, set_key_input) = signal(String::new());
    let layout = RwSignal::new(GridLayout::Grouped);

    Effect::new(move |_| {
        let services = ctx.services();
        spawn_local(async move {
            let restored = admin::check_auth_state(&services.api, services.session.as_ref()).await;
            view_state.set(restored);
            set_loading.set(false);
        });
    });

    let rooms = Memo::new(move |_| match view_state.get() {
        AdminView::Authenticated(rooms) => Some(rooms),
        AdminView::Unauthenticated => None,
    });
    let signed_in = Memo::new(move |_| rooms.with(Option::is_some));
    let beds = Signal::derive(move || rooms.get().unwrap_or_default());

    let login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let services = ctx.services();
        let key = key_input.get_untracked();
        set_busy.set(true);
        spawn_local(async move {
            match admin::authenticate(&services.api, services.session.as_ref(), &key).await {
                Ok(rooms) => {
                    set_key_input.set(String::new());
                    ctx.dismiss_notice();
                    view_state.set(AdminView::Authenticated(rooms));
                }
                Err(e) => ctx.error(e.to_string()),
            }
            set_busy.set(false);
        });
    };

    let run_allocation = move |_| {
        let services = ctx.services();
        set_busy.set(true);
        spawn_local(async move {
            match admin::auto_allocate(&services.api, services.session.as_ref(), confirm).await {
                Ok(Some(outcome)) => {
                    ctx.success(outcome.message);
                    view_state.set(AdminView::Authenticated(outcome.rooms));
                }
                Ok(None) => {}
                Err(e) => {
                    if admin::is_auth_failure(&e) {
                        view_state.set(AdminView::Unauthenticated);
                    }
                    ctx.error(e.to_string());
                }
            }
            set_busy.set(false);
        });
    };

    let logout = move |_| {
        admin::logout(ctx.services().session.as_ref());
        view_state.set(AdminView::Unauthenticated);
        ctx.info("Admin session ended.");
    };

    let toggle_layout = move |_| {
        layout.update(|l| {
            *l = match l {
                GridLayout::Grouped => GridLayout::PerBed,
                GridLayout::PerBed => GridLayout::Grouped,
            }
        });
    };

    let summary = move || {
        let (occupied, vacant) = beds.with(|b| occupancy(b));
        format!("{} occupied, {} vacant", occupied, vacant)
    };

    view! {
        <section class="admin-dashboard">
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="loading">"Loading..."</p> }
            >
                <Show
                    when=move || signed_in.get()
                    fallback=move || view! {
                        <form class="admin-login" on:submit=login>
                            <h2>"Admin Login"</h2>
                            <input
                                type="password"
                                placeholder="Admin key"
                                prop:value=move || key_input.get()
                                on:input=move |ev| set_key_input.set(event_target_value(&ev))
                            />
                            <button type="submit" disabled=move || busy.get()>"Enter"</button>
                        </form>
                    }
                >
                    <div class="admin-toolbar">
                        <h2>"Room Allocation"</h2>
                        <span class="occupancy">{summary}</span>
                        <button on:click=toggle_layout>
                            {move || match layout.get() {
                                GridLayout::Grouped => "Show per bed",
                                GridLayout::PerBed => "Group by room",
                            }}
                        </button>
                        <button class="primary" disabled=move || busy.get() on:click=run_allocation>
                            "Run Auto-Allocation"
                        </button>
                        <button class="logout" on:click=logout>"Logout"</button>
                    </div>
                    <RoomGrid beds=beds layout=layout />
                </Show>
            </Show>
        </section>
    }
}
