//! Status Panel Component
//!
//! Allocation details, pending notice, or the application form.

use leptos::prelude::*;

use crate::controllers::portal::StatusView;
use crate::models::{StatusResponse, ROOM_TYPES};

#[component]
pub fn StatusPanel(
    #[prop(into)] status: Signal<StatusResponse>,
    #[prop(into)] on_apply: Callback<String>,
    #[prop(into)] busy: Signal<bool>,
) -> impl IntoView {
    let (room_type, set_room_type) = signal(ROOM_TYPES[0].to_string());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_apply.run(room_type.get_untracked());
    };

    move || match status.with(StatusView::from_status) {
        StatusView::Allocated { block, room, bed } => view! {
            <div class="status-panel allocated">
                <h3>"Status: Allocated"</h3>
                <p><strong>"Block: "</strong>{block}</p>
                <p><strong>"Room: "</strong>{room}</p>
                <p><strong>"Bed: "</strong>{bed}</p>
            </div>
        }
        .into_any(),
        StatusView::Pending => view! {
            <div class="status-panel pending">
                <h3>"Status: Pending"</h3>
                <p>"Your application is under review. Allocation will be done by the admin."</p>
            </div>
        }
        .into_any(),
        StatusView::Apply => view! {
            <form class="status-panel apply" on:submit=submit>
                <h3>"Apply for a Room"</h3>
                <p>"You have not applied for a hostel room yet."</p>
                <select
                    prop:value=move || room_type.get()
                    on:change=move |ev| set_room_type.set(event_target_value(&ev))
                >
                    {ROOM_TYPES
                        .iter()
                        .map(|t| view! { <option value=*t>{*t}</option> })
                        .collect_view()}
                </select>
                <button type="submit" disabled=move || busy.get()>"Submit Application"</button>
            </form>
        }
        .into_any(),
    }
}
