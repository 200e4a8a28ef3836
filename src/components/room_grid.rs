//! Room Grid Component
//!
//! Renders bed records as room cards or bed cards. The whole grid is derived
//! from the current bed list on every change.

use leptos::prelude::*;

use crate::grid::{bed_cards, group_rooms, BedCard, GridLayout, Room};
use crate::models::BedRecord;

#[component]
pub fn RoomGrid(
    #[prop(into)] beds: Signal<Vec<BedRecord>>,
    #[prop(into)] layout: Signal<GridLayout>,
) -> impl IntoView {
    let content = move || {
        if beds.with(Vec::is_empty) {
            return view! { <p class="grid-empty">"No rooms to show."</p> }.into_any();
        }
        match layout.get() {
            GridLayout::Grouped => beds
                .with(|b| group_rooms(b))
                .into_iter()
                .map(|room| view! { <RoomCard room=room /> })
                .collect_view()
                .into_any(),
            GridLayout::PerBed => beds
                .with(|b| bed_cards(b))
                .into_iter()
                .map(|card| view! { <BedCardView card=card /> })
                .collect_view()
                .into_any(),
        }
    };

    view! {
        <div class="room-grid">{content}</div>
    }
}

#[component]
fn RoomCard(room: Room) -> impl IntoView {
    let title = room.title();
    let subtitle = room.subtitle();
    let beds = room
        .beds
        .iter()
        .map(|bed| {
            let class = bed.state.css_class();
            let summary = bed.summary();
            view! { <div class=class>{summary}</div> }
        })
        .collect_view();

    view! {
        <div class="room-card">
            <div class="room-title">{title}</div>
            <div class="room-subtitle">{subtitle}</div>
            {beds}
        </div>
    }
}

#[component]
fn BedCardView(card: BedCard) -> impl IntoView {
    let class = format!("bed-card {}", card.state.css_class());
    let title = card.title();
    let label = card.state.label().to_string();

    view! {
        <div class=class>
            <div class="bed-card-title">{title}</div>
            <div class="bed-card-state">{label}</div>
        </div>
    }
}
