//! Notice Banner Component
//!
//! Shows the current inline notice with a close button.

use leptos::prelude::*;

use crate::context::{use_app_context, NoticeKind};

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let ctx = use_app_context();
    let notice = ctx.notice();

    move || {
        notice.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Info => "notice info",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class=class role="status">
                    <span class="notice-text">{n.text}</span>
                    <button class="notice-close" on:click=move |_| ctx.dismiss_notice()>"×"</button>
                </div>
            }
        })
    }
}
