//! Chat Widget Component
//!
//! Floating assistant panel. Opening it the first time asks the assistant to
//! introduce itself; replies are rendered as Markdown.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::CONFIG;
use crate::context::use_app_context;
use crate::controllers::chat::{self, ChatEntry, ChatTranscript, PendingReply, Sender};
use crate::markdown::parse_markdown;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let ctx = use_app_context();
    let (open, set_open) = signal(false);
    let (input, set_input) = signal(String::new());
    let transcript = RwSignal::new(ChatTranscript::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    let dispatch = move |pending: PendingReply| {
        let api = ctx.services().api;
        spawn_local(async move {
            let reply = chat::ask(&api, &pending).await;
            transcript.update(|t| t.resolve(pending.ticket, reply));
        });
    };

    let toggle = move |_| {
        let now_open = !open.get_untracked();
        set_open.set(now_open);
        if now_open {
            let mut pending = None;
            transcript.update(|t| pending = t.begin_intro(&CONFIG.chat_intro_query));
            if let Some(pending) = pending {
                dispatch(pending);
            }
        }
    };

    let send = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let mut pending = None;
        transcript.update(|t| pending = t.submit(&input.get_untracked()));
        if let Some(pending) = pending {
            set_input.set(String::new());
            dispatch(pending);
        }
    };

    // Keep the newest message in view
    Effect::new(move |_| {
        transcript.track();
        if let Some(div) = messages_ref.get() {
            div.set_scroll_top(div.scroll_height());
        }
    });

    view! {
        <div class="chat-widget">
            <Show when=move || open.get()>
                <div class="chat-window">
                    <div class="chat-header">
                        <span>"Hostel Buddy"</span>
                        <button class="chat-close" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                    <div class="chat-messages" node_ref=messages_ref>
                        <For
                            each=move || transcript.with(|t| t.entries().to_vec())
                            key=|entry| entry.clone()
                            children=move |entry| render_entry(entry)
                        />
                    </div>
                    <form class="chat-input" on:submit=send>
                        <input
                            type="text"
                            placeholder="Ask me anything..."
                            prop:value=move || input.get()
                            on:input=move |ev| set_input.set(event_target_value(&ev))
                        />
                        <button type="submit">"Send"</button>
                    </form>
                </div>
            </Show>
            <button class="chat-toggle" on:click=toggle>"💬"</button>
        </div>
    }
}

fn render_entry(entry: ChatEntry) -> AnyView {
    match entry {
        ChatEntry::Thinking { .. } => view! {
            <div class="chat-message assistant thinking">"Thinking..."</div>
        }
        .into_any(),
        ChatEntry::Message { sender: Sender::User, text, .. } => view! {
            <div class="chat-message user">{text}</div>
        }
        .into_any(),
        ChatEntry::Message { sender: Sender::Assistant, text, .. } => view! {
            <div class="chat-message assistant" inner_html=parse_markdown(&text)></div>
        }
        .into_any(),
    }
}
