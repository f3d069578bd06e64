//! Chat Panel Component
//!
//! Conversation with the assistant about the goal open in the modal.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use goalboard_core::chat::{ChatMessage, Sender};

use crate::context::use_dashboard;
use crate::markdown::parse_markdown;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn ChatPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let container = NodeRef::<html::Div>::new();

    // Wait one tick so the new message is in the DOM
    let scroll_to_bottom = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            if let Some(el) = container.get_untracked() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    };

    let send = move || {
        let now = js_sys::Date::now() as u64;
        let Some(request) = store.chat().write().begin_send(now) else {
            return;
        };
        scroll_to_bottom();

        let api = ctx.api();
        spawn_local(async move {
            let outcome = api.send_chat(request.goal_id, &request.message).await;
            let now = js_sys::Date::now() as u64;
            if store.chat().write().finish(request.epoch, outcome, now) {
                scroll_to_bottom();
            }
        });
    };

    view! {
        <div class="chat-panel">
            <div class="chat-messages" id="chat-container" node_ref=container>
                <Show when=move || store.chat().read().messages().is_empty()>
                    <p class="muted">"Ask for a plan, a first step, or a way to get unstuck."</p>
                </Show>
                <For
                    each=move || store.chat().read().messages().to_vec()
                    key=|message| message.id
                    children=move |message| view! { <ChatBubble message=message /> }
                />
                <Show when=move || store.chat().read().is_in_flight()>
                    <div class="chat-bubble assistant typing">"Thinking..."</div>
                </Show>
            </div>

            <form
                class="chat-input-row"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    placeholder="Ask about this goal..."
                    prop:value=move || store.chat().read().input().to_string()
                    on:input=move |ev| store.chat().write().set_input(event_target_value(&ev))
                />
                <button type="submit" disabled=move || !store.chat().read().can_send()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ChatBubble(message: ChatMessage) -> impl IntoView {
    match message.sender {
        Sender::User => view! {
            <div class="chat-bubble user">{message.text}</div>
        }.into_any(),
        Sender::Assistant => {
            let html = parse_markdown(&message.text);
            view! {
                <div class="chat-bubble assistant markdown-body" inner_html=html></div>
            }.into_any()
        }
    }
}
