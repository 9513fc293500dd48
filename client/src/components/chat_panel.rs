//! Assistant chat panel: transcript plus message input.

use leptos::prelude::*;

use crate::net::chat_api::ChatApi;
use crate::state::chat::{ChatState, Sender};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let api = expect_context::<ChatApi>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let input = RwSignal::new(String::new());

    let do_send = move || {
        let mut outgoing = None;
        chat.update(|s| outgoing = s.begin_send(&input.get_untracked()));
        let Some(message) = outgoing else {
            return;
        };
        input.set(String::new());
        let api = api.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.send(&message).await {
                Ok(reply) => chat.update(|s| s.receive(&reply)),
                Err(e) => {
                    leptos::logging::warn!("chat send failed: {e}");
                    chat.update(|s| s.fail(&e));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (api, message);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages">
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-panel__empty">
                                "Ask me to add, list, or complete tasks."
                            </div>
                        }
                            .into_any();
                    }
                    messages
                        .into_iter()
                        .map(|msg| {
                            let class = match msg.sender {
                                Sender::User => "chat-panel__message chat-panel__message--user",
                                Sender::Assistant => "chat-panel__message chat-panel__message--assistant",
                            };
                            let tools = (msg.tool_calls > 0)
                                .then(|| view! { <span class="chat-panel__tools">{format!("{} tool call(s)", msg.tool_calls)}</span> });
                            view! {
                                <div class=class>
                                    <span class="chat-panel__text">{msg.text}</span>
                                    {tools}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                <Show when=move || chat.get().sending>
                    <div class="chat-panel__pending">"Thinking..."</div>
                </Show>
            </div>

            <Show when=move || chat.get().error.is_some()>
                <p class="form-error">{move || chat.get().error.unwrap_or_default()}</p>
            </Show>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    type="submit"
                    disabled=move || input.get().trim().is_empty() || chat.get().sending
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
