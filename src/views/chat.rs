use crate::ai;
use crate::transform::meme_speak;
use crate::types::{ChatMessage, Conversation, Role};
use crate::views::shared::markdown_to_html;
use dioxus::events::Key;
use dioxus::prelude::*;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};

/// How long the user's bubble sits alone before the loading placeholder
/// appears underneath it.
const PLACEHOLDER_DELAY: Duration = Duration::from_millis(250);

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Bot => "bot",
    }
}

fn format_message_timestamp(timestamp: Option<OffsetDateTime>) -> Option<String> {
    let mut datetime = timestamp?;
    if let Ok(offset) = UtcOffset::current_local_offset() {
        datetime = datetime.to_offset(offset);
    }
    datetime.format(MESSAGE_TIME_FORMAT).ok()
}

fn scroll_to_bottom() {
    let _ = document::eval(
        r#"const list = document.getElementById("chat-list");
           if (list) { list.scrollTop = list.scrollHeight; }"#,
    );
}

#[component]
pub fn ChatView() -> Element {
    let conversation = use_signal(Conversation::new);
    let mut input = use_signal(String::new);

    let mut send_message = {
        let mut conversation = conversation;
        let mut input_signal = input;
        move |text: String| {
            // Optimistic append; empty submissions go through unchanged.
            conversation.with_mut(|convo| {
                convo.push_user(text.clone());
            });
            input_signal.set(String::new());
            scroll_to_bottom();

            // Each submission runs on its own task. A second submit while
            // this one is in flight starts a second request; resolving by
            // message id keeps both replies on the right bubble no matter
            // which completes first.
            spawn(async move {
                tokio::time::sleep(PLACEHOLDER_DELAY).await;
                let pending = conversation.with_mut(|convo| convo.push_placeholder());
                scroll_to_bottom();

                match ai::chat_reply(&text).await {
                    Ok(reply) => {
                        let styled = meme_speak(&reply);
                        conversation.with_mut(|convo| {
                            convo.resolve(pending, styled);
                        });
                        scroll_to_bottom();
                    }
                    // The placeholder stays on screen; nothing reaches the
                    // user beyond this log line.
                    Err(err) => tracing::error!("chat request failed: {err}"),
                }
            });
        }
    };

    let messages_snapshot: Vec<ChatMessage> = conversation.with(|convo| convo.messages().to_vec());

    rsx! {
        div { class: "chat-box",
            div { id: "chat-list", class: "chat-list",
                for msg in messages_snapshot.iter() {
                    div {
                        key: "{msg.id}",
                        class: format_args!("message-row {}", role_class(msg.role)),
                        div { class: "message-stack",
                            div { class: format_args!("bubble {}", role_class(msg.role)),
                                if msg.pending {
                                    span { class: "loading-ellipsis", "{msg.content}" }
                                } else if matches!(msg.role, Role::Bot) {
                                    BotBubble { content: msg.content.clone() }
                                } else {
                                    "{msg.content}"
                                }
                            }
                            if let Some(ts) = format_message_timestamp(msg.created_at) {
                                div {
                                    class: format_args!(
                                        "message-meta {}",
                                        match msg.role { Role::User => "align-end", Role::Bot => "align-start" }
                                    ),
                                    span { class: "message-timestamp", "{ts}" }
                                }
                            }
                        }
                    }
                }
            }

            form { class: "composer",
                textarea {
                    rows: "4",
                    placeholder: "Ask me something...",
                    value: "{input}",
                    oninput: move |ev| input.set(ev.value()),
                    onkeydown: move |ev| {
                        if ev.key() == Key::Enter && !ev.modifiers().shift() {
                            ev.prevent_default();
                            let text = input();
                            send_message(text);
                        }
                    },
                    autofocus: true,
                }
                button {
                    r#type: "button",
                    onclick: move |_| {
                        let text = input();
                        send_message(text);
                    },
                    "Send"
                }
            }
        }
    }
}

#[component]
fn BotBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                if let Ok(mut cb) = arboard::Clipboard::new() {
                    let _ = cb.set_text(raw);
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            let _ = raw;
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Copy reply", onclick: on_copy, "Copy" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}
