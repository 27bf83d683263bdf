use crate::theme::CHAT_CSS;
use crate::views::ChatView;
use dioxus::prelude::*;

#[component]
pub fn App() -> Element {
    rsx! {
        style { dangerous_inner_html: "{CHAT_CSS}" }
        div { class: "container",
            h1 { class: "header", "🗿 Not ur Avg Chatbot 🗿" }
            ChatView {}
        }
    }
}
