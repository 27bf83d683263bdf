/// Component-scoped stylesheet injected by [`crate::ui::App`]. No styles are
/// mutated on the document from Rust code; everything lives in this one
/// constant.
pub const CHAT_CSS: &str = r#"
:root {
    --color-bg-page: #000000;
    --color-bg-list: #121212;
    --color-bg-composer: #1e1e1e;
    --color-bg-input: #333333;
    --color-chat-user-bg: #4caf50;
    --color-chat-bot-bg: #333333;
    --color-accent: #007bff;
    --color-border: #333333;
    --color-input-border: #555555;
    --color-text: #ffffff;
    --color-timestamp: #9b9b9b;
}
@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}
@keyframes ellipsis {
    0% { width: 0; }
    100% { width: 3ch; }
}
body {
    margin: 0;
    background: var(--color-bg-page);
    color: var(--color-text);
    font-family: Arial, sans-serif;
}
.container {
    display: flex;
    flex-direction: column;
    align-items: center;
    padding: 20px;
    animation: fadeIn 0.5s ease-in-out;
}
.header { margin-bottom: 20px; font-size: 24px; font-weight: bold; }
.chat-box {
    display: flex;
    flex-direction: column;
    width: 100%;
    max-width: 600px;
    border: 1px solid var(--color-border);
    border-radius: 8px;
    overflow: hidden;
}
.chat-list {
    padding: 10px;
    height: 400px;
    overflow-y: auto;
    background: var(--color-bg-list);
}
.message-row { display: flex; margin-bottom: 10px; }
.message-row.user { justify-content: flex-end; }
.message-row.bot { justify-content: flex-start; }
.message-stack { max-width: 70%; }
.bubble {
    padding: 10px;
    border-radius: 10px;
    color: var(--color-text);
    animation: fadeIn 0.5s ease-in-out;
}
.bubble.user { background: var(--color-chat-user-bg); }
.bubble.bot { background: var(--color-chat-bot-bg); }
.bubble .md p { margin: 0 0 6px 0; }
.bubble .md p:last-child { margin-bottom: 0; }
.bubble .md pre {
    background: #1a1a1a;
    padding: 8px;
    border-radius: 6px;
    overflow-x: auto;
}
.loading-ellipsis {
    display: inline-block;
    width: 1ch;
    overflow: hidden;
    white-space: nowrap;
    vertical-align: bottom;
    animation: ellipsis 1.25s steps(4, end) infinite;
}
.bubble-controls { display: flex; justify-content: flex-end; margin-bottom: 4px; }
.action-btn {
    background: transparent;
    border: 1px solid var(--color-input-border);
    border-radius: 6px;
    color: var(--color-timestamp);
    font-size: 11px;
    padding: 2px 8px;
    cursor: pointer;
}
.action-btn:hover { color: var(--color-text); border-color: var(--color-text); }
.message-meta { font-size: 11px; color: var(--color-timestamp); margin-top: 2px; }
.message-meta.align-end { text-align: right; }
.message-meta.align-start { text-align: left; }
.composer {
    display: flex;
    flex-direction: column;
    padding: 10px;
    border-top: 1px solid var(--color-border);
    background: var(--color-bg-composer);
}
.composer textarea {
    padding: 10px;
    border-radius: 8px;
    border: 1px solid var(--color-input-border);
    resize: none;
    margin-bottom: 10px;
    background: var(--color-bg-input);
    color: var(--color-text);
    font: inherit;
}
.composer textarea:focus { outline: none; border-color: var(--color-text); }
.composer button {
    padding: 10px;
    border-radius: 8px;
    border: none;
    background: var(--color-accent);
    color: white;
    cursor: pointer;
    font-size: 16px;
    font-weight: bold;
}
"#;
