#[cfg(not(target_arch = "wasm32"))]
fn load_env() {
    // Picks up OPENROUTER_API_KEY / CHAT_MODEL overrides for desktop dev runs.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_env() {}

fn main() {
    load_env();
    tracing_subscriber::fmt::init();
    dioxus::launch(skibidi::ui::App);
}
