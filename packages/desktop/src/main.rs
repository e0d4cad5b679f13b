use dioxus::prelude::*;
use tracing::Level;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dotenvy::dotenv().ok();

    let level = if std::env::var_os("MEMOPAD_DEBUG").is_some() {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SessionProvider {
            ui::AppShell {}
        }
    }
}
