use dioxus::prelude::*;
use tracing::Level;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    let level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("Failed to initialize logger: {e}");
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::SessionProvider {
            ui::AppShell {}
        }
    }
}
