#![allow(non_snake_case)]

mod address;
mod amount;
mod components;
mod host;
mod notification;
mod session;
mod state;
mod terms;

use dioxus::prelude::*;
use jbl_api::{ApiClient, ApiConfig};

use host::{LaunchContext, TelegramHost};
use notification::Notification;
use session::Session;
use state::SessionState;

const STYLE: &str = include_str!("../assets/style.css");

/// The session as wired into the running app.
pub type AppSession = Session<ApiClient, TelegramHost, Signal<SessionState>>;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},
    #[route("/staking")]
    Staking {},
    #[route("/wallet")]
    Wallet {},
    #[route("/profile")]
    Profile {},
    #[route("/support")]
    Support {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let client = use_hook(|| ApiClient::new(ApiConfig::default()));

    match client {
        Ok(api) => rsx! { Dashboard { api } },
        Err(e) => {
            tracing::error!(error = %e, "cannot build API client");
            rsx! {
                document::Style { {STYLE} }
                div { class: "page",
                    h1 { "JBL Staking" }
                    p { class: "error-text", "Configuration error: {e}" }
                }
            }
        }
    }
}

#[component]
fn Dashboard(api: ApiClient) -> Element {
    // Provide shared state to all components
    let state = use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| Signal::new(None::<Notification>));
    let launch = use_signal(LaunchContext::default);
    let telegram = TelegramHost::new(launch);
    use_context_provider(|| Session::new(api, telegram, state));

    use_hook(move || {
        host::prepare(&telegram);
        spawn(telegram.load_launch_context());
    });

    rsx! {
        document::Style { {STYLE} }
        Router::<Route> {}
    }
}

// ---------------------------------------------------------------------------
// Layout — top bar, content, tab bar
// ---------------------------------------------------------------------------

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app-container",
            components::layout::TopBar {}
            div { class: "main-content",
                Outlet::<Route> {}
            }
            components::layout::Toast {}
            components::layout::TabBar {}
        }
    }
}

// ---------------------------------------------------------------------------
// Route components — thin wrappers around the real components
// ---------------------------------------------------------------------------

#[component]
fn Home() -> Element {
    rsx! { components::home::HomePage {} }
}

#[component]
fn Staking() -> Element {
    rsx! { components::staking::StakingPage {} }
}

#[component]
fn Wallet() -> Element {
    rsx! { components::wallet::WalletPage {} }
}

#[component]
fn Profile() -> Element {
    rsx! { components::profile::ProfilePage {} }
}

#[component]
fn Support() -> Element {
    rsx! { components::support::SupportPage {} }
}
