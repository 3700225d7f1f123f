use dioxus::prelude::*;

use super::connection_status::ConnectionStatusIndicator;
use crate::address::shorten_address;
use crate::amount::format_tokens;
use crate::notification::{Notification, NotificationKind};
use crate::state::SessionState;
use crate::Route;

#[component]
pub fn TopBar() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let address = state.read().wallet_address.clone();
    let balance = state.read().stats.as_ref().map(|s| s.balance);

    rsx! {
        header { class: "topbar",
            div { class: "topbar-left",
                span { class: "brand-icon", "◈" }
                span { class: "brand-text", "JBL STAKING" }
                if !address.is_empty() {
                    div { class: "topbar-divider" }
                    span { class: "mono", "{shorten_address(&address)}" }
                }
                if let Some(balance) = balance {
                    div { class: "topbar-divider" }
                    div { class: "topbar-balance",
                        span { class: "topbar-label", "Balance" }
                        span { class: "topbar-value", "{format_tokens(balance)}" }
                    }
                }
            }
            div { class: "topbar-right",
                ConnectionStatusIndicator {}
            }
        }
    }
}

#[component]
pub fn TabBar() -> Element {
    rsx! {
        nav { class: "tabbar",
            TabLink { to: Route::Home {}, label: "Home", icon: "⌂" }
            TabLink { to: Route::Staking {}, label: "Staking", icon: "◎" }
            TabLink { to: Route::Wallet {}, label: "Wallet", icon: "▣" }
            TabLink { to: Route::Profile {}, label: "Profile", icon: "☺" }
            TabLink { to: Route::Support {}, label: "Support", icon: "?" }
        }
    }
}

#[component]
fn TabLink(to: Route, label: &'static str, icon: &'static str) -> Element {
    rsx! {
        Link { class: "tab-link", active_class: "tab-link-active", to: to,
            span { class: "tab-icon", "{icon}" }
            span { class: "tab-label", "{label}" }
        }
    }
}

/// The single visible notification, dismissed on click.
#[component]
pub fn Toast() -> Element {
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let Some(note) = toast.read().clone() else {
        return rsx! {};
    };

    let class = match note.kind {
        NotificationKind::Success => "toast toast-success",
        NotificationKind::Info => "toast toast-info",
        NotificationKind::Error => "toast toast-error",
    };

    rsx! {
        div { class: class, onclick: move |_| toast.set(None),
            p { class: "toast-title", "{note.title}" }
            p { class: "toast-desc", "{note.description}" }
        }
    }
}
