use dioxus::prelude::*;

use super::connection_status::ConnectButton;
use crate::amount::format_tokens;
use crate::state::SessionState;
use crate::terms::TERMS;
use crate::AppSession;

#[component]
pub fn HomePage() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();

    let connected = state.read().is_connected();
    let stats = state.read().stats.clone();
    let loading = state.read().loading;

    let on_refresh = move |_| {
        let mut session = session.clone();
        spawn(async move {
            session.refresh_data().await;
        });
    };

    rsx! {
        div { class: "page",
            h1 { "JBL Staking" }
            p { class: "subtitle", "Stake JBL for {TERMS.term_days} days at {TERMS.apy_percent}% APY" }

            if !connected {
                div { class: "connect-nudge",
                    p { class: "empty-desc",
                        "Connect a wallet to see your balance and start staking."
                    }
                    ConnectButton {}
                }
            } else if let Some(stats) = stats {
                div { class: "card-grid",
                    StatCard {
                        label: "Total value",
                        value: format_tokens(stats.balance + stats.total_staked),
                    }
                    StatCard {
                        label: "Staked",
                        value: format_tokens(stats.total_staked),
                        badge: format!("{}% APY", TERMS.apy_percent),
                    }
                    StatCard {
                        label: "Earned",
                        value: format!("+{}", format_tokens(stats.total_earned)),
                    }
                    StatCard {
                        label: "Referral earnings",
                        value: format_tokens(stats.referral_earnings),
                    }
                }
                p { class: "hint",
                    "{stats.active_stakes.len()} active stake(s)"
                }
                button {
                    class: "btn btn-secondary",
                    disabled: loading,
                    onclick: on_refresh,
                    "Refresh"
                }
            } else {
                p { class: "hint", "No stats fetched yet." }
                button {
                    class: "btn btn-secondary",
                    disabled: loading,
                    onclick: on_refresh,
                    "Refresh"
                }
            }
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: String, badge: Option<String>) -> Element {
    rsx! {
        div { class: "result-card",
            div { class: "card-header",
                span { class: "label", "{label}" }
                if let Some(badge) = badge {
                    span { class: "badge", "{badge}" }
                }
            }
            p { class: "card-value", "{value}" }
        }
    }
}
