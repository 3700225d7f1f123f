use dioxus::prelude::*;
use jbl_api::Stake;

use crate::amount::{format_tokens, parse_amount};
use crate::notification::Notification;
use crate::state::SessionState;
use crate::terms::TERMS;
use crate::AppSession;

#[component]
pub fn StakingPage() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let mut amount_str = use_signal(String::new);

    let connected = state.read().is_connected();
    let loading = state.read().loading;
    let balance = state.read().known_balance();
    let stakes = state
        .read()
        .stats
        .as_ref()
        .map(|s| s.active_stakes.clone())
        .unwrap_or_default();

    let preview = parse_amount(&amount_str.read()).map(|a| TERMS.term_reward(a));

    let on_stake = move |_| {
        let mut session = session.clone();
        let input = amount_str.read().clone();
        spawn(async move {
            match session.stake(&input).await {
                Ok(receipt) => {
                    amount_str.set(String::new());
                    toast.set(Some(Notification::staked(&receipt)));
                }
                Err(e) => toast.set(Some(Notification::from_error(&e))),
            }
        });
    };

    rsx! {
        div { class: "page",
            h1 { "Staking" }
            p { class: "subtitle", "Lock JBL for a fixed term and earn daily rewards." }

            div { class: "terms-grid",
                TermTile { label: "APY", value: format!("{}%", TERMS.apy_percent) }
                TermTile { label: "Term", value: format!("{} days", TERMS.term_days) }
                TermTile { label: "Commission", value: format!("{}%", TERMS.commission_percent) }
            }

            if connected {
                p { class: "label", "Available: " span { class: "mono", "{format_tokens(balance)}" } }

                div { class: "form-group",
                    label { "Amount (JBL)" }
                    input {
                        class: "input",
                        r#type: "text",
                        inputmode: "decimal",
                        placeholder: "100",
                        value: "{amount_str}",
                        oninput: move |e| amount_str.set(e.value()),
                    }
                    if let Some(reward) = preview {
                        p { class: "hint", "Estimated reward after {TERMS.term_days} days: +{format_tokens(reward)}" }
                    }
                }

                button {
                    class: "btn btn-primary",
                    disabled: loading,
                    onclick: on_stake,
                    if loading { "Processing..." } else { "Stake JBL" }
                }

                h2 { "Active stakes" }
                if stakes.is_empty() {
                    p { class: "hint", "No active stakes." }
                }
                for stake in stakes {
                    StakeRow { key: "{stake.id}", stake: stake.clone() }
                }
            } else {
                p { class: "hint", "Connect a wallet first." }
            }

            div { class: "info-card",
                h3 { "How it works" }
                ul {
                    li { "Rewards accrue daily at {TERMS.apy_percent}% APY" }
                    li { "Platform commission: {TERMS.commission_percent}% of the reward" }
                    li { "Withdrawing before the term ends forfeits {TERMS.early_withdrawal_penalty_percent}% of the reward" }
                }
            }
        }
    }
}

#[component]
fn TermTile(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "term-tile",
            p { class: "label", "{label}" }
            p { class: "term-value", "{value}" }
        }
    }
}

#[component]
fn StakeRow(stake: Stake) -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let loading = state.read().loading;
    let stake_id = stake.id;
    let ends = stake.end_date.format("%d.%m.%Y").to_string();

    let on_unstake = move |_| {
        let mut session = session.clone();
        spawn(async move {
            match session.unstake(stake_id).await {
                Ok(receipt) => toast.set(Some(Notification::unstaked(&receipt))),
                Err(e) => toast.set(Some(Notification::from_error(&e))),
            }
        });
    };

    rsx! {
        div { class: "stake-row",
            div { class: "stake-info",
                p { class: "stake-amount", "{format_tokens(stake.amount)}" }
                p { class: "hint",
                    "+{format_tokens(stake.current_reward)} accrued · {format_tokens(stake.daily_reward)}/day"
                }
                p { class: "hint",
                    "Ends {ends} · {stake.days_remaining} day(s) left"
                }
                if stake.is_locked() {
                    p { class: "warning-text",
                        "Early withdrawal forfeits {TERMS.early_withdrawal_penalty_percent}% of the reward"
                    }
                }
            }
            button {
                class: "btn btn-secondary",
                disabled: loading,
                onclick: on_unstake,
                "Unstake"
            }
        }
    }
}
