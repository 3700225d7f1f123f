use dioxus::prelude::*;

use crate::amount::format_tokens;
use crate::notification::Notification;
use crate::state::SessionState;
use crate::AppSession;

#[component]
pub fn WalletPage() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let mut amount_str = use_signal(String::new);
    let mut tx_hash = use_signal(String::new);

    let connected = state.read().is_connected();
    let loading = state.read().loading;
    let address = state.read().wallet_address.clone();
    let balance = state.read().known_balance();
    let staked = state.read().stats.as_ref().map(|s| s.total_staked).unwrap_or(0.0);

    let on_deposit = move |_| {
        let mut session = session.clone();
        let input = amount_str.read().clone();
        let hash = tx_hash.read().clone();
        spawn(async move {
            match session.deposit(&input, Some(&hash)).await {
                Ok(receipt) => {
                    amount_str.set(String::new());
                    tx_hash.set(String::new());
                    toast.set(Some(Notification::deposited(&receipt)));
                }
                Err(e) => toast.set(Some(Notification::from_error(&e))),
            }
        });
    };

    rsx! {
        div { class: "page",
            h1 { "Wallet" }

            if connected {
                p { class: "label", "Address: " span { class: "mono", "{address}" } }

                div { class: "card-grid",
                    div { class: "result-card",
                        p { class: "label", "Available" }
                        p { class: "balance-large", "{format_tokens(balance)}" }
                    }
                    div { class: "result-card",
                        p { class: "label", "Staked" }
                        p { class: "balance-large", "{format_tokens(staked)}" }
                    }
                }

                h2 { "Deposit" }
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
                }
                div { class: "form-group",
                    label { "Transaction hash (optional)" }
                    input {
                        class: "input input-wide",
                        r#type: "text",
                        placeholder: "TON transaction hash",
                        value: "{tx_hash}",
                        oninput: move |e| tx_hash.set(e.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    disabled: loading,
                    onclick: on_deposit,
                    if loading { "Processing..." } else { "Deposit" }
                }
            } else {
                p { class: "hint", "Connect a wallet first." }
            }
        }
    }
}
