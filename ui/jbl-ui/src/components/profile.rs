use dioxus::prelude::*;

use crate::address::shorten_address;
use crate::amount::format_tokens;
use crate::host::copy_to_clipboard;
use crate::notification::Notification;
use crate::state::SessionState;
use crate::terms::TERMS;
use crate::AppSession;

const BOT_LINK: &str = "https://t.me/jbl_staking_bot";

/// Invite link that opens the mini app with `code` as its start parameter.
fn referral_link(code: &str) -> String {
    format!("{BOT_LINK}?startapp={code}")
}

/// Staked and earned totals. The stats snapshot is re-fetched after every
/// action; the user record only at connect.
fn lifetime_totals(state: &SessionState) -> (f64, f64) {
    match (&state.stats, &state.user) {
        (Some(stats), _) => (stats.total_staked, stats.total_earned),
        (None, Some(user)) => (user.total_staked, user.total_earned),
        (None, None) => (0.0, 0.0),
    }
}

#[component]
pub fn ProfilePage() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let connected = state.read().is_connected();
    let user = if connected { state.read().user.clone() } else { None };
    let referrals = state.read().referrals.clone();
    let (total_staked, total_earned) = lifetime_totals(&state.read());

    // Referral stats are not part of the connect flow; fetch them when the
    // tab is opened and again for every new address.
    let address = use_memo(move || state.read().wallet_address.clone());
    use_effect(move || {
        if !address.read().is_empty() {
            let mut session = session.clone();
            spawn(async move {
                session.load_referrals().await;
            });
        }
    });

    rsx! {
        div { class: "page",
            h1 { "Profile" }

            if let Some(user) = user {
                {
                    let link = referral_link(&user.referral_code);
                    let code = user.referral_code.clone();
                    rsx! {
                        div { class: "result-card",
                            p { class: "label", "Wallet" }
                            p { class: "mono", "{shorten_address(&user.wallet_address)}" }
                            if let Some(telegram_id) = user.telegram_id {
                                p { class: "hint", "Telegram ID: {telegram_id}" }
                            }
                        }

                        div { class: "card-grid",
                            div { class: "result-card",
                                p { class: "label", "Total staked" }
                                p { class: "card-value", "{format_tokens(total_staked)}" }
                            }
                            div { class: "result-card",
                                p { class: "label", "Total earned" }
                                p { class: "card-value", "{format_tokens(total_earned)}" }
                            }
                        }

                        h2 { "Referral program" }
                        p { class: "hint",
                            "Earn {TERMS.referral_bonus_percent}% of what your referrals stake."
                        }
                        div { class: "referral-code",
                            span { class: "mono", "{user.referral_code}" }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    copy_to_clipboard(&code);
                                    toast.set(Some(Notification::copied("Referral code")));
                                },
                                "Copy code"
                            }
                            button {
                                class: "btn btn-secondary",
                                onclick: move |_| {
                                    copy_to_clipboard(&link);
                                    toast.set(Some(Notification::copied("Referral link")));
                                },
                                "Copy link"
                            }
                        }

                        match referrals {
                            Some(r) => rsx! {
                                div { class: "card-grid",
                                    div { class: "result-card",
                                        p { class: "label", "Referrals" }
                                        p { class: "card-value", "{r.total_referrals}" }
                                    }
                                    div { class: "result-card",
                                        p { class: "label", "Earned from referrals" }
                                        p { class: "card-value", "{format_tokens(r.total_earned)}" }
                                    }
                                }
                            },
                            None => rsx! {
                                p { class: "hint", "Referral stats not loaded yet." }
                            },
                        }
                    }
                }
            } else {
                p { class: "hint", "Connect a wallet to see your profile." }
            }
        }
    }
}
