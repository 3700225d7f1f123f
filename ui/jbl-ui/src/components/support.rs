use dioxus::prelude::*;

use crate::terms::TERMS;

const SUPPORT_CHAT: &str = "https://t.me/jbl_support";

#[component]
pub fn SupportPage() -> Element {
    let faq = [
        (
            "How do I start staking?".to_string(),
            "Connect a wallet, deposit JBL, pick an amount on the Staking tab and press \"Stake JBL\"."
                .to_string(),
        ),
        (
            "When are rewards paid?".to_string(),
            format!(
                "Rewards accrue daily at {}% APY and are paid out with the principal when you unstake.",
                TERMS.apy_percent
            ),
        ),
        (
            "Can I withdraw early?".to_string(),
            format!(
                "Yes, but you lose {}% of the accrued reward.",
                TERMS.early_withdrawal_penalty_percent
            ),
        ),
        (
            "How does the referral program work?".to_string(),
            format!(
                "Share your link from the Profile tab and earn {}% of what invited users stake.",
                TERMS.referral_bonus_percent
            ),
        ),
    ];

    rsx! {
        div { class: "page",
            h1 { "Support" }

            div { class: "result-card",
                h3 { "Telegram" }
                p { class: "hint", "Questions about your stakes? Talk to us." }
                a { class: "btn btn-primary", href: SUPPORT_CHAT, target: "_blank", "Open chat" }
            }

            h2 { "FAQ" }
            for (question, answer) in faq {
                details { class: "faq-item",
                    summary { "{question}" }
                    p { "{answer}" }
                }
            }
        }
    }
}
