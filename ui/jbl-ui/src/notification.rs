//! Toast messages shown after user actions.

use jbl_api::{ApiError, DepositReceipt, StakeReceipt, UnstakeReceipt};

use crate::amount::format_tokens;
use crate::session::ActionError;

const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationKind {
    Success,
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn staked(receipt: &StakeReceipt) -> Self {
        Self::success(
            "Stake created",
            format!(
                "{} locked until {}",
                format_tokens(receipt.amount),
                receipt.end_date.format("%d.%m.%Y")
            ),
        )
    }

    pub fn unstaked(receipt: &UnstakeReceipt) -> Self {
        Self::success(
            "Stake closed",
            format!(
                "{} returned with {} reward",
                format_tokens(receipt.amount),
                format_tokens(receipt.reward)
            ),
        )
    }

    pub fn deposited(receipt: &DepositReceipt) -> Self {
        Self::success(
            "Deposit credited",
            format!("{} added to your balance", format_tokens(receipt.amount)),
        )
    }

    pub fn connected(address: &str) -> Self {
        Self::success("Wallet connected", crate::address::shorten_address(address))
    }

    pub fn disconnected() -> Self {
        Self::info("Wallet disconnected", "Connect again to keep staking")
    }

    pub fn copied(what: &str) -> Self {
        Self::success("Copied", format!("{what} copied to clipboard"))
    }

    /// Server and network details stay in the log; the user only sees a
    /// generic message.
    pub fn connect_failed(_err: &ApiError) -> Self {
        Self::error("Connection failed", GENERIC_FAILURE)
    }

    pub fn from_error(err: &ActionError) -> Self {
        match err {
            ActionError::NotConnected => {
                Self::error("Wallet not connected", "Connect a wallet first")
            }
            ActionError::InvalidAmount => {
                Self::error("Invalid amount", "Enter a positive number")
            }
            ActionError::InsufficientFunds {
                requested,
                available,
            } => Self::error(
                "Insufficient funds",
                format!(
                    "Requested {}, available {}",
                    format_tokens(*requested),
                    format_tokens(*available)
                ),
            ),
            ActionError::Api(_) => Self::error("Error", GENERIC_FAILURE),
        }
    }
}
