//! Wire types for the staking backend.
//!
//! Response structs mirror the JSON the backend emits; request structs are
//! serialized as the POST body of each action. Optional request fields are
//! omitted entirely when absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// Backend capability, sent as the `action` query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    GetUser,
    Stake,
    Unstake,
    Deposit,
    GetStats,
    GetReferrals,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetUser => "get_user",
            Self::Stake => "stake",
            Self::Unstake => "unstake",
            Self::Deposit => "deposit",
            Self::GetStats => "get_stats",
            Self::GetReferrals => "get_referrals",
        }
    }
}

// ---------------------------------------------------------------------------
// Timestamps
// ---------------------------------------------------------------------------

/// Parse a backend timestamp. Depending on the column type the backend sends
/// a naive ISO string, an ISO string with an offset (`+00:00` or Postgres
/// style `+00`) or a bare date. Offset-bearing values keep their wall-clock
/// time.
pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f%#z", "%Y-%m-%d %H:%M:%S%.f%#z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.naive_local());
        }
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("unrecognized timestamp {raw:?}")))
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// A user record, created by the backend on first `get_user`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub wallet_address: String,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    pub referral_code: String,
    pub balance: f64,
    pub total_staked: f64,
    pub total_earned: f64,
    pub referral_earnings: f64,
}

/// An active stake as reported by `get_stats`.
///
/// `days_remaining` and `current_reward` are derived by the backend at
/// request time; the client never recomputes them.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Stake {
    pub id: i64,
    pub amount: f64,
    pub daily_reward: f64,
    #[serde(deserialize_with = "timestamp")]
    pub start_date: NaiveDateTime,
    #[serde(deserialize_with = "timestamp")]
    pub end_date: NaiveDateTime,
    pub days_remaining: i64,
    pub current_reward: f64,
}

impl Stake {
    /// Closing now forfeits part of the reward.
    pub fn is_locked(&self) -> bool {
        self.days_remaining > 0
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserStats {
    pub balance: f64,
    pub total_staked: f64,
    pub total_earned: f64,
    pub referral_earnings: f64,
    #[serde(default)]
    pub active_stakes: Vec<Stake>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReferralStats {
    pub total_referrals: u64,
    pub total_earned: f64,
}

/// Result of a successful `stake` call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct StakeReceipt {
    pub stake_id: i64,
    pub amount: f64,
    pub daily_reward: f64,
    #[serde(deserialize_with = "timestamp")]
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub commission: f64,
}

/// Result of a successful `unstake` call. `reward` already reflects any
/// early-withdrawal penalty applied by the backend.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UnstakeReceipt {
    pub amount: f64,
    pub reward: f64,
    #[serde(default)]
    total: Option<f64>,
}

impl UnstakeReceipt {
    pub fn new(amount: f64, reward: f64) -> Self {
        Self {
            amount,
            reward,
            total: None,
        }
    }

    /// Principal plus reward credited back to the balance.
    pub fn total(&self) -> f64 {
        self.total.unwrap_or(self.amount + self.reward)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DepositReceipt {
    #[serde(default = "default_success")]
    pub success: bool,
    pub amount: f64,
}

fn default_success() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct GetUserRequest<'a> {
    pub wallet_address: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referred_by: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StakeRequest<'a> {
    pub wallet_address: &'a str,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnstakeRequest<'a> {
    pub wallet_address: &'a str,
    pub stake_id: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct DepositRequest<'a> {
    pub wallet_address: &'a str,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ton_hash: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct WalletRequest<'a> {
    pub wallet_address: &'a str,
}
