//! Wallet session: the one place that talks to the backend on behalf of the
//! dashboard.
//!
//! Reads that only refresh what is on screen (`load_stats`,
//! `load_referrals`) log their failures and keep the previous data visible.
//! Connecting and the mutating actions hand their failures back so the
//! caller can show them.

use std::fmt;

use jbl_api::{
    ApiClient, ApiError, DepositReceipt, ReferralStats, StakeReceipt, UnstakeReceipt, User,
    UserStats,
};
use tracing::{error, info};

use crate::address::mock_address;
use crate::amount::parse_amount;
use crate::host::HostBridge;
use crate::state::{ConnectionStatus, SessionStore};

// ---------------------------------------------------------------------------
// Backend seam
// ---------------------------------------------------------------------------

/// The backend capabilities the session depends on.
#[allow(async_fn_in_trait)]
pub trait StakingApi {
    async fn get_or_create_user(
        &self,
        wallet_address: &str,
        telegram_id: Option<i64>,
        referred_by: Option<&str>,
    ) -> Result<User, ApiError>;
    async fn create_stake(&self, wallet_address: &str, amount: f64)
        -> Result<StakeReceipt, ApiError>;
    async fn unstake_tokens(
        &self,
        wallet_address: &str,
        stake_id: i64,
    ) -> Result<UnstakeReceipt, ApiError>;
    async fn deposit_tokens(
        &self,
        wallet_address: &str,
        amount: f64,
        ton_hash: Option<&str>,
    ) -> Result<DepositReceipt, ApiError>;
    async fn get_user_stats(&self, wallet_address: &str) -> Result<UserStats, ApiError>;
    async fn get_referral_stats(&self, wallet_address: &str) -> Result<ReferralStats, ApiError>;
}

impl StakingApi for ApiClient {
    async fn get_or_create_user(
        &self,
        wallet_address: &str,
        telegram_id: Option<i64>,
        referred_by: Option<&str>,
    ) -> Result<User, ApiError> {
        ApiClient::get_or_create_user(self, wallet_address, telegram_id, referred_by).await
    }

    async fn create_stake(
        &self,
        wallet_address: &str,
        amount: f64,
    ) -> Result<StakeReceipt, ApiError> {
        ApiClient::create_stake(self, wallet_address, amount).await
    }

    async fn unstake_tokens(
        &self,
        wallet_address: &str,
        stake_id: i64,
    ) -> Result<UnstakeReceipt, ApiError> {
        ApiClient::unstake_tokens(self, wallet_address, stake_id).await
    }

    async fn deposit_tokens(
        &self,
        wallet_address: &str,
        amount: f64,
        ton_hash: Option<&str>,
    ) -> Result<DepositReceipt, ApiError> {
        ApiClient::deposit_tokens(self, wallet_address, amount, ton_hash).await
    }

    async fn get_user_stats(&self, wallet_address: &str) -> Result<UserStats, ApiError> {
        ApiClient::get_user_stats(self, wallet_address).await
    }

    async fn get_referral_stats(&self, wallet_address: &str) -> Result<ReferralStats, ApiError> {
        ApiClient::get_referral_stats(self, wallet_address).await
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum ActionError {
    NotConnected,
    InvalidAmount,
    /// Checked against the last balance the client saw, which may be stale.
    InsufficientFunds { requested: f64, available: f64 },
    Api(ApiError),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConnected => write!(f, "No wallet connected"),
            Self::InvalidAmount => write!(f, "Amount must be a positive number"),
            Self::InsufficientFunds {
                requested,
                available,
            } => write!(f, "Insufficient funds: requested {requested}, available {available}"),
            Self::Api(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ActionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct Session<A, H, S> {
    api: A,
    host: H,
    store: S,
}

impl<A, H, S> Session<A, H, S>
where
    A: StakingApi,
    H: HostBridge,
    S: SessionStore,
{
    pub fn new(api: A, host: H, store: S) -> Self {
        Self { api, host, store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    fn set_loading(&mut self, loading: bool) {
        self.store.modify(|s| s.loading = loading);
    }

    fn connected_address(&self) -> Result<String, ActionError> {
        self.store.view(|s| {
            if s.is_connected() && !s.wallet_address.is_empty() {
                Ok(s.wallet_address.clone())
            } else {
                Err(ActionError::NotConnected)
            }
        })
    }

    /// Mint an address, register it with the backend and pull the first
    /// stats snapshot. The session stays disconnected if registration fails.
    pub async fn connect(&mut self) -> Result<(), ApiError> {
        self.set_loading(true);
        let result = self.register().await;
        self.set_loading(false);

        if let Err(err) = &result {
            error!(error = %err, "failed to connect wallet");
        }
        result
    }

    async fn register(&mut self) -> Result<(), ApiError> {
        let address = mock_address(&mut rand::thread_rng());
        let launch = self.host.launch_context();

        let user = self
            .api
            .get_or_create_user(&address, launch.user_id, launch.start_param.as_deref())
            .await?;
        info!(%address, user_id = user.id, "wallet connected");

        self.store.modify(|s| {
            s.wallet_address = address.clone();
            s.connection_status = ConnectionStatus::Connected;
            s.user = Some(user);
        });

        self.load_stats(Some(&address)).await;
        Ok(())
    }

    /// Drop all cached state. No network call.
    pub fn disconnect(&mut self) {
        self.store.modify(|s| s.clear());
        info!("wallet disconnected");
    }

    /// Refresh `UserStats` for `address`, or the held address when `None`.
    /// Failures are logged and the previous stats stay in place.
    pub async fn load_stats(&mut self, address: Option<&str>) {
        let address = match address.filter(|a| !a.is_empty()) {
            Some(a) => a.to_string(),
            None => self.store.view(|s| s.wallet_address.clone()),
        };
        if address.is_empty() {
            return;
        }

        match self.api.get_user_stats(&address).await {
            // Dropped if the wallet was disconnected or replaced meanwhile.
            Ok(stats) => self.store.modify(|s| {
                if s.holds(&address) {
                    s.stats = Some(stats);
                }
            }),
            Err(err) => error!(error = %err, "failed to load stats"),
        }
    }

    pub async fn refresh_data(&mut self) {
        if let Ok(address) = self.connected_address() {
            self.load_stats(Some(&address)).await;
        }
    }

    /// Same silent-degrade policy as `load_stats`.
    pub async fn load_referrals(&mut self) {
        let Ok(address) = self.connected_address() else {
            return;
        };

        match self.api.get_referral_stats(&address).await {
            Ok(referrals) => self.store.modify(|s| {
                if s.holds(&address) {
                    s.referrals = Some(referrals);
                }
            }),
            Err(err) => error!(error = %err, "failed to load referral stats"),
        }
    }

    /// Validate `input` locally, stake it, then re-fetch stats.
    pub async fn stake(&mut self, input: &str) -> Result<StakeReceipt, ActionError> {
        let address = self.connected_address()?;
        let amount = parse_amount(input).ok_or(ActionError::InvalidAmount)?;
        let available = self.store.view(|s| s.known_balance());
        if amount > available {
            return Err(ActionError::InsufficientFunds {
                requested: amount,
                available,
            });
        }

        self.set_loading(true);
        let result = self.api.create_stake(&address, amount).await;
        self.settle("stake", result).await
    }

    pub async fn unstake(&mut self, stake_id: i64) -> Result<UnstakeReceipt, ActionError> {
        let address = self.connected_address()?;

        self.set_loading(true);
        let result = self.api.unstake_tokens(&address, stake_id).await;
        self.settle("unstake", result).await
    }

    /// `tx_hash` is an optional proof-of-payment reference; blank input is
    /// treated as absent.
    pub async fn deposit(
        &mut self,
        input: &str,
        tx_hash: Option<&str>,
    ) -> Result<DepositReceipt, ActionError> {
        let address = self.connected_address()?;
        let amount = parse_amount(input).ok_or(ActionError::InvalidAmount)?;
        let tx_hash = tx_hash.map(str::trim).filter(|h| !h.is_empty());

        self.set_loading(true);
        let result = self.api.deposit_tokens(&address, amount, tx_hash).await;
        self.settle("deposit", result).await
    }

    /// Finish a mutating call: on success re-fetch stats in full, then clear
    /// the in-flight flag either way.
    ///
    /// A 2xx whose body could not be decoded still changed server state, so
    /// stats are re-fetched for it too.
    async fn settle<T>(
        &mut self,
        action: &str,
        result: Result<T, ApiError>,
    ) -> Result<T, ActionError> {
        match result {
            Ok(value) => {
                info!(action, "action completed");
                self.load_stats(None).await;
                self.set_loading(false);
                Ok(value)
            }
            Err(err) => {
                error!(action, error = %err, "action failed");
                if matches!(err, ApiError::Decode(_)) {
                    self.load_stats(None).await;
                }
                self.set_loading(false);
                Err(err.into())
            }
        }
    }
}
