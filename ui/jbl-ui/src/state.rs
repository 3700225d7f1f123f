//! Shared reactive state for the dashboard.

use dioxus::prelude::*;
use jbl_api::{ReferralStats, User, UserStats};

/// Wallet session status. There is no observable "connecting" state beyond
/// `SessionState::loading`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

/// Client-side copy of the server's last answers. Volatile; dropped on
/// disconnect.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub connection_status: ConnectionStatus,
    /// Empty while disconnected.
    pub wallet_address: String,
    pub user: Option<User>,
    pub stats: Option<UserStats>,
    pub referrals: Option<ReferralStats>,
    /// A request started from the UI is outstanding.
    pub loading: bool,
}

impl SessionState {
    pub fn is_connected(&self) -> bool {
        matches!(self.connection_status, ConnectionStatus::Connected)
    }

    /// Connected as `address`. Responses for any other address are stale.
    pub fn holds(&self, address: &str) -> bool {
        self.is_connected() && !address.is_empty() && self.wallet_address == address
    }

    /// Best local guess of the spendable balance. Stats are fresher than the
    /// user record, which is only fetched at connect time.
    pub fn known_balance(&self) -> f64 {
        self.stats
            .as_ref()
            .map(|s| s.balance)
            .or_else(|| self.user.as_ref().map(|u| u.balance))
            .unwrap_or(0.0)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Where a `Session` keeps its `SessionState`.
///
/// The app stores it in a Dioxus `Signal` so components re-render on
/// change; tests use a plain `Rc<RefCell<_>>`. Borrows never outlive the
/// closure, so no borrow is held across an `.await`.
pub trait SessionStore: Clone {
    fn view<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R;
    fn modify(&mut self, f: impl FnOnce(&mut SessionState));
}

impl SessionStore for Signal<SessionState> {
    fn view<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.read())
    }

    fn modify(&mut self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.write())
    }
}

#[cfg(test)]
impl SessionStore for std::rc::Rc<std::cell::RefCell<SessionState>> {
    fn view<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.borrow())
    }

    fn modify(&mut self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.borrow_mut())
    }
}
