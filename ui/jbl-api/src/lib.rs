//! Typed client for the JBL staking backend.
//!
//! The backend exposes six actions over a single POST endpoint. This crate
//! owns the wire types and the request plumbing; it holds no state beyond
//! the HTTP connection pool.

mod client;
mod error;
mod types;

pub use client::{ApiClient, ApiConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};
pub use error::{ApiError, GENERIC_FAILURE};
pub use types::{
    Action, DepositReceipt, ReferralStats, Stake, StakeReceipt, UnstakeReceipt, User, UserStats,
};
