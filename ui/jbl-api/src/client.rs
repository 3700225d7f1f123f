//! HTTP client for the staking backend.
//!
//! Every capability is a POST against one endpoint, discriminated by the
//! `action` query parameter. The backend owns all accounting; this client
//! only moves JSON back and forth.

use std::time::Duration;

use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::types::{
    Action, DepositReceipt, DepositRequest, GetUserRequest, ReferralStats, StakeReceipt,
    StakeRequest, UnstakeReceipt, UnstakeRequest, User, UserStats, WalletRequest,
};

pub const DEFAULT_API_URL: &str =
    "https://functions.poehali.dev/61161417-096d-471f-9cb6-ee7c77824130";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout. Only honored on native targets; browser builds
    /// leave it to fetch.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("JBL_API_URL")
                .unwrap_or(DEFAULT_API_URL)
                .to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    endpoint: Url,
}

/// Clients are equal when they target the same endpoint.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let endpoint = Url::parse(&config.base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {:?}: {e}", config.base_url)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ApiError::Config(format!(
                "unsupported scheme {:?} in base URL",
                endpoint.scheme()
            )));
        }

        let builder = reqwest::Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.timeout);
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn action_url(&self, action: Action) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("action", action.as_str());
        url
    }

    /// Shared request path: POST `body` as JSON, map non-2xx to
    /// `ApiError::Server`, decode the body as `T` otherwise.
    async fn call<B, T>(&self, action: Action, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(action = action.as_str(), "backend request");

        let response = self
            .http
            .post(self.action_url(action))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status.as_u16(), &text);
            warn!(
                action = action.as_str(),
                status = status.as_u16(),
                error = %err,
                "backend rejected request"
            );
            return Err(err);
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch the user for `wallet_address`, creating it on first contact.
    /// `referred_by` is only considered by the backend at creation time.
    pub async fn get_or_create_user(
        &self,
        wallet_address: &str,
        telegram_id: Option<i64>,
        referred_by: Option<&str>,
    ) -> Result<User, ApiError> {
        self.call(
            Action::GetUser,
            &GetUserRequest {
                wallet_address,
                telegram_id,
                referred_by,
            },
        )
        .await
    }

    pub async fn create_stake(
        &self,
        wallet_address: &str,
        amount: f64,
    ) -> Result<StakeReceipt, ApiError> {
        self.call(
            Action::Stake,
            &StakeRequest {
                wallet_address,
                amount,
            },
        )
        .await
    }

    pub async fn unstake_tokens(
        &self,
        wallet_address: &str,
        stake_id: i64,
    ) -> Result<UnstakeReceipt, ApiError> {
        self.call(
            Action::Unstake,
            &UnstakeRequest {
                wallet_address,
                stake_id,
            },
        )
        .await
    }

    /// Credit `amount` to the balance. `ton_hash` is passed through as an
    /// unverified proof-of-payment reference.
    pub async fn deposit_tokens(
        &self,
        wallet_address: &str,
        amount: f64,
        ton_hash: Option<&str>,
    ) -> Result<DepositReceipt, ApiError> {
        self.call(
            Action::Deposit,
            &DepositRequest {
                wallet_address,
                amount,
                ton_hash,
            },
        )
        .await
    }

    pub async fn get_user_stats(&self, wallet_address: &str) -> Result<UserStats, ApiError> {
        self.call(Action::GetStats, &WalletRequest { wallet_address })
            .await
    }

    pub async fn get_referral_stats(
        &self,
        wallet_address: &str,
    ) -> Result<ReferralStats, ApiError> {
        self.call(Action::GetReferrals, &WalletRequest { wallet_address })
            .await
    }
}

#[cfg(test)]
mod tests {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    use super::*;

    fn client(base_url: &str) -> Result<ApiClient, ApiError> {
        ApiClient::new(ApiConfig {
            base_url: base_url.to_string(),
            timeout: Duration::from_secs(5),
        })
    }

    #[test]
    fn test_action_is_appended_as_query() {
        let api = client("https://api.example.com/staking").unwrap();
        assert_eq!(
            api.action_url(Action::GetStats).as_str(),
            "https://api.example.com/staking?action=get_stats"
        );
        // The stored endpoint is never mutated.
        assert_eq!(api.endpoint().as_str(), "https://api.example.com/staking");
    }

    #[test]
    fn test_existing_query_is_preserved() {
        let api = client("http://localhost:8080/fn?stage=dev").unwrap();
        assert_eq!(
            api.action_url(Action::Unstake).as_str(),
            "http://localhost:8080/fn?stage=dev&action=unstake"
        );
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(matches!(client("not a url"), Err(ApiError::Config(_))));
        assert!(matches!(client("ftp://example.com"), Err(ApiError::Config(_))));
    }

    #[test]
    fn test_default_config_points_at_a_valid_endpoint() {
        let config = ApiConfig::default();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(ApiClient::new(config).is_ok());
    }

    // -- HTTP exchange against a loopback listener --

    /// Accept one connection, answer it with `status` and `body`, and hand
    /// back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/fn", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let len = text[..head_end]
                    .lines()
                    .filter_map(|line| line.split_once(':'))
                    .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                    .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + len {
                    break;
                }
            }
        }
        String::from_utf8(buf).unwrap()
    }

    fn split_request(raw: &str) -> (String, serde_json::Value) {
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        (head.to_ascii_lowercase(), serde_json::from_str(body).unwrap())
    }

    #[tokio::test]
    async fn test_stake_posts_json_and_decodes_receipt() {
        let (url, server) = serve_once(
            "200 OK",
            r#"{"stake_id": 4, "amount": 60.0, "daily_reward": 0.0197, "end_date": "2025-02-01T12:00:00+00:00", "commission": 0.3}"#,
        )
        .await;
        let api = client(&url).unwrap();

        let receipt = api.create_stake("UQCABC", 60.0).await.unwrap();

        assert_eq!(receipt.stake_id, 4);
        assert_eq!(receipt.end_date.to_string(), "2025-02-01 12:00:00");
        let (head, body) = split_request(&server.await.unwrap());
        assert!(head.starts_with("post /fn?action=stake http/1.1"));
        assert!(head.contains("content-type: application/json"));
        assert_eq!(
            body,
            serde_json::json!({ "wallet_address": "UQCABC", "amount": 60.0 })
        );
    }

    #[tokio::test]
    async fn test_optional_fields_are_left_out_of_the_body() {
        let (url, server) = serve_once("200 OK", r#"{"success": true, "amount": 10}"#).await;
        let api = client(&url).unwrap();

        let receipt = api.deposit_tokens("UQCABC", 10.0, None).await.unwrap();

        assert_eq!(receipt.amount, 10.0);
        let (head, body) = split_request(&server.await.unwrap());
        assert!(head.starts_with("post /fn?action=deposit "));
        assert_eq!(
            body,
            serde_json::json!({ "wallet_address": "UQCABC", "amount": 10.0 })
        );
    }

    #[tokio::test]
    async fn test_server_error_message_reaches_the_caller() {
        let (url, server) = serve_once("404 Not Found", r#"{"error": "wallet not found"}"#).await;
        let api = client(&url).unwrap();

        let err = api.unstake_tokens("UQCABC", 3).await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 404,
                message: "wallet not found".into()
            }
        );
        assert_eq!(err.to_string(), "wallet not found");
        let (head, body) = split_request(&server.await.unwrap());
        assert!(head.starts_with("post /fn?action=unstake "));
        assert_eq!(
            body,
            serde_json::json!({ "wallet_address": "UQCABC", "stake_id": 3 })
        );
    }

    #[tokio::test]
    async fn test_error_without_message_is_generic() {
        let (url, _server) = serve_once("500 Internal Server Error", r#"{"detail": "boom"}"#).await;
        let api = client(&url).unwrap();

        let err = api.get_user_stats("UQCABC").await.unwrap_err();

        assert_eq!(
            err,
            ApiError::Server {
                status: 500,
                message: crate::error::GENERIC_FAILURE.into()
            }
        );
    }

    #[tokio::test]
    async fn test_mismatched_success_body_is_a_decode_error() {
        let (url, _server) = serve_once("200 OK", r#"{"total_referrals": "many"}"#).await;
        let api = client(&url).unwrap();

        let err = api.get_referral_stats("UQCABC").await.unwrap_err();

        assert!(matches!(err, ApiError::Decode(_)));
    }
}
