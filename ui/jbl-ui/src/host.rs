//! Bridge to the Telegram WebApp host.
//!
//! The session only needs the launch context; the cosmetic setup calls run
//! once at mount. Outside Telegram every call degrades to a no-op and the
//! launch context stays empty.

use dioxus::prelude::*;
use serde::Deserialize;
use tracing::{debug, warn};

pub const HEADER_COLOR: &str = "#0b0f1e";
pub const BACKGROUND_COLOR: &str = "#0b0f1e";

/// Launch hints supplied by the host chat platform.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LaunchContext {
    /// Numeric Telegram user id.
    #[serde(default)]
    pub user_id: Option<i64>,
    /// `startapp` parameter; carries a referral code when the app was opened
    /// through someone's invite link.
    #[serde(default)]
    pub start_param: Option<String>,
}

pub trait HostBridge {
    fn ready(&self);
    fn expand(&self);
    fn set_header_color(&self, color: &str);
    fn set_background_color(&self, color: &str);
    fn launch_context(&self) -> LaunchContext;
}

/// Run the one-time setup calls.
pub fn prepare(host: &impl HostBridge) {
    host.ready();
    host.expand();
    host.set_header_color(HEADER_COLOR);
    host.set_background_color(BACKGROUND_COLOR);
}

const LAUNCH_CONTEXT_JS: &str = r#"
const data = window.Telegram?.WebApp?.initDataUnsafe ?? {};
return { user_id: data.user?.id ?? null, start_param: data.start_param ?? null };
"#;

/// `window.Telegram.WebApp`, reached through Dioxus eval.
///
/// The launch context is read asynchronously after mount and cached in a
/// signal, so `launch_context()` stays a cheap synchronous read.
#[derive(Clone, Copy)]
pub struct TelegramHost {
    launch: Signal<LaunchContext>,
}

impl TelegramHost {
    pub fn new(launch: Signal<LaunchContext>) -> Self {
        Self { launch }
    }

    fn call(&self, method: &str, arg: Option<&str>) {
        let arg = arg
            .map(|a| serde_json::Value::from(a).to_string())
            .unwrap_or_default();
        let _ = document::eval(&format!("window.Telegram?.WebApp?.{method}?.({arg});"));
    }

    pub async fn load_launch_context(mut self) {
        match document::eval(LAUNCH_CONTEXT_JS)
            .join::<LaunchContext>()
            .await
        {
            Ok(ctx) => {
                debug!(?ctx, "telegram launch context");
                self.launch.set(ctx);
            }
            Err(e) => warn!(error = ?e, "launch context unavailable"),
        }
    }
}

impl HostBridge for TelegramHost {
    fn ready(&self) {
        self.call("ready", None);
    }

    fn expand(&self) {
        self.call("expand", None);
    }

    fn set_header_color(&self, color: &str) {
        self.call("setHeaderColor", Some(color));
    }

    fn set_background_color(&self, color: &str) {
        self.call("setBackgroundColor", Some(color));
    }

    fn launch_context(&self) -> LaunchContext {
        self.launch.read().clone()
    }
}

/// Copy `text` to the clipboard, if the platform allows it.
pub fn copy_to_clipboard(text: &str) {
    let quoted = serde_json::Value::from(text).to_string();
    let _ = document::eval(&format!("navigator.clipboard?.writeText({quoted});"));
}
