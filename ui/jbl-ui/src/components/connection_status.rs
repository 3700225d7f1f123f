use dioxus::prelude::*;

use crate::notification::Notification;
use crate::state::SessionState;
use crate::AppSession;

#[component]
pub fn ConnectionStatusIndicator() -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let connected = state.read().is_connected();
    let loading = state.read().loading;

    let (dot_class, label) = if connected {
        ("dot connected", "Connected")
    } else if loading {
        ("dot connecting", "Connecting")
    } else {
        ("dot disconnected", "Disconnected")
    };

    let disconnect = move |_| {
        let mut session = session.clone();
        session.disconnect();
        toast.set(Some(Notification::disconnected()));
    };

    rsx! {
        div { class: "conn-indicator",
            span { class: dot_class }
            span { class: "conn-label", "{label}" }
            if connected {
                button { class: "conn-btn conn-btn-disconnect", onclick: disconnect, "Disconnect" }
            } else {
                ConnectButton { class: "conn-btn conn-btn-connect" }
            }
        }
    }
}

/// Starts `Session::connect` and reports the outcome as a toast.
#[component]
pub fn ConnectButton(#[props(default = "btn btn-primary")] class: &'static str) -> Element {
    let state = use_context::<Signal<SessionState>>();
    let session = use_context::<AppSession>();
    let mut toast = use_context::<Signal<Option<Notification>>>();

    let loading = state.read().loading;

    let connect = move |_| {
        let mut session = session.clone();
        spawn(async move {
            match session.connect().await {
                Ok(()) => {
                    let address = state.read().wallet_address.clone();
                    toast.set(Some(Notification::connected(&address)));
                }
                Err(e) => toast.set(Some(Notification::connect_failed(&e))),
            }
        });
    };

    rsx! {
        button {
            class: class,
            disabled: loading,
            onclick: connect,
            if loading { "Connecting..." } else { "Connect Wallet" }
        }
    }
}
