//! Host-context detection: identifies the Microsoft Teams host through the
//! global `microsoftTeams` bridge and checks the document body for the
//! embedded marker class. Runs once per activation; every failure path
//! degrades to "not running inside Teams".

use gloo_console::log;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use common::model::context::HostContext;

/// Marker class the hosting page puts on `<body>` when the widget is
/// embedded in another surface rather than rendered standalone.
const EMBEDDED_MARKER_CLASS: &str = "embedded";

/// Suite identifier matched (case-insensitively) against the host name
/// reported by the handshake.
const TEAMS_HOST_NAME: &str = "teams";

/// Resolves the host context. Never fails: a missing or broken Teams bridge
/// yields `is_teams = false`, a missing body yields `is_embedded = false`.
pub async fn resolve() -> HostContext {
    let is_teams = match host_name().await {
        Ok(name) => name.to_lowercase().contains(TEAMS_HOST_NAME),
        Err(_) => false,
    };
    if is_teams {
        log!("The extension is running inside Microsoft Teams");
    } else {
        log!("The extension is running outside Microsoft Teams");
    }

    let is_embedded = body_has_embedded_marker();
    if is_embedded {
        log!("Body has the embedded class");
    } else {
        log!("Body does not have the embedded class");
    }

    HostContext {
        is_teams,
        is_embedded,
    }
}

/// Runs the identification handshake against the global Teams bridge:
/// `app.initialize()` followed by `app.getContext()`, then reads
/// `app.host.name` out of the returned context object.
async fn host_name() -> Result<String, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let bridge = Reflect::get(&window, &JsValue::from_str("microsoftTeams"))?;
    if bridge.is_undefined() || bridge.is_null() {
        return Err(JsValue::from_str("Teams bridge is not available"));
    }
    let app = Reflect::get(&bridge, &JsValue::from_str("app"))?;

    call_async(&app, "initialize").await?;
    let context = call_async(&app, "getContext").await?;
    log!("Context:", context.clone());

    let app_info = Reflect::get(&context, &JsValue::from_str("app"))?;
    let host = Reflect::get(&app_info, &JsValue::from_str("host"))?;
    Reflect::get(&host, &JsValue::from_str("name"))?
        .as_string()
        .ok_or_else(|| JsValue::from_str("host name is not a string"))
}

/// Calls a promise-returning zero-argument method on `target` and awaits its
/// resolution.
async fn call_async(target: &JsValue, method: &str) -> Result<JsValue, JsValue> {
    let function: Function = Reflect::get(target, &JsValue::from_str(method))?.dyn_into()?;
    let promise: Promise = function.call0(target)?.dyn_into()?;
    JsFuture::from(promise).await
}

fn body_has_embedded_marker() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.class_list().contains(EMBEDDED_MARKER_CLASS))
        .unwrap_or(false)
}
