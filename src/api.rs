//! State Endpoint Bindings
//!
//! fetch-based clients for the two backend endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{StateRequest, StatesResponse};

const STATE_URL: &str = "/api/state";
const STATES_URL: &str = "/api/states";

/// encodeURIComponent-alike set for the md_id query value
const QUERY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub(crate) fn js_err(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn fetch(request: &Request) -> Result<Response, String> {
    let window = web_sys::window().ok_or("no window")?;
    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(js_err)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| "fetch did not return a Response".to_string())
}

/// POST one checkbox state change. Any non-OK status is an error.
pub async fn save_state(req: &StateRequest) -> Result<(), String> {
    let body = serde_json::to_string(req).map_err(|e| e.to_string())?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(STATE_URL, &opts).map_err(js_err)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_err)?;

    let response = fetch(&request).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(format!("state save failed with status {}", response.status()))
    }
}

/// GET the checked-id set for one md_id group.
pub async fn fetch_states(md_id: &str) -> Result<StatesResponse, String> {
    let url = format!(
        "{}?md_id={}",
        STATES_URL,
        utf8_percent_encode(md_id, QUERY_ENCODE_SET)
    );

    let request = Request::new_with_str(&url).map_err(js_err)?;
    let response = fetch(&request).await?;
    if !response.ok() {
        return Err(format!("state load failed with status {}", response.status()));
    }

    let json = JsFuture::from(response.json().map_err(js_err)?)
        .await
        .map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}
