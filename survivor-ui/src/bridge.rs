//! Browser `fetch` implementation of the survivors API reads.

use js_sys::Promise;
use serde::de::DeserializeOwned;
use survivor_model::{ApiConfig, FetchError, InfectionStats, SurvivorRecord, SurvivorSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Clone, Debug)]
pub struct HttpSource {
    api: ApiConfig,
}

impl HttpSource {
    pub fn new(api: ApiConfig) -> Self {
        Self { api }
    }
}

impl SurvivorSource for HttpSource {
    async fn fetch_survivors(&self) -> Result<Vec<SurvivorRecord>, FetchError> {
        get_json(&self.api.survivors_url()).await
    }

    async fn fetch_infection_stats(&self) -> Result<InfectionStats, FetchError> {
        get_json(&self.api.stats_url()).await
    }
}

fn describe(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => format!("{err:?}"),
    }
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(|e| describe(&e))
}

async fn get_json<R: DeserializeOwned>(url: &str) -> Result<R, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Transport("window not available".into()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init)
        .map_err(|e| FetchError::Transport(describe(&e)))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| FetchError::Transport(describe(&e)))?;

    let response: Response = await_promise(window.fetch_with_request(&request))
        .await
        .map_err(FetchError::Transport)?
        .dyn_into()
        .map_err(|_| FetchError::Transport("fetch did not yield a Response".into()))?;
    if !response.ok() {
        let status = response.status();
        let body = match response.text() {
            Ok(text) => await_promise(text)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        web_sys::console::log_2(&JsValue::from(status), &JsValue::from_str(&body));
        return Err(FetchError::status(status, url, &body));
    }

    let body = response
        .json()
        .map_err(|e| FetchError::Decode(describe(&e)))?;
    let value = await_promise(body).await.map_err(FetchError::Decode)?;
    web_sys::console::log_1(&value);
    serde_wasm_bindgen::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}
