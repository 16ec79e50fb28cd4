use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

const FALLBACK_API_BASE_URL: &str = "http://localhost:8080/api";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Base URL baked in at build time through `HOMECARE_API_BASE_URL`.
pub fn build_time_base_url() -> &'static str {
    match option_env!("HOMECARE_API_BASE_URL") {
        Some(url) if !url.trim().is_empty() => url,
        _ => FALLBACK_API_BASE_URL,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

#[cfg(target_arch = "wasm32")]
fn snapshot_from_globals() -> Option<String> {
    // window.__HOMECARE_ENV = { API_BASE_URL } (env.js) wins over window.__HOMECARE_CONFIG.
    read_global_key("__HOMECARE_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__HOMECARE_CONFIG", &["api_base_url", "API_BASE_URL"]))
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_from_globals() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn write_window_config(cfg: &RuntimeConfig) {
    let (Some(url), Some(w)) = (cfg.api_base_url.as_ref(), web_sys::window()) else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&w, &"__HOMECARE_CONFIG".into(), &obj);
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = web_sys::window()?.location().origin().ok()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    let cfg = resp.json::<RuntimeConfig>().await.ok()?;
    write_window_config(&cfg);
    Some(cfg)
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config()
        .await
        .and_then(|cfg| cfg.api_base_url)
        .filter(|url| !url.trim().is_empty())
    {
        return cache_base_url(&url);
    }
    cache_base_url(build_time_base_url())
}

pub async fn init() {
    let url = await_api_base_url().await;
    log::info!("API base URL resolved to {}", url);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[tokio::test]
    async fn base_url_falls_back_to_build_time_value() {
        let url = await_api_base_url().await;
        assert_eq!(url, build_time_base_url().trim_end_matches('/'));
        assert_eq!(await_api_base_url().await, url);
    }

    #[test]
    fn runtime_config_parses_snake_case_key() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{ "api_base_url": "https://api.example.com" }"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("https://api.example.com"));
    }
}
