//! Site configuration loading
//!
//! The page may carry a `<script id="site-config" type="application/json">`
//! block overriding any part of [`SiteConfig`]. A missing block means
//! defaults; an invalid one is logged and ignored.

use av_core::SiteConfig;
use leptos::document;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let raw = document()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    resolve(raw.as_deref())
}

pub fn resolve(raw: Option<&str>) -> SiteConfig {
    let Some(json) = raw.map(str::trim).filter(|json| !json.is_empty()) else {
        return SiteConfig::default();
    };

    SiteConfig::from_json(json).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid site config");
        SiteConfig::default()
    })
}
