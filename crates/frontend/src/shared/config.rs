//! Dashboard configuration for the browser build.
//!
//! An optional TOML override can be embedded in the host page as
//! `<script id="dashboard-config" type="text/toml">...</script>`.

use contracts::shared::config::{load_config, DashboardConfig};
use contracts::shared::storage::StorageLayout;
use leptos::prelude::*;
use std::sync::Arc;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "dashboard-config";

#[derive(Clone, Debug)]
pub struct AppConfig(Arc<DashboardConfig>);

impl AppConfig {
    pub fn load() -> Self {
        let embedded = window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
            .filter(|text| !text.trim().is_empty());

        let config = match load_config(embedded.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("dashboard config rejected, using defaults: {}", e);
                DashboardConfig::default()
            }
        };
        Self(Arc::new(config))
    }

    pub fn get(&self) -> &DashboardConfig {
        &self.0
    }

    pub fn layout(&self) -> StorageLayout {
        self.0.storage_layout()
    }
}

pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().expect("AppConfig not found in context")
}
