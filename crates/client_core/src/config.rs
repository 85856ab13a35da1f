use std::{fs, num::NonZeroU32, path::Path};

use serde::Deserialize;
use shared::domain::{QueryParameters, SortField, SortOrder, DEFAULT_PAGE_SIZE};
use tracing::{debug, warn};

pub const DEFAULT_CONFIG_FILE: &str = "tags_explorer.toml";
const ENV_PREFIX: &str = "TAGS_EXPLORER__";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub site: String,
    pub page_size: NonZeroU32,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Zero disables the transport timeout.
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.stackexchange.com/2.2".into(),
            site: "stackoverflow".into(),
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: SortField::Popular,
            sort_order: SortOrder::Desc,
            request_timeout_secs: 30,
        }
    }
}

impl Settings {
    pub fn initial_parameters(&self) -> QueryParameters {
        QueryParameters {
            page_index: 0,
            page_size: self.page_size,
            sort_field: self.sort_field,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    site: Option<String>,
    page_size: Option<u32>,
    sort_field: Option<String>,
    sort_order: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Defaults, then `path` (or `tags_explorer.toml` in the working directory),
/// then `TAGS_EXPLORER__*` environment variables.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    match fs::read_to_string(path) {
        Ok(raw) => apply_file(&mut settings, &raw),
        Err(err) => debug!(path = %path.display(), "no config file loaded: {err}"),
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileSettings>(raw) {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!("ignoring malformed config file: {err}");
            return;
        }
    };

    if let Some(v) = file_cfg.api_base_url {
        settings.api_base_url = v;
    }
    if let Some(v) = file_cfg.site {
        settings.site = v;
    }
    if let Some(v) = file_cfg.page_size {
        set_page_size(settings, &v.to_string());
    }
    if let Some(v) = file_cfg.sort_field {
        set_sort_field(settings, &v);
    }
    if let Some(v) = file_cfg.sort_order {
        set_sort_order(settings, &v);
    }
    if let Some(v) = file_cfg.request_timeout_secs {
        settings.request_timeout_secs = v;
    }
}

fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}")).filter(|v| !v.trim().is_empty());

    if let Some(v) = var("API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("SITE") {
        settings.site = v;
    }
    if let Some(v) = var("PAGE_SIZE") {
        set_page_size(settings, &v);
    }
    if let Some(v) = var("SORT_FIELD") {
        set_sort_field(settings, &v);
    }
    if let Some(v) = var("SORT_ORDER") {
        set_sort_order(settings, &v);
    }
    if let Some(v) = var("REQUEST_TIMEOUT_SECS") {
        match v.trim().parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(err) => warn!(value = %v, "ignoring request_timeout_secs: {err}"),
        }
    }
}

fn set_page_size(settings: &mut Settings, raw: &str) {
    match raw.trim().parse::<NonZeroU32>() {
        Ok(parsed) => settings.page_size = parsed,
        Err(err) => warn!(value = raw, "ignoring page_size: {err}"),
    }
}

fn set_sort_field(settings: &mut Settings, raw: &str) {
    match raw.parse() {
        Ok(parsed) => settings.sort_field = parsed,
        Err(err) => warn!("ignoring sort_field: {err}"),
    }
}

fn set_sort_order(settings: &mut Settings, raw: &str) {
    match raw.parse() {
        Ok(parsed) => settings.sort_order = parsed,
        Err(err) => warn!("ignoring sort_order: {err}"),
    }
}
