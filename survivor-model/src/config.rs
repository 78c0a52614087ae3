//! Build-time configuration for the front end.
//!
//! A browser bundle has no process environment, so the binary resolves keys
//! with `option_env!` and hands them to [`UiConfig::from_lookup`].

use log::Level;
use std::str::FromStr;

pub const API_BASE_KEY: &str = "SURVIVORS_API_BASE";
pub const PANELS_KEY: &str = "SURVIVORS_UI_PANELS";
pub const LOG_LEVEL_KEY: &str = "SURVIVORS_UI_LOG";

pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.into(),
        }
    }
}

impl ApiConfig {
    pub fn survivors_url(&self) -> String {
        self.endpoint("/survivors")
    }

    pub fn stats_url(&self) -> String {
        self.endpoint("/survivors/stats")
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

/// Which views the shell renders below the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Panels {
    pub chart: bool,
    pub grid: bool,
    pub form: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            chart: true,
            grid: false,
            form: false,
        }
    }
}

impl Panels {
    /// Parses a comma separated list such as `chart,grid`. Unknown names are
    /// skipped; a list naming nothing known yields the default.
    pub fn parse(raw: &str) -> Self {
        let mut panels = Panels {
            chart: false,
            grid: false,
            form: false,
        };
        let mut any = false;
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "chart" => panels.chart = true,
                "grid" => panels.grid = true,
                "form" => panels.form = true,
                other => {
                    log::warn!("ignoring unknown panel '{other}'");
                    continue;
                }
            }
            any = true;
        }
        if any {
            panels
        } else {
            Panels::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub api: ApiConfig,
    pub panels: Panels,
    pub log_level: Level,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            panels: Panels::default(),
            log_level: Level::Info,
        }
    }
}

impl UiConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = UiConfig::default();
        let base_url = lookup(API_BASE_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api.base_url);
        let panels = lookup(PANELS_KEY)
            .map(|v| Panels::parse(&v))
            .unwrap_or(defaults.panels);
        let log_level = lookup(LOG_LEVEL_KEY)
            .and_then(|v| Level::from_str(v.trim()).ok())
            .unwrap_or(defaults.log_level);

        Self {
            api: ApiConfig { base_url },
            panels,
            log_level,
        }
    }
}
