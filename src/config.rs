//! Dashboard Configuration
//!
//! Resolved at compile time: a CSR bundle has no process environment at runtime.

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:3333";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the foods API, without the `/foods` path
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl DashboardConfig {
    /// Configuration baked in via `FOOD_API_URL` and `FOOD_LOG_LEVEL` at build time
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_LOG_LEVEL"))
    }

    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            api_base_url,
            log_level: parse_log_level(log_level.unwrap_or(DEFAULT_LOG_LEVEL)),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Parse a `RUST_LOG`-style level, e.g. `debug` or `food_dashboard=debug,reqwest=info`
pub fn parse_log_level(raw: &str) -> LevelFilter {
    let level = raw
        .split(',')
        .next()
        .unwrap_or(raw)
        .split('=')
        .next_back()
        .unwrap_or(raw)
        .trim()
        .to_lowercase();

    match level.as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" | "warning" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}
