//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Gold price used before the first successful fetch.
pub const DEFAULT_SEED_PRICE: f64 = 65.0;

/// Origins allowed by CORS when no allow-list is configured.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &["http://localhost:3000", "http://127.0.0.1:3000"];

/// Cross-origin policy applied to the router.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsPolicy {
    /// Any origin is accepted
    AllowAll,
    /// Only matching origins are accepted; entries may contain one `*`
    AllowList(Vec<String>),
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Path of the static product file
    pub products_path: String,
    /// Base URL of the gold quote provider
    pub gold_api_url: String,
    /// API key sent in the `x-api-key` header
    pub gold_api_key: String,
    /// Seconds a fetched price stays fresh for plain reads
    pub price_ttl: u64,
    /// Seconds after which product loads force a refresh
    pub price_max_age: u64,
    /// Starting price served as a fallback before the first fetch
    pub seed_price: Option<f64>,
    /// Cross-origin policy
    pub cors: CorsPolicy,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 8000)
    /// - `PRODUCTS_PATH` - Product file (default: data/products.json)
    /// - `GOLD_API_URL` - Quote provider base URL (default: https://gold.g.apised.com)
    /// - `GOLD_API_KEY` - Quote provider key (default: empty)
    /// - `GOLD_PRICE_TTL` - Soft freshness window in seconds (default: 60)
    /// - `GOLD_PRICE_MAX_AGE` - Hard refresh bound in seconds (default: 120)
    /// - `GOLD_SEED_PRICE` - Starting price; non-positive disables it (default: 65.0)
    /// - `CORS_ALLOWED_ORIGINS` - Comma separated origins
    /// - `RENDER` - When set, CORS allows every origin
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let cors = if env::var_os("RENDER").is_some() {
            CorsPolicy::AllowAll
        } else {
            env::var("CORS_ALLOWED_ORIGINS")
                .ok()
                .map(|v| CorsPolicy::AllowList(parse_origins(&v)))
                .unwrap_or(defaults.cors)
        };

        Self {
            server_port: env_or("PORT", defaults.server_port),
            products_path: env::var("PRODUCTS_PATH").unwrap_or(defaults.products_path),
            gold_api_url: env::var("GOLD_API_URL").unwrap_or(defaults.gold_api_url),
            gold_api_key: env::var("GOLD_API_KEY").unwrap_or(defaults.gold_api_key),
            price_ttl: env_or("GOLD_PRICE_TTL", defaults.price_ttl),
            price_max_age: env_or("GOLD_PRICE_MAX_AGE", defaults.price_max_age),
            seed_price: match env::var("GOLD_SEED_PRICE") {
                Ok(v) => parse_seed_price(&v),
                Err(_) => defaults.seed_price,
            },
            cors,
        }
    }

    /// Soft freshness window as a duration.
    pub fn price_ttl(&self) -> Duration {
        Duration::from_secs(self.price_ttl)
    }

    /// Hard refresh bound as a duration.
    pub fn price_max_age(&self) -> Duration {
        Duration::from_secs(self.price_max_age)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8000,
            products_path: "data/products.json".to_string(),
            gold_api_url: "https://gold.g.apised.com".to_string(),
            gold_api_key: String::new(),
            price_ttl: 60,
            price_max_age: 120,
            seed_price: Some(DEFAULT_SEED_PRICE),
            cors: CorsPolicy::AllowList(
                DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
            ),
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_seed_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks an origin against an allow-list pattern.
///
/// A pattern holds at most one `*`, which matches any non-empty run of
/// characters (`https://*.netlify.app` matches `https://shop.netlify.app`).
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    match pattern.split_once('*') {
        None => pattern == origin,
        Some((prefix, suffix)) => {
            origin.len() > prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Environment variables are process wide; tests touching them hold this.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_KEYS: &[&str] = &[
        "PORT",
        "PRODUCTS_PATH",
        "GOLD_API_URL",
        "GOLD_API_KEY",
        "GOLD_PRICE_TTL",
        "GOLD_PRICE_MAX_AGE",
        "GOLD_SEED_PRICE",
        "CORS_ALLOWED_ORIGINS",
        "RENDER",
    ];

    /// Runs `f` with exactly `vars` set among the config variables.
    fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        for key in ENV_KEYS {
            env::remove_var(key);
        }
        for (key, value) in vars {
            env::set_var(key, value);
        }
        f();
        for key in ENV_KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.products_path, "data/products.json");
        assert_eq!(config.price_ttl, 60);
        assert_eq!(config.price_max_age, 120);
        assert_eq!(config.seed_price, Some(DEFAULT_SEED_PRICE));
        assert!(matches!(config.cors, CorsPolicy::AllowList(ref o) if o.len() == 2));
    }

    #[test]
    fn test_config_from_env_defaults() {
        with_env(&[], || {
            let config = Config::from_env();
            assert_eq!(config.server_port, 8000);
            assert_eq!(config.products_path, "data/products.json");
            assert_eq!(config.gold_api_url, "https://gold.g.apised.com");
            assert!(config.gold_api_key.is_empty());
            assert_eq!(config.price_ttl(), Duration::from_secs(60));
            assert_eq!(config.price_max_age(), Duration::from_secs(120));
            assert_eq!(config.seed_price, Some(DEFAULT_SEED_PRICE));
            assert_eq!(config.cors, Config::default().cors);
        });
    }

    #[test]
    fn test_config_from_env_overrides() {
        with_env(
            &[
                ("PORT", "9100"),
                ("PRODUCTS_PATH", "/srv/catalog.json"),
                ("GOLD_API_URL", "http://localhost:4000"),
                ("GOLD_API_KEY", "secret"),
                ("GOLD_PRICE_TTL", "30"),
                ("GOLD_PRICE_MAX_AGE", "90"),
                ("GOLD_SEED_PRICE", "70.25"),
            ],
            || {
                let config = Config::from_env();
                assert_eq!(config.server_port, 9100);
                assert_eq!(config.products_path, "/srv/catalog.json");
                assert_eq!(config.gold_api_url, "http://localhost:4000");
                assert_eq!(config.gold_api_key, "secret");
                assert_eq!(config.price_ttl, 30);
                assert_eq!(config.price_max_age, 90);
                assert_eq!(config.seed_price, Some(70.25));
            },
        );
    }

    #[test]
    fn test_config_from_env_unparsable_numbers_fall_back() {
        with_env(&[("PORT", "http"), ("GOLD_PRICE_TTL", "-5")], || {
            let config = Config::from_env();
            assert_eq!(config.server_port, 8000);
            assert_eq!(config.price_ttl, 60);
        });
    }

    #[test]
    fn test_config_from_env_seed_disabled() {
        with_env(&[("GOLD_SEED_PRICE", "0")], || {
            assert_eq!(Config::from_env().seed_price, None);
        });
        with_env(&[("GOLD_SEED_PRICE", "none")], || {
            assert_eq!(Config::from_env().seed_price, None);
        });
    }

    #[test]
    fn test_config_from_env_cors_origins() {
        with_env(
            &[("CORS_ALLOWED_ORIGINS", "https://shop.example, https://*.netlify.app")],
            || {
                assert_eq!(
                    Config::from_env().cors,
                    CorsPolicy::AllowList(vec![
                        "https://shop.example".to_string(),
                        "https://*.netlify.app".to_string(),
                    ])
                );
            },
        );
    }

    #[test]
    fn test_config_from_env_render_allows_all() {
        with_env(
            &[("RENDER", "true"), ("CORS_ALLOWED_ORIGINS", "https://shop.example")],
            || {
                assert_eq!(Config::from_env().cors, CorsPolicy::AllowAll);
            },
        );
    }

    #[test]
    fn test_parse_seed_price() {
        assert_eq!(parse_seed_price("70.5"), Some(70.5));
        assert_eq!(parse_seed_price("0"), None);
        assert_eq!(parse_seed_price("-3"), None);
        assert_eq!(parse_seed_price("none"), None);
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins(" https://a.example , ,https://*.netlify.app");
        assert_eq!(origins, vec!["https://a.example", "https://*.netlify.app"]);
    }

    #[test]
    fn test_origin_matches_exact() {
        assert!(origin_matches("http://localhost:3000", "http://localhost:3000"));
        assert!(!origin_matches("http://localhost:3000", "http://localhost:3001"));
    }

    #[test]
    fn test_origin_matches_wildcard() {
        let pattern = "https://*.netlify.app";
        assert!(origin_matches(pattern, "https://shop.netlify.app"));
        assert!(!origin_matches(pattern, "https://.netlify.app"));
        assert!(!origin_matches(pattern, "http://shop.netlify.app"));
        assert!(!origin_matches(pattern, "https://shop.netlify.app.evil.com"));
    }
}
