// src/config.rs

use std::env;
use dotenvy::dotenv;

/// Upper bound on an import body (1 MiB). Keeps pasted text small enough for the Q&A scanner.
pub const DEFAULT_MAX_IMPORT_BYTES: usize = 1024 * 1024;

/// Default number of records returned in an import preview.
pub const IMPORT_PREVIEW_SAMPLE: usize = 3;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_import_bytes: usize,
    pub preview_sample: usize,
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Loads the configuration from the environment (and `.env`).
    ///
    /// Malformed numeric values fall back to their defaults. The returned warnings
    /// describe each fallback; log them once tracing is initialized.
    pub fn from_env() -> (Self, Vec<String>) {
        dotenv().ok();

        let mut warnings = Vec::new();

        let port = parse_or_default("PORT", env_value("PORT"), DEFAULT_PORT, &mut warnings);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        let max_import_bytes = parse_or_default(
            "MAX_IMPORT_BYTES",
            env_value("MAX_IMPORT_BYTES"),
            DEFAULT_MAX_IMPORT_BYTES,
            &mut warnings,
        );

        let preview_sample = parse_or_default(
            "PREVIEW_SAMPLE",
            env_value("PREVIEW_SAMPLE"),
            IMPORT_PREVIEW_SAMPLE,
            &mut warnings,
        );

        let cors_origins: Vec<String> = env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_else(|_| default_origins());

        let config = Self {
            port,
            rust_log,
            max_import_bytes,
            preview_sample,
            cors_origins,
        };

        (config, warnings)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_import_bytes: DEFAULT_MAX_IMPORT_BYTES,
            preview_sample: IMPORT_PREVIEW_SAMPLE,
            cors_origins: default_origins(),
        }
    }
}

fn default_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://127.0.0.1:3000".to_string(),
    ]
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Parses a numeric setting, falling back to `default` when unset or malformed.
/// A malformed value adds a message to `warnings`.
fn parse_or_default<T: std::str::FromStr + std::fmt::Display>(
    key: &str,
    raw: Option<String>,
    default: T,
    warnings: &mut Vec<String>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warnings.push(format!("Invalid {} value '{}', using default {}", key, raw, default));
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_or_default_valid_value() {
        let mut warnings = Vec::new();
        let value = parse_or_default("MAX_IMPORT_BYTES", Some(" 2048 ".to_string()), 10usize, &mut warnings);
        assert_eq!(value, 2048);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_or_default_unset() {
        let mut warnings = Vec::new();
        let value = parse_or_default("PORT", None, 3000u16, &mut warnings);
        assert_eq!(value, 3000);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_parse_or_default_malformed_value_warns() {
        let mut warnings = Vec::new();
        let value = parse_or_default(
            "MAX_IMPORT_BYTES",
            Some("abc".to_string()),
            DEFAULT_MAX_IMPORT_BYTES,
            &mut warnings,
        );
        assert_eq!(value, DEFAULT_MAX_IMPORT_BYTES);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("MAX_IMPORT_BYTES"));
        assert!(warnings[0].contains("'abc'"));
    }

    #[test]
    fn test_parse_or_default_out_of_range() {
        let mut warnings = Vec::new();
        let value = parse_or_default("PORT", Some("70000".to_string()), DEFAULT_PORT, &mut warnings);
        assert_eq!(value, DEFAULT_PORT);
        assert_eq!(warnings.len(), 1);
    }
}
