use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::info;

use crate::error::ConfigError;

pub struct Config {
    pub port: u16,
    pub catalog_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Self {
            port: try_load("RUST_PORT", "3000")?,
            catalog_path: try_load("CATALOG_PATH", "data/menu.json")?,
            static_dir: try_load("STATIC_DIR", "static")?,
        })
    }
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    parse(key, &raw)
}

fn parse<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_port() {
        assert_eq!(parse::<u16>("RUST_PORT", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn test_invalid_port() {
        let err = parse::<u16>("RUST_PORT", "eighty").unwrap_err();
        assert!(err.to_string().starts_with("Invalid RUST_PORT value"));
    }

    #[test]
    fn test_parse_path() {
        assert_eq!(
            parse::<PathBuf>("CATALOG_PATH", "data/menu.json").unwrap(),
            PathBuf::from("data/menu.json")
        );
    }
}
