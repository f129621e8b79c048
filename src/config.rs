use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::models::error::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOCATIONS_FILE: &str = "locations.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Surprise,
    Game,
}

impl FromStr for Page {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "surprise" => Ok(Page::Surprise),
            "game" => Ok(Page::Game),
            _ => Err(ConfigError::UnknownPage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub locations_file: PathBuf,
    pub page: Page,
    pub static_dir: Option<PathBuf>,
    pub validate_coordinates: bool,
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };
        let locations_file = lookup("LOCATIONS_FILE")
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCATIONS_FILE.to_string())
            .into();
        let page = match lookup("PAGE") {
            Some(page) => page.parse()?,
            None => Page::default(),
        };
        let static_dir = lookup("STATIC_DIR").filter(|d| !d.is_empty()).map(PathBuf::from);
        let validate_coordinates = match lookup("VALIDATE_COORDINATES") {
            Some(flag) => parse_flag("VALIDATE_COORDINATES", flag)?,
            None => false,
        };

        Ok(Config { host, port, locations_file, page, static_dir, validate_coordinates })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.locations_file, PathBuf::from("locations.txt"));
        assert_eq!(config.page, Page::Surprise);
        assert_eq!(config.static_dir, None);
        assert!(!config.validate_coordinates);
        assert_eq!(config.bind_addr().unwrap(), "0.0.0.0:3000".parse().unwrap());
    }

    #[test]
    fn reads_every_setting() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LOCATIONS_FILE", "/var/log/visits.txt"),
            ("PAGE", "Game"),
            ("STATIC_DIR", "public"),
            ("VALIDATE_COORDINATES", "true"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr().unwrap(), "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.locations_file, PathBuf::from("/var/log/visits.txt"));
        assert_eq!(config.page, Page::Game);
        assert_eq!(config.static_dir, Some(PathBuf::from("public")));
        assert!(config.validate_coordinates);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            config_from(&[("PORT", "http")]).unwrap_err(),
            ConfigError::InvalidPort("http".to_string())
        );
        assert_eq!(
            config_from(&[("PAGE", "quiz")]).unwrap_err(),
            ConfigError::UnknownPage("quiz".to_string())
        );
        assert!(matches!(
            config_from(&[("VALIDATE_COORDINATES", "maybe")]),
            Err(ConfigError::InvalidFlag { name: "VALIDATE_COORDINATES", .. })
        ));
    }

    #[test]
    fn unparsable_host_fails_at_bind() {
        let config = config_from(&[("HOST", "localhost")]).unwrap();
        assert_eq!(config.bind_addr().unwrap_err(), ConfigError::InvalidAddr("localhost".to_string()));
    }
}
