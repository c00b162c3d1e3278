use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_TIME_ZONE: Tz = chrono_tz::America::New_York;
pub const DEFAULT_SERVICE_NAME: &str = "DateTime Webhook Service";
pub const DEFAULT_DISPLAY_NAME: &str = "DateTime Webhook para ElevenLabs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub time_zone: Tz,
    pub service_name: String,
    /// Name shown by the service descriptor at `/`.
    pub display_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            time_zone: DEFAULT_TIME_ZONE,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::load_from(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn load_from<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let host = lookup("HOST")
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.host);

        let port = lookup("PORT")
            .unwrap_or_else(|| DEFAULT_PORT.to_string())
            .parse()
            .unwrap_or(DEFAULT_PORT);

        let time_zone = match lookup("APP_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", name))?,
            None => defaults.time_zone,
        };

        let service_name = lookup("SERVICE_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.service_name);

        let display_name = lookup("SERVICE_DISPLAY_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.display_name);

        Ok(Config {
            host,
            port,
            time_zone,
            service_name,
            display_name,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::load_from(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_bind_all_interfaces_on_5001() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5001".parse().unwrap());
        assert_eq!(cfg.time_zone, chrono_tz::America::New_York);
        assert_eq!(cfg.service_name, "DateTime Webhook Service");
    }

    #[test]
    fn port_and_zone_are_overridable() {
        let cfg = load(&[("PORT", "8080"), ("APP_TIMEZONE", "America/Sao_Paulo")]).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.time_zone, chrono_tz::America::Sao_Paulo);
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let cfg = load(&[("PORT", "not-a-port")]).unwrap();
        assert_eq!(cfg.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_time_zone_is_an_error() {
        let err = load(&[("APP_TIMEZONE", "Mars/Olympus")]).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn blank_service_name_keeps_default() {
        let cfg = load(&[("SERVICE_NAME", "  ")]).unwrap();
        assert_eq!(cfg.service_name, DEFAULT_SERVICE_NAME);
    }

    #[test]
    fn display_name_is_overridable() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.display_name, DEFAULT_DISPLAY_NAME);

        let cfg = load(&[("SERVICE_DISPLAY_NAME", "Relógio do Agente")]).unwrap();
        assert_eq!(cfg.display_name, "Relógio do Agente");
        assert_eq!(cfg.service_name, DEFAULT_SERVICE_NAME);
    }
}
