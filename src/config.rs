use std::{env, net::SocketAddr};

#[derive(Clone, Debug)]
pub struct Config {
    pub app_host: String,
    pub app_port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, falling back to defaults
    /// for anything the lookup doesn't provide.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let app_host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let app_port = lookup("APP_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()?;

        Ok(Self { app_host, app_port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, Box<dyn std::error::Error>> {
        Ok(format!("{}:{}", self.app_host, self.app_port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.app_host, "127.0.0.1");
        assert_eq!(cfg.app_port, 8000);
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn overrides_host_and_port() {
        let cfg = Config::from_lookup(lookup_from(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(cfg.socket_addr().unwrap().to_string(), "0.0.0.0:9090");
    }

    #[test]
    fn rejects_bad_port() {
        assert!(Config::from_lookup(lookup_from(&[("APP_PORT", "http")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("APP_PORT", "70000")])).is_err());
    }

    #[test]
    fn rejects_unparseable_host() {
        let cfg = Config::from_lookup(lookup_from(&[("APP_HOST", "not a host")])).unwrap();
        assert!(cfg.socket_addr().is_err());
    }
}
