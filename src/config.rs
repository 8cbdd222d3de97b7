use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Static site
    pub static_dir: String,
    pub site_url: String,

    // Lead storage (in-memory preview store when unset)
    pub database_url: Option<String>,

    // Admin API
    pub admin_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(port) => port
                    .parse()
                    .with_context(|| format!("PORT must be a valid port number, got '{}'", port))?,
                Err(_) => 8080,
            },

            // Static site
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()),
            site_url: std::env::var("SITE_URL")
                .unwrap_or_else(|_| "https://ciararuiz.com".to_string()),

            // Lead storage
            database_url: non_empty_var("DATABASE_URL"),

            // Admin API
            admin_api_key: non_empty_var("ADMIN_API_KEY"),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "HOST",
        "PORT",
        "STATIC_DIR",
        "SITE_URL",
        "DATABASE_URL",
        "ADMIN_API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().expect("defaults are valid");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, "dist");
        assert_eq!(config.site_url, "https://ciararuiz.com");
        assert!(config.database_url.is_none());
        assert!(config.admin_api_key.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("PORT", "3000");
        std::env::set_var("DATABASE_URL", "postgres://localhost/leads");
        std::env::set_var("ADMIN_API_KEY", "secret");

        let config = Config::from_env().expect("valid config");
        assert_eq!(config.port, 3000);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/leads")
        );
        assert_eq!(config.admin_api_key.as_deref(), Some("secret"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("PORT", "eighty");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PORT"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_optional_values_are_unset() {
        clear_env();
        std::env::set_var("ADMIN_API_KEY", "  ");

        let config = Config::from_env().expect("valid config");
        assert!(config.admin_api_key.is_none());
        clear_env();
    }
}
