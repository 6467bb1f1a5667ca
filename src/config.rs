use std::env;
use anyhow::{Context, Result};

/// Fixed service identifier reported by the status endpoint.
pub const SERVICE_NAME: &str = "do-saas-k8s";

/// Port used when PORT is not set.
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        Ok(Config { port })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service name: {}", SERVICE_NAME);
        tracing::info!("  Listening port: {}", self.port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // PORT is process-global; serialize tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_config_with_port_set() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("PORT", "8080");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8080);

        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    fn test_config_with_default_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::remove_var("PORT");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("PORT", "not-a-number");
        }

        let result = Config::from_env();
        unsafe {
            env::remove_var("PORT");
        }

        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap();
        unsafe {
            env::set_var("PORT", "99999");
        }

        let result = Config::from_env();
        unsafe {
            env::remove_var("PORT");
        }

        assert!(result.is_err());
    }
}
