use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub mailgun: MailgunConfig,
    #[serde(default)]
    pub verification: VerificationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub database: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "mysql://{}:{}@{}/{}",
            self.username, self.password, self.host, self.database
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailgunConfig {
    pub api_key: String,
    pub domain: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn default_api_base() -> String {
    "https://api.mailgun.net/v3".to_string()
}

fn default_base_url() -> String {
    "https://verify.example.com".to_string()
}

impl Config {
    pub fn from_toml() -> Result<Self, Box<dyn std::error::Error>> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // Fall back to environment variables when no config file exists
        let config_result = std::fs::read_to_string(&config_path);

        let mut config: Config = match config_result {
            Ok(config_str) => {
                toml::from_str(&config_str)
                    .map_err(|e| format!("Failed to parse config file: {e}"))?
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fn get_env(name: &str) -> Option<String> {
                    env::var(name).ok()
                }
                fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
                    env::var(name)
                        .ok()
                        .and_then(|v| v.parse::<T>().ok())
                        .unwrap_or(default)
                }

                Config {
                    server: ServerConfig {
                        host: get_env("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                        port: get_env_parse("SERVER_PORT", 8080u16),
                    },
                    database: DatabaseConfig {
                        host: get_env("SQL_HOST").unwrap_or_default(),
                        database: get_env("SQL_DATABASE").unwrap_or_default(),
                        username: get_env("SQL_USERNAME").unwrap_or_default(),
                        password: get_env("SQL_PASSWORD").unwrap_or_default(),
                        max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                    },
                    mailgun: MailgunConfig {
                        api_key: get_env("MAILGUN_apiKey").unwrap_or_default(),
                        domain: get_env("MAILGUN_domain").unwrap_or_default(),
                        api_base: get_env("MAILGUN_API_BASE")
                            .unwrap_or_else(default_api_base),
                    },
                    verification: VerificationConfig {
                        base_url: get_env("VERIFY_BASE_URL").unwrap_or_else(default_base_url),
                    },
                }
            }
            Err(e) => {
                return Err(format!("Failed to read config file {config_path}: {e}").into());
            }
        };

        // Environment overrides apply even when a config file is present
        if let Ok(v) = env::var("SERVER_HOST") {
            config.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            config.server.port = p;
        }
        if let Ok(v) = env::var("SQL_HOST") {
            config.database.host = v;
        }
        if let Ok(v) = env::var("SQL_DATABASE") {
            config.database.database = v;
        }
        if let Ok(v) = env::var("SQL_USERNAME") {
            config.database.username = v;
        }
        if let Ok(v) = env::var("SQL_PASSWORD") {
            config.database.password = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            config.database.max_connections = mc;
        }
        if let Ok(v) = env::var("MAILGUN_apiKey") {
            config.mailgun.api_key = v;
        }
        if let Ok(v) = env::var("MAILGUN_domain") {
            config.mailgun.domain = v;
        }
        if let Ok(v) = env::var("MAILGUN_API_BASE") {
            config.mailgun.api_base = v;
        }
        if let Ok(v) = env::var("VERIFY_BASE_URL") {
            config.verification.base_url = v;
        }

        Ok(config)
    }
}
