use crate::error::{AppError, AppResult};
use migration::SchemaProfile;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    /// enterprise / community
    #[serde(default = "default_schema_profile")]
    pub schema_profile: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

fn default_schema_profile() -> String {
    SchemaProfile::Enterprise.to_string()
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl DatabaseConfig {
    pub fn profile(&self) -> AppResult<SchemaProfile> {
        self.schema_profile
            .parse()
            .map_err(AppError::ConfigError)
    }
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // 配置文件不存在时完全依赖环境变量
        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::from_toml_str(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::from_env_only()?,
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Cannot read config file {config_path}: {e}"
                )));
            }
        };

        // 环境变量覆盖（即便文件存在时也覆盖）
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        toml::from_str(content)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {e}")))
    }

    fn from_env_only() -> AppResult<Self> {
        fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
            env::var(name)
                .ok()
                .and_then(|v| v.parse::<T>().ok())
                .unwrap_or(default)
        }

        let database_url = env::var("DATABASE_URL").map_err(|_| {
            AppError::ConfigError(
                "DATABASE_URL is not set and no config.toml was found".to_string(),
            )
        })?;

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: get_env_parse("SERVER_PORT", 8080u16),
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections: get_env_parse("DB_MAX_CONNECTIONS", 10u32),
                schema_profile: env::var("DB_SCHEMA_PROFILE")
                    .unwrap_or_else(|_| default_schema_profile()),
            },
            security: SecurityConfig {
                bcrypt_cost: get_env_parse("BCRYPT_COST", default_bcrypt_cost()),
            },
        })
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT")
            && let Ok(p) = v.parse()
        {
            self.server.port = p;
        }
        if let Ok(v) = env::var("DATABASE_URL") {
            self.database.url = v;
        }
        if let Ok(v) = env::var("DB_MAX_CONNECTIONS")
            && let Ok(mc) = v.parse()
        {
            self.database.max_connections = mc;
        }
        if let Ok(v) = env::var("DB_SCHEMA_PROFILE") {
            self.database.schema_profile = v;
        }
        if let Ok(v) = env::var("BCRYPT_COST")
            && let Ok(cost) = v.parse()
        {
            self.security.bcrypt_cost = cost;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        self.database.profile()?;
        if self.database.max_connections == 0 {
            return Err(AppError::ConfigError(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        // bcrypt 允许的 cost 范围
        if !(4..=31).contains(&self.security.bcrypt_cost) {
            return Err(AppError::ConfigError(
                "security.bcrypt_cost must be between 4 and 31".to_string(),
            ));
        }
        Ok(())
    }
}
