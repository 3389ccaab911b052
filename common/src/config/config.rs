use crate::errors::AppError;
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// 连接串环境变量，存在时覆盖 `database.url`
pub const MONGODB_URI_ENV: &str = "MONGODB_URI";

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub server: Option<ServerConfig>,
    pub sys: Option<SysConfig>,
}

impl AppConfig {
    /// 加载顺序：配置文件（可选） -> `APP_` 前缀环境变量 -> `MONGODB_URI`
    pub fn load(file: &str) -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::with_name(file).required(false))
            .add_source(Environment::with_prefix("APP").prefix_separator("_").separator("__").try_parsing(true))
            .set_override_option("database.url", std::env::var(MONGODB_URI_ENV).ok())?
            .build()?;
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, AppError> {
        Ok(config.try_deserialize::<AppConfig>()?)
    }

    pub fn get_database(&self) -> DatabaseConfig {
        self.database.clone().unwrap_or_default()
    }
    pub fn get_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }
    pub fn get_sys(&self) -> SysConfig {
        self.sys.clone().unwrap_or_default()
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    /// MongoDB 连接串，必填
    pub url: Option<String>,
    /// 为空时使用连接串中的库名
    pub db_name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SysConfig {
    //全局日志级别
    pub log_level: String,
}

impl Default for SysConfig {
    fn default() -> Self {
        Self { log_level: "info".to_string() }
    }
}
