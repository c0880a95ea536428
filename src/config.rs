use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 网关配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub http: HttpConfig,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 远程用户服务配置
    pub user_service: UserServiceConfig,
    /// 日志配置
    pub logging: LoggingConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 数据库配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库名
    pub service: String,
    pub username: String,
    pub password: String,
    /// 数据库主机
    pub server: String,
    pub port: u16,
    /// 连接池上限
    pub max_connections: u32,
    /// 获取连接的超时时间（秒）
    pub acquire_timeout_seconds: u64,
}

/// 远程用户服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserServiceConfig {
    /// gRPC 地址，如 `http://localhost:50051`
    pub addr: String,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 8082,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            service: "demo".to_string(),
            username: "demo".to_string(),
            password: String::new(),
            server: "localhost".to_string(),
            port: 5432,
            max_connections: 10,
            acquire_timeout_seconds: 30,
        }
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            addr: "http://localhost:50051".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl HttpConfig {
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// 用环境变量覆盖配置
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("DB_SERVICE") {
            self.database.service = v;
        }
        if let Some(v) = lookup("DB_USERNAME") {
            self.database.username = v;
        }
        if let Some(v) = lookup("DB_PASSWORD") {
            self.database.password = v;
        }
        if let Some(v) = lookup("DB_SERVER") {
            self.database.server = v;
        }
        if let Some(v) = lookup("DB_PORT") {
            self.database.port = parse_port("DB_PORT", &v)?;
        }
        if let Some(v) = lookup("HTTP_PORT") {
            self.http.port = parse_port("HTTP_PORT", &v)?;
        }
        if let Some(v) = lookup("USER_SERVICE_ADDR") {
            self.user_service.addr = v;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation("HTTP port must be greater than 0".to_string()));
        }
        if self.http.bind_address.is_empty() {
            return Err(ConfigError::Validation("bind address must not be empty".to_string()));
        }
        if self.database.server.is_empty() {
            return Err(ConfigError::Validation("database server must not be empty".to_string()));
        }
        if self.database.port == 0 {
            return Err(ConfigError::Validation(
                "database port must be greater than 0".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections must be greater than 0".to_string(),
            ));
        }
        if tonic::transport::Endpoint::from_shared(self.user_service.addr.clone()).is_err() {
            return Err(ConfigError::Validation(format!(
                "invalid user service address: {}",
                self.user_service.addr
            )));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "invalid log level: {}, expected one of {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

fn parse_port(key: &str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Validation(format!("{} is not a valid port: {}", key, value)))
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    FileRead(String),
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("invalid config: {0}")]
    Validation(String),
}

/// 加载配置：显式路径 > 默认路径 > 默认值，之后应用环境变量并验证
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(path) => Config::load_from_file(path)?,
        None => match default_config_path() {
            Some(path) => Config::load_from_file(path)?,
            None => Config::default(),
        },
    };

    config.apply_env_overrides()?;
    config.validate()?;
    Ok(config)
}

fn default_config_path() -> Option<PathBuf> {
    ["config.toml", "./config/config.toml"]
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists())
}
