//! 配置模块
//!
//! 加载顺序：显式路径 -> `config.toml` -> `./config/config.toml` -> 默认值，
//! 然后应用 `.env` 与环境变量覆盖，最后校验。

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 产品目录服务配置结构
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 跨域配置
    pub cors: CorsConfig,
    /// 日志配置
    pub logging: LoggingConfig,
    /// 图片地址生成配置
    pub images: ImageConfig,
    /// 客户端配置
    pub client: ClientConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub bind_address: String,
    /// HTTP 服务端口
    pub port: u16,
}

/// 跨域配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// 唯一允许的来源
    pub allowed_origin: String,
    /// 是否允许携带凭据
    pub allow_credentials: bool,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 日志目录
    pub log_dir: PathBuf,
    /// 日志文件名前缀
    pub file_prefix: String,
    /// 日志级别 (trace, debug, info, warn, error)
    pub level: String,
    /// 是否启用控制台输出
    pub console_output: bool,
}

/// 图片地址生成配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// 地址模板，`{seed}` 会被替换为随机数
    pub url_template: String,
    /// 随机数上界（不含）
    pub upper_bound: u32,
}

/// 客户端配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// 服务端基础地址
    pub base_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: "http://localhost:3000".to_string(),
            allow_credentials: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("./logs"),
            file_prefix: "catalog".to_string(),
            level: "info".to_string(),
            console_output: true,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            url_template: "https://picsum.photos/200/200?random={seed}".to_string(),
            upper_bound: 1000,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Config {
    /// 从配置文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::FileRead(e.to_string()))?;

        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::FileWrite(e.to_string()))?;
        }

        fs::write(path.as_ref(), content).map_err(|e| ConfigError::FileWrite(e.to_string()))?;

        Ok(())
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// 使用给定的查找函数应用覆盖，便于测试
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::Validation(format!("无效的端口: {}", port)))?;
        }
        if let Some(address) = lookup("CATALOG_BIND_ADDRESS") {
            self.server.bind_address = address;
        }
        if let Some(origin) = lookup("CATALOG_ALLOWED_ORIGIN") {
            self.cors.allowed_origin = origin;
        }
        if let Some(level) = lookup("CATALOG_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Some(base_url) = lookup("CATALOG_BASE_URL") {
            self.client.base_url = base_url;
        }
        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation("绑定地址不能为空".to_string()));
        }

        if self.cors.allowed_origin.trim().is_empty() || self.cors.allowed_origin.trim() == "*" {
            return Err(ConfigError::Validation(
                "跨域来源必须是一个具体的地址".to_string(),
            ));
        }
        if axum::http::HeaderValue::from_str(&self.cors.allowed_origin).is_err() {
            return Err(ConfigError::Validation(format!(
                "无效的跨域来源: {}",
                self.cors.allowed_origin
            )));
        }

        if !self.images.url_template.contains("{seed}") {
            return Err(ConfigError::Validation(
                "图片地址模板必须包含 {seed}".to_string(),
            ));
        }
        if self.images.upper_bound == 0 {
            return Err(ConfigError::Validation("随机数上界必须大于0".to_string()));
        }

        if self.client.base_url.trim().is_empty() {
            return Err(ConfigError::Validation("客户端基础地址不能为空".to_string()));
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "无效的日志级别: {}，有效值: {:?}",
                self.logging.level, valid_levels
            )));
        }

        Ok(())
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("文件读取错误: {0}")]
    FileRead(String),
    #[error("文件写入错误: {0}")]
    FileWrite(String),
    #[error("配置解析错误: {0}")]
    Parse(String),
    #[error("配置序列化错误: {0}")]
    Serialize(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

const CONFIG_PATHS: [&str; 2] = ["config.toml", "./config/config.toml"];

/// 将要使用的配置文件；`None` 表示使用默认配置
///
/// 不在这里打日志：调用时日志系统通常还没有初始化，由调用方在初始化后记录。
pub fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    CONFIG_PATHS
        .iter()
        .map(|path| PathBuf::from(*path))
        .find(|path| path.exists())
}

/// 从文件或默认值加载配置（不含环境变量覆盖）
pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    match config_source(explicit) {
        Some(path) => Config::load_from_file(path),
        None => Ok(Config::default()),
    }
}

/// 在日志系统初始化之后记录配置来源
pub fn log_config_source(explicit: Option<&Path>) {
    match config_source(explicit) {
        Some(path) => info!(path = %path.display(), "从配置文件加载"),
        None => info!("未找到配置文件，使用默认配置"),
    }
}

/// 完整加载流程：文件 -> `.env` -> 环境变量 -> 校验
pub fn init_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let mut config = load_config(explicit)?;

    // .env 缺失不是错误
    dotenvy::dotenv().ok();
    config.apply_env_overrides()?;
    config.validate()?;

    Ok(config)
}
