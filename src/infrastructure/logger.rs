//! 日志基础设施

use anyhow::Result;
use std::io;
use tracing_appender::{non_blocking, non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::config::LoggingConfig;

/// 初始化日志系统
///
/// 1. 创建日志目录
/// 2. 设置按日期分割的文件日志
/// 3. 按配置同时输出到控制台
///
/// `RUST_LOG` 存在时优先于配置中的级别。返回的 guard 必须在进程
/// 生命周期内持有，否则缓冲中的日志会丢失。
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file_appender = rolling::daily(&config.log_dir, &config.file_prefix);
    let (file_writer, guard) = non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    let console_layer = config
        .console_output
        .then(|| fmt::layer().with_writer(io::stdout).with_ansi(true));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            // 文件日志层
            fmt::layer()
                .with_writer(file_writer)
                .with_ansi(false)
                .with_target(false)
                .with_thread_names(true),
        )
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}

/// 只输出到控制台的日志，客户端使用
pub fn init_console_logging(level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .try_init()?;

    Ok(())
}
