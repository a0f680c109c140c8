//! 日志模块
//!
//! - SDK 方法追踪（入口/出口记录）
//! - `tracing-subscriber` 初始化

mod level;
mod logger;

pub use level::{
    LogLevel, LEVEL_DEBUG_NAME, LEVEL_ERROR_NAME, LEVEL_FATAL_NAME, LEVEL_INFO_NAME,
    LEVEL_PANIC_NAME, LEVEL_TRACE_NAME, LEVEL_WARN_NAME,
};
pub use logger::{LogRecord, LogSink, MemorySink, SdkLogger, TracingSink};

use crate::settings::LoggingConfig;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("初始化 tracing 订阅者失败: {0}")]
    Init(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// 初始化全局 tracing 订阅者
///
/// `RUST_LOG` 优先，否则使用配置中的默认指令。
/// 重复初始化返回错误而不是 panic。
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_directive));

    fmt()
        .with_env_filter(filter)
        .with_target(config.show_target)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(LoggingError::Init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config);
        let err = init_tracing(&config).unwrap_err();
        assert!(matches!(err, LoggingError::Init(_)));
        assert!(err.to_string().starts_with("初始化 tracing 订阅者失败"));
    }
}
