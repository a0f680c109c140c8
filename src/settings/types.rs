//! 演示程序配置类型

use crate::senzing::{SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION, SZ_NO_LOGGING};
use serde::{Deserialize, Serialize};

/// 演示程序配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoSettings {
    /// 传给各客户端 `initialize` 的实例名
    #[serde(default = "default_instance_name")]
    pub instance_name: String,
    /// 引擎设置（JSON 字符串）
    #[serde(default = "default_engine_settings")]
    pub settings: String,
    #[serde(default = "default_verbose_logging")]
    pub verbose_logging: i64,
    /// 0 表示使用默认配置初始化
    #[serde(default = "default_config_id")]
    pub config_id: i64,
    /// SDK 日志级别名称
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_observer_origin")]
    pub observer_origin: String,
    #[serde(default = "default_observer_id")]
    pub observer_id: String,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_instance_name() -> String {
    "sz-sdk-mock-demo".to_string()
}

fn default_engine_settings() -> String {
    r#"{"PIPELINE":{"CONFIGPATH":"/etc/opt/senzing","RESOURCEPATH":"/opt/senzing/g2/resources","SUPPORTPATH":"/opt/senzing/data"},"SQL":{"CONNECTION":"sqlite3://na:na@/tmp/sqlite/G2C.db"}}"#.to_string()
}

fn default_verbose_logging() -> i64 {
    SZ_NO_LOGGING
}

fn default_config_id() -> i64 {
    SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION
}

fn default_log_level() -> String {
    "INFO".to_string()
}

fn default_observer_origin() -> String {
    "sz-sdk-mock-demo".to_string()
}

fn default_observer_id() -> String {
    "Observer 1".to_string()
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            instance_name: default_instance_name(),
            settings: default_engine_settings(),
            verbose_logging: default_verbose_logging(),
            config_id: default_config_id(),
            log_level: default_log_level(),
            observer_origin: default_observer_origin(),
            observer_id: default_observer_id(),
            logging: LoggingConfig::default(),
        }
    }
}

/// tracing 输出配置
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// 未设置 `RUST_LOG` 时使用的过滤指令
    #[serde(default = "default_directive")]
    pub default_directive: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
    #[serde(default)]
    pub show_target: bool,
}

fn default_directive() -> String {
    "info".to_string()
}

fn default_ansi() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_directive: default_directive(),
            ansi: default_ansi(),
            show_target: false,
        }
    }
}
