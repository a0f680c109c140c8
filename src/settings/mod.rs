//! 演示程序配置
//!
//! YAML 配置文件的加载、保存与校验

mod types;
mod yaml;

pub use types::{DemoSettings, LoggingConfig};
pub use yaml::{SettingsError, SettingsManager};

#[cfg(test)]
mod tests;
