//! YAML 配置文件加载与保存

use super::types::DemoSettings;
use crate::logging::LogLevel;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置错误类型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("配置读取错误: {0}")]
    Read(String),
    #[error("YAML 解析错误: {0}")]
    Parse(String),
    #[error("YAML 序列化错误: {0}")]
    Serialize(String),
    #[error("配置写入错误: {0}")]
    Write(String),
    #[error("配置验证错误: {0}")]
    Validation(String),
}

/// 配置管理器
#[derive(Debug)]
pub struct SettingsManager {
    settings: DemoSettings,
    path: PathBuf,
}

impl SettingsManager {
    pub fn new(path: PathBuf) -> Self {
        Self {
            settings: DemoSettings::default(),
            path,
        }
    }

    pub fn with_settings(settings: DemoSettings, path: PathBuf) -> Self {
        Self { settings, path }
    }

    /// 从文件加载配置
    ///
    /// 文件不存在时使用默认配置
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let settings = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| SettingsError::Read(e.to_string()))?;
            Self::parse_yaml(&content)?
        } else {
            tracing::debug!("[SettingsManager] 配置文件不存在，使用默认配置: {:?}", path);
            DemoSettings::default()
        };

        Ok(Self {
            settings,
            path: path.to_path_buf(),
        })
    }

    pub fn parse_yaml(yaml: &str) -> Result<DemoSettings, SettingsError> {
        serde_yaml::from_str(yaml).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    pub fn to_yaml(settings: &DemoSettings) -> Result<String, SettingsError> {
        serde_yaml::to_string(settings).map_err(|e| SettingsError::Serialize(e.to_string()))
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        self.save_to(&self.path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Write(e.to_string()))?;
        }
        let yaml = Self::to_yaml(&self.settings)?;
        std::fs::write(path, yaml).map_err(|e| SettingsError::Write(e.to_string()))
    }

    /// 校验配置
    pub fn validate(settings: &DemoSettings) -> Result<(), SettingsError> {
        if settings.instance_name.trim().is_empty() {
            return Err(SettingsError::Validation("instance_name 不能为空".to_string()));
        }
        if settings.observer_id.trim().is_empty() {
            return Err(SettingsError::Validation("observer_id 不能为空".to_string()));
        }
        settings
            .log_level
            .parse::<LogLevel>()
            .map_err(|e| SettingsError::Validation(e.to_string()))?;
        serde_json::from_str::<serde_json::Value>(&settings.settings)
            .map_err(|e| SettingsError::Validation(format!("settings 不是有效的 JSON: {}", e)))?;
        if settings.config_id < 0 {
            return Err(SettingsError::Validation(format!(
                "config_id 不能为负数: {}",
                settings.config_id
            )));
        }
        Ok(())
    }

    pub fn settings(&self) -> &DemoSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut DemoSettings {
        &mut self.settings
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn default_settings_path() -> PathBuf {
        PathBuf::from("sz-sdk-mock.yaml")
    }
}

impl Default for SettingsManager {
    fn default() -> Self {
        Self::new(Self::default_settings_path())
    }
}
