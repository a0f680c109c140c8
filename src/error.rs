//! SDK 错误类型
//!
//! 与真实客户端保持一致的错误分类。
//!
//! ## 功能
//! - 错误分类（配置、未找到、输入错误等）
//! - 序列化支持（用于观察者通知）

use thiserror::Error;

/// SDK 错误分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SzErrorKind {
    BadInput,
    Configuration,
    NotFound,
    UnknownDataSource,
    NotInitialized,
    License,
    Retryable,
    Unrecoverable,
    InvalidLogLevel,
    Unhandled,
}

/// SDK 错误类型
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SzError {
    /// 输入无效
    #[error("输入无效: {0}")]
    BadInput(String),

    /// 配置错误（例如配置 ID 不存在）
    #[error("配置错误: {0}")]
    Configuration(String),

    /// 记录或实体不存在
    #[error("未找到: {0}")]
    NotFound(String),

    /// 数据源未注册
    #[error("未知数据源: {0}")]
    UnknownDataSource(String),

    /// 客户端尚未初始化
    #[error("未初始化: {0}")]
    NotInitialized(String),

    /// 许可证错误
    #[error("许可证错误: {0}")]
    License(String),

    /// 可重试错误
    #[error("可重试错误: {0}")]
    Retryable(String),

    /// 不可恢复错误
    #[error("不可恢复错误: {0}")]
    Unrecoverable(String),

    /// 日志级别名称无效
    #[error("无效的日志级别: {0}")]
    InvalidLogLevel(String),

    /// 未分类错误
    #[error("未处理错误: {0}")]
    Unhandled(String),
}

impl SzError {
    pub fn bad_input(msg: impl Into<String>) -> Self {
        Self::BadInput(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unknown_data_source(msg: impl Into<String>) -> Self {
        Self::UnknownDataSource(msg.into())
    }

    /// 获取错误分类
    pub fn kind(&self) -> SzErrorKind {
        match self {
            SzError::BadInput(_) => SzErrorKind::BadInput,
            SzError::Configuration(_) => SzErrorKind::Configuration,
            SzError::NotFound(_) => SzErrorKind::NotFound,
            SzError::UnknownDataSource(_) => SzErrorKind::UnknownDataSource,
            SzError::NotInitialized(_) => SzErrorKind::NotInitialized,
            SzError::License(_) => SzErrorKind::License,
            SzError::Retryable(_) => SzErrorKind::Retryable,
            SzError::Unrecoverable(_) => SzErrorKind::Unrecoverable,
            SzError::InvalidLogLevel(_) => SzErrorKind::InvalidLogLevel,
            SzError::Unhandled(_) => SzErrorKind::Unhandled,
        }
    }

    pub fn is_configuration(&self) -> bool {
        self.kind() == SzErrorKind::Configuration
    }

    /// 未知数据源也属于"未找到"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self.kind(),
            SzErrorKind::NotFound | SzErrorKind::UnknownDataSource
        )
    }

    pub fn is_bad_input(&self) -> bool {
        matches!(
            self.kind(),
            SzErrorKind::BadInput | SzErrorKind::UnknownDataSource | SzErrorKind::NotFound
        )
    }

    pub fn is_retryable(&self) -> bool {
        self.kind() == SzErrorKind::Retryable
    }
}

impl From<SzError> for String {
    fn from(err: SzError) -> Self {
        err.to_string()
    }
}

impl serde::Serialize for SzError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// SDK 调用结果
pub type SzResult<T> = Result<T, SzError>;
