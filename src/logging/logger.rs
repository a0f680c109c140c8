//! SDK 日志记录器
//!
//! 负责方法入口/出口追踪记录，记录通过 [`LogSink`] 输出

use super::level::LogLevel;
use crate::error::SzResult;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Duration;

/// 单条日志记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// 消息 ID，格式为 `SZSDK{组件ID:04}{消息编号:04}`
    pub message_id: String,
    pub level: LogLevel,
    pub text: String,
    /// 参数明细（按调用顺序）
    pub details: Vec<(String, String)>,
    /// 方法耗时（仅出口记录）
    pub duration: Option<Duration>,
}

/// 日志输出目标
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord);
}

/// 转发到 `tracing` 的输出目标（默认）
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord) {
        let details = format_details(&record.details);
        let duration_ms = record.duration.map(|d| d.as_secs_f64() * 1000.0);
        match record.level {
            LogLevel::Trace => tracing::trace!(
                message_id = %record.message_id,
                details = %details,
                duration_ms = ?duration_ms,
                "{}",
                record.text
            ),
            LogLevel::Debug => tracing::debug!(
                message_id = %record.message_id,
                details = %details,
                "{}",
                record.text
            ),
            LogLevel::Info => tracing::info!(
                message_id = %record.message_id,
                details = %details,
                "{}",
                record.text
            ),
            LogLevel::Warn => tracing::warn!(
                message_id = %record.message_id,
                details = %details,
                "{}",
                record.text
            ),
            LogLevel::Error | LogLevel::Fatal | LogLevel::Panic => tracing::error!(
                message_id = %record.message_id,
                level = %record.level,
                details = %details,
                "{}",
                record.text
            ),
        }
    }
}

fn format_details(details: &[(String, String)]) -> String {
    details
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// 内存输出目标，用于测试断言
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn message_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .map(|r| r.message_id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}

/// SDK 日志记录器
///
/// 持有当前日志级别，低于该级别的记录会被丢弃
pub struct SdkLogger {
    component_id: i32,
    level: RwLock<LogLevel>,
    sink: Arc<dyn LogSink>,
}

impl SdkLogger {
    pub fn new(component_id: i32, sink: Arc<dyn LogSink>) -> Self {
        Self {
            component_id,
            level: RwLock::new(LogLevel::default()),
            sink,
        }
    }

    pub fn component_id(&self) -> i32 {
        self.component_id
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    /// 按名称设置日志级别
    ///
    /// 名称无效时保持原级别不变
    pub fn set_log_level(&self, name: &str) -> SzResult<LogLevel> {
        let level: LogLevel = name.parse()?;
        *self.level.write() = level;
        Ok(level)
    }

    pub fn set_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.sink = sink;
    }

    pub fn message_id(&self, number: i32) -> String {
        format!("SZSDK{:04}{:04}", self.component_id, number)
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    /// 记录一条消息，级别由消息编号推导
    pub fn log(
        &self,
        number: i32,
        text: impl Into<String>,
        details: Vec<(String, String)>,
        duration: Option<Duration>,
    ) {
        if !self.is_enabled(LogLevel::for_message_number(number)) {
            return;
        }
        self.emit(number, text, details, duration);
    }

    /// 跳过级别过滤直接写出
    pub fn emit(
        &self,
        number: i32,
        text: impl Into<String>,
        details: Vec<(String, String)>,
        duration: Option<Duration>,
    ) {
        let record = LogRecord {
            message_id: self.message_id(number),
            level: LogLevel::for_message_number(number),
            text: text.into(),
            details,
            duration,
        };
        self.sink.log(&record);
    }
}

impl std::fmt::Debug for SdkLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SdkLogger")
            .field("component_id", &self.component_id)
            .field("level", &self.level())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger_with_memory() -> (SdkLogger, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        (SdkLogger::new(6021, sink.clone()), sink)
    }

    #[test]
    fn test_message_id_format() {
        let (logger, _) = logger_with_memory();
        assert_eq!(logger.message_id(1), "SZSDK60210001");
        assert_eq!(logger.message_id(8001), "SZSDK60218001");
    }

    #[test]
    fn test_trace_records_filtered_at_default_level() {
        let (logger, sink) = logger_with_memory();
        logger.log(1, "entry", vec![], None);
        assert!(sink.is_empty());

        logger.log(2001, "info message", vec![], None);
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.records()[0].level, LogLevel::Info);
    }

    #[test]
    fn test_trace_records_kept_at_trace_level() {
        let (logger, sink) = logger_with_memory();
        logger.set_log_level("TRACE").unwrap();
        logger.log(
            2,
            "exit",
            vec![("configHandle".to_string(), "1".to_string())],
            Some(Duration::from_millis(3)),
        );
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message_id, "SZSDK60210002");
        assert_eq!(records[0].duration, Some(Duration::from_millis(3)));
    }

    #[test]
    fn test_emit_ignores_level() {
        let (logger, sink) = logger_with_memory();
        logger.emit(2, "exit", vec![], None);
        assert_eq!(sink.message_ids(), vec!["SZSDK60210002".to_string()]);
        assert_eq!(sink.records()[0].level, LogLevel::Trace);
    }

    #[test]
    fn test_invalid_level_keeps_previous() {
        let (logger, _) = logger_with_memory();
        logger.set_log_level("DEBUG").unwrap();
        assert!(logger.set_log_level("LOUD").is_err());
        assert_eq!(logger.level(), LogLevel::Debug);
    }
}
