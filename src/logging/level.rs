//! 日志级别
//!
//! 级别名称与真实 SDK 的日志接口保持一致：
//! TRACE、DEBUG、INFO、WARN、ERROR、FATAL、PANIC

use crate::error::SzError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LEVEL_TRACE_NAME: &str = "TRACE";
pub const LEVEL_DEBUG_NAME: &str = "DEBUG";
pub const LEVEL_INFO_NAME: &str = "INFO";
pub const LEVEL_WARN_NAME: &str = "WARN";
pub const LEVEL_ERROR_NAME: &str = "ERROR";
pub const LEVEL_FATAL_NAME: &str = "FATAL";
pub const LEVEL_PANIC_NAME: &str = "PANIC";

/// 日志级别（按详细程度从高到低排序）
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl LogLevel {
    pub const ALL: [LogLevel; 7] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Fatal,
        LogLevel::Panic,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LogLevel::Trace => LEVEL_TRACE_NAME,
            LogLevel::Debug => LEVEL_DEBUG_NAME,
            LogLevel::Info => LEVEL_INFO_NAME,
            LogLevel::Warn => LEVEL_WARN_NAME,
            LogLevel::Error => LEVEL_ERROR_NAME,
            LogLevel::Fatal => LEVEL_FATAL_NAME,
            LogLevel::Panic => LEVEL_PANIC_NAME,
        }
    }

    /// 根据消息编号推导级别
    ///
    /// 0-999 为 TRACE，1000-1999 为 DEBUG，依此类推，6000 及以上为 PANIC
    pub fn for_message_number(number: i32) -> Self {
        match number {
            i32::MIN..=999 => LogLevel::Trace,
            1000..=1999 => LogLevel::Debug,
            2000..=2999 => LogLevel::Info,
            3000..=3999 => LogLevel::Warn,
            4000..=4999 => LogLevel::Error,
            5000..=5999 => LogLevel::Fatal,
            _ => LogLevel::Panic,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = SzError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| SzError::InvalidLogLevel(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert_eq!(" Info ".parse::<LogLevel>().unwrap(), LogLevel::Info);
    }

    #[test]
    fn test_parse_rejects_unknown_name() {
        let err = "BadLogLevelName".parse::<LogLevel>().unwrap_err();
        assert_eq!(err, SzError::InvalidLogLevel("BadLogLevelName".to_string()));
    }

    #[test]
    fn test_message_number_levels() {
        assert_eq!(LogLevel::for_message_number(1), LogLevel::Trace);
        assert_eq!(LogLevel::for_message_number(2002), LogLevel::Info);
        assert_eq!(LogLevel::for_message_number(5301), LogLevel::Fatal);
        assert_eq!(LogLevel::for_message_number(8001), LogLevel::Panic);
    }

    #[test]
    fn test_trace_is_most_verbose() {
        assert!(LogLevel::ALL.iter().all(|level| LogLevel::Trace <= *level));
    }

    proptest! {
        #[test]
        fn prop_display_parse_roundtrip(index in 0usize..7) {
            let level = LogLevel::ALL[index];
            prop_assert_eq!(level.to_string().parse::<LogLevel>().unwrap(), level);
            prop_assert_eq!(level.to_string().to_lowercase().parse::<LogLevel>().unwrap(), level);
        }
    }
}
