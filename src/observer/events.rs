//! 观察者通知事件
//!
//! 每次 SDK 调用产生一条不可变通知，投递给每个已注册的观察者

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 观察者通知
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// 调用方设置的来源标签
    pub origin: String,
    /// 发出通知的组件 ID
    pub subject_id: i32,
    /// 操作对应的事件编号
    pub message_id: i32,
    /// 通知时间（UTC，RFC 3339）
    pub message_time: String,
    /// 调用失败时的错误信息
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// 由输入参数构成的明细
    #[serde(default)]
    pub details: BTreeMap<String, String>,
}

impl Notification {
    pub fn new(
        origin: impl Into<String>,
        subject_id: i32,
        message_id: i32,
        error: Option<String>,
        details: BTreeMap<String, String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            subject_id,
            message_id,
            message_time: Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true),
            error,
            details,
        }
    }

    pub fn detail(&self, key: &str) -> Option<&str> {
        self.details.get(key).map(String::as_str)
    }

    /// 渲染为扁平 JSON 消息
    ///
    /// 明细字段与头部字段位于同一层级，头部字段优先
    pub fn to_message(&self) -> String {
        let mut message = serde_json::Map::new();
        for (key, value) in &self.details {
            message.insert(key.clone(), serde_json::Value::String(value.clone()));
        }
        message.insert("subjectId".into(), self.subject_id.to_string().into());
        message.insert("messageId".into(), self.message_id.to_string().into());
        message.insert("messageTime".into(), self.message_time.clone().into());
        message.insert("origin".into(), self.origin.clone().into());
        if let Some(error) = &self.error {
            message.insert("error".into(), error.clone().into());
        }
        serde_json::Value::Object(message).to_string()
    }
}
