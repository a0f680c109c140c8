//! 操作描述与调用参数

use std::collections::BTreeMap;
use std::fmt;

/// 操作描述
///
/// 追踪出口编号固定为入口编号加一
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Method {
    pub name: &'static str,
    pub trace_entry: i32,
    pub event_id: i32,
}

impl Method {
    pub const fn new(name: &'static str, trace_entry: i32, event_id: i32) -> Self {
        Self {
            name,
            trace_entry,
            event_id,
        }
    }

    pub const fn trace_exit(&self) -> i32 {
        self.trace_entry + 1
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// 一次调用的参数
///
/// - `param`：只进入追踪记录
/// - `detail`：同时进入追踪记录和通知明细
/// - `detail_on_success`：只在调用成功时进入通知明细
#[derive(Debug, Clone)]
pub struct Call {
    pub(crate) method: Method,
    pub(crate) trace: Vec<(String, String)>,
    pub(crate) details: BTreeMap<String, String>,
    pub(crate) success_details: BTreeMap<String, String>,
}

impl Call {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            trace: Vec::new(),
            details: BTreeMap::new(),
            success_details: BTreeMap::new(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.trace.push((key.to_string(), value.to_string()));
        self
    }

    pub fn detail(mut self, key: &str, value: impl ToString) -> Self {
        let value = value.to_string();
        self.trace.push((key.to_string(), value.clone()));
        self.details.insert(key.to_string(), value);
        self
    }

    pub fn detail_on_success(mut self, key: &str, value: impl ToString) -> Self {
        self.success_details
            .insert(key.to_string(), value.to_string());
        self
    }

    /// 按调用结果合并通知明细
    pub(crate) fn notification_details(&self, succeeded: bool) -> BTreeMap<String, String> {
        let mut details = self.details.clone();
        if succeeded {
            details.extend(self.success_details.clone());
        }
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD_DATA_SOURCE: Method = Method::new("add_data_source", 1, 8001);

    #[test]
    fn test_trace_exit_follows_entry() {
        assert_eq!(ADD_DATA_SOURCE.trace_exit(), 2);
        assert_eq!(ADD_DATA_SOURCE.to_string(), "add_data_source");
    }

    #[test]
    fn test_param_stays_out_of_details() {
        let call = Call::new(ADD_DATA_SOURCE)
            .param("configHandle", 1)
            .detail("dataSourceCode", "GO_TEST")
            .detail_on_success("return", "{\"DSRC_ID\":1001}");

        assert_eq!(call.trace.len(), 2);
        let failed = call.notification_details(false);
        assert_eq!(failed.len(), 1);
        assert_eq!(failed["dataSourceCode"], "GO_TEST");

        let succeeded = call.notification_details(true);
        assert_eq!(succeeded["return"], "{\"DSRC_ID\":1001}");
        assert!(!succeeded.contains_key("configHandle"));
    }
}
