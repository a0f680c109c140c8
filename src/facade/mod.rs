//! 模拟客户端公共部分
//!
//! 五个模拟客户端都持有一个 [`MockCore`]，通过 [`MockFacade`] 获得统一的构造选项

mod mock_core;
mod method;

pub use mock_core::MockCore;
pub use method::{Call, Method};

use crate::error::SzError;
use crate::logging::LogSink;
use crate::observer::Dispatcher;
use std::sync::Arc;

/// `get_sdk_id` 的返回值
pub const MOCK_SDK_ID: &str = "mock";

/// 模拟客户端构造选项
pub trait MockFacade: Sized {
    fn core(&self) -> &MockCore;

    fn core_mut(&mut self) -> &mut MockCore;

    /// 替换通知投递器（测试中通常使用 `InlineDispatcher`）
    fn with_dispatcher(mut self, dispatcher: Arc<dyn Dispatcher>) -> Self {
        self.core_mut().set_dispatcher(dispatcher);
        self
    }

    fn with_log_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.core_mut().set_log_sink(sink);
        self
    }

    fn with_failure(self, method: Method, error: SzError) -> Self {
        self.core().set_failure(method, error);
        self
    }

    fn clear_failures(&self) {
        self.core().clear_failures();
    }
}
