//! 配置模拟客户端
//!
//! 所有方法都返回预设字段，不解析也不校验输入


use crate::error::SzResult;
use crate::facade::{Call, MockCore, MockFacade, MOCK_SDK_ID};
use crate::observer::Observer;
use crate::senzing::{SzConfig, SzObservable};
use async_trait::async_trait;
use std::sync::Arc;

/// 组件 ID，用于消息 ID 和通知的 `subjectId`
pub const COMPONENT_ID: i32 = 6021;

/// 方法表：名称、追踪入口编号、事件编号
pub mod methods {
    use crate::facade::Method;

    pub const ADD_DATA_SOURCE: Method = Method::new("add_data_source", 1, 8001);
    pub const CLOSE_CONFIG: Method = Method::new("close_config", 5, 8002);
    pub const CREATE_CONFIG: Method = Method::new("create_config", 7, 8003);
    pub const DELETE_DATA_SOURCE: Method = Method::new("delete_data_source", 9, 8004);
    pub const DESTROY: Method = Method::new("destroy", 11, 8005);
    pub const INITIALIZE: Method = Method::new("initialize", 17, 8006);
    pub const GET_DATA_SOURCES: Method = Method::new("get_data_sources", 19, 8007);
    pub const IMPORT_CONFIG: Method = Method::new("import_config", 21, 8008);
    pub const EXPORT_CONFIG: Method = Method::new("export_config", 23, 8009);
    pub const GET_SDK_ID: Method = Method::new("get_sdk_id", 31, 8010);
    pub const REGISTER_OBSERVER: Method = Method::new("register_observer", 27, 8011);
    pub const SET_LOG_LEVEL: Method = Method::new("set_log_level", 25, 8012);
    pub const UNREGISTER_OBSERVER: Method = Method::new("unregister_observer", 29, 8013);
}

/// 配置模拟客户端
#[derive(Debug)]
pub struct MockSzConfig {
    pub add_data_source_result: String,
    pub create_config_result: usize,
    pub export_config_result: String,
    pub get_data_sources_result: String,
    pub import_config_result: usize,
    core: MockCore,
}

impl Default for MockSzConfig {
    fn default() -> Self {
        Self {
            add_data_source_result: String::new(),
            create_config_result: 0,
            export_config_result: String::new(),
            get_data_sources_result: String::new(),
            import_config_result: 0,
            core: MockCore::new(COMPONENT_ID),
        }
    }
}

impl MockSzConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MockFacade for MockSzConfig {
    fn core(&self) -> &MockCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MockCore {
        &mut self.core
    }
}

#[async_trait]
impl SzObservable for MockSzConfig {
    fn get_observer_origin(&self) -> String {
        self.core.observer_origin()
    }

    fn set_observer_origin(&self, origin: &str) {
        self.core.set_observer_origin(origin);
    }

    async fn get_sdk_id(&self) -> SzResult<String> {
        self.core
            .invoke(Call::new(methods::GET_SDK_ID), MOCK_SDK_ID.to_string())
    }

    async fn register_observer(&self, observer: Arc<dyn Observer>) -> SzResult<()> {
        self.core
            .register_observer(methods::REGISTER_OBSERVER, observer)
    }

    async fn unregister_observer(&self, observer: Arc<dyn Observer>) -> SzResult<()> {
        self.core
            .unregister_observer(methods::UNREGISTER_OBSERVER, observer)
    }

    async fn set_log_level(&self, log_level_name: &str) -> SzResult<()> {
        self.core.set_log_level(methods::SET_LOG_LEVEL, log_level_name)
    }
}

#[async_trait]
impl SzConfig for MockSzConfig {
    async fn add_data_source(
        &self,
        config_handle: usize,
        data_source_code: &str,
    ) -> SzResult<String> {
        let call = Call::new(methods::ADD_DATA_SOURCE)
            .param("configHandle", config_handle)
            .detail("dataSourceCode", data_source_code)
            .detail_on_success("return", &self.add_data_source_result);
        self.core.invoke(call, self.add_data_source_result.clone())
    }

    async fn close_config(&self, config_handle: usize) -> SzResult<()> {
        let call = Call::new(methods::CLOSE_CONFIG).param("configHandle", config_handle);
        self.core.invoke(call, ())
    }

    async fn create_config(&self) -> SzResult<usize> {
        self.core
            .invoke(Call::new(methods::CREATE_CONFIG), self.create_config_result)
    }

    async fn delete_data_source(
        &self,
        config_handle: usize,
        data_source_code: &str,
    ) -> SzResult<()> {
        let call = Call::new(methods::DELETE_DATA_SOURCE)
            .param("configHandle", config_handle)
            .detail("dataSourceCode", data_source_code);
        self.core.invoke(call, ())
    }

    async fn destroy(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::DESTROY), ())
    }

    async fn export_config(&self, config_handle: usize) -> SzResult<String> {
        let call = Call::new(methods::EXPORT_CONFIG).param("configHandle", config_handle);
        self.core.invoke(call, self.export_config_result.clone())
    }

    async fn get_data_sources(&self, config_handle: usize) -> SzResult<String> {
        let call = Call::new(methods::GET_DATA_SOURCES).param("configHandle", config_handle);
        self.core.invoke(call, self.get_data_sources_result.clone())
    }

    async fn import_config(&self, config_definition: &str) -> SzResult<usize> {
        let call = Call::new(methods::IMPORT_CONFIG).param("configDefinition", config_definition);
        self.core.invoke(call, self.import_config_result)
    }

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()> {
        let call = Call::new(methods::INITIALIZE)
            .detail("instanceName", instance_name)
            .detail("settings", settings)
            .detail("verboseLogging", verbose_logging);
        self.core.invoke(call, ())
    }
}
