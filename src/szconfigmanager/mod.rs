//! 配置管理模拟客户端


use crate::error::SzResult;
use crate::facade::{Call, MockCore, MockFacade, MOCK_SDK_ID};
use crate::observer::Observer;
use crate::senzing::{SzConfigManager, SzObservable};
use async_trait::async_trait;
use std::sync::Arc;

pub const COMPONENT_ID: i32 = 6022;

pub mod methods {
    use crate::facade::Method;

    pub const ADD_CONFIG: Method = Method::new("add_config", 1, 8001);
    pub const DESTROY: Method = Method::new("destroy", 5, 8002);
    pub const GET_CONFIG: Method = Method::new("get_config", 7, 8003);
    pub const GET_CONFIGS: Method = Method::new("get_configs", 9, 8004);
    pub const GET_DEFAULT_CONFIG_ID: Method = Method::new("get_default_config_id", 11, 8005);
    pub const INITIALIZE: Method = Method::new("initialize", 17, 8006);
    pub const REPLACE_DEFAULT_CONFIG_ID: Method =
        Method::new("replace_default_config_id", 19, 8007);
    pub const SET_DEFAULT_CONFIG_ID: Method = Method::new("set_default_config_id", 21, 8008);
    pub const GET_SDK_ID: Method = Method::new("get_sdk_id", 29, 8009);
    pub const REGISTER_OBSERVER: Method = Method::new("register_observer", 25, 8010);
    pub const SET_LOG_LEVEL: Method = Method::new("set_log_level", 23, 8011);
    pub const UNREGISTER_OBSERVER: Method = Method::new("unregister_observer", 27, 8012);
}

/// 配置管理模拟客户端
///
/// 未知配置 ID 的失败路径通过 [`MockFacade::with_failure`] 注入
#[derive(Debug)]
pub struct MockSzConfigManager {
    pub add_config_result: i64,
    pub get_config_result: String,
    pub get_configs_result: String,
    pub get_default_config_id_result: i64,
    core: MockCore,
}

impl Default for MockSzConfigManager {
    fn default() -> Self {
        Self {
            add_config_result: 0,
            get_config_result: String::new(),
            get_configs_result: String::new(),
            get_default_config_id_result: 0,
            core: MockCore::new(COMPONENT_ID),
        }
    }
}

impl MockSzConfigManager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MockFacade for MockSzConfigManager {
    fn core(&self) -> &MockCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MockCore {
        &mut self.core
    }
}

#[async_trait]
impl SzObservable for MockSzConfigManager {
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
impl SzConfigManager for MockSzConfigManager {
    async fn add_config(&self, config_definition: &str, config_comment: &str) -> SzResult<i64> {
        let call = Call::new(methods::ADD_CONFIG)
            .param("configDefinition", config_definition)
            .detail("configComment", config_comment);
        self.core.invoke(call, self.add_config_result)
    }

    async fn destroy(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::DESTROY), ())
    }

    async fn get_config(&self, config_id: i64) -> SzResult<String> {
        let call = Call::new(methods::GET_CONFIG).detail("configID", config_id);
        self.core.invoke(call, self.get_config_result.clone())
    }

    async fn get_configs(&self) -> SzResult<String> {
        self.core
            .invoke(Call::new(methods::GET_CONFIGS), self.get_configs_result.clone())
    }

    async fn get_default_config_id(&self) -> SzResult<i64> {
        self.core.invoke(
            Call::new(methods::GET_DEFAULT_CONFIG_ID),
            self.get_default_config_id_result,
        )
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

    async fn replace_default_config_id(
        &self,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> SzResult<()> {
        let call = Call::new(methods::REPLACE_DEFAULT_CONFIG_ID)
            .detail("currentDefaultConfigID", current_default_config_id)
            .detail("newDefaultConfigID", new_default_config_id);
        self.core.invoke(call, ())
    }

    async fn set_default_config_id(&self, config_id: i64) -> SzResult<()> {
        let call = Call::new(methods::SET_DEFAULT_CONFIG_ID).detail("configID", config_id);
        self.core.invoke(call, ())
    }
}
