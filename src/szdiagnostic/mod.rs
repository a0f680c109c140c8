//! 诊断模拟客户端

#[cfg(test)]
mod tests;

use crate::error::SzResult;
use crate::facade::{Call, MockCore, MockFacade, MOCK_SDK_ID};
use crate::observer::Observer;
use crate::senzing::{SzDiagnostic, SzObservable, SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION};
use async_trait::async_trait;
use std::sync::Arc;

pub const COMPONENT_ID: i32 = 6023;

pub mod methods {
    use crate::facade::Method;

    pub const CHECK_DATASTORE_PERFORMANCE: Method =
        Method::new("check_datastore_performance", 1, 8001);
    pub const DESTROY: Method = Method::new("destroy", 7, 8003);
    pub const INITIALIZE: Method = Method::new("initialize", 47, 8021);
    pub const INITIALIZE_WITH_CONFIG_ID: Method =
        Method::new("initialize_with_config_id", 49, 8022);
    pub const REINITIALIZE: Method = Method::new("reinitialize", 51, 8023);
    pub const SET_LOG_LEVEL: Method = Method::new("set_log_level", 53, 8026);
    pub const REGISTER_OBSERVER: Method = Method::new("register_observer", 55, 8025);
    pub const UNREGISTER_OBSERVER: Method = Method::new("unregister_observer", 57, 8027);
    pub const GET_SDK_ID: Method = Method::new("get_sdk_id", 59, 8024);
    pub const GET_DATASTORE_INFO: Method = Method::new("get_datastore_info", 61, 8028);
    pub const GET_FEATURE: Method = Method::new("get_feature", 63, 8029);
    pub const PURGE_REPOSITORY: Method = Method::new("purge_repository", 117, 8056);
}

#[derive(Debug)]
pub struct MockSzDiagnostic {
    pub check_datastore_performance_result: String,
    pub get_datastore_info_result: String,
    pub get_feature_result: String,
    core: MockCore,
}

impl Default for MockSzDiagnostic {
    fn default() -> Self {
        Self {
            check_datastore_performance_result: String::new(),
            get_datastore_info_result: String::new(),
            get_feature_result: String::new(),
            core: MockCore::new(COMPONENT_ID),
        }
    }
}

impl MockSzDiagnostic {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MockFacade for MockSzDiagnostic {
    fn core(&self) -> &MockCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MockCore {
        &mut self.core
    }
}

#[async_trait]
impl SzObservable for MockSzDiagnostic {
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
impl SzDiagnostic for MockSzDiagnostic {
    async fn check_datastore_performance(&self, seconds_to_run: i32) -> SzResult<String> {
        let call =
            Call::new(methods::CHECK_DATASTORE_PERFORMANCE).detail("secondsToRun", seconds_to_run);
        self.core
            .invoke(call, self.check_datastore_performance_result.clone())
    }

    async fn destroy(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::DESTROY), ())
    }

    async fn get_datastore_info(&self) -> SzResult<String> {
        self.core.invoke(
            Call::new(methods::GET_DATASTORE_INFO),
            self.get_datastore_info_result.clone(),
        )
    }

    async fn get_feature(&self, feature_id: i64) -> SzResult<String> {
        let call = Call::new(methods::GET_FEATURE).detail("featureID", feature_id);
        self.core.invoke(call, self.get_feature_result.clone())
    }

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()> {
        let call = if config_id == SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION {
            Call::new(methods::INITIALIZE)
        } else {
            Call::new(methods::INITIALIZE_WITH_CONFIG_ID).detail("configID", config_id)
        };
        let call = call
            .detail("instanceName", instance_name)
            .detail("settings", settings)
            .detail("verboseLogging", verbose_logging);
        self.core.invoke(call, ())
    }

    async fn purge_repository(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::PURGE_REPOSITORY), ())
    }

    async fn reinitialize(&self, config_id: i64) -> SzResult<()> {
        let call = Call::new(methods::REINITIALIZE).detail("configID", config_id);
        self.core.invoke(call, ())
    }
}
