//! 产品信息模拟客户端

use crate::error::SzResult;
use crate::facade::{Call, MockCore, MockFacade, MOCK_SDK_ID};
use crate::observer::Observer;
use crate::senzing::{SzObservable, SzProduct};
use async_trait::async_trait;
use std::sync::Arc;

pub const COMPONENT_ID: i32 = 6026;

pub mod methods {
    use crate::facade::Method;

    pub const DESTROY: Method = Method::new("destroy", 3, 8001);
    pub const INITIALIZE: Method = Method::new("initialize", 9, 8002);
    pub const GET_LICENSE: Method = Method::new("get_license", 11, 8003);
    pub const SET_LOG_LEVEL: Method = Method::new("set_log_level", 13, 8009);
    pub const GET_VERSION: Method = Method::new("get_version", 19, 8006);
    pub const REGISTER_OBSERVER: Method = Method::new("register_observer", 21, 8008);
    pub const UNREGISTER_OBSERVER: Method = Method::new("unregister_observer", 23, 8010);
    pub const GET_SDK_ID: Method = Method::new("get_sdk_id", 25, 8007);
}

#[derive(Debug)]
pub struct MockSzProduct {
    pub get_license_result: String,
    pub get_version_result: String,
    core: MockCore,
}

impl Default for MockSzProduct {
    fn default() -> Self {
        Self {
            get_license_result: String::new(),
            get_version_result: String::new(),
            core: MockCore::new(COMPONENT_ID),
        }
    }
}

impl MockSzProduct {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MockFacade for MockSzProduct {
    fn core(&self) -> &MockCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MockCore {
        &mut self.core
    }
}

#[async_trait]
impl SzObservable for MockSzProduct {
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
impl SzProduct for MockSzProduct {
    async fn destroy(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::DESTROY), ())
    }

    async fn get_license(&self) -> SzResult<String> {
        self.core
            .invoke(Call::new(methods::GET_LICENSE), self.get_license_result.clone())
    }

    async fn get_version(&self) -> SzResult<String> {
        self.core
            .invoke(Call::new(methods::GET_VERSION), self.get_version_result.clone())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::observer::{InlineDispatcher, RecordingObserver};
    use std::time::Duration;

    fn test_product() -> MockSzProduct {
        fixtures::product().with_dispatcher(Arc::new(InlineDispatcher))
    }

    #[tokio::test]
    async fn test_get_version_verbatim() {
        let product = test_product();
        let version = product.get_version().await.unwrap();
        assert_eq!(version, fixtures::VERSION);
        assert!(version.starts_with(r#"{"PRODUCT_NAME":"Senzing API","VERSION":"3.5.0""#));
    }

    #[tokio::test]
    async fn test_get_license_verbatim() {
        let product = test_product();
        assert_eq!(product.get_license().await.unwrap(), fixtures::LICENSE);
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let product = test_product();
        product.initialize("Test module name", "{}", 0).await.unwrap();
        product.destroy().await.unwrap();
        assert_eq!(product.get_sdk_id().await.unwrap(), "mock");
    }

    #[tokio::test]
    async fn test_single_event_for_registered_observer() {
        let product = test_product();
        product.set_observer_origin("Machine: nn; Task: UnitTest");
        let observer = Arc::new(RecordingObserver::new("Observer 1"));
        product.register_observer(observer.clone()).await.unwrap();
        observer.clear();

        product.get_license().await.unwrap();

        let received = observer.notifications();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].message_id, 8003);
        assert_eq!(received[0].origin, "Machine: nn; Task: UnitTest");
    }

    #[tokio::test]
    async fn test_default_dispatcher_delivers_asynchronously() {
        let product = fixtures::product();
        let observer = Arc::new(RecordingObserver::new("Observer 1"));
        product.register_observer(observer.clone()).await.unwrap();
        product.get_version().await.unwrap();

        let received = observer.wait_for(2, Duration::from_secs(2)).await;
        let mut ids: Vec<i32> = received.iter().map(|n| n.message_id).collect();
        ids.sort();
        assert_eq!(ids, vec![8006, 8008]);
    }

    #[tokio::test]
    async fn test_set_log_level_policy() {
        let product = test_product();
        product.set_log_level("TRACE").await.unwrap();
        assert!(product.core().is_trace());
        assert!(product.set_log_level("BadLogLevelName").await.is_err());
        assert!(product.core().is_trace());
        product.set_log_level("info").await.unwrap();
        assert!(!product.core().is_trace());
    }
}
