//! 观察者 Trait 定义
//!
//! 定义观察者接口，支持异步和同步两种模式

use super::events::Notification;
use async_trait::async_trait;
use std::sync::Arc;

/// 观察者 Trait
///
/// 实现此 Trait 的组件可以订阅 SDK 调用通知
#[async_trait]
pub trait Observer: Send + Sync {
    /// 观察者 ID（注册表以此去重）
    fn observer_id(&self) -> &str;

    /// 处理一条通知
    ///
    /// # Returns
    /// * `Ok(())` - 处理成功
    /// * `Err(String)` - 处理失败，只记录日志，不影响调用方
    async fn update_observer(&self, notification: &Notification) -> Result<(), String>;
}

/// 同步观察者 Trait（用于不需要异步的简单观察者）
pub trait SyncObserver: Send + Sync {
    fn observer_id(&self) -> &str;

    fn update_observer_sync(&self, notification: &Notification) -> Result<(), String>;
}

/// 将同步观察者包装为异步观察者
pub struct SyncObserverWrapper<T: SyncObserver>(pub Arc<T>);

#[async_trait]
impl<T: SyncObserver + 'static> Observer for SyncObserverWrapper<T> {
    fn observer_id(&self) -> &str {
        self.0.observer_id()
    }

    async fn update_observer(&self, notification: &Notification) -> Result<(), String> {
        self.0.update_observer_sync(notification)
    }
}

/// 函数式观察者（用于简单的回调场景）
pub struct FnObserver<F>
where
    F: Fn(&Notification) -> Result<(), String> + Send + Sync,
{
    id: String,
    handler: F,
}

impl<F> FnObserver<F>
where
    F: Fn(&Notification) -> Result<(), String> + Send + Sync,
{
    pub fn new(id: impl Into<String>, handler: F) -> Self {
        Self {
            id: id.into(),
            handler,
        }
    }
}

#[async_trait]
impl<F> Observer for FnObserver<F>
where
    F: Fn(&Notification) -> Result<(), String> + Send + Sync,
{
    fn observer_id(&self) -> &str {
        &self.id
    }

    async fn update_observer(&self, notification: &Notification) -> Result<(), String> {
        (self.handler)(notification)
    }
}
