//! 通知投递器
//!
//! 把"通知某个观察者"从调用路径中剥离出来。
//! 默认实现为每次投递派生一个独立任务，调用方不等待投递结果。

use super::events::Notification;
use super::traits::Observer;
use std::sync::Arc;
use tokio::runtime::Handle;

/// 通知投递器
pub trait Dispatcher: Send + Sync {
    /// 投递一条通知给一个观察者，不得阻塞调用方
    fn dispatch(&self, observer: Arc<dyn Observer>, notification: Arc<Notification>);
}

/// 执行一次投递，失败只记录日志
pub async fn deliver(observer: Arc<dyn Observer>, notification: Arc<Notification>) {
    match observer.update_observer(&notification).await {
        Ok(()) => {
            tracing::trace!(
                "[Dispatcher] 观察者 {} 已接收事件 {}",
                observer.observer_id(),
                notification.message_id
            );
        }
        Err(e) => {
            tracing::warn!(
                "[Dispatcher] 观察者 {} 处理事件 {} 失败: {}",
                observer.observer_id(),
                notification.message_id,
                e
            );
        }
    }
}

/// 基于 tokio 的投递器（默认）
///
/// 在当前运行时上为每个观察者派生任务；没有运行时时退回到独立线程
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDispatcher;

impl Dispatcher for TokioDispatcher {
    fn dispatch(&self, observer: Arc<dyn Observer>, notification: Arc<Notification>) {
        match Handle::try_current() {
            Ok(handle) => {
                handle.spawn(deliver(observer, notification));
            }
            Err(_) => {
                let spawned = std::thread::Builder::new()
                    .name("sz-observer-notify".to_string())
                    .spawn(move || futures::executor::block_on(deliver(observer, notification)));
                if let Err(e) = spawned {
                    tracing::error!("[Dispatcher] 无法创建通知线程: {}", e);
                }
            }
        }
    }
}

/// 同步投递器
///
/// 在调用线程上立即完成投递，供测试做确定性断言
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineDispatcher;

impl Dispatcher for InlineDispatcher {
    fn dispatch(&self, observer: Arc<dyn Observer>, notification: Arc<Notification>) {
        futures::executor::block_on(deliver(observer, notification));
    }
}
