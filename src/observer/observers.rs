//! 内置观察者实现

use super::events::Notification;
use super::traits::Observer;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// 空观察者
///
/// 只记录日志；`silent` 时什么都不做
#[derive(Debug, Clone)]
pub struct NullObserver {
    id: String,
    silent: bool,
}

impl NullObserver {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            silent: false,
        }
    }

    pub fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

#[async_trait]
impl Observer for NullObserver {
    fn observer_id(&self) -> &str {
        &self.id
    }

    async fn update_observer(&self, notification: &Notification) -> Result<(), String> {
        if !self.silent {
            tracing::info!(
                "[NullObserver] {} 收到通知: {}",
                self.id,
                notification.to_message()
            );
        }
        Ok(())
    }
}

/// 记录型观察者
///
/// 保存收到的全部通知，用于测试断言
#[derive(Debug)]
pub struct RecordingObserver {
    id: String,
    fail_with: Option<String>,
    received: Mutex<Vec<Notification>>,
}

impl RecordingObserver {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fail_with: None,
            received: Mutex::new(Vec::new()),
        }
    }

    /// 记录通知后仍返回错误
    pub fn failing(mut self, error: impl Into<String>) -> Self {
        self.fail_with = Some(error.into());
        self
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.received.lock().clone()
    }

    pub fn message_ids(&self) -> Vec<i32> {
        self.received.lock().iter().map(|n| n.message_id).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.received.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.received.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.lock().is_empty()
    }

    pub fn clear(&self) {
        self.received.lock().clear();
    }

    /// 等待至少 `count` 条通知，超时返回已收到的部分
    pub async fn wait_for(&self, count: usize, timeout: Duration) -> Vec<Notification> {
        let deadline = Instant::now() + timeout;
        loop {
            let received = self.notifications();
            if received.len() >= count || Instant::now() >= deadline {
                return received;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    }
}

#[async_trait]
impl Observer for RecordingObserver {
    fn observer_id(&self) -> &str {
        &self.id
    }

    async fn update_observer(&self, notification: &Notification) -> Result<(), String> {
        self.received.lock().push(notification.clone());
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// 通道观察者
///
/// 把通知转发到 `tokio::sync::mpsc` 通道
pub struct ChannelObserver {
    id: String,
    tx: mpsc::UnboundedSender<Notification>,
}

impl ChannelObserver {
    pub fn new(id: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { id: id.into(), tx }, rx)
    }
}

#[async_trait]
impl Observer for ChannelObserver {
    fn observer_id(&self) -> &str {
        &self.id
    }

    async fn update_observer(&self, notification: &Notification) -> Result<(), String> {
        self.tx
            .send(notification.clone())
            .map_err(|_| format!("观察者 {} 的接收端已关闭", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn notification() -> Notification {
        Notification::new("origin", 6023, 8056, None, BTreeMap::new())
    }

    #[tokio::test]
    async fn test_null_observer_accepts_everything() {
        let observer = NullObserver::new("Observer 1").silent(true);
        assert_eq!(observer.observer_id(), "Observer 1");
        assert!(observer.update_observer(&notification()).await.is_ok());
    }

    #[tokio::test]
    async fn test_recording_observer_failing_still_records() {
        let observer = RecordingObserver::new("Observer 1").failing("boom");
        let result = observer.update_observer(&notification()).await;
        assert_eq!(result, Err("boom".to_string()));
        assert_eq!(observer.message_ids(), vec![8056]);
    }

    #[tokio::test]
    async fn test_channel_observer_forwards() {
        let (observer, mut rx) = ChannelObserver::new("Observer 1");
        observer.update_observer(&notification()).await.unwrap();
        assert_eq!(rx.recv().await.unwrap().message_id, 8056);
    }

    #[tokio::test]
    async fn test_channel_observer_closed_receiver() {
        let (observer, rx) = ChannelObserver::new("Observer 1");
        drop(rx);
        assert!(observer.update_observer(&notification()).await.is_err());
    }
}
