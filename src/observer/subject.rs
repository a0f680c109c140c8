//! 观察者主题（Subject）实现
//!
//! 管理观察者的注册、注销和通知

use super::dispatcher::Dispatcher;
use super::events::Notification;
use super::traits::Observer;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// 主题 Trait
pub trait Subject: Send + Sync {
    /// 注册观察者，同一 ID 重复注册只保留一份
    fn register_observer(&self, observer: Arc<dyn Observer>);

    /// 按 ID 注销观察者，返回是否确实移除
    fn unregister_observer(&self, observer_id: &str) -> bool;

    /// 把通知交给投递器，每个观察者一次
    fn notify_observers(&self, notification: Notification, dispatcher: &dyn Dispatcher);

    fn has_observers(&self) -> bool;

    fn observer_count(&self) -> usize;

    fn observer_ids(&self) -> Vec<String>;
}

/// 观察者主题
///
/// 以观察者 ID 为键，插入顺序无关
#[derive(Default)]
pub struct ObserverSubject {
    observers: RwLock<BTreeMap<String, Arc<dyn Observer>>>,
}

impl ObserverSubject {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Subject for ObserverSubject {
    fn register_observer(&self, observer: Arc<dyn Observer>) {
        let id = observer.observer_id().to_string();
        let mut observers = self.observers.write();
        if observers.insert(id.clone(), observer).is_some() {
            tracing::debug!("[ObserverSubject] 观察者已存在，替换: {}", id);
        } else {
            tracing::debug!("[ObserverSubject] 注册观察者: {}", id);
        }
    }

    fn unregister_observer(&self, observer_id: &str) -> bool {
        let removed = self.observers.write().remove(observer_id).is_some();
        if removed {
            tracing::debug!("[ObserverSubject] 注销观察者: {}", observer_id);
        }
        removed
    }

    fn notify_observers(&self, notification: Notification, dispatcher: &dyn Dispatcher) {
        // 先复制快照，投递时不持有锁
        let observers: Vec<Arc<dyn Observer>> = self.observers.read().values().cloned().collect();
        if observers.is_empty() {
            return;
        }

        tracing::trace!(
            "[ObserverSubject] 通知 {} 个观察者，事件: {}",
            observers.len(),
            notification.message_id
        );

        let notification = Arc::new(notification);
        for observer in observers {
            dispatcher.dispatch(observer, notification.clone());
        }
    }

    fn has_observers(&self) -> bool {
        !self.observers.read().is_empty()
    }

    fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    fn observer_ids(&self) -> Vec<String> {
        self.observers.read().keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{InlineDispatcher, RecordingObserver};

    fn notification(message_id: i32) -> Notification {
        Notification::new("test", 6021, message_id, None, BTreeMap::new())
    }

    #[test]
    fn test_register_and_notify() {
        let subject = ObserverSubject::new();
        let observer = Arc::new(RecordingObserver::new("Observer 1"));

        subject.register_observer(observer.clone());
        assert_eq!(subject.observer_count(), 1);

        subject.notify_observers(notification(8003), &InlineDispatcher);
        assert_eq!(observer.message_ids(), vec![8003]);
    }

    #[test]
    fn test_duplicate_registration_collapses() {
        let subject = ObserverSubject::new();
        subject.register_observer(Arc::new(RecordingObserver::new("Observer 1")));
        subject.register_observer(Arc::new(RecordingObserver::new("Observer 1")));
        assert_eq!(subject.observer_count(), 1);
        assert_eq!(subject.observer_ids(), vec!["Observer 1".to_string()]);
    }

    #[test]
    fn test_unregister() {
        let subject = ObserverSubject::new();
        let observer = Arc::new(RecordingObserver::new("Observer 1"));

        subject.register_observer(observer.clone());
        assert!(subject.unregister_observer("Observer 1"));
        assert!(!subject.has_observers());
        assert!(!subject.unregister_observer("Observer 1"));

        subject.notify_observers(notification(8003), &InlineDispatcher);
        assert!(observer.is_empty());
    }

    #[test]
    fn test_each_observer_notified_once() {
        let subject = ObserverSubject::new();
        let first = Arc::new(RecordingObserver::new("Observer 1"));
        let second = Arc::new(RecordingObserver::new("Observer 2"));
        subject.register_observer(first.clone());
        subject.register_observer(second.clone());

        subject.notify_observers(notification(8007), &InlineDispatcher);
        assert_eq!(first.message_ids(), vec![8007]);
        assert_eq!(second.message_ids(), vec![8007]);
    }

    #[test]
    fn test_failing_observer_does_not_block_others() {
        let subject = ObserverSubject::new();
        let failing = Arc::new(RecordingObserver::new("Observer 0").failing("boom"));
        let healthy = Arc::new(RecordingObserver::new("Observer 1"));
        subject.register_observer(failing);
        subject.register_observer(healthy.clone());

        subject.notify_observers(notification(8010), &InlineDispatcher);
        assert_eq!(healthy.message_ids(), vec![8010]);
    }
}
