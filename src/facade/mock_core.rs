//! 模拟客户端公共骨架
//!
//! 每个模拟方法按固定顺序执行：
//! 追踪入口 → 失败注入检查 → 通知观察者 → 追踪出口 → 返回预设值

use super::method::{Call, Method};
use crate::error::{SzError, SzResult};
use crate::logging::{LogLevel, LogSink, SdkLogger, TracingSink};
use crate::observer::{Dispatcher, Notification, Observer, ObserverSubject, Subject, TokioDispatcher};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// 模拟客户端共享状态
pub struct MockCore {
    logger: SdkLogger,
    is_trace: AtomicBool,
    observer_origin: RwLock<String>,
    /// 首次注册时创建，最后一个观察者注销后置空
    observers: Mutex<Option<Arc<ObserverSubject>>>,
    dispatcher: Arc<dyn Dispatcher>,
    failures: RwLock<HashMap<&'static str, SzError>>,
}

impl MockCore {
    pub fn new(component_id: i32) -> Self {
        Self {
            logger: SdkLogger::new(component_id, Arc::new(TracingSink)),
            is_trace: AtomicBool::new(false),
            observer_origin: RwLock::new(String::new()),
            observers: Mutex::new(None),
            dispatcher: Arc::new(TokioDispatcher),
            failures: RwLock::new(HashMap::new()),
        }
    }

    pub fn component_id(&self) -> i32 {
        self.logger.component_id()
    }

    pub fn log_level(&self) -> LogLevel {
        self.logger.level()
    }

    pub fn is_trace(&self) -> bool {
        self.is_trace.load(Ordering::Relaxed)
    }

    pub fn set_dispatcher(&mut self, dispatcher: Arc<dyn Dispatcher>) {
        self.dispatcher = dispatcher;
    }

    pub fn set_log_sink(&mut self, sink: Arc<dyn LogSink>) {
        self.logger.set_sink(sink);
    }

    /// 让指定方法在后续调用中返回错误
    pub fn set_failure(&self, method: Method, error: SzError) {
        self.failures.write().insert(method.name, error);
    }

    pub fn clear_failures(&self) {
        self.failures.write().clear();
    }

    pub fn observer_origin(&self) -> String {
        self.observer_origin.read().clone()
    }

    pub fn set_observer_origin(&self, origin: &str) {
        *self.observer_origin.write() = origin.to_string();
    }

    pub fn has_observers(&self) -> bool {
        self.observers.lock().is_some()
    }

    pub fn observer_ids(&self) -> Vec<String> {
        match self.observers.lock().as_ref() {
            Some(subject) => subject.observer_ids(),
            None => Vec::new(),
        }
    }

    /// 执行一次普通调用并返回预设值
    pub fn invoke<T: Debug>(&self, call: Call, value: T) -> SzResult<T> {
        let started = self.trace_entry(&call);
        let result = match self.failure_for(&call.method) {
            Some(error) => Err(error),
            None => Ok(value),
        };
        self.notify(&call, result.as_ref().err());
        self.trace_exit(&call, started, &result);
        result
    }

    /// 注册观察者，必要时创建主题
    pub fn register_observer(&self, method: Method, observer: Arc<dyn Observer>) -> SzResult<()> {
        let call = Call::new(method).detail("observerID", observer.observer_id());
        let started = self.trace_entry(&call);
        let result = match self.failure_for(&method) {
            Some(error) => Err(error),
            None => {
                // 插入完成前不释放主题引用锁
                self.observers
                    .lock()
                    .get_or_insert_with(|| Arc::new(ObserverSubject::new()))
                    .register_observer(observer);
                Ok(())
            }
        };
        self.notify(&call, result.as_ref().err());
        self.trace_exit(&call, started, &result);
        result
    }

    /// 注销观察者
    ///
    /// 先通知当前全部观察者（包括正在注销的那个），再移除；
    /// 主题为空时置空
    pub fn unregister_observer(&self, method: Method, observer: Arc<dyn Observer>) -> SzResult<()> {
        let observer_id = observer.observer_id().to_string();
        let call = Call::new(method).detail("observerID", &observer_id);
        let started = self.trace_entry(&call);
        let result = match self.failure_for(&method) {
            Some(error) => Err(error),
            None => Ok(()),
        };
        self.notify(&call, result.as_ref().err());

        if result.is_ok() {
            let mut guard = self.observers.lock();
            if let Some(subject) = guard.as_ref() {
                subject.unregister_observer(&observer_id);
                if !subject.has_observers() {
                    *guard = None;
                }
            }
        }

        self.trace_exit(&call, started, &result);
        result
    }

    /// 设置日志级别
    ///
    /// 名称无效时级别与追踪开关都保持不变，但仍发出带错误的通知
    pub fn set_log_level(&self, method: Method, name: &str) -> SzResult<()> {
        let call = Call::new(method).detail("logLevel", name);
        let started = self.trace_entry(&call);
        let result = match self.failure_for(&method) {
            Some(error) => Err(error),
            None => self.logger.set_log_level(name).map(|level| {
                self.is_trace
                    .store(level == LogLevel::Trace, Ordering::Relaxed);
            }),
        };
        self.notify(&call, result.as_ref().err());
        self.trace_exit(&call, started, &result);
        result
    }

    fn failure_for(&self, method: &Method) -> Option<SzError> {
        self.failures.read().get(method.name).cloned()
    }

    fn trace_entry(&self, call: &Call) -> Option<Instant> {
        if !self.is_trace() {
            return None;
        }
        self.logger.log(
            call.method.trace_entry,
            format!("Enter {}", call.method.name),
            call.trace.clone(),
            None,
        );
        Some(Instant::now())
    }

    /// 出口记录与入口配对：入口已记录则出口必定记录，
    /// 即使本次调用把级别调高
    fn trace_exit<T: Debug>(&self, call: &Call, started: Option<Instant>, result: &SzResult<T>) {
        let Some(started) = started else {
            return;
        };
        let mut details = call.trace.clone();
        match result {
            Ok(value) => details.push(("return".to_string(), format!("{:?}", value))),
            Err(error) => details.push(("error".to_string(), error.to_string())),
        }
        self.logger.emit(
            call.method.trace_exit(),
            format!("Exit {}", call.method.name),
            details,
            Some(started.elapsed()),
        );
    }

    fn notify(&self, call: &Call, error: Option<&SzError>) {
        // 回调不在锁内执行
        let subject = self.observers.lock().clone();
        let Some(subject) = subject else {
            return;
        };
        let notification = Notification::new(
            self.observer_origin(),
            self.component_id(),
            call.method.event_id,
            error.map(ToString::to_string),
            call.notification_details(error.is_none()),
        );
        subject.notify_observers(notification, self.dispatcher.as_ref());
    }
}

impl std::fmt::Debug for MockCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockCore")
            .field("component_id", &self.component_id())
            .field("log_level", &self.log_level())
            .field("is_trace", &self.is_trace())
            .field("observer_origin", &self.observer_origin())
            .field("observers", &self.observer_ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::observer::{InlineDispatcher, RecordingObserver};
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    const GET_THING: Method = Method::new("get_thing", 7, 8003);
    const REGISTER: Method = Method::new("register_observer", 27, 8011);
    const UNREGISTER: Method = Method::new("unregister_observer", 29, 8013);
    const SET_LOG_LEVEL: Method = Method::new("set_log_level", 25, 8012);

    fn core_with(sink: Arc<MemorySink>) -> MockCore {
        let mut core = MockCore::new(6021);
        core.set_dispatcher(Arc::new(InlineDispatcher));
        core.set_log_sink(sink);
        core
    }

    #[test]
    fn test_invoke_returns_value_and_notifies() {
        let core = core_with(Arc::new(MemorySink::new()));
        let observer = Arc::new(RecordingObserver::new("Observer 1"));
        core.set_observer_origin("Machine: nn; Task: UnitTest");
        core.register_observer(REGISTER, observer.clone()).unwrap();
        observer.clear();

        let value = core.invoke(Call::new(GET_THING).detail("configID", 1), 42).unwrap();
        assert_eq!(value, 42);

        let notification = observer.last().unwrap();
        assert_eq!(notification.message_id, 8003);
        assert_eq!(notification.subject_id, 6021);
        assert_eq!(notification.origin, "Machine: nn; Task: UnitTest");
        assert_eq!(notification.detail("configID"), Some("1"));
        assert!(notification.error.is_none());
    }

    #[test]
    fn test_failure_injection() {
        let core = core_with(Arc::new(MemorySink::new()));
        let observer = Arc::new(RecordingObserver::new("Observer 1"));
        core.register_observer(REGISTER, observer.clone()).unwrap();
        core.set_failure(GET_THING, SzError::configuration("broken"));

        let err = core
            .invoke(Call::new(GET_THING).detail_on_success("return", 1), 1)
            .unwrap_err();
        assert!(err.is_configuration());

        let notification = observer.last().unwrap();
        assert!(notification.error.is_some());
        assert!(notification.detail("return").is_none());

        core.clear_failures();
        assert_eq!(core.invoke(Call::new(GET_THING), 1).unwrap(), 1);
    }

    #[test]
    fn test_trace_records_only_at_trace_level() {
        let sink = Arc::new(MemorySink::new());
        let core = core_with(sink.clone());

        core.invoke(Call::new(GET_THING), ()).unwrap();
        assert!(sink.is_empty());

        core.set_log_level(SET_LOG_LEVEL, "TRACE").unwrap();
        assert!(core.is_trace());
        sink.clear();

        core.invoke(Call::new(GET_THING).param("configHandle", 1), ()).unwrap();
        assert_eq!(
            sink.message_ids(),
            vec!["SZSDK60210007".to_string(), "SZSDK60210008".to_string()]
        );
        let exit = &sink.records()[1];
        assert!(exit.duration.is_some());
        assert_eq!(exit.details[0], ("configHandle".to_string(), "1".to_string()));
    }

    #[test]
    fn test_invalid_log_level_keeps_state() {
        let core = core_with(Arc::new(MemorySink::new()));
        let observer = Arc::new(RecordingObserver::new("Observer 1"));
        core.register_observer(REGISTER, observer.clone()).unwrap();
        core.set_log_level(SET_LOG_LEVEL, "TRACE").unwrap();

        let err = core
            .set_log_level(SET_LOG_LEVEL, "BadLogLevelName")
            .unwrap_err();
        assert_eq!(err, SzError::InvalidLogLevel("BadLogLevelName".to_string()));
        assert_eq!(core.log_level(), LogLevel::Trace);
        assert!(core.is_trace());

        let notification = observer.last().unwrap();
        assert_eq!(notification.message_id, 8012);
        assert_eq!(notification.detail("logLevel"), Some("BadLogLevelName"));
        assert!(notification.error.is_some());
    }

    #[test]
    fn test_unregister_notifies_leaving_observer_then_clears() {
        let core = core_with(Arc::new(MemorySink::new()));
        let observer = Arc::new(RecordingObserver::new("Observer 1"));

        core.register_observer(REGISTER, observer.clone()).unwrap();
        assert!(core.has_observers());

        core.unregister_observer(UNREGISTER, observer.clone()).unwrap();
        assert_eq!(observer.message_ids(), vec![8011, 8013]);
        assert!(!core.has_observers());

        // 主题已清空，后续调用不再通知
        core.invoke(Call::new(GET_THING), ()).unwrap();
        assert_eq!(observer.len(), 2);

        core.register_observer(REGISTER, observer.clone()).unwrap();
        assert_eq!(core.observer_ids(), vec!["Observer 1".to_string()]);
    }

    #[test]
    fn test_unregister_without_subject_is_noop() {
        let core = core_with(Arc::new(MemorySink::new()));
        let observer = Arc::new(RecordingObserver::new("Observer 1"));
        assert!(core.unregister_observer(UNREGISTER, observer.clone()).is_ok());
        assert!(observer.is_empty());
    }

    #[test]
    fn test_leaving_trace_level_pairs_exit_with_entry() {
        let sink = Arc::new(MemorySink::new());
        let core = core_with(sink.clone());
        core.set_log_level(SET_LOG_LEVEL, "TRACE").unwrap();
        sink.clear();

        core.set_log_level(SET_LOG_LEVEL, "INFO").unwrap();
        assert!(!core.is_trace());
        assert_eq!(
            sink.message_ids(),
            vec!["SZSDK60210025".to_string(), "SZSDK60210026".to_string()]
        );

        sink.clear();
        core.invoke(Call::new(GET_THING), ()).unwrap();
        assert!(sink.is_empty());
    }

    /// 第二次读取 ID 时（即插入主题时）阻塞，直到测试放行
    struct GatedObserver {
        id: String,
        calls: AtomicUsize,
        entered: Mutex<Option<mpsc::Sender<()>>>,
        release: Mutex<Option<mpsc::Receiver<()>>>,
    }

    #[async_trait]
    impl Observer for GatedObserver {
        fn observer_id(&self) -> &str {
            if self.calls.fetch_add(1, Ordering::SeqCst) == 1 {
                if let Some(entered) = self.entered.lock().take() {
                    let _ = entered.send(());
                }
                if let Some(release) = self.release.lock().take() {
                    let _ = release.recv();
                }
            }
            &self.id
        }

        async fn update_observer(&self, _notification: &Notification) -> Result<(), String> {
            Ok(())
        }
    }

    #[test]
    fn test_register_survives_concurrent_last_unregister() {
        let core = Arc::new(core_with(Arc::new(MemorySink::new())));
        let leaving = Arc::new(RecordingObserver::new("Observer B"));
        core.register_observer(REGISTER, leaving.clone()).unwrap();

        let (entered_tx, entered_rx) = mpsc::channel();
        let (release_tx, release_rx) = mpsc::channel();
        let joining = Arc::new(GatedObserver {
            id: "Observer A".to_string(),
            calls: AtomicUsize::new(0),
            entered: Mutex::new(Some(entered_tx)),
            release: Mutex::new(Some(release_rx)),
        });

        let register = {
            let core = core.clone();
            let joining = joining.clone();
            thread::spawn(move || core.register_observer(REGISTER, joining))
        };
        entered_rx.recv().unwrap();

        let unregister = {
            let core = core.clone();
            let leaving = leaving.clone();
            thread::spawn(move || core.unregister_observer(UNREGISTER, leaving))
        };
        thread::sleep(Duration::from_millis(50));
        release_tx.send(()).unwrap();

        register.join().unwrap().unwrap();
        unregister.join().unwrap().unwrap();

        assert!(core.has_observers());
        assert_eq!(core.observer_ids(), vec!["Observer A".to_string()]);
    }

    #[test]
    fn test_concurrent_register_unregister_cycles() {
        let core = Arc::new(core_with(Arc::new(MemorySink::new())));
        let resident = Arc::new(RecordingObserver::new("Resident"));

        let workers: Vec<_> = (0..8)
            .map(|worker| {
                let core = core.clone();
                thread::spawn(move || {
                    let observer = Arc::new(RecordingObserver::new(format!("Observer {}", worker)));
                    for round in 0..200 {
                        core.register_observer(REGISTER, observer.clone()).unwrap();
                        core.set_observer_origin(&format!("worker {} round {}", worker, round));
                        core.invoke(Call::new(GET_THING), ()).unwrap();
                        core.unregister_observer(UNREGISTER, observer.clone()).unwrap();
                    }
                    if worker % 2 == 0 {
                        core.set_log_level(SET_LOG_LEVEL, "DEBUG").unwrap();
                    } else {
                        core.set_log_level(SET_LOG_LEVEL, "WARN").unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        assert!(!core.has_observers());
        assert!(core.observer_ids().is_empty());
        assert!(matches!(core.log_level(), LogLevel::Debug | LogLevel::Warn));
        assert!(!core.is_trace());

        core.register_observer(REGISTER, resident.clone()).unwrap();
        assert_eq!(core.observer_ids(), vec!["Resident".to_string()]);
        core.invoke(Call::new(GET_THING), ()).unwrap();
        assert_eq!(resident.message_ids(), vec![8011, 8003]);
    }
}
