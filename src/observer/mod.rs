//! 观察者模块
//!
//! 提供基于观察者模式的 SDK 调用通知系统

mod dispatcher;
mod events;
mod observers;
mod subject;
mod traits;

pub use dispatcher::{deliver, Dispatcher, InlineDispatcher, TokioDispatcher};
pub use events::Notification;
pub use observers::{ChannelObserver, NullObserver, RecordingObserver};
pub use subject::{ObserverSubject, Subject};
pub use traits::{FnObserver, Observer, SyncObserver, SyncObserverWrapper};
