//! sz-sdk-mock - 实体解析 SDK 模拟客户端
//!
//! 为配置、配置管理、诊断、引擎和产品五组接口提供模拟实现。
//! 每个方法返回预设值，并按需记录方法追踪、通知已注册的观察者。

pub mod demo;
pub mod error;
pub mod facade;
pub mod fixtures;
pub mod logging;
pub mod observer;
pub mod senzing;
pub mod settings;
pub mod szconfig;
pub mod szconfigmanager;
pub mod szdiagnostic;
pub mod szengine;
pub mod szproduct;

pub use error::{SzError, SzErrorKind, SzResult};
pub use facade::{MockFacade, Method};
pub use observer::{Notification, Observer};
pub use szconfig::MockSzConfig;
pub use szconfigmanager::MockSzConfigManager;
pub use szdiagnostic::MockSzDiagnostic;
pub use szengine::MockSzEngine;
pub use szproduct::MockSzProduct;
