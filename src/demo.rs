//! 演示流程
//!
//! 依次调用五个模拟客户端，展示一次完整的配置与记录处理过程

use crate::error::{SzError, SzResult};
use crate::facade::MockFacade;
use crate::fixtures;
use crate::observer::{Dispatcher, NullObserver, Observer, TokioDispatcher};
use crate::senzing::{
    SzConfig, SzConfigManager, SzDiagnostic, SzEngine, SzObservable, SzProduct, SZ_NO_FLAGS,
    SZ_WITH_INFO,
};
use crate::settings::DemoSettings;
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;

/// 演示中添加的数据源
pub const DEMO_DATA_SOURCES: [&str; 3] = ["CUSTOMERS", "REFERENCE", "WATCHLIST"];

const DEMO_DATA_SOURCE: &str = "CUSTOMERS";

/// 演示结果汇总
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DemoReport {
    pub sdk_id: String,
    pub config_handle: usize,
    pub data_sources: Vec<String>,
    pub config_definition: String,
    pub config_id: i64,
    pub record_id: String,
    pub record_info: String,
    pub entity: String,
    pub license: String,
    pub version: String,
}

/// 使用默认投递器运行演示
pub async fn run(settings: &DemoSettings) -> SzResult<DemoReport> {
    let observer: Arc<dyn Observer> = Arc::new(NullObserver::new(settings.observer_id.clone()));
    run_with(settings, observer, Arc::new(TokioDispatcher)).await
}

/// 使用指定观察者和投递器运行演示
pub async fn run_with(
    settings: &DemoSettings,
    observer: Arc<dyn Observer>,
    dispatcher: Arc<dyn Dispatcher>,
) -> SzResult<DemoReport> {
    let config = fixtures::config().with_dispatcher(dispatcher.clone());
    let config_manager = fixtures::config_manager().with_dispatcher(dispatcher.clone());
    let diagnostic = fixtures::diagnostic().with_dispatcher(dispatcher.clone());
    let engine = fixtures::engine().with_dispatcher(dispatcher.clone());
    let product = fixtures::product().with_dispatcher(dispatcher);

    let observables: [&dyn SzObservable; 5] =
        [&config, &config_manager, &diagnostic, &engine, &product];
    for client in observables {
        client.set_observer_origin(&settings.observer_origin);
        client
            .set_log_level(&settings.log_level)
            .await
            .map_err(|e| step_failed("set_log_level", e))?;
    }

    let name = settings.instance_name.as_str();
    let engine_settings = settings.settings.as_str();
    let verbose = settings.verbose_logging;
    config
        .initialize(name, engine_settings, verbose)
        .await
        .map_err(|e| step_failed("config.initialize", e))?;
    config_manager
        .initialize(name, engine_settings, verbose)
        .await
        .map_err(|e| step_failed("config_manager.initialize", e))?;
    diagnostic
        .initialize(name, engine_settings, settings.config_id, verbose)
        .await
        .map_err(|e| step_failed("diagnostic.initialize", e))?;
    engine
        .initialize(name, engine_settings, settings.config_id, verbose)
        .await
        .map_err(|e| step_failed("engine.initialize", e))?;
    product
        .initialize(name, engine_settings, verbose)
        .await
        .map_err(|e| step_failed("product.initialize", e))?;

    for client in observables {
        client
            .register_observer(observer.clone())
            .await
            .map_err(|e| step_failed("register_observer", e))?;
    }

    // 配置
    let config_handle = config
        .create_config()
        .await
        .map_err(|e| step_failed("create_config", e))?;
    let mut data_sources = Vec::with_capacity(DEMO_DATA_SOURCES.len());
    for code in DEMO_DATA_SOURCES {
        let added = config
            .add_data_source(config_handle, code)
            .await
            .map_err(|e| step_failed("add_data_source", e))?;
        data_sources.push(added);
    }
    let config_definition = config
        .export_config(config_handle)
        .await
        .map_err(|e| step_failed("export_config", e))?;
    config
        .close_config(config_handle)
        .await
        .map_err(|e| step_failed("close_config", e))?;

    let comment = format!("Created by sz-sdk-mock demo at {}", Utc::now());
    let config_id = config_manager
        .add_config(&config_definition, &comment)
        .await
        .map_err(|e| step_failed("add_config", e))?;
    config_manager
        .set_default_config_id(config_id)
        .await
        .map_err(|e| step_failed("set_default_config_id", e))?;

    // 记录
    diagnostic
        .purge_repository()
        .await
        .map_err(|e| step_failed("purge_repository", e))?;

    let record_id = Utc::now().timestamp_subsec_nanos().to_string();
    let record_definition = demo_record(&record_id);
    let record_info = engine
        .add_record(DEMO_DATA_SOURCE, &record_id, &record_definition, SZ_WITH_INFO)
        .await
        .map_err(|e| step_failed("add_record", e))?;
    tracing::info!("[Demo] withInfo: {}", record_info);

    let entity = engine
        .get_entity_by_record_id(DEMO_DATA_SOURCE, &record_id, SZ_NO_FLAGS)
        .await
        .map_err(|e| step_failed("get_entity_by_record_id", e))?;

    let license = product
        .get_license()
        .await
        .map_err(|e| step_failed("get_license", e))?;
    tracing::info!("[Demo] License: {}", license);
    let version = product
        .get_version()
        .await
        .map_err(|e| step_failed("get_version", e))?;

    diagnostic
        .purge_repository()
        .await
        .map_err(|e| step_failed("purge_repository", e))?;

    let sdk_id = engine
        .get_sdk_id()
        .await
        .map_err(|e| step_failed("get_sdk_id", e))?;

    config
        .destroy()
        .await
        .map_err(|e| step_failed("config.destroy", e))?;
    config_manager
        .destroy()
        .await
        .map_err(|e| step_failed("config_manager.destroy", e))?;
    diagnostic
        .destroy()
        .await
        .map_err(|e| step_failed("diagnostic.destroy", e))?;
    engine
        .destroy()
        .await
        .map_err(|e| step_failed("engine.destroy", e))?;
    product
        .destroy()
        .await
        .map_err(|e| step_failed("product.destroy", e))?;

    Ok(DemoReport {
        sdk_id,
        config_handle,
        data_sources,
        config_definition,
        config_id,
        record_id,
        record_info,
        entity,
        license,
        version,
    })
}

fn step_failed(step: &str, error: SzError) -> SzError {
    tracing::error!("[Demo] {} 失败: {}", step, error);
    error
}

fn demo_record(record_id: &str) -> String {
    serde_json::json!({
        "DATA_SOURCE": DEMO_DATA_SOURCE,
        "RECORD_ID": record_id,
        "NAME_LAST": "SEAMAN",
        "DATE_OF_BIRTH": "4/8/1983",
        "ADDR_LINE1": "772 Armstrong RD",
        "ADDR_CITY": "Delhi",
        "ADDR_STATE": "LA",
        "ADDR_POSTAL_CODE": "71232",
        "PHONE_NUMBER": "225-671-0796",
        "GENDER": "F",
    })
    .to_string()
}
