//! 实体解析 SDK 接口定义
//!
//! 模拟客户端与真实客户端实现同一组 Trait，调用方可以互换使用

use crate::error::SzResult;
use crate::observer::Observer;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

/// 不输出 SDK 内部日志
pub const SZ_NO_LOGGING: i64 = 0;
/// 输出 SDK 内部详细日志
pub const SZ_VERBOSE_LOGGING: i64 = 1;
/// 使用数据库中的默认配置初始化
pub const SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION: i64 = 0;
pub const SZ_NO_FLAGS: i64 = 0;
pub const SZ_WITH_INFO: i64 = 1 << 62;

/// 可观察能力（每个客户端都具备）
#[async_trait]
pub trait SzObservable: Send + Sync {
    fn get_observer_origin(&self) -> String;

    fn set_observer_origin(&self, origin: &str);

    async fn get_sdk_id(&self) -> SzResult<String>;

    /// 注册观察者；同一 ID 重复注册只保留一份
    async fn register_observer(&self, observer: Arc<dyn Observer>) -> SzResult<()>;

    /// 注销观察者；注销通知会先发给包括该观察者在内的全部观察者
    async fn unregister_observer(&self, observer: Arc<dyn Observer>) -> SzResult<()>;

    /// 按名称设置日志级别，`TRACE` 同时打开方法追踪
    async fn set_log_level(&self, log_level_name: &str) -> SzResult<()>;
}

/// 配置对象操作
#[async_trait]
pub trait SzConfig: SzObservable {
    async fn add_data_source(&self, config_handle: usize, data_source_code: &str)
        -> SzResult<String>;

    async fn close_config(&self, config_handle: usize) -> SzResult<()>;

    async fn create_config(&self) -> SzResult<usize>;

    async fn delete_data_source(&self, config_handle: usize, data_source_code: &str)
        -> SzResult<()>;

    async fn destroy(&self) -> SzResult<()>;

    async fn export_config(&self, config_handle: usize) -> SzResult<String>;

    async fn get_data_sources(&self, config_handle: usize) -> SzResult<String>;

    async fn import_config(&self, config_definition: &str) -> SzResult<usize>;

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;
}

/// 配置仓库管理
#[async_trait]
pub trait SzConfigManager: SzObservable {
    async fn add_config(&self, config_definition: &str, config_comment: &str) -> SzResult<i64>;

    async fn destroy(&self) -> SzResult<()>;

    async fn get_config(&self, config_id: i64) -> SzResult<String>;

    async fn get_configs(&self) -> SzResult<String>;

    async fn get_default_config_id(&self) -> SzResult<i64>;

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;

    async fn replace_default_config_id(
        &self,
        current_default_config_id: i64,
        new_default_config_id: i64,
    ) -> SzResult<()>;

    async fn set_default_config_id(&self, config_id: i64) -> SzResult<()>;
}

/// 诊断操作
#[async_trait]
pub trait SzDiagnostic: SzObservable {
    async fn check_datastore_performance(&self, seconds_to_run: i32) -> SzResult<String>;

    async fn destroy(&self) -> SzResult<()>;

    async fn get_datastore_info(&self) -> SzResult<String>;

    async fn get_feature(&self, feature_id: i64) -> SzResult<String>;

    /// `config_id` 为 [`SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION`] 时使用默认配置
    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()>;

    async fn purge_repository(&self) -> SzResult<()>;

    async fn reinitialize(&self, config_id: i64) -> SzResult<()>;
}

/// 实体解析引擎
#[async_trait]
pub trait SzEngine: SzObservable {
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        record_definition: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn close_export(&self, export_handle: usize) -> SzResult<()>;

    async fn count_redo_records(&self) -> SzResult<i64>;

    async fn delete_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn destroy(&self) -> SzResult<()>;

    async fn export_csv_entity_report(&self, csv_column_list: &str, flags: i64)
        -> SzResult<usize>;

    /// 以通道形式逐段返回 CSV 导出结果
    async fn export_csv_entity_report_iterator(
        &self,
        csv_column_list: &str,
        flags: i64,
    ) -> mpsc::Receiver<SzResult<String>>;

    async fn export_json_entity_report(&self, flags: i64) -> SzResult<usize>;

    async fn export_json_entity_report_iterator(
        &self,
        flags: i64,
    ) -> mpsc::Receiver<SzResult<String>>;

    async fn fetch_next(&self, export_handle: usize) -> SzResult<String>;

    async fn find_interesting_entities_by_entity_id(
        &self,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String>;

    async fn find_interesting_entities_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn find_network_by_entity_id(
        &self,
        entity_ids: &str,
        max_degrees: i64,
        build_out_degree: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String>;

    async fn find_network_by_record_id(
        &self,
        record_keys: &str,
        max_degrees: i64,
        build_out_degree: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String>;

    async fn find_path_by_entity_id(
        &self,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> SzResult<String>;

    #[allow(clippy::too_many_arguments)]
    async fn find_path_by_record_id(
        &self,
        start_data_source_code: &str,
        start_record_id: &str,
        end_data_source_code: &str,
        end_record_id: &str,
        max_degrees: i64,
        avoid_record_keys: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn get_active_config_id(&self) -> SzResult<i64>;

    async fn get_entity_by_entity_id(&self, entity_id: i64, flags: i64) -> SzResult<String>;

    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn get_record(&self, data_source_code: &str, record_id: &str, flags: i64)
        -> SzResult<String>;

    async fn get_redo_record(&self) -> SzResult<String>;

    async fn get_repository_last_modified_time(&self) -> SzResult<i64>;

    async fn get_stats(&self) -> SzResult<String>;

    async fn get_virtual_entity_by_record_id(&self, record_keys: &str, flags: i64)
        -> SzResult<String>;

    async fn how_entity_by_entity_id(&self, entity_id: i64, flags: i64) -> SzResult<String>;

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()>;

    async fn prime_engine(&self) -> SzResult<()>;

    async fn process_redo_record(&self, redo_record: &str, flags: i64) -> SzResult<String>;

    async fn reevaluate_entity(&self, entity_id: i64, flags: i64) -> SzResult<String>;

    async fn reevaluate_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn reinitialize(&self, config_id: i64) -> SzResult<()>;

    async fn search_by_attributes(
        &self,
        attributes: &str,
        search_profile: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn why_entities(&self, entity_id_1: i64, entity_id_2: i64, flags: i64)
        -> SzResult<String>;

    async fn why_record_in_entity(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String>;

    async fn why_records(
        &self,
        data_source_code_1: &str,
        record_id_1: &str,
        data_source_code_2: &str,
        record_id_2: &str,
        flags: i64,
    ) -> SzResult<String>;
}

/// 产品信息
#[async_trait]
pub trait SzProduct: SzObservable {
    async fn destroy(&self) -> SzResult<()>;

    async fn get_license(&self) -> SzResult<String>;

    async fn get_version(&self) -> SzResult<String>;

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        verbose_logging: i64,
    ) -> SzResult<()>;
}
