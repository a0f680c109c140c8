//! 引擎模拟客户端
//!
//! 导出句柄没有游标状态：`fetch_next` 每次都返回同一个预设值，
//! 导出迭代器只产出一次 `fetch_next_result`（为空时不产出）后关闭


use crate::error::SzResult;
use crate::facade::{Call, MockCore, MockFacade, MOCK_SDK_ID};
use crate::observer::Observer;
use crate::senzing::{SzEngine, SzObservable, SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const COMPONENT_ID: i32 = 6024;

pub mod methods {
    use crate::facade::Method;

    pub const ADD_RECORD: Method = Method::new("add_record", 1, 8001);
    pub const CLOSE_EXPORT: Method = Method::new("close_export", 13, 8006);
    pub const COUNT_REDO_RECORDS: Method = Method::new("count_redo_records", 15, 8007);
    pub const DELETE_RECORD: Method = Method::new("delete_record", 17, 8008);
    pub const DESTROY: Method = Method::new("destroy", 21, 8010);
    pub const EXPORT_CSV_ENTITY_REPORT: Method =
        Method::new("export_csv_entity_report", 27, 8013);
    pub const EXPORT_JSON_ENTITY_REPORT: Method =
        Method::new("export_json_entity_report", 29, 8014);
    pub const FETCH_NEXT: Method = Method::new("fetch_next", 31, 8015);
    pub const FIND_INTERESTING_ENTITIES_BY_ENTITY_ID: Method =
        Method::new("find_interesting_entities_by_entity_id", 33, 8016);
    pub const FIND_INTERESTING_ENTITIES_BY_RECORD_ID: Method =
        Method::new("find_interesting_entities_by_record_id", 35, 8017);
    pub const FIND_NETWORK_BY_ENTITY_ID: Method =
        Method::new("find_network_by_entity_id", 37, 8018);
    pub const FIND_NETWORK_BY_RECORD_ID: Method =
        Method::new("find_network_by_record_id", 41, 8020);
    pub const FIND_PATH_BY_ENTITY_ID: Method = Method::new("find_path_by_entity_id", 45, 8022);
    pub const FIND_PATH_BY_RECORD_ID: Method = Method::new("find_path_by_record_id", 49, 8024);
    pub const GET_ACTIVE_CONFIG_ID: Method = Method::new("get_active_config_id", 69, 8034);
    pub const GET_ENTITY_BY_ENTITY_ID: Method =
        Method::new("get_entity_by_entity_id", 71, 8035);
    pub const GET_ENTITY_BY_RECORD_ID: Method =
        Method::new("get_entity_by_record_id", 75, 8037);
    pub const GET_RECORD: Method = Method::new("get_record", 83, 8039);
    pub const GET_REDO_RECORD: Method = Method::new("get_redo_record", 87, 8041);
    pub const GET_REPOSITORY_LAST_MODIFIED_TIME: Method =
        Method::new("get_repository_last_modified_time", 89, 8042);
    pub const GET_VIRTUAL_ENTITY_BY_RECORD_ID: Method =
        Method::new("get_virtual_entity_by_record_id", 91, 8043);
    pub const HOW_ENTITY_BY_ENTITY_ID: Method =
        Method::new("how_entity_by_entity_id", 95, 8045);
    pub const INITIALIZE: Method = Method::new("initialize", 99, 8047);
    pub const INITIALIZE_WITH_CONFIG_ID: Method =
        Method::new("initialize_with_config_id", 101, 8048);
    pub const PRIME_ENGINE: Method = Method::new("prime_engine", 103, 8049);
    pub const PROCESS_REDO_RECORD: Method = Method::new("process_redo_record", 107, 8051);
    pub const REEVALUATE_ENTITY: Method = Method::new("reevaluate_entity", 119, 8057);
    pub const REEVALUATE_RECORD: Method = Method::new("reevaluate_record", 123, 8059);
    pub const REINITIALIZE: Method = Method::new("reinitialize", 127, 8061);
    pub const SEARCH_BY_ATTRIBUTES: Method = Method::new("search_by_attributes", 133, 8064);
    pub const SET_LOG_LEVEL: Method = Method::new("set_log_level", 137, 8077);
    pub const GET_STATS: Method = Method::new("get_stats", 139, 8066);
    pub const WHY_ENTITIES: Method = Method::new("why_entities", 141, 8067);
    pub const WHY_RECORD_IN_ENTITY: Method = Method::new("why_record_in_entity", 147, 8071);
    pub const WHY_RECORDS: Method = Method::new("why_records", 153, 8073);
    pub const REGISTER_OBSERVER: Method = Method::new("register_observer", 157, 8076);
    pub const UNREGISTER_OBSERVER: Method = Method::new("unregister_observer", 159, 8078);
    pub const GET_SDK_ID: Method = Method::new("get_sdk_id", 161, 8075);
    pub const EXPORT_CSV_ENTITY_REPORT_ITERATOR: Method =
        Method::new("export_csv_entity_report_iterator", 163, 8079);
    pub const EXPORT_JSON_ENTITY_REPORT_ITERATOR: Method =
        Method::new("export_json_entity_report_iterator", 165, 8080);
}

/// 引擎模拟客户端
#[derive(Debug)]
pub struct MockSzEngine {
    pub add_record_result: String,
    pub count_redo_records_result: i64,
    pub delete_record_result: String,
    pub export_csv_entity_report_result: usize,
    pub export_json_entity_report_result: usize,
    pub fetch_next_result: String,
    pub find_interesting_entities_by_entity_id_result: String,
    pub find_interesting_entities_by_record_id_result: String,
    pub find_network_by_entity_id_result: String,
    pub find_network_by_record_id_result: String,
    pub find_path_by_entity_id_result: String,
    pub find_path_by_record_id_result: String,
    pub get_active_config_id_result: i64,
    pub get_entity_by_entity_id_result: String,
    pub get_entity_by_record_id_result: String,
    pub get_record_result: String,
    pub get_redo_record_result: String,
    pub get_repository_last_modified_time_result: i64,
    pub get_stats_result: String,
    pub get_virtual_entity_by_record_id_result: String,
    pub how_entity_by_entity_id_result: String,
    pub process_redo_record_result: String,
    pub reevaluate_entity_result: String,
    pub reevaluate_record_result: String,
    pub search_by_attributes_result: String,
    pub why_entities_result: String,
    pub why_record_in_entity_result: String,
    pub why_records_result: String,
    core: MockCore,
}

impl Default for MockSzEngine {
    fn default() -> Self {
        Self {
            add_record_result: String::new(),
            count_redo_records_result: 0,
            delete_record_result: String::new(),
            export_csv_entity_report_result: 0,
            export_json_entity_report_result: 0,
            fetch_next_result: String::new(),
            find_interesting_entities_by_entity_id_result: String::new(),
            find_interesting_entities_by_record_id_result: String::new(),
            find_network_by_entity_id_result: String::new(),
            find_network_by_record_id_result: String::new(),
            find_path_by_entity_id_result: String::new(),
            find_path_by_record_id_result: String::new(),
            get_active_config_id_result: 0,
            get_entity_by_entity_id_result: String::new(),
            get_entity_by_record_id_result: String::new(),
            get_record_result: String::new(),
            get_redo_record_result: String::new(),
            get_repository_last_modified_time_result: 0,
            get_stats_result: String::new(),
            get_virtual_entity_by_record_id_result: String::new(),
            how_entity_by_entity_id_result: String::new(),
            process_redo_record_result: String::new(),
            reevaluate_entity_result: String::new(),
            reevaluate_record_result: String::new(),
            search_by_attributes_result: String::new(),
            why_entities_result: String::new(),
            why_record_in_entity_result: String::new(),
            why_records_result: String::new(),
            core: MockCore::new(COMPONENT_ID),
        }
    }
}

impl MockSzEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 导出迭代器：至多产出一次 `fetch_next_result`，随后发送端被丢弃，通道关闭
    fn export_iterator(&self, call: Call) -> mpsc::Receiver<SzResult<String>> {
        let (tx, rx) = mpsc::channel(1);
        let fragment = self.core.invoke(call, self.fetch_next_result.clone());
        if matches!(&fragment, Ok(f) if f.is_empty()) {
            return rx;
        }
        if let Err(e) = tx.try_send(fragment) {
            tracing::warn!("[MockSzEngine] 导出迭代器发送失败: {}", e);
        }
        rx
    }
}

impl MockFacade for MockSzEngine {
    fn core(&self) -> &MockCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MockCore {
        &mut self.core
    }
}

#[async_trait]
impl SzObservable for MockSzEngine {
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
impl SzEngine for MockSzEngine {
    async fn add_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        record_definition: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::ADD_RECORD)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("recordDefinition", record_definition)
            .param("flags", flags);
        self.core.invoke(call, self.add_record_result.clone())
    }

    async fn close_export(&self, export_handle: usize) -> SzResult<()> {
        let call = Call::new(methods::CLOSE_EXPORT).param("exportHandle", export_handle);
        self.core.invoke(call, ())
    }

    async fn count_redo_records(&self) -> SzResult<i64> {
        self.core.invoke(
            Call::new(methods::COUNT_REDO_RECORDS),
            self.count_redo_records_result,
        )
    }

    async fn delete_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::DELETE_RECORD)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("flags", flags);
        self.core.invoke(call, self.delete_record_result.clone())
    }

    async fn destroy(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::DESTROY), ())
    }

    async fn export_csv_entity_report(
        &self,
        csv_column_list: &str,
        flags: i64,
    ) -> SzResult<usize> {
        let call = Call::new(methods::EXPORT_CSV_ENTITY_REPORT)
            .param("csvColumnList", csv_column_list)
            .param("flags", flags);
        self.core.invoke(call, self.export_csv_entity_report_result)
    }

    async fn export_csv_entity_report_iterator(
        &self,
        csv_column_list: &str,
        flags: i64,
    ) -> mpsc::Receiver<SzResult<String>> {
        let call = Call::new(methods::EXPORT_CSV_ENTITY_REPORT_ITERATOR)
            .param("csvColumnList", csv_column_list)
            .param("flags", flags);
        self.export_iterator(call)
    }

    async fn export_json_entity_report(&self, flags: i64) -> SzResult<usize> {
        let call = Call::new(methods::EXPORT_JSON_ENTITY_REPORT).param("flags", flags);
        self.core.invoke(call, self.export_json_entity_report_result)
    }

    async fn export_json_entity_report_iterator(
        &self,
        flags: i64,
    ) -> mpsc::Receiver<SzResult<String>> {
        let call = Call::new(methods::EXPORT_JSON_ENTITY_REPORT_ITERATOR).param("flags", flags);
        self.export_iterator(call)
    }

    async fn fetch_next(&self, export_handle: usize) -> SzResult<String> {
        let call = Call::new(methods::FETCH_NEXT).param("exportHandle", export_handle);
        self.core.invoke(call, self.fetch_next_result.clone())
    }

    async fn find_interesting_entities_by_entity_id(
        &self,
        entity_id: i64,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::FIND_INTERESTING_ENTITIES_BY_ENTITY_ID)
            .detail("entityID", entity_id)
            .param("flags", flags);
        self.core
            .invoke(call, self.find_interesting_entities_by_entity_id_result.clone())
    }

    async fn find_interesting_entities_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::FIND_INTERESTING_ENTITIES_BY_RECORD_ID)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("flags", flags);
        self.core
            .invoke(call, self.find_interesting_entities_by_record_id_result.clone())
    }

    async fn find_network_by_entity_id(
        &self,
        entity_ids: &str,
        max_degrees: i64,
        build_out_degree: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::FIND_NETWORK_BY_ENTITY_ID)
            .detail("entityIDs", entity_ids)
            .param("maxDegrees", max_degrees)
            .param("buildOutDegree", build_out_degree)
            .param("buildOutMaxEntities", build_out_max_entities)
            .param("flags", flags);
        self.core
            .invoke(call, self.find_network_by_entity_id_result.clone())
    }

    async fn find_network_by_record_id(
        &self,
        record_keys: &str,
        max_degrees: i64,
        build_out_degree: i64,
        build_out_max_entities: i64,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::FIND_NETWORK_BY_RECORD_ID)
            .detail("recordKeys", record_keys)
            .param("maxDegrees", max_degrees)
            .param("buildOutDegree", build_out_degree)
            .param("buildOutMaxEntities", build_out_max_entities)
            .param("flags", flags);
        self.core
            .invoke(call, self.find_network_by_record_id_result.clone())
    }

    async fn find_path_by_entity_id(
        &self,
        start_entity_id: i64,
        end_entity_id: i64,
        max_degrees: i64,
        avoid_entity_ids: &str,
        required_data_sources: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::FIND_PATH_BY_ENTITY_ID)
            .detail("startEntityID", start_entity_id)
            .detail("endEntityID", end_entity_id)
            .param("maxDegrees", max_degrees)
            .param("avoidEntityIDs", avoid_entity_ids)
            .param("requiredDataSources", required_data_sources)
            .param("flags", flags);
        self.core
            .invoke(call, self.find_path_by_entity_id_result.clone())
    }

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
    ) -> SzResult<String> {
        let call = Call::new(methods::FIND_PATH_BY_RECORD_ID)
            .detail("startDataSourceCode", start_data_source_code)
            .detail("startRecordID", start_record_id)
            .detail("endDataSourceCode", end_data_source_code)
            .detail("endRecordID", end_record_id)
            .param("maxDegrees", max_degrees)
            .param("avoidRecordKeys", avoid_record_keys)
            .param("requiredDataSources", required_data_sources)
            .param("flags", flags);
        self.core
            .invoke(call, self.find_path_by_record_id_result.clone())
    }

    async fn get_active_config_id(&self) -> SzResult<i64> {
        self.core.invoke(
            Call::new(methods::GET_ACTIVE_CONFIG_ID),
            self.get_active_config_id_result,
        )
    }

    async fn get_entity_by_entity_id(&self, entity_id: i64, flags: i64) -> SzResult<String> {
        let call = Call::new(methods::GET_ENTITY_BY_ENTITY_ID)
            .detail("entityID", entity_id)
            .param("flags", flags);
        self.core
            .invoke(call, self.get_entity_by_entity_id_result.clone())
    }

    async fn get_entity_by_record_id(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::GET_ENTITY_BY_RECORD_ID)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("flags", flags);
        self.core
            .invoke(call, self.get_entity_by_record_id_result.clone())
    }

    async fn get_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::GET_RECORD)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("flags", flags);
        self.core.invoke(call, self.get_record_result.clone())
    }

    async fn get_redo_record(&self) -> SzResult<String> {
        self.core.invoke(
            Call::new(methods::GET_REDO_RECORD),
            self.get_redo_record_result.clone(),
        )
    }

    async fn get_repository_last_modified_time(&self) -> SzResult<i64> {
        self.core.invoke(
            Call::new(methods::GET_REPOSITORY_LAST_MODIFIED_TIME),
            self.get_repository_last_modified_time_result,
        )
    }

    async fn get_stats(&self) -> SzResult<String> {
        self.core
            .invoke(Call::new(methods::GET_STATS), self.get_stats_result.clone())
    }

    async fn get_virtual_entity_by_record_id(
        &self,
        record_keys: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::GET_VIRTUAL_ENTITY_BY_RECORD_ID)
            .detail("recordKeys", record_keys)
            .param("flags", flags);
        self.core
            .invoke(call, self.get_virtual_entity_by_record_id_result.clone())
    }

    async fn how_entity_by_entity_id(&self, entity_id: i64, flags: i64) -> SzResult<String> {
        let call = Call::new(methods::HOW_ENTITY_BY_ENTITY_ID)
            .detail("entityID", entity_id)
            .param("flags", flags);
        self.core
            .invoke(call, self.how_entity_by_entity_id_result.clone())
    }

    async fn initialize(
        &self,
        instance_name: &str,
        settings: &str,
        config_id: i64,
        verbose_logging: i64,
    ) -> SzResult<()> {
        let call = if config_id == SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION {
            Call::new(methods::INITIALIZE)
        } else {
            Call::new(methods::INITIALIZE_WITH_CONFIG_ID).detail("configID", config_id)
        };
        let call = call
            .detail("instanceName", instance_name)
            .detail("settings", settings)
            .detail("verboseLogging", verbose_logging);
        self.core.invoke(call, ())
    }

    async fn prime_engine(&self) -> SzResult<()> {
        self.core.invoke(Call::new(methods::PRIME_ENGINE), ())
    }

    async fn process_redo_record(&self, redo_record: &str, flags: i64) -> SzResult<String> {
        let call = Call::new(methods::PROCESS_REDO_RECORD)
            .param("redoRecord", redo_record)
            .param("flags", flags);
        self.core
            .invoke(call, self.process_redo_record_result.clone())
    }

    async fn reevaluate_entity(&self, entity_id: i64, flags: i64) -> SzResult<String> {
        let call = Call::new(methods::REEVALUATE_ENTITY)
            .detail("entityID", entity_id)
            .param("flags", flags);
        self.core.invoke(call, self.reevaluate_entity_result.clone())
    }

    async fn reevaluate_record(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::REEVALUATE_RECORD)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("flags", flags);
        self.core.invoke(call, self.reevaluate_record_result.clone())
    }

    async fn reinitialize(&self, config_id: i64) -> SzResult<()> {
        let call = Call::new(methods::REINITIALIZE).detail("configID", config_id);
        self.core.invoke(call, ())
    }

    async fn search_by_attributes(
        &self,
        attributes: &str,
        search_profile: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::SEARCH_BY_ATTRIBUTES)
            .param("attributes", attributes)
            .param("searchProfile", search_profile)
            .param("flags", flags);
        self.core
            .invoke(call, self.search_by_attributes_result.clone())
    }

    async fn why_entities(
        &self,
        entity_id_1: i64,
        entity_id_2: i64,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::WHY_ENTITIES)
            .detail("entityID1", entity_id_1)
            .detail("entityID2", entity_id_2)
            .param("flags", flags);
        self.core.invoke(call, self.why_entities_result.clone())
    }

    async fn why_record_in_entity(
        &self,
        data_source_code: &str,
        record_id: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::WHY_RECORD_IN_ENTITY)
            .detail("dataSourceCode", data_source_code)
            .detail("recordID", record_id)
            .param("flags", flags);
        self.core
            .invoke(call, self.why_record_in_entity_result.clone())
    }

    async fn why_records(
        &self,
        data_source_code_1: &str,
        record_id_1: &str,
        data_source_code_2: &str,
        record_id_2: &str,
        flags: i64,
    ) -> SzResult<String> {
        let call = Call::new(methods::WHY_RECORDS)
            .detail("dataSourceCode1", data_source_code_1)
            .detail("recordID1", record_id_1)
            .detail("dataSourceCode2", data_source_code_2)
            .detail("recordID2", record_id_2)
            .param("flags", flags);
        self.core.invoke(call, self.why_records_result.clone())
    }
}
