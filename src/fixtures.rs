//! 预设返回值
//!
//! 测试和演示程序使用的固定 JSON 数据，以及填好这些数据的模拟客户端

use crate::szconfig::MockSzConfig;
use crate::szconfigmanager::MockSzConfigManager;
use crate::szdiagnostic::MockSzDiagnostic;
use crate::szengine::MockSzEngine;
use crate::szproduct::MockSzProduct;

pub const ADD_DATA_SOURCE: &str = r#"{"DSRC_ID":1001}"#;

pub const DATA_SOURCES: &str =
    r#"{"DATA_SOURCES":[{"DSRC_ID":1,"DSRC_CODE":"TEST"},{"DSRC_ID":2,"DSRC_CODE":"SEARCH"}]}"#;

pub const CONFIG_DEFINITION: &str = r#"{"G2_CONFIG":{"CFG_ATTR":[{"ATTR_ID":1001,"ATTR_CODE":"DATA_SOURCE","ATTR_CLASS":"OBSERVATION","FTYPE_CODE":null,"FELEM_CODE":null,"FELEM_REQ":"Yes","DEFAULT_VALUE":null,"ADVANCED":"Yes","INTERNAL":"No"},{"ATTR_ID":1002,"ATTR_CODE":"ROUTE_CODE","ATTR_CLASS":"OBSERVATION","FTYPE_CODE":null,"FELEM_CODE":null,"FELEM_REQ":"No","DEFAULT_VALUE":null,"ADVANCED":"Yes","INTERNAL":"No"}]}}"#;

pub const CONFIGS: &str = r#"{"CONFIGS":[{"CONFIG_ID":41320074,"CONFIG_COMMENTS":"Example configuration","SYS_CREATE_DT":"2023-02-16 21:43:10.171"},{"CONFIG_ID":1111755672,"CONFIG_COMMENTS":"g2configmgr_test at 2023-02-16 21:43:10.154619801 +0000 UTC","SYS_CREATE_DT":"2023-02-16 21:43:10.159"},{"CONFIG_ID":3680541328,"CONFIG_COMMENTS":"Created by g2diagnostic_test at 2023-02-16 21:43:07.294747409 +0000 UTC","SYS_CREATE_DT":"2023-02-16 21:43:07.755"}]}"#;

pub const DATASTORE_PERFORMANCE: &str = r#"{"numRecordsInserted":76667,"insertTime":1000}"#;

pub const LICENSE: &str = r#"{"customer":"Senzing Public Test License","contract":"EVALUATION - support@senzing.com","issueDate":"2022-11-29","licenseType":"EVAL (Solely for non-productive use)","licenseLevel":"STANDARD","billing":"MONTHLY","expireDate":"2023-11-29","recordLimit":50000}"#;

pub const VERSION: &str = r#"{"PRODUCT_NAME":"Senzing API","VERSION":"3.5.0","BUILD_VERSION":"3.5.0.23041","BUILD_DATE":"2023-02-09","BUILD_NUMBER":"2023_02_09__23_01","COMPATIBILITY_VERSION":{"CONFIG_VERSION":"10"},"SCHEMA_VERSION":{"ENGINE_SCHEMA_VERSION":"3.5","MINIMUM_REQUIRED_SCHEMA_VERSION":"3.0","MAXIMUM_REQUIRED_SCHEMA_VERSION":"3.99"}}"#;

pub const RECORD_INFO: &str =
    r#"{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001","AFFECTED_ENTITIES":[{"ENTITY_ID":1}]}"#;

pub const RECORD: &str = r#"{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001","JSON_DATA":{"RECORD_TYPE":"PERSON","PRIMARY_NAME_LAST":"Smith","PRIMARY_NAME_FIRST":"Robert","DATE_OF_BIRTH":"12/11/1978","ADDR_TYPE":"MAILING","ADDR_LINE1":"123 Main Street, Las Vegas NV 89132","PHONE_TYPE":"HOME","PHONE_NUMBER":"702-919-1300","EMAIL_ADDRESS":"bsmith@work.com","DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"}}"#;

pub const ENTITY: &str = r#"{"RESOLVED_ENTITY":{"ENTITY_ID":1,"ENTITY_NAME":"Robert Smith","RECORDS":[{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"},{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1002"}]},"RELATED_ENTITIES":[]}"#;

pub const ENTITY_NETWORK: &str = r#"{"ENTITY_PATHS":[],"ENTITY_NETWORK_LINKS":[],"ENTITIES":[{"RESOLVED_ENTITY":{"ENTITY_ID":1,"ENTITY_NAME":"Robert Smith"}}]}"#;

pub const ENTITY_PATH: &str = r#"{"ENTITY_PATHS":[{"START_ENTITY_ID":1,"END_ENTITY_ID":2,"ENTITIES":[1,2]}],"ENTITY_PATH_LINKS":[],"ENTITIES":[]}"#;

pub const INTERESTING_ENTITIES: &str = r#"{"INTERESTING_ENTITIES":{"ENTITIES":[]}}"#;

pub const HOW_ENTITY: &str = r#"{"HOW_RESULTS":{"RESOLUTION_STEPS":[],"FINAL_STATE":{"NEED_REEVALUATION":0,"VIRTUAL_ENTITIES":[{"VIRTUAL_ENTITY_ID":"V1","MEMBER_RECORDS":[{"INTERNAL_ID":1,"RECORDS":[{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"}]}]}]}}}"#;

pub const VIRTUAL_ENTITY: &str = r#"{"RESOLVED_ENTITY":{"ENTITY_ID":1,"ENTITY_NAME":"Robert Smith","RECORDS":[{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"}]}}"#;

pub const SEARCH_RESULT: &str = r#"{"RESOLVED_ENTITIES":[{"MATCH_INFO":{"MATCH_LEVEL_CODE":"RESOLVED","MATCH_KEY":"+NAME+DOB+PHONE"},"ENTITY":{"RESOLVED_ENTITY":{"ENTITY_ID":1,"ENTITY_NAME":"Robert Smith"}}}]}"#;

pub const STATS: &str = r#"{"workload":{"loadedRecords":3,"addedRecords":3,"deletedRecords":0,"reevaluations":0,"repairedEntities":0}}"#;

pub const WHY_ENTITIES: &str = r#"{"WHY_RESULTS":[{"ENTITY_ID":1,"ENTITY_ID_2":2,"MATCH_INFO":{"WHY_KEY":"+PHONE+ACCT_NUM-SSN","WHY_ERRULE_CODE":"SF1"}}],"ENTITIES":[]}"#;

pub const WHY_RECORD_IN_ENTITY: &str = r#"{"WHY_RESULTS":[{"INTERNAL_ID":1,"ENTITY_ID":1,"FOCUS_RECORDS":[{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"}],"MATCH_INFO":{"WHY_KEY":"+NAME+DOB+PHONE","WHY_ERRULE_CODE":"CNAME_CFF_CEXCL"}}],"ENTITIES":[]}"#;

pub const WHY_RECORDS: &str = r#"{"WHY_RESULTS":[{"INTERNAL_ID":1,"ENTITY_ID":1,"FOCUS_RECORDS":[{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001"}],"INTERNAL_ID_2":2,"ENTITY_ID_2":1,"FOCUS_RECORDS_2":[{"DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1002"}],"MATCH_INFO":{"WHY_KEY":"+NAME+DOB+PHONE","WHY_ERRULE_CODE":"CNAME_CFF_CEXCL"}}],"ENTITIES":[]}"#;

pub const REDO_RECORD: &str =
    r#"{"REASON":"deferred delete","DATA_SOURCE":"CUSTOMERS","RECORD_ID":"1001","ENTITY_TYPE":"GENERIC","DSRC_ACTION":"X"}"#;

pub const EXPORT_CSV_ROW: &str = r#"RESOLVED_ENTITY_ID,RESOLVED_ENTITY_NAME,RELATED_ENTITY_ID,MATCH_LEVEL,MATCH_KEY,IS_DISCLOSED,IS_AMBIGUOUS,DATA_SOURCE,RECORD_ID,JSON_DATA"#;

/// 填好预设数据的配置客户端
pub fn config() -> MockSzConfig {
    let mut config = MockSzConfig::new();
    config.add_data_source_result = ADD_DATA_SOURCE.to_string();
    config.create_config_result = 1;
    config.export_config_result = CONFIG_DEFINITION.to_string();
    config.get_data_sources_result = DATA_SOURCES.to_string();
    config.import_config_result = 1;
    config
}

pub fn config_manager() -> MockSzConfigManager {
    let mut manager = MockSzConfigManager::new();
    manager.add_config_result = 1;
    manager.get_config_result = CONFIG_DEFINITION.to_string();
    manager.get_configs_result = CONFIGS.to_string();
    manager.get_default_config_id_result = 1;
    manager
}

pub fn diagnostic() -> MockSzDiagnostic {
    let mut diagnostic = MockSzDiagnostic::new();
    diagnostic.check_datastore_performance_result = DATASTORE_PERFORMANCE.to_string();
    diagnostic.get_datastore_info_result = "{}".to_string();
    diagnostic.get_feature_result = "{}".to_string();
    diagnostic
}

pub fn engine() -> MockSzEngine {
    let mut engine = MockSzEngine::new();
    engine.add_record_result = RECORD_INFO.to_string();
    engine.count_redo_records_result = 1;
    engine.delete_record_result = RECORD_INFO.to_string();
    engine.export_csv_entity_report_result = 1;
    engine.export_json_entity_report_result = 1;
    engine.fetch_next_result = ENTITY.to_string();
    engine.find_interesting_entities_by_entity_id_result = INTERESTING_ENTITIES.to_string();
    engine.find_interesting_entities_by_record_id_result = INTERESTING_ENTITIES.to_string();
    engine.find_network_by_entity_id_result = ENTITY_NETWORK.to_string();
    engine.find_network_by_record_id_result = ENTITY_NETWORK.to_string();
    engine.find_path_by_entity_id_result = ENTITY_PATH.to_string();
    engine.find_path_by_record_id_result = ENTITY_PATH.to_string();
    engine.get_active_config_id_result = 1;
    engine.get_entity_by_entity_id_result = ENTITY.to_string();
    engine.get_entity_by_record_id_result = ENTITY.to_string();
    engine.get_record_result = RECORD.to_string();
    engine.get_redo_record_result = REDO_RECORD.to_string();
    engine.get_repository_last_modified_time_result = 1_676_565_790_000;
    engine.get_stats_result = STATS.to_string();
    engine.get_virtual_entity_by_record_id_result = VIRTUAL_ENTITY.to_string();
    engine.how_entity_by_entity_id_result = HOW_ENTITY.to_string();
    engine.process_redo_record_result = RECORD_INFO.to_string();
    engine.reevaluate_entity_result = RECORD_INFO.to_string();
    engine.reevaluate_record_result = RECORD_INFO.to_string();
    engine.search_by_attributes_result = SEARCH_RESULT.to_string();
    engine.why_entities_result = WHY_ENTITIES.to_string();
    engine.why_record_in_entity_result = WHY_RECORD_IN_ENTITY.to_string();
    engine.why_records_result = WHY_RECORDS.to_string();
    engine
}

pub fn product() -> MockSzProduct {
    let mut product = MockSzProduct::new();
    product.get_license_result = LICENSE.to_string();
    product.get_version_result = VERSION.to_string();
    product
}
