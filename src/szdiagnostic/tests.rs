use super::*;
use crate::fixtures;
use crate::logging::MemorySink;
use crate::observer::{InlineDispatcher, RecordingObserver};
use crate::senzing::SZ_NO_LOGGING;

fn test_diagnostic() -> MockSzDiagnostic {
    fixtures::diagnostic().with_dispatcher(Arc::new(InlineDispatcher))
}

#[tokio::test]
async fn test_canned_results() {
    let diagnostic = test_diagnostic();
    assert_eq!(
        diagnostic.check_datastore_performance(1).await.unwrap(),
        r#"{"numRecordsInserted":76667,"insertTime":1000}"#
    );
    assert_eq!(diagnostic.get_datastore_info().await.unwrap(), "{}");
    assert_eq!(diagnostic.get_feature(1).await.unwrap(), "{}");
    assert!(diagnostic.purge_repository().await.is_ok());
    assert!(diagnostic.reinitialize(1).await.is_ok());
    assert!(diagnostic.destroy().await.is_ok());
}

#[tokio::test]
async fn test_initialize_picks_event_by_config_id() {
    let diagnostic = test_diagnostic();
    let observer = Arc::new(RecordingObserver::new("Observer 1"));
    diagnostic.register_observer(observer.clone()).await.unwrap();
    observer.clear();

    diagnostic
        .initialize("Test", "{}", SZ_INITIALIZE_WITH_DEFAULT_CONFIGURATION, SZ_NO_LOGGING)
        .await
        .unwrap();
    diagnostic.initialize("Test", "{}", 42, SZ_NO_LOGGING).await.unwrap();

    let received = observer.notifications();
    assert_eq!(observer.message_ids(), vec![8021, 8022]);
    assert!(received[0].detail("configID").is_none());
    assert_eq!(received[1].detail("configID"), Some("42"));
    assert_eq!(received[1].detail("instanceName"), Some("Test"));
}

#[tokio::test]
async fn test_initialize_trace_numbers() {
    let sink = Arc::new(MemorySink::new());
    let diagnostic = test_diagnostic().with_log_sink(sink.clone());
    diagnostic.set_log_level("TRACE").await.unwrap();
    sink.clear();

    diagnostic.initialize("Test", "{}", 0, 0).await.unwrap();
    diagnostic.initialize("Test", "{}", 7, 0).await.unwrap();
    assert_eq!(
        sink.message_ids(),
        vec![
            "SZSDK60230047".to_string(),
            "SZSDK60230048".to_string(),
            "SZSDK60230049".to_string(),
            "SZSDK60230050".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_purge_repository_event() {
    let diagnostic = test_diagnostic();
    diagnostic.set_observer_origin("Machine: nn; Task: UnitTest");
    let observer = Arc::new(RecordingObserver::new("Observer 1"));
    diagnostic.register_observer(observer.clone()).await.unwrap();
    observer.clear();

    diagnostic.purge_repository().await.unwrap();
    let event = observer.last().unwrap();
    assert_eq!(event.message_id, 8056);
    assert_eq!(event.subject_id, 6023);

    let message: serde_json::Value = serde_json::from_str(&event.to_message()).unwrap();
    assert_eq!(message["messageId"], "8056");
    assert_eq!(message["subjectId"], "6023");
    assert_eq!(message["origin"], "Machine: nn; Task: UnitTest");
}

#[tokio::test]
async fn test_get_feature_detail() {
    let diagnostic = test_diagnostic();
    let observer = Arc::new(RecordingObserver::new("Observer 1"));
    diagnostic.register_observer(observer.clone()).await.unwrap();

    diagnostic.get_feature(17).await.unwrap();
    diagnostic.check_datastore_performance(3).await.unwrap();

    let received = observer.notifications();
    assert_eq!(received[1].detail("featureID"), Some("17"));
    assert_eq!(received[2].detail("secondsToRun"), Some("3"));
}
