//! Tests for ExtractTopicProcessor

use std::collections::VecDeque;
use std::time::Duration;

use schemaroute_api::error::ErrorKind;
use schemaroute_api::record::TopicRecord;
use schemaroute_api::schema::Schema;
use tokio::sync::Mutex;

use super::*;
use crate::config::ExtractTopicConfig;

struct VecReader {
    records: Mutex<VecDeque<TopicRecord>>,
}

impl VecReader {
    fn new(records: Vec<TopicRecord>) -> Arc<Self> {
        Arc::new(Self {
            records: Mutex::new(records.into()),
        })
    }
}

impl TopicReader for VecReader {
    fn recv(&self) -> Pin<Box<dyn Future<Output = Option<TopicRecord>> + Send + '_>> {
        Box::pin(async move { self.records.lock().await.pop_front() })
    }
}

/// Open input that never yields a record.
struct IdleReader;

impl TopicReader for IdleReader {
    fn recv(&self) -> Pin<Box<dyn Future<Output = Option<TopicRecord>> + Send + '_>> {
        Box::pin(std::future::pending())
    }
}

#[derive(Default)]
struct VecWriter {
    sent: Mutex<Vec<TopicRecord>>,
}

impl TopicWriter for VecWriter {
    fn send(
        &self,
        record: TopicRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>> {
        Box::pin(async move {
            self.sent.lock().await.push(record);
            Ok(())
        })
    }
}

fn record(schema_name: Option<&str>) -> TopicRecord {
    let mut record = TopicRecord::new("ingest", b"payload".to_vec());
    record.value_schema = schema_name.map(Schema::named_struct);
    record
}

fn processor() -> ExtractTopicProcessor {
    let config = ExtractTopicConfig::new().with_regex(r"com\.acme\.(\w+)").unwrap();
    ExtractTopicProcessor::new(ExtractTopic::new(Some(config)))
}

async fn init(
    processor: &mut ExtractTopicProcessor,
    records: Vec<TopicRecord>,
) -> Arc<VecWriter> {
    let writer = Arc::new(VecWriter::default());
    processor
        .init(ProcessorContext {
            reader: Some(VecReader::new(records)),
            writer: Some(writer.clone()),
        })
        .await
        .unwrap();
    writer
}

#[tokio::test]
async fn test_routes_stream() {
    let mut processor = processor();
    let writer = init(
        &mut processor,
        vec![record(Some("com.acme.Order")), record(Some("other.Thing"))],
    )
    .await;

    processor.run().await.unwrap();

    let sent = writer.sent.lock().await;
    let topics: Vec<&str> = sent.iter().map(|r| r.topic.as_str()).collect();
    assert_eq!(topics, vec!["Order", "other.Thing"]);
    assert!(sent.iter().all(|r| r.value.as_deref() == Some(&b"payload"[..])));
}

#[tokio::test]
async fn test_missing_schema_name_stops_processor() {
    let mut processor = processor();
    let writer = init(
        &mut processor,
        vec![
            record(Some("com.acme.Order")),
            record(None),
            record(Some("com.acme.Invoice")),
        ],
    )
    .await;

    let err = processor.run().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Data);
    assert!(err.message.starts_with("extract-topic: "));

    let sent = writer.sent.lock().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].topic, "Order");
}

#[tokio::test]
async fn test_stop_before_run_sends_nothing() {
    let mut processor = processor();
    let writer = init(&mut processor, vec![record(Some("com.acme.Order"))]).await;

    processor.stop().await.unwrap();
    processor.run().await.unwrap();

    assert!(writer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_stop_interrupts_idle_run() {
    let mut processor = processor();
    let writer = Arc::new(VecWriter::default());
    processor
        .init(ProcessorContext {
            reader: Some(Arc::new(IdleReader)),
            writer: Some(writer.clone()),
        })
        .await
        .unwrap();

    let processor = Arc::new(processor);
    let running = {
        let processor = Arc::clone(&processor);
        tokio::spawn(async move { processor.run().await })
    };

    tokio::time::sleep(Duration::from_millis(50)).await;
    processor.stop().await.unwrap();

    let result = tokio::time::timeout(Duration::from_secs(2), running)
        .await
        .expect("run() should return after stop()")
        .unwrap();
    assert!(result.is_ok());
    assert!(writer.sent.lock().await.is_empty());
}

#[tokio::test]
async fn test_init_requires_reader_and_writer() {
    let mut processor = processor();
    let err = processor.init(ProcessorContext::default()).await.unwrap_err();
    assert!(err.is_config());

    let err = processor
        .init(ProcessorContext {
            reader: Some(VecReader::new(Vec::new())),
            writer: None,
        })
        .await
        .unwrap_err();
    assert!(err.is_config());
}

#[tokio::test]
async fn test_run_without_init_fails() {
    let err = processor().run().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Logic);
}
