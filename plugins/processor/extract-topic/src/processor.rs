use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use schemaroute_api::error::PluginError;
use schemaroute_api::processor::{Processor, ProcessorContext, TopicReader, TopicWriter};
use tokio_util::sync::CancellationToken;

use crate::record::rebuild;
use crate::transform::ExtractTopic;

/// Transform processor: reads records, re-emits each on the topic named by
/// its value schema. A record that cannot be routed stops the processor.
pub struct ExtractTopicProcessor {
    transform: ExtractTopic,
    reader: Option<Arc<dyn TopicReader>>,
    writer: Option<Arc<dyn TopicWriter>>,
    token: CancellationToken,
}

impl ExtractTopicProcessor {
    pub fn new(transform: ExtractTopic) -> Self {
        Self {
            transform,
            reader: None,
            writer: None,
            token: CancellationToken::new(),
        }
    }
}

impl Processor for ExtractTopicProcessor {
    fn init(
        &mut self,
        ctx: ProcessorContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>> {
        Box::pin(async move {
            self.reader = ctx.reader;
            self.writer = ctx.writer;

            if self.reader.is_none() {
                return Err(PluginError::config(
                    "extract-topic processor requires a source topic",
                ));
            }
            if self.writer.is_none() {
                return Err(PluginError::config(
                    "extract-topic processor requires a writer",
                ));
            }
            Ok(())
        })
    }

    fn run(&self) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>> {
        Box::pin(async move {
            let reader = self
                .reader
                .as_ref()
                .ok_or_else(|| PluginError::logic("reader not initialized"))?;
            let writer = self
                .writer
                .as_ref()
                .ok_or_else(|| PluginError::logic("writer not initialized"))?;

            tracing::info!(
                overrides = self.transform.config().is_some(),
                "extract-topic processor started"
            );

            let mut routed: u64 = 0;
            loop {
                let record = tokio::select! {
                    biased;
                    _ = self.token.cancelled() => break,
                    record = reader.recv() => match record {
                        Some(record) => record,
                        None => break,
                    },
                };
                let topic = match self.transform.resolve(&record) {
                    Ok(topic) => topic,
                    Err(e) => {
                        tracing::error!(topic = %record.topic, error = %e, "failed to route record");
                        return Err(PluginError::from(e).with_context("extract-topic"));
                    }
                };
                tracing::trace!(from = %record.topic, to = %topic, "routing record");
                writer.send(rebuild(record, topic)).await?;
                routed += 1;
            }

            tracing::info!(routed, "extract-topic processor stopped");
            Ok(())
        })
    }

    fn stop(&self) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>> {
        self.token.cancel();
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
#[path = "processor_test.rs"]
mod tests;
