use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::PluginError;
use crate::record::TopicRecord;

/// Read records from the processor's input. `None` means end of stream.
pub trait TopicReader: Send + Sync {
    fn recv(&self) -> Pin<Box<dyn Future<Output = Option<TopicRecord>> + Send + '_>>;
}

/// Emit records. The host routes each record by its `topic` field.
pub trait TopicWriter: Send + Sync {
    fn send(
        &self,
        record: TopicRecord,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>>;
}

/// Context provided to processors at init time.
///
/// Transform processors get both halves; sources have no reader and sinks
/// have no writer.
#[derive(Default)]
pub struct ProcessorContext {
    pub reader: Option<Arc<dyn TopicReader>>,
    pub writer: Option<Arc<dyn TopicWriter>>,
}

/// An active plugin that owns its record loop. The host spawns `run()` as a task.
pub trait Processor: Send + Sync {
    /// Initialize with context. Called once before `run()`.
    fn init(
        &mut self,
        ctx: ProcessorContext,
    ) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>>;

    /// Run until the input ends, `stop()` is called, or a record fails.
    fn run(&self) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>>;

    /// Signal graceful shutdown.
    fn stop(&self) -> Pin<Box<dyn Future<Output = Result<(), PluginError>> + Send + '_>>;
}
