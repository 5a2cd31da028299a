//! Extract-topic processor plugin.
//!
//! Routes every record to a topic derived from the name of its value schema:
//! an exact `schema.name.topic-map` entry if there is one, else capture
//! group 1 of `schema.name.regex`, else the schema name itself. Records
//! whose value schema has no name are rejected.
//!
//! ```ignore
//! let config = ExtractTopicConfig::new().with_regex(r"com\.acme\.(\w+)")?;
//! let transform = ExtractTopic::new(Some(config));
//! let routed = transform.apply(record)?; // "com.acme.Order" -> "Order"
//! ```

mod error;

pub mod config;
pub mod processor;
pub mod record;
pub mod resolver;
pub mod transform;

pub use config::{ExtractTopicConfig, REGEX_PARAM, TOPIC_MAP_PARAM, parse_topic_map};
pub use error::ExtractTopicError;
pub use processor::ExtractTopicProcessor;
pub use record::{Routable, rebuild};
pub use resolver::{Extraction, ResolvedTopic, extract, resolve};
pub use transform::ExtractTopic;

use schemaroute_api::config::ConfigValues;
use schemaroute_api::processor::Processor;

/// Build the processor from host config values. `None` is an empty config.
pub fn create_processor(
    values: Option<&ConfigValues>,
) -> Result<ExtractTopicProcessor, ExtractTopicError> {
    let config = match values {
        Some(values) => ExtractTopicConfig::from_config_values(values)?,
        None => None,
    };
    Ok(ExtractTopicProcessor::new(ExtractTopic::new(config)))
}

// ---------------------------------------------------------------------------
// FFI exports for dynamic (.so) loading
// ---------------------------------------------------------------------------

schemaroute_api::qs_abi_version_fn!();
schemaroute_api::qs_config_params_fn!(ExtractTopicConfig::config_params());
schemaroute_api::qs_destroy_fn!(qs_destroy_processor, schemaroute_api::processor::Processor);

/// # Safety
///
/// `config_ptr` must be null or point to a valid `ConfigValues` owned by the
/// host for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn qs_create_processor(
    config_ptr: *const (),
) -> schemaroute_api::ffi::PluginCreateResult {
    let values = unsafe { schemaroute_api::ffi::config_from_ptr(config_ptr) };
    match create_processor(values) {
        Ok(processor) => {
            schemaroute_api::ffi::plugin_ok(Box::new(Box::new(processor) as Box<dyn Processor>))
        }
        Err(e) => schemaroute_api::ffi::plugin_err(&e.to_string()),
    }
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
