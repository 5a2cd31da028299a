pub mod config;
pub mod error;
pub mod ffi;
pub mod processor;
pub mod record;
pub mod schema;
