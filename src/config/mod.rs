mod ingest_config;
mod logging_config;

pub use ingest_config::IngestConfig;
pub use logging_config::LoggingConfig;
