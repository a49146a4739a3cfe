pub mod config;
pub mod money;
pub mod sea_ext;
pub mod tracing;
