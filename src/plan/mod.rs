//! Run plan schema, validation and config resolution.

mod schema;

pub mod config;

pub use config::PlanError;
pub use schema::{DeviceSpec, OutputSpec, PartitionBy, RunPlan, Selector, SensorBlock, SinkFormat};
