pub mod constants;
pub mod data_mgmt;
pub mod devices;
pub mod plan;
pub mod signals;

pub use plan::config::{find_config_path, run_from_config};
