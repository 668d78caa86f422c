pub mod generate;
pub mod models;
pub mod partition;
pub mod sink;
