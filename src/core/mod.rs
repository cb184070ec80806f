// src/core/mod.rs
//! Configuration and the analysis service client

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigManager, ServiceConfig};
pub use service_client::{AnalysisClient, AnalysisService};
