pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod hierarchy;
pub mod loader;
pub mod matcher;
pub mod models;
pub mod report;
pub mod resolve;

pub use error::{CoreError, CoreResult};
