pub mod classify;
pub mod common;
pub mod export;
pub mod match_cmd;
pub mod report;
pub mod resolve;
pub mod search;
pub mod tree;
