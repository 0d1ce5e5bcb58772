//! Form builder core: form schemas, submissions, validation and the
//! durable key-value storage they live in.

pub mod cli;
pub mod config;
pub mod logging;
pub mod schema;
pub mod storage;
pub mod submission;
pub mod ui;
pub mod workspace;
