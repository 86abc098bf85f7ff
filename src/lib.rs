pub mod app;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod dashboard;
pub mod notify;
pub mod pages;
pub mod render;
pub mod session;
pub mod storage;
pub mod tracing;
pub mod types;
