pub mod api;
pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod extract;
pub mod patterns;
pub mod preview;
pub mod report;
pub mod runner;
