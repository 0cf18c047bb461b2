pub mod config;
pub mod log;
pub mod prune;
pub mod registry;
pub mod runner;
