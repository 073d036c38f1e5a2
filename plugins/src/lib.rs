pub mod factory;
pub mod runner;
