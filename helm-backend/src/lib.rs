///! Helm backend – HTTP control surface for a single simulated spacecraft.

pub mod config;
pub mod logging;
pub mod module;
pub mod service;
