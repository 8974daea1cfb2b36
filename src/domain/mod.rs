//! Domain model: render configuration and the dot itself.

pub mod config;
pub mod dot;
