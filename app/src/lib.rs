//! gbcam application library: configuration and file services used by the CLI.

pub mod config;
pub mod services;
