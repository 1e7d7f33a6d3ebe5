//! Command-line front end for vocabulary review sessions.

pub mod commands;
pub mod logging;
pub mod review;
pub mod settings;
pub mod summary;
