//! Turns a freshly cloned project template into a named project.
//!
//! The flow is strictly linear: collect a [`structs::project_config::ProjectConfig`],
//! confirm it with the user, then render the manifest, README, directory layout,
//! tech-stack extras and the initial git commit.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
