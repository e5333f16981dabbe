//! Core module for common functionality across all targets

pub mod access;
pub mod config;
pub mod enroll;
pub mod report;
pub mod roles;
pub mod session;
pub mod settings;
pub mod terminology;

/// Returns the current version of the `EduGate` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
