//! CLI command handlers for `EduGate`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod access;
pub mod config;
pub mod enroll;
pub mod naming;
pub mod report;
pub mod roles;
pub mod tabs;
