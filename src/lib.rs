//! Shared library for EduGate
//! Contains core functionality used across the CLI and WASM targets

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod core;

pub use self::core::*;
