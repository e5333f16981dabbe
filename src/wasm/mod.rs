//! WASM library entry point for EduGate
//! This module exports functionality to JavaScript/TypeScript

mod bindings;

// Re-export WASM bindings
pub use bindings::*;
