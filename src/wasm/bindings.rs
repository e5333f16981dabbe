//! WASM bindings exported to JavaScript/TypeScript
//!
//! Browser callers hold their institute settings elsewhere; these entry
//! points resolve against the built-in defaults only.

use crate::core::access::AccessMatrix;
use crate::core::get_version;
use crate::core::roles::map_role_to_custom_name;
use crate::core::terminology::TerminologyStore;
use wasm_bindgen::prelude::*;

/// Returns the current EduGate version for the WASM build.
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    format!("EduGate WASM v{}", get_version())
}

/// Resolve a backend role string to its default display label.
///
/// Unknown roles pass through unchanged.
#[wasm_bindgen]
pub fn role_display_name(role: &str) -> String {
    map_role_to_custom_name(role, &TerminologyStore::new())
}

/// Can `role` open top-level tab `tab`, per the built-in tables?
#[wasm_bindgen]
pub fn tab_access(role: &str, tab: &str) -> bool {
    AccessMatrix::new().has_tab_access_str(role, tab)
}

/// Can `role` see child tab `child` under `tab`, per the built-in tables?
#[wasm_bindgen]
pub fn child_tab_access(role: &str, tab: &str, child: &str) -> bool {
    AccessMatrix::new().has_child_tab_access_str(role, tab, child)
}

/// Can `role` use feature `feature` within `tab`, per the built-in tables?
#[wasm_bindgen]
pub fn feature_access(role: &str, tab: &str, feature: &str) -> bool {
    AccessMatrix::new().has_feature_access_str(role, tab, feature)
}
