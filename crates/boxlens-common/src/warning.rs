//! Deduplicated warnings for malformed input.
//!
//! The geometry engine never fails on bad style values, it falls back to 0.
//! A pointer move redraws many times per second though, so the same bad value
//! would be reported on every frame. Warnings are routed through the `log`
//! facade once per unique message.

use std::collections::HashSet;
use std::sync::Mutex;

/// Global set of warnings we've already emitted (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about malformed input (emitted once per unique message)
///
/// Messages are logged under the `boxlens` target, prefixed with the
/// component name.
///
/// Returns `true` if this call emitted the warning.
///
/// # Example
/// ```ignore
/// warn_once("style", "unparsable length 'abc' for margin-top");
/// ```
pub fn warn_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    // Poisoning leaves the set intact.
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let should_emit = guard.get_or_insert_with(HashSet::new).insert(key);
    drop(guard);

    if should_emit {
        log::warn!(target: "boxlens", "[{component}] {message}");
    }
    should_emit
}

/// Clear all recorded warnings (call when loading a new scene)
pub fn clear_warnings() {
    let mut guard = WARNED
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
