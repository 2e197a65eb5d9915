//! Ambient environment snapshot.

use crate::schema::RawEnv;

/// Snapshot the process environment as a string mapping.
///
/// Taken once per load call and never mutated. Entries whose name or value
/// is not valid Unicode are skipped; Rust exposes no "present with undefined
/// value" environment entries, so presence always implies a string value.
pub(crate) fn ambient_snapshot() -> RawEnv {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
