//! Deep merge over the untyped configuration tree.
//!
//! Mapping values are combined key by key. Every other kind of value,
//! sequences included, replaces what was there: a later layer's list is taken
//! as a whole and never unioned element-wise with an earlier one.

use layerconf_types::{Dict, Value};

/// Merges `src` into `dst`, with `src` winning on conflicts.
pub fn merge_dict(dst: &mut Dict, src: Dict) {
    for (key, incoming) in src {
        match dst.get_mut(&key) {
            Some(existing) => merge_value(existing, incoming),
            None => {
                dst.insert(key, incoming);
            }
        }
    }
}

/// Merges a single value: mappings recurse, anything else replaces.
pub fn merge_value(dst: &mut Value, src: Value) {
    match (dst, src) {
        (Value::Dict(_, existing), Value::Dict(_, incoming)) => merge_dict(existing, incoming),
        (slot, incoming) => *slot = incoming,
    }
}
