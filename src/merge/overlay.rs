//! The recursive override merge.

use crate::sort::KeyOrder;
use crate::value::Value;
use thiserror::Error;
use tracing::warn;

/// MergeError represents an unsupported combination encountered while
/// merging an override tree into a base tree.
#[derive(Debug, Clone, Error)]
pub enum MergeError {
    #[error("cannot merge override sequence element of kind {kind}")]
    UnsupportedElement { kind: &'static str },
}

/// Deep-merges `overlay` into `base` and returns the result.
///
/// The overlay is never mutated. Overlay keys are processed in [`KeyOrder`]
/// order so the merge is deterministic. The base wins only where the
/// overlay is absent, with one tolerated mismatch: an overlay sequence
/// against a non-sequence base value logs a warning and leaves the base
/// value final.
pub fn merge(base: Value, overlay: &Value, order: &KeyOrder) -> Result<Value, MergeError> {
    match (base, overlay) {
        // An absent (null) overlay leaves the base untouched.
        (base, Value::Null) => Ok(base),
        (Value::Null, overlay) => Ok(overlay.clone()),
        (Value::Map(mut base_map), Value::Map(overlay_map)) => {
            for (key, overlay_value) in order.sorted_entries(overlay_map) {
                let merged = match (base_map.remove(key), overlay_value) {
                    // Missing or null in the base: take the overlay value.
                    (None | Some(Value::Null), _) => overlay_value.clone(),
                    // An explicit null override clears the base value.
                    (Some(_), Value::Null) => Value::Null,
                    (Some(base_value), _) => merge(base_value, overlay_value, order)?,
                };
                base_map.set(key.clone(), merged);
            }
            Ok(Value::Map(base_map))
        }
        (Value::List(base_list), Value::List(overlay_list)) => {
            merge_lists(base_list, overlay_list, order).map(Value::List)
        }
        (base, Value::List(_)) => {
            warn!(
                kind = base.kind(),
                "cannot merge an override sequence into this value, keeping the base value"
            );
            Ok(base)
        }
        // Scalar or mapping override against a mismatched base replaces it.
        (_, overlay) => Ok(overlay.clone()),
    }
}

fn merge_lists(
    mut base: Vec<Value>,
    overlay: &[Value],
    order: &KeyOrder,
) -> Result<Vec<Value>, MergeError> {
    for element in overlay {
        match element {
            Value::Map(overlay_map) => {
                let position = overlay_map.name().and_then(|name| {
                    base.iter().position(|candidate| {
                        candidate
                            .as_map()
                            .and_then(|m| m.name())
                            .is_some_and(|candidate_name| candidate_name == name)
                    })
                });
                match position {
                    Some(i) => {
                        let matched = std::mem::take(&mut base[i]);
                        base[i] = merge(matched, element, order)?;
                    }
                    None => base.push(element.clone()),
                }
            }
            // Scalar elements append unconditionally, duplicates included.
            Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                base.push(element.clone());
            }
            Value::Null | Value::List(_) => {
                return Err(MergeError::UnsupportedElement {
                    kind: element.kind(),
                });
            }
        }
    }
    Ok(base)
}
