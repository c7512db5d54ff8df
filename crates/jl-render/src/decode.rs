use serde::de::DeserializeOwned;
use serde_json::Value;

/// Best-effort decode of a raw JSON span.
///
/// Failures are reported at trace level and otherwise swallowed.
pub fn decode<T: DeserializeOwned>(raw: &[u8]) -> Option<T> {
    match serde_json::from_slice(raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::trace!(
                target: "jl_render::decode",
                "could not decode field as {}: {}",
                std::any::type_name::<T>(),
                err
            );
            None
        }
    }
}

/// Decode a raw JSON span, falling back to `T::default()` on failure.
pub fn decode_or_default<T: DeserializeOwned + Default>(raw: &[u8]) -> T {
    decode(raw).unwrap_or_default()
}

/// Decode one key of a JSON object, falling back to `T::default()` when the
/// key is missing, `null`, or of the wrong type.
///
/// Sibling keys are unaffected, so a record keeps whatever fields decoded.
pub fn field_or_default<T: DeserializeOwned + Default>(fields: &Value, key: &str) -> T {
    let Some(value) = fields.get(key) else {
        return T::default();
    };
    match <T as serde::Deserialize>::deserialize(value) {
        Ok(decoded) => decoded,
        Err(err) => {
            log::trace!(
                target: "jl_render::decode",
                "could not decode field {:?} as {}: {}",
                key,
                std::any::type_name::<T>(),
                err
            );
            T::default()
        }
    }
}

/// Describe any decoded JSON value as display text.
///
/// A top-level string renders bare; everything else renders as compact JSON.
/// Strings nested inside arrays and objects keep their quotes so the output
/// stays unambiguous.
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
