//! Type classification of runtime values
//!
//! Boxed primitives classify as their primitive type, so argument types
//! derived from live values line up with signatures declared with
//! primitive parameters.

use super::registry::TypeRegistry;
use super::type_info::TypeId;
use crate::error::{ReflectError, ReflectResult};
use crate::value::Value;

/// Get the type of a value
///
/// Fails with [`ReflectError::NullValue`] for [`Value::Null`].
pub fn classify(registry: &TypeRegistry, value: &Value) -> ReflectResult<TypeId> {
    match value {
        Value::Null => Err(ReflectError::NullValue(
            "cannot classify an absent value".to_string(),
        )),
        Value::Primitive(p) | Value::Boxed(p) => Ok(p.kind().type_id()),
        Value::Str(_) => Ok(TypeId::STRING),
        Value::Object(object) => {
            let class = object.class();
            match registry.get(class).and_then(|descriptor| descriptor.boxes) {
                Some(kind) => Ok(kind.type_id()),
                None => Ok(class),
            }
        }
    }
}

/// Classify every value of an argument list, in order
pub fn classify_all(registry: &TypeRegistry, values: &[Value]) -> ReflectResult<Vec<TypeId>> {
    values.iter().map(|value| classify(registry, value)).collect()
}
