//! Method invocation
//!
//! `throw_on_error` only governs method resolution (no accessible method
//! accepts the arguments). An absent argument is a caller error and comes
//! back as [`ReflectError::NullValue`] whatever the flag says. Once a
//! method has been found, whatever its body raises is returned as
//! [`ReflectError::Thrown`] with the body's own error inside.

use super::classify::classify_all;
use super::members::{find_method, find_nullary_method};
use super::registry::TypeRegistry;
use super::type_info::MethodInfo;
use crate::error::{ReflectError, ReflectResult};
use crate::guard;
use crate::value::{Object, Value};

/// Invoke method `name` on `target`
///
/// Returns `Ok(None)` when the method cannot be resolved and
/// `throw_on_error` is false. Methods returning `void` yield
/// `Some(Value::Null)`.
pub fn invoke(
    registry: &TypeRegistry,
    target: &Object,
    name: &str,
    throw_on_error: bool,
    args: &[Value],
) -> ReflectResult<Option<Value>> {
    let method = match resolve_method(registry, target, name, args) {
        Ok(method) => method,
        Err(err) if !throw_on_error && err.is_resolution() => {
            tracing::debug!(method = name, error = %err, "suppressed method resolution failure");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let result = (method.body)(target, args).map_err(ReflectError::Thrown)?;
    Ok(Some(result))
}

fn resolve_method<'r>(
    registry: &'r TypeRegistry,
    target: &Object,
    name: &str,
    args: &[Value],
) -> ReflectResult<&'r MethodInfo> {
    let class = target.class();
    let method = if args.is_empty() {
        find_nullary_method(registry, class, name)
    } else {
        let argument_types = classify_all(registry, args)?;
        find_method(registry, class, name, &argument_types)
    };

    let not_found = format!("No such method found: {}.{}", registry.name_of(class), name);
    let method = guard::require_non_null(
        method,
        &ReflectError::resolution_kind(),
        Some(not_found.as_str()),
    )?;
    Ok(method)
}
