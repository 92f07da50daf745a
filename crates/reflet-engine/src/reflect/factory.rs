//! Object factory
//!
//! Builds instances of registered classes. Every failure (no suitable
//! constructor, a type that cannot be instantiated, a constructor body that
//! fails) comes back as [`ReflectError::Resolution`].

use super::classify::classify_all;
use super::members::find_constructor;
use super::registry::TypeRegistry;
use super::type_info::{ConstructorInfo, TypeId};
use crate::error::{ReflectError, ReflectResult};
use crate::guard;
use crate::value::{Object, Value};

/// Create an instance of `ty`
///
/// With no arguments the public no-parameter constructor is used directly.
/// Otherwise the arguments are classified and the constructor is chosen by
/// [`find_constructor`].
pub fn create(registry: &TypeRegistry, ty: TypeId, args: &[Value]) -> ReflectResult<Object> {
    let descriptor = registry.descriptor(ty)?;
    let type_name = descriptor.qualified_name();
    let resolution = ReflectError::resolution_kind();

    let not_instantiable = format!("Type {} cannot be instantiated", type_name);
    guard::against(!descriptor.is_instantiable(), &resolution, Some(not_instantiable.as_str()))?;

    let constructor: Option<&ConstructorInfo> = if args.is_empty() {
        descriptor
            .constructors
            .iter()
            .find(|ctor| ctor.is_public() && ctor.parameters.is_empty())
    } else {
        let argument_types = classify_all(registry, args).map_err(|err| {
            ReflectError::resolution_caused_by(
                format!("Cannot classify constructor arguments of {}", type_name),
                err,
            )
        })?;
        find_constructor(registry, ty, &argument_types)
    };
    let not_found = format!("No such constructor found: {}.ctor", type_name);
    let constructor = guard::require_non_null(constructor, &resolution, Some(not_found.as_str()))?;

    let state = (constructor.body)(args).map_err(|err| {
        ReflectError::resolution_caused_by(format!("Constructor of {} failed", type_name), err)
    })?;

    tracing::debug!(type_name = %type_name, arity = args.len(), "created instance");
    Ok(Object::from_boxed(ty, state))
}
