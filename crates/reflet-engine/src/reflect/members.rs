//! Member resolution by assignability
//!
//! Candidates are the public constructors or methods declared on exactly
//! the requested type; inherited members are not searched. A candidate
//! matches when its arity equals the argument count and each formal
//! parameter is assignable from the argument type at the same position.
//! When several candidates match, the first one in declaration order wins.
//! "No match" is an ordinary `None`; callers decide whether it is an error.

use super::hierarchy::is_assignable;
use super::registry::TypeRegistry;
use super::type_info::{ConstructorInfo, MethodInfo, TypeId};

fn parameters_accept(registry: &TypeRegistry, formal: &[TypeId], actual: &[TypeId]) -> bool {
    formal.len() == actual.len()
        && formal
            .iter()
            .zip(actual)
            .all(|(&formal, &actual)| is_assignable(registry, formal, actual))
}

/// Find the public constructor of `ty` accepting `argument_types`
pub fn find_constructor<'r>(
    registry: &'r TypeRegistry,
    ty: TypeId,
    argument_types: &[TypeId],
) -> Option<&'r ConstructorInfo> {
    let descriptor = registry.get(ty)?;
    let found = descriptor
        .constructors
        .iter()
        .filter(|ctor| ctor.is_public())
        .find(|ctor| parameters_accept(registry, &ctor.parameters, argument_types));

    tracing::trace!(
        type_name = %descriptor.qualified_name(),
        arguments = ?argument_types,
        found = found.is_some(),
        "constructor lookup"
    );
    found
}

/// Find the public method `name` of `ty` accepting `argument_types`
pub fn find_method<'r>(
    registry: &'r TypeRegistry,
    ty: TypeId,
    name: &str,
    argument_types: &[TypeId],
) -> Option<&'r MethodInfo> {
    let descriptor = registry.get(ty)?;
    let found = descriptor
        .declared_methods(name)
        .filter(|method| method.is_public())
        .find(|method| parameters_accept(registry, &method.parameters, argument_types));

    tracing::trace!(
        type_name = %descriptor.qualified_name(),
        method = name,
        arguments = ?argument_types,
        found = found.is_some(),
        "method lookup"
    );
    found
}

/// Find the public method `name` of `ty` taking no parameters
pub fn find_nullary_method<'r>(
    registry: &'r TypeRegistry,
    ty: TypeId,
    name: &str,
) -> Option<&'r MethodInfo> {
    registry
        .get(ty)?
        .declared_methods(name)
        .find(|method| method.is_public() && method.parameters.is_empty())
}
