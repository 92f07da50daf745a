//! Reflection services
//!
//! Types are described once, up front, through a [`TypeRegistry`]; every
//! other service is a stateless function over that registry:
//!
//! - [`classify`]: runtime type of a [`Value`](crate::Value), boxed
//!   primitives collapsing to their primitive type
//! - [`hierarchy`]: superclass chain, interface closure, assignability
//! - [`members`]: constructor and method resolution by assignability
//! - [`factory`]: instance creation
//! - [`invoker`]: method invocation
//! - [`annotations`]: annotation lookup with namespace exclusion
//!
//! [`Reflector`] bundles a shared registry with a [`ReflectConfig`](crate::ReflectConfig).
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut registry = TypeRegistry::new();
//! let greeter = registry.register(TypeBuilder::class("app", "Greeter")
//!     .add_constructor(ConstructorDefinition::new(|_| Ok(Greeter::default())))
//!     .add_method(MethodDefinition::new("greet", greet).returns(TypeId::STRING)))?;
//!
//! let reflector = Reflector::new(Arc::new(registry));
//! let object = reflector.create(greeter, &[])?;
//! let greeting = reflector.invoke(&object, "greet", &[])?;
//! ```

pub mod annotations;
pub mod classify;
pub mod factory;
pub mod hierarchy;
pub mod invoker;
pub mod members;
mod reflector;
mod registry;
mod type_builder;
mod type_info;

pub use annotations::{find_annotation, has_annotation, is_in_namespaces};
pub use classify::{classify, classify_all};
pub use factory::create;
pub use hierarchy::{
    interface_closure, is_assignable, is_subclass_of, super_types, type_hierarchy,
};
pub use invoker::invoke;
pub use members::{find_constructor, find_method, find_nullary_method};
pub use reflector::Reflector;
pub use registry::{TypeRegistry, CORE_NAMESPACE};
pub use type_builder::{ConstructorDefinition, MethodDefinition, TypeBuilder};
pub use type_info::{
    AnnotationRecord, ConstructorFn, ConstructorInfo, MemberDescriptor, MemberKind, MethodFn,
    MethodInfo, TypeDescriptor, TypeId, TypeKind, Visibility,
};
