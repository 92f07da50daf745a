//! Reflet Engine
//!
//! Reflective runtime services over an explicit type registry:
//! - `reflect`: type registry, classification, hierarchy walking, member
//!   resolution, object creation, method invocation, annotation lookup
//! - `guard`: precondition checks raising caller-chosen error kinds
//! - `collections`: ordered keyed collection
//! - `config`: `reflet.toml` defaults for lookups and invocation

pub mod collections;
pub mod config;
pub mod error;
pub mod guard;
pub mod reflect;
pub mod value;

pub use collections::{KeySelector, KeyedCollection};
pub use config::{AnnotationConfig, InvokeConfig, ReflectConfig};
pub use error::{BoxError, ReflectError, ReflectResult};
pub use guard::{ErrorKind, GuardError};
pub use reflect::{
    AnnotationRecord, ConstructorDefinition, MethodDefinition, Reflector, TypeBuilder,
    TypeDescriptor, TypeId, TypeKind, TypeRegistry,
};
pub use value::{Object, Primitive, PrimitiveKind, Value};
