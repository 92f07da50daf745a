//! Reflector
//!
//! Bundles a shared registry with a [`ReflectConfig`] so callers do not
//! have to thread lookup flags through every call.

use std::sync::Arc;

use super::annotations;
use super::classify;
use super::factory;
use super::invoker;
use super::registry::TypeRegistry;
use super::type_info::{AnnotationRecord, TypeId};
use crate::config::ReflectConfig;
use crate::error::ReflectResult;
use crate::value::{Object, Value};

/// Reflective operations over a shared registry
#[derive(Debug, Clone)]
pub struct Reflector {
    registry: Arc<TypeRegistry>,
    config: ReflectConfig,
}

impl Reflector {
    /// Create a reflector with the default configuration
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self::with_config(registry, ReflectConfig::default())
    }

    pub fn with_config(registry: Arc<TypeRegistry>, config: ReflectConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &ReflectConfig {
        &self.config
    }

    /// Get the type of a value
    pub fn classify(&self, value: &Value) -> ReflectResult<TypeId> {
        classify::classify(&self.registry, value)
    }

    /// Create an instance of `ty`
    pub fn create(&self, ty: TypeId, args: &[Value]) -> ReflectResult<Object> {
        factory::create(&self.registry, ty, args)
    }

    /// Invoke a method using the configured `throw_on_error`
    pub fn invoke(&self, target: &Object, name: &str, args: &[Value]) -> ReflectResult<Option<Value>> {
        self.invoke_with(target, name, self.config.invoke.throw_on_error, args)
    }

    /// Invoke a method with an explicit `throw_on_error`
    pub fn invoke_with(
        &self,
        target: &Object,
        name: &str,
        throw_on_error: bool,
        args: &[Value],
    ) -> ReflectResult<Option<Value>> {
        invoker::invoke(&self.registry, target, name, throw_on_error, args)
    }

    /// Find an annotation using the configured hierarchy flag and exclusions
    pub fn find_annotation(&self, ty: TypeId, kind: TypeId) -> Option<&AnnotationRecord> {
        let settings = &self.config.annotations;
        annotations::find_annotation(
            &self.registry,
            ty,
            kind,
            settings.search_hierarchy,
            &settings.excluded_namespaces,
        )
    }
}
