//! Type Builder
//!
//! Fluent definitions for registering classes, interfaces and annotation
//! types with a [`TypeRegistry`](super::TypeRegistry).
//!
//! ```rust,ignore
//! let greeter = registry.register(
//!     TypeBuilder::class("app.greeting", "Greeter")
//!         .implements(named)
//!         .add_constructor(
//!             ConstructorDefinition::new(|args| Ok(Greeter::new(args[0].as_str().unwrap_or(""))))
//!                 .with_param(TypeId::STRING),
//!         )
//!         .add_method(
//!             MethodDefinition::new("greet", |this, _| {
//!                 let greeter = this.downcast_ref::<Greeter>().context("not a greeter")?;
//!                 Ok(Value::str(greeter.greeting()))
//!             })
//!             .returns(TypeId::STRING),
//!         ),
//! )?;
//! ```

use std::any::Any;
use std::sync::Arc;

use super::type_info::{
    AnnotationRecord, ConstructorFn, MethodFn, TypeId, TypeKind, Visibility,
};
use crate::value::{Object, Value};

/// Definition for a constructor to be added to a class
#[derive(Clone)]
pub struct ConstructorDefinition {
    /// Parameter types in order
    pub parameters: Vec<TypeId>,
    /// Visibility
    pub visibility: Visibility,
    pub(crate) body: ConstructorFn,
}

impl ConstructorDefinition {
    /// Create a public constructor with no parameters yet
    pub fn new<T, F>(body: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn(&[Value]) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        Self {
            parameters: Vec::new(),
            visibility: Visibility::Public,
            body: Arc::new(move |args: &[Value]| {
                body(args).map(|state| Box::new(state) as Box<dyn Any + Send + Sync>)
            }),
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, param: TypeId) -> Self {
        self.parameters.push(param);
        self
    }

    /// Add several parameters
    pub fn with_params(mut self, params: impl IntoIterator<Item = TypeId>) -> Self {
        self.parameters.extend(params);
        self
    }

    /// Mark as private (invisible to resolution)
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }
}

/// Definition for a method to be added to a type
#[derive(Clone)]
pub struct MethodDefinition {
    /// Method name
    pub name: String,
    /// Parameter types in order
    pub parameters: Vec<TypeId>,
    /// Return type
    pub return_type: TypeId,
    /// Visibility
    pub visibility: Visibility,
    pub(crate) body: MethodFn,
}

impl MethodDefinition {
    /// Create a public `void` method with no parameters yet
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Object, &[Value]) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            return_type: TypeId::VOID,
            visibility: Visibility::Public,
            body: Arc::new(body),
        }
    }

    /// Add a parameter
    pub fn with_param(mut self, param: TypeId) -> Self {
        self.parameters.push(param);
        self
    }

    /// Add several parameters
    pub fn with_params(mut self, params: impl IntoIterator<Item = TypeId>) -> Self {
        self.parameters.extend(params);
        self
    }

    /// Set return type
    pub fn returns(mut self, return_type: TypeId) -> Self {
        self.return_type = return_type;
        self
    }

    /// Mark as private (invisible to resolution)
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }
}

/// Complete definition of a type to register
#[derive(Clone)]
pub struct TypeBuilder {
    pub(crate) name: String,
    pub(crate) namespace: String,
    pub(crate) kind: TypeKind,
    pub(crate) is_abstract: bool,
    pub(crate) superclass: Option<TypeId>,
    pub(crate) interfaces: Vec<TypeId>,
    pub(crate) constructors: Vec<ConstructorDefinition>,
    pub(crate) methods: Vec<MethodDefinition>,
    pub(crate) annotations: Vec<AnnotationRecord>,
}

impl TypeBuilder {
    fn new(namespace: &str, name: &str, kind: TypeKind) -> Self {
        Self {
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind,
            is_abstract: false,
            superclass: None,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Start a class definition; it extends `core.Object` unless
    /// [`extends`](Self::extends) says otherwise
    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(namespace, name, TypeKind::Class)
    }

    /// Start an interface definition
    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(namespace, name, TypeKind::Interface)
    }

    /// Start an annotation type definition
    pub fn annotation(namespace: &str, name: &str) -> Self {
        Self::new(namespace, name, TypeKind::Annotation)
    }

    /// Set the superclass
    pub fn extends(mut self, superclass: TypeId) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Add an implemented (or, for interfaces, extended) interface
    pub fn implements(mut self, interface: TypeId) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Mark the class abstract
    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Attach an annotation
    pub fn annotate(mut self, annotation: AnnotationRecord) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a constructor
    pub fn add_constructor(mut self, constructor: ConstructorDefinition) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Add a method
    pub fn add_method(mut self, method: MethodDefinition) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name including the namespace
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}
