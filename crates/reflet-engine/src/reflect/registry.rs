//! Type Registry
//!
//! Arena of [`TypeDescriptor`]s indexed by [`TypeId`]. A fresh registry
//! already holds the builtin types, always at the same ids:
//!
//! | Ids     | Types                                           |
//! |---------|-------------------------------------------------|
//! | 0 - 7   | primitives `boolean` .. `double`                |
//! | 8       | `void`                                          |
//! | 9       | `core.Object` (root class)                      |
//! | 10      | `core.String`                                   |
//! | 11 - 18 | wrapper classes `core.Boolean` .. `core.Double` |
//!
//! Everything else is added through [`TypeRegistry::register`], which
//! validates the definition. A superclass has to be registered before its
//! subclasses, so the class hierarchy is acyclic by construction.

use rustc_hash::FxHashMap;

use super::type_builder::TypeBuilder;
use super::type_info::{ConstructorInfo, MethodInfo, TypeDescriptor, TypeId, TypeKind};
use crate::error::{ReflectError, ReflectResult};
use crate::value::PrimitiveKind;

/// Namespace of the builtin reference types
pub const CORE_NAMESPACE: &str = "core";

/// Registry of type descriptors
#[derive(Debug)]
pub struct TypeRegistry {
    /// Descriptors indexed by type id
    types: Vec<TypeDescriptor>,
    /// Qualified name to id mapping
    name_to_id: FxHashMap<String, TypeId>,
}

impl TypeRegistry {
    /// Create a registry holding only the builtin types
    pub fn new() -> Self {
        let mut registry = Self {
            types: Vec::with_capacity(TypeId::BUILTIN_COUNT),
            name_to_id: FxHashMap::default(),
        };
        registry.register_builtins();
        registry
    }

    fn register_builtins(&mut self) {
        for kind in PrimitiveKind::ALL {
            self.push_builtin(kind.name(), "", TypeKind::Primitive(kind), None, None);
        }
        self.push_builtin("void", "", TypeKind::Void, None, None);
        self.push_builtin("Object", CORE_NAMESPACE, TypeKind::Class, None, None);
        self.push_builtin("String", CORE_NAMESPACE, TypeKind::Class, Some(TypeId::OBJECT), None);
        for kind in PrimitiveKind::ALL {
            self.push_builtin(
                kind.wrapper_name(),
                CORE_NAMESPACE,
                TypeKind::Class,
                Some(TypeId::OBJECT),
                Some(kind),
            );
        }
        debug_assert_eq!(self.types.len(), TypeId::BUILTIN_COUNT);
    }

    fn push_builtin(
        &mut self,
        name: &str,
        namespace: &str,
        kind: TypeKind,
        superclass: Option<TypeId>,
        boxes: Option<PrimitiveKind>,
    ) {
        let id = TypeId::from_index(self.types.len());
        let descriptor = TypeDescriptor {
            id,
            name: name.to_string(),
            namespace: namespace.to_string(),
            kind,
            is_abstract: false,
            superclass,
            interfaces: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
            boxes,
        };
        self.name_to_id.insert(descriptor.qualified_name(), id);
        self.types.push(descriptor);
    }

    /// Register a new type
    ///
    /// Fails when the qualified name is taken, or when the definition refers
    /// to types that are unknown or of the wrong kind.
    pub fn register(&mut self, builder: TypeBuilder) -> ReflectResult<TypeId> {
        let qualified_name = builder.qualified_name();
        if self.name_to_id.contains_key(&qualified_name) {
            return Err(ReflectError::Registration(format!(
                "Type already registered: {}",
                qualified_name
            )));
        }
        self.validate(&qualified_name, &builder)?;

        let id = TypeId::from_index(self.types.len());
        let superclass = match builder.kind {
            TypeKind::Class => Some(builder.superclass.unwrap_or(TypeId::OBJECT)),
            _ => None,
        };

        let constructors = builder
            .constructors
            .into_iter()
            .map(|def| ConstructorInfo {
                declaring_type: id,
                parameters: def.parameters,
                visibility: def.visibility,
                body: def.body,
            })
            .collect();
        let methods = builder
            .methods
            .into_iter()
            .map(|def| MethodInfo {
                name: def.name,
                declaring_type: id,
                parameters: def.parameters,
                return_type: def.return_type,
                visibility: def.visibility,
                body: def.body,
            })
            .collect();

        let descriptor = TypeDescriptor {
            id,
            name: builder.name,
            namespace: builder.namespace,
            kind: builder.kind,
            is_abstract: builder.is_abstract,
            superclass,
            interfaces: builder.interfaces,
            constructors,
            methods,
            annotations: builder.annotations,
            boxes: None,
        };

        tracing::debug!(type_name = %qualified_name, id = %id, "registered type");
        self.name_to_id.insert(qualified_name, id);
        self.types.push(descriptor);
        Ok(id)
    }

    fn validate(&self, qualified_name: &str, builder: &TypeBuilder) -> ReflectResult<()> {
        let reject = |reason: String| {
            Err(ReflectError::Registration(format!("{}: {}", qualified_name, reason)))
        };

        match builder.kind {
            TypeKind::Class => {}
            TypeKind::Interface | TypeKind::Annotation => {
                if builder.superclass.is_some() {
                    return reject("only classes can have a superclass".to_string());
                }
                if !builder.constructors.is_empty() {
                    return reject("only classes can declare constructors".to_string());
                }
            }
            TypeKind::Primitive(_) | TypeKind::Void => {
                return reject("primitive types are builtin".to_string());
            }
        }

        if let Some(superclass) = builder.superclass {
            match self.get(superclass) {
                Some(parent) if parent.is_class() && parent.boxes.is_none() => {}
                Some(parent) => {
                    return reject(format!("{} cannot be extended", parent.qualified_name()))
                }
                None => return reject(format!("unknown superclass {}", superclass)),
            }
        }

        for &interface in &builder.interfaces {
            match self.get(interface) {
                Some(declared) if declared.is_interface() => {}
                Some(declared) => {
                    return reject(format!("{} is not an interface", declared.qualified_name()))
                }
                None => return reject(format!("unknown interface {}", interface)),
            }
        }

        for annotation in &builder.annotations {
            match self.get(annotation.kind) {
                Some(declared) if declared.is_annotation() => {}
                Some(declared) => {
                    return reject(format!("{} is not an annotation type", declared.qualified_name()))
                }
                None => return reject(format!("unknown annotation type {}", annotation.kind)),
            }
        }

        let parameters = builder
            .constructors
            .iter()
            .flat_map(|ctor| ctor.parameters.iter())
            .chain(builder.methods.iter().flat_map(|method| method.parameters.iter()));
        for &param in parameters {
            match self.get(param) {
                Some(declared) if declared.kind != TypeKind::Void => {}
                Some(_) => return reject("void is not a parameter type".to_string()),
                None => return reject(format!("unknown parameter type {}", param)),
            }
        }

        for method in &builder.methods {
            if self.get(method.return_type).is_none() {
                return reject(format!(
                    "unknown return type {} of {}",
                    method.return_type, method.name
                ));
            }
        }

        Ok(())
    }

    /// Get a descriptor by id
    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    /// Get a descriptor by id, failing with a resolution error when unknown
    pub fn descriptor(&self, id: TypeId) -> ReflectResult<&TypeDescriptor> {
        self.get(id)
            .ok_or_else(|| ReflectError::resolution(format!("Unknown type {}", id)))
    }

    /// Get a descriptor by qualified name
    pub fn by_name(&self, qualified_name: &str) -> Option<&TypeDescriptor> {
        self.name_to_id
            .get(qualified_name)
            .and_then(|id| self.get(*id))
    }

    /// Get a type id by qualified name
    pub fn id_of(&self, qualified_name: &str) -> Option<TypeId> {
        self.name_to_id.get(qualified_name).copied()
    }

    /// Qualified name of a type, for messages
    pub fn name_of(&self, id: TypeId) -> String {
        self.get(id)
            .map(TypeDescriptor::qualified_name)
            .unwrap_or_else(|| format!("<unknown {}>", id))
    }

    /// Builtin id of a primitive type
    pub fn primitive(&self, kind: PrimitiveKind) -> TypeId {
        kind.type_id()
    }

    /// Iterate over all descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    /// Number of registered types, builtins included
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
