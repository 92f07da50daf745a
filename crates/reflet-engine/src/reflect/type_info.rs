//! Type and member descriptors
//!
//! A [`TypeDescriptor`] is the registry's record of one type: its kind,
//! namespace, supertypes, declared members and annotations. Descriptors are
//! immutable once registered; the engine only ever reads them.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::value::{Object, PrimitiveKind, Value};

/// Identity of a registered type (index into the registry arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(u32);

impl TypeId {
    /// `void`, the return type of methods that produce nothing
    pub const VOID: TypeId = TypeId(8);
    /// `core.Object`, root of the class hierarchy
    pub const OBJECT: TypeId = TypeId(9);
    /// `core.String`
    pub const STRING: TypeId = TypeId(10);
    /// First of the eight wrapper classes (`core.Boolean` .. `core.Double`)
    pub const FIRST_WRAPPER: TypeId = TypeId(11);
    /// Number of builtin types pre-registered in every registry
    pub const BUILTIN_COUNT: usize = 19;

    pub(crate) fn from_index(index: usize) -> Self {
        TypeId(index as u32)
    }

    /// Position in the registry arena
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this id names a builtin type
    pub fn is_builtin(self) -> bool {
        self.index() < Self::BUILTIN_COUNT
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type kind enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Primitive types (int, boolean, ...)
    Primitive(PrimitiveKind),
    /// The `void` sentinel
    Void,
    /// Class types
    Class,
    /// Interface types
    Interface,
    /// Annotation types
    Annotation,
}

/// Member visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

/// Constructor body: builds instance state from the argument list
pub type ConstructorFn =
    Arc<dyn Fn(&[Value]) -> anyhow::Result<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// Method body: runs against a target instance with the argument list
pub type MethodFn = Arc<dyn Fn(&Object, &[Value]) -> anyhow::Result<Value> + Send + Sync>;

/// Constructor or named method
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Constructor,
    Method(String),
}

/// Identity of a member: owner, name (or constructor marker) and the
/// ordered formal parameter types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberDescriptor {
    pub owner: TypeId,
    pub kind: MemberKind,
    pub parameters: Vec<TypeId>,
}

/// Constructor information for reflection
#[derive(Clone)]
pub struct ConstructorInfo {
    /// Declaring type
    pub declaring_type: TypeId,
    /// Formal parameter types in order
    pub parameters: Vec<TypeId>,
    /// Visibility
    pub visibility: Visibility,
    pub(crate) body: ConstructorFn,
}

impl ConstructorInfo {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn descriptor(&self) -> MemberDescriptor {
        MemberDescriptor {
            owner: self.declaring_type,
            kind: MemberKind::Constructor,
            parameters: self.parameters.clone(),
        }
    }
}

impl fmt::Debug for ConstructorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorInfo")
            .field("declaring_type", &self.declaring_type)
            .field("parameters", &self.parameters)
            .field("visibility", &self.visibility)
            .finish()
    }
}

/// Method information for reflection
#[derive(Clone)]
pub struct MethodInfo {
    /// Method name
    pub name: String,
    /// Declaring type
    pub declaring_type: TypeId,
    /// Formal parameter types in order
    pub parameters: Vec<TypeId>,
    /// Return type (`TypeId::VOID` when nothing is returned)
    pub return_type: TypeId,
    /// Visibility
    pub visibility: Visibility,
    pub(crate) body: MethodFn,
}

impl MethodInfo {
    pub fn arity(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn descriptor(&self) -> MemberDescriptor {
        MemberDescriptor {
            owner: self.declaring_type,
            kind: MemberKind::Method(self.name.clone()),
            parameters: self.parameters.clone(),
        }
    }
}

impl fmt::Debug for MethodInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodInfo")
            .field("name", &self.name)
            .field("declaring_type", &self.declaring_type)
            .field("parameters", &self.parameters)
            .field("return_type", &self.return_type)
            .field("visibility", &self.visibility)
            .finish()
    }
}

/// An annotation attached to a type at registration time
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    /// Annotation type
    pub kind: TypeId,
    /// Attribute values, in declaration order
    pub attributes: Vec<(String, Value)>,
}

impl AnnotationRecord {
    pub fn new(kind: TypeId) -> Self {
        Self {
            kind,
            attributes: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Get an attribute by name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value)
    }
}

/// Registry record for a single type
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    /// Type identity
    pub id: TypeId,
    /// Simple name
    pub name: String,
    /// Declaring namespace (empty for primitives)
    pub namespace: String,
    /// Type kind
    pub kind: TypeKind,
    /// Whether the class is abstract
    pub is_abstract: bool,
    /// Direct superclass (None for the root, interfaces and primitives)
    pub superclass: Option<TypeId>,
    /// Directly declared interfaces, in declaration order
    pub interfaces: Vec<TypeId>,
    /// Declared constructors, in declaration order
    pub constructors: Vec<ConstructorInfo>,
    /// Declared methods, in declaration order
    pub methods: Vec<MethodInfo>,
    /// Declared annotations
    pub annotations: Vec<AnnotationRecord>,
    /// Primitive boxed by this type, for wrapper classes
    pub boxes: Option<PrimitiveKind>,
}

impl TypeDescriptor {
    /// Name including the namespace (`app.nav.OpenScreen`)
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn is_class(&self) -> bool {
        self.kind == TypeKind::Class
    }

    pub fn is_interface(&self) -> bool {
        self.kind == TypeKind::Interface
    }

    pub fn is_annotation(&self) -> bool {
        self.kind == TypeKind::Annotation
    }

    /// Concrete classes can be instantiated; everything else cannot
    pub fn is_instantiable(&self) -> bool {
        self.is_class() && !self.is_abstract
    }

    /// Annotation of `kind` declared directly on this type
    pub fn declared_annotation(&self, kind: TypeId) -> Option<&AnnotationRecord> {
        self.annotations.iter().find(|record| record.kind == kind)
    }

    /// Declared methods named `name`, in declaration order
    pub fn declared_methods<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a MethodInfo> + 'n
    where
        'a: 'n,
    {
        self.methods.iter().filter(move |method| method.name == name)
    }
}
