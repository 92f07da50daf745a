//! Runtime values handled by the reflection engine
//!
//! Arguments passed to constructors and methods are [`Value`]s. A primitive
//! can travel either unboxed ([`Value::Primitive`]) or boxed
//! ([`Value::Boxed`]); the classifier treats both forms as the same
//! primitive type so that argument lists match signatures declared with
//! primitive parameters.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::reflect::TypeId;

/// The eight primitive kinds known to the type system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl PrimitiveKind {
    /// All primitive kinds, in builtin registration order
    pub const ALL: [PrimitiveKind; 8] = [
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
    ];

    /// Name of the primitive type (`int`, `double`, ...)
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
        }
    }

    /// Simple name of the wrapper class boxing this primitive
    pub fn wrapper_name(self) -> &'static str {
        match self {
            PrimitiveKind::Boolean => "Boolean",
            PrimitiveKind::Byte => "Byte",
            PrimitiveKind::Char => "Character",
            PrimitiveKind::Short => "Short",
            PrimitiveKind::Int => "Integer",
            PrimitiveKind::Long => "Long",
            PrimitiveKind::Float => "Float",
            PrimitiveKind::Double => "Double",
        }
    }

    /// Look up a primitive kind by its primitive name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Look up a primitive kind by its wrapper class name
    pub fn from_wrapper_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.wrapper_name() == name)
    }

    /// Builtin type id of this primitive
    pub fn type_id(self) -> TypeId {
        TypeId::from_index(self as usize)
    }

    /// Builtin type id of the wrapper class boxing this primitive
    pub fn wrapper_type_id(self) -> TypeId {
        TypeId::from_index(TypeId::FIRST_WRAPPER.index() + self as usize)
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A primitive payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Boolean(bool),
    Byte(i8),
    Char(char),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

impl Primitive {
    /// Kind of this primitive
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Boolean(_) => PrimitiveKind::Boolean,
            Primitive::Byte(_) => PrimitiveKind::Byte,
            Primitive::Char(_) => PrimitiveKind::Char,
            Primitive::Short(_) => PrimitiveKind::Short,
            Primitive::Int(_) => PrimitiveKind::Int,
            Primitive::Long(_) => PrimitiveKind::Long,
            Primitive::Float(_) => PrimitiveKind::Float,
            Primitive::Double(_) => PrimitiveKind::Double,
        }
    }
}

/// An instance created by the object factory (or by the host).
///
/// The state is shared: cloning an `Object` yields another handle to the
/// same instance. Equality is instance identity.
#[derive(Clone)]
pub struct Object {
    class: TypeId,
    state: Arc<dyn Any + Send + Sync>,
}

impl Object {
    /// Wrap host state as an instance of `class`
    pub fn new<T: Any + Send + Sync>(class: TypeId, state: T) -> Self {
        Self {
            class,
            state: Arc::new(state),
        }
    }

    pub(crate) fn from_boxed(class: TypeId, state: Box<dyn Any + Send + Sync>) -> Self {
        Self {
            class,
            state: Arc::from(state),
        }
    }

    /// Runtime type of this instance
    pub fn class(&self) -> TypeId {
        self.class
    }

    /// Borrow the instance state as `T`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.state.downcast_ref::<T>()
    }

    /// Check whether two handles refer to the same instance
    pub fn same_instance(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.same_instance(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("class", &self.class)
            .field("handles", &Arc::strong_count(&self.state))
            .finish()
    }
}

/// A runtime value passed as an argument or returned from a method
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absent value
    Null,
    /// An unboxed primitive
    Primitive(Primitive),
    /// A primitive wrapped in its wrapper class
    Boxed(Primitive),
    /// A string
    Str(String),
    /// An object instance
    Object(Object),
}

impl Value {
    pub fn bool(value: bool) -> Self {
        Value::Primitive(Primitive::Boolean(value))
    }

    pub fn int(value: i32) -> Self {
        Value::Primitive(Primitive::Int(value))
    }

    pub fn long(value: i64) -> Self {
        Value::Primitive(Primitive::Long(value))
    }

    pub fn double(value: f64) -> Self {
        Value::Primitive(Primitive::Double(value))
    }

    pub fn str(value: impl Into<String>) -> Self {
        Value::Str(value.into())
    }

    /// Box a primitive
    pub fn boxed(value: Primitive) -> Self {
        Value::Boxed(value)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// The primitive payload, whether boxed or not
    pub fn as_primitive(&self) -> Option<Primitive> {
        match self {
            Value::Primitive(p) | Value::Boxed(p) => Some(*p),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.as_primitive()? {
            Primitive::Boolean(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self.as_primitive()? {
            Primitive::Int(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self.as_primitive()? {
            Primitive::Long(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self.as_primitive()? {
            Primitive::Double(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }
}

impl From<Primitive> for Value {
    fn from(value: Primitive) -> Self {
        Value::Primitive(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::int(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::long(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}
