//! Commands and command contracts
//!
//! A command type is registered like any other class; its nullary
//! constructor stores the command behind a type-erased slot so a container
//! can recover it from the constructed [`Object`] as `Arc<dyn Command<P>>`.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use reflet_engine::{ConstructorDefinition, Object, ReflectResult, TypeBuilder, TypeId, TypeRegistry};

/// A unit of work taking a parameter of type `P`
pub trait Command<P>: Send + Sync {
    fn execute(&self, param: P) -> anyhow::Result<()>;
}

/// Registered command type accepting parameters of type `P`
pub struct CommandContract<P> {
    ty: TypeId,
    _param: PhantomData<fn(P)>,
}

impl<P> CommandContract<P> {
    /// Contract for an already registered type
    ///
    /// Nothing is checked here; resolving a contract whose type does not
    /// produce a `Command<P>` fails with `CommandError::NotACommand`.
    pub fn new(ty: TypeId) -> Self {
        Self {
            ty,
            _param: PhantomData,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.ty
    }
}

impl<P> Clone for CommandContract<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for CommandContract<P> {}

impl<P> PartialEq for CommandContract<P> {
    fn eq(&self, other: &Self) -> bool {
        self.ty == other.ty
    }
}

impl<P> Eq for CommandContract<P> {}

impl<P> fmt::Debug for CommandContract<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CommandContract").field(&self.ty).finish()
    }
}

/// Instance state of a registered command type
struct CommandSlot<P>(Arc<dyn Command<P>>);

/// Register `C` as a command type built from `builder`
///
/// A public nullary constructor producing `C::default()` is added to the
/// builder before registration.
pub fn register_command<P, C>(
    registry: &mut TypeRegistry,
    builder: TypeBuilder,
) -> ReflectResult<CommandContract<P>>
where
    P: 'static,
    C: Command<P> + Default + 'static,
{
    let builder = builder.add_constructor(ConstructorDefinition::new(|_| {
        let command: Arc<dyn Command<P>> = Arc::new(C::default());
        Ok(CommandSlot(command))
    }));
    let ty = registry.register(builder)?;
    Ok(CommandContract::new(ty))
}

/// Recover the command stored in an instance of a registered command type
pub fn command_of<P: 'static>(object: &Object) -> Option<Arc<dyn Command<P>>> {
    object
        .downcast_ref::<CommandSlot<P>>()
        .map(|slot| Arc::clone(&slot.0))
}
