//! Command containers
//!
//! A container turns a [`CommandContract`] into a runnable command. The
//! reflective container builds a fresh instance per call through the object
//! factory and has no naming registry.

use std::sync::Arc;

use reflet_engine::reflect::factory;
use reflet_engine::TypeRegistry;

use crate::command::{command_of, Command, CommandContract};
use crate::error::{CommandError, CommandResult};

/// Resolves command contracts to command instances
pub trait CommandContainer {
    /// Resolve the implementation of `contract`
    fn resolve<P: 'static>(&self, contract: CommandContract<P>) -> CommandResult<Arc<dyn Command<P>>>;

    /// Resolve the implementation of `contract` registered under `name`
    fn resolve_named<P: 'static>(
        &self,
        contract: CommandContract<P>,
        name: &str,
    ) -> CommandResult<Arc<dyn Command<P>>>;
}

/// Container constructing commands with their nullary constructor
#[derive(Debug, Clone)]
pub struct ReflectiveCommandContainer {
    registry: Arc<TypeRegistry>,
}

impl ReflectiveCommandContainer {
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }
}

impl CommandContainer for ReflectiveCommandContainer {
    fn resolve<P: 'static>(&self, contract: CommandContract<P>) -> CommandResult<Arc<dyn Command<P>>> {
        let ty = contract.type_id();
        let object = factory::create(&self.registry, ty, &[])?;
        command_of::<P>(&object).ok_or_else(|| {
            CommandError::NotACommand(format!(
                "{} does not produce a command for {}",
                self.registry.name_of(ty),
                std::any::type_name::<P>()
            ))
        })
    }

    fn resolve_named<P: 'static>(
        &self,
        _contract: CommandContract<P>,
        _name: &str,
    ) -> CommandResult<Arc<dyn Command<P>>> {
        Err(CommandError::UnsupportedOperation(
            "The default command container does not support resolving commands by name".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::register_command;
    use reflet_engine::{ConstructorDefinition, TypeBuilder};

    #[derive(Default)]
    struct Noop;

    impl Command<()> for Noop {
        fn execute(&self, _: ()) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn container() -> (ReflectiveCommandContainer, CommandContract<()>, CommandContract<()>) {
        let mut registry = TypeRegistry::new();
        let noop = register_command::<(), Noop>(&mut registry, TypeBuilder::class("app", "Noop")).unwrap();
        let plain = registry
            .register(
                TypeBuilder::class("app", "Plain").add_constructor(ConstructorDefinition::new(|_| Ok(()))),
            )
            .unwrap();
        (
            ReflectiveCommandContainer::new(Arc::new(registry)),
            noop,
            CommandContract::new(plain),
        )
    }

    #[test]
    fn test_resolve_builds_fresh_instances() {
        let (container, noop, _) = container();
        let a = container.resolve(noop).unwrap();
        let b = container.resolve(noop).unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        a.execute(()).unwrap();
    }

    #[test]
    fn test_resolve_non_command() {
        let (container, _, plain) = container();
        match container.resolve(plain) {
            Err(CommandError::NotACommand(message)) => assert!(message.contains("app.Plain")),
            other => panic!("Expected NotACommand, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_resolve_type_without_constructor_fails_in_factory() {
        let (container, _, _) = container();
        let string = CommandContract::<()>::new(reflet_engine::TypeId::STRING);
        assert!(matches!(container.resolve(string), Err(CommandError::Reflect(_))));
    }

    #[test]
    fn test_resolve_named_is_unsupported() {
        let (container, noop, _) = container();
        assert!(matches!(
            container.resolve_named(noop, "quiet"),
            Err(CommandError::UnsupportedOperation(_))
        ));
    }
}
