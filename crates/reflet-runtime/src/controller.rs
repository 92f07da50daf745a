//! Application controller
//!
//! [`ApplicationController`] is the dispatch seam; [`Controller`] implements
//! it by resolving commands through a [`CommandContainer`] and running them.

use crate::command::{Command, CommandContract};
use crate::container::CommandContainer;
use crate::error::{CommandError, CommandResult};

/// Executes commands on behalf of an application
pub trait ApplicationController {
    /// Resolve `contract` and execute it with `param`
    fn execute<P: 'static>(&self, contract: CommandContract<P>, param: P) -> CommandResult<()>;

    /// Resolve `contract` under `name` and execute it with `param`
    fn execute_named<P: 'static>(
        &self,
        contract: CommandContract<P>,
        name: &str,
        param: P,
    ) -> CommandResult<()>;

    /// Execute an already resolved command
    fn execute_command<P>(&self, command: &dyn Command<P>, param: P) -> CommandResult<()>;
}

/// Dispatches commands resolved by a container
#[derive(Debug, Clone)]
pub struct Controller<C> {
    container: C,
}

impl<C: CommandContainer> Controller<C> {
    pub fn new(container: C) -> Self {
        Self { container }
    }

    pub fn container(&self) -> &C {
        &self.container
    }
}

impl<C: CommandContainer> ApplicationController for Controller<C> {
    fn execute<P: 'static>(&self, contract: CommandContract<P>, param: P) -> CommandResult<()> {
        let command = self.container.resolve(contract)?;
        tracing::debug!(contract = %contract.type_id(), "executing command");
        self.execute_command(&*command, param)
    }

    fn execute_named<P: 'static>(
        &self,
        contract: CommandContract<P>,
        name: &str,
        param: P,
    ) -> CommandResult<()> {
        let command = self.container.resolve_named(contract, name)?;
        tracing::debug!(contract = %contract.type_id(), name, "executing named command");
        self.execute_command(&*command, param)
    }

    fn execute_command<P>(&self, command: &dyn Command<P>, param: P) -> CommandResult<()> {
        command.execute(param).map_err(CommandError::Execution)
    }
}
