//! Reflet Runtime
//!
//! Command dispatch on top of the reflet engine: command types are
//! registered with a type registry, resolved by a [`CommandContainer`] and
//! run through the [`ApplicationController`] seam, implemented by
//! [`Controller`].

pub mod command;
pub mod container;
pub mod controller;
pub mod error;

pub use command::{command_of, register_command, Command, CommandContract};
pub use container::{CommandContainer, ReflectiveCommandContainer};
pub use controller::{ApplicationController, Controller};
pub use error::{CommandError, CommandResult};
