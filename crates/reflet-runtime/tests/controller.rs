//! Integration tests for command dispatch
//!
//! Covers the reflective container end to end and a name-aware container
//! supplied by the caller.

use std::sync::Arc;

use parking_lot::Mutex;
use reflet_engine::{TypeBuilder, TypeRegistry};
use reflet_runtime::{
    register_command, ApplicationController, Command, CommandContainer, CommandContract,
    CommandError, CommandResult, Controller, ReflectiveCommandContainer,
};

static VISITED: Mutex<Vec<String>> = parking_lot::const_mutex(Vec::new());

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn visited(route: &str) -> bool {
    VISITED.lock().iter().any(|r| r == route)
}

#[derive(Default)]
struct Navigate;

impl Command<String> for Navigate {
    fn execute(&self, route: String) -> anyhow::Result<()> {
        VISITED.lock().push(route);
        Ok(())
    }
}

#[derive(Default)]
struct Explode;

impl Command<String> for Explode {
    fn execute(&self, route: String) -> anyhow::Result<()> {
        anyhow::bail!("cannot open {}", route)
    }
}

struct App {
    controller: Controller<ReflectiveCommandContainer>,
    navigate: CommandContract<String>,
    explode: CommandContract<String>,
}

fn app() -> App {
    init_tracing();
    let mut registry = TypeRegistry::new();
    let navigate =
        register_command::<String, Navigate>(&mut registry, TypeBuilder::class("app.nav", "Navigate"))
            .unwrap();
    let explode =
        register_command::<String, Explode>(&mut registry, TypeBuilder::class("app.nav", "Explode"))
            .unwrap();
    App {
        controller: Controller::new(ReflectiveCommandContainer::new(Arc::new(registry))),
        navigate,
        explode,
    }
}

// ============================================================================
// Reflective container
// ============================================================================

#[test]
fn test_execute_runs_resolved_command() {
    let app = app();
    app.controller
        .execute(app.navigate, "/settings".to_string())
        .unwrap();
    assert!(visited("/settings"));
}

#[test]
fn test_execute_named_is_unsupported_by_default() {
    let app = app();
    let err = app
        .controller
        .execute_named(app.navigate, "modal", "/never".to_string())
        .unwrap_err();
    assert!(matches!(err, CommandError::UnsupportedOperation(_)));
    assert!(!visited("/never"));
}

#[test]
fn test_command_failure_propagates_unmodified() {
    let app = app();
    let err = app
        .controller
        .execute(app.explode, "/boom".to_string())
        .unwrap_err();
    match err {
        CommandError::Execution(inner) => assert_eq!(inner.to_string(), "cannot open /boom"),
        other => panic!("Expected Execution, got {:?}", other),
    }
}

#[test]
fn test_execute_command_skips_the_container() {
    let app = app();
    let command: &dyn Command<String> = &Navigate;
    app.controller
        .execute_command(command, "/direct".to_string())
        .unwrap();
    assert!(visited("/direct"));
}

/// Dispatch written against the controller seam only
fn open_routes<A: ApplicationController>(
    controller: &A,
    contract: CommandContract<String>,
    routes: &[&str],
) -> CommandResult<()> {
    routes
        .iter()
        .try_for_each(|route| controller.execute(contract, route.to_string()))
}

#[test]
fn test_controller_is_usable_through_the_trait() {
    let app = app();
    open_routes(&app.controller, app.navigate, &["/trait/a", "/trait/b"]).unwrap();
    assert!(visited("/trait/a"));
    assert!(visited("/trait/b"));

    let err = open_routes(&app.controller, app.explode, &["/trait/c"]).unwrap_err();
    assert!(matches!(err, CommandError::Execution(_)));
}

// ============================================================================
// Name-aware container
// ============================================================================

/// Counts executions per registered name
struct Counter {
    hits: Arc<Mutex<Vec<(String, u32)>>>,
    name: String,
}

impl Command<u32> for Counter {
    fn execute(&self, amount: u32) -> anyhow::Result<()> {
        self.hits.lock().push((self.name.clone(), amount));
        Ok(())
    }
}

/// Container holding pre-built instances keyed by name
struct NamedContainer {
    hits: Arc<Mutex<Vec<(String, u32)>>>,
    names: Vec<&'static str>,
}

impl CommandContainer for NamedContainer {
    fn resolve<P: 'static>(&self, contract: CommandContract<P>) -> CommandResult<Arc<dyn Command<P>>> {
        self.resolve_named(contract, "default")
    }

    fn resolve_named<P: 'static>(
        &self,
        _contract: CommandContract<P>,
        name: &str,
    ) -> CommandResult<Arc<dyn Command<P>>> {
        if !self.names.iter().any(|known| *known == name) {
            return Err(CommandError::NotACommand(format!("no command named {}", name)));
        }
        let command: Arc<dyn Command<u32>> = Arc::new(Counter {
            hits: self.hits.clone(),
            name: name.to_string(),
        });
        let erased: Box<dyn std::any::Any> = Box::new(command);
        erased
            .downcast::<Arc<dyn Command<P>>>()
            .map(|command| *command)
            .map_err(|_| CommandError::NotACommand("counters take u32".to_string()))
    }
}

#[test]
fn test_custom_container_resolves_by_name() {
    init_tracing();
    let hits = Arc::new(Mutex::new(Vec::new()));
    let controller = Controller::new(NamedContainer {
        hits: hits.clone(),
        names: vec!["default", "bulk"],
    });
    let contract = CommandContract::<u32>::new(reflet_engine::TypeId::OBJECT);

    controller.execute(contract, 1).unwrap();
    controller.execute_named(contract, "bulk", 10).unwrap();
    assert!(matches!(
        controller.execute_named(contract, "missing", 5),
        Err(CommandError::NotACommand(_))
    ));

    assert_eq!(
        *hits.lock(),
        vec![("default".to_string(), 1), ("bulk".to_string(), 10)]
    );
}
