use crate::binary::{find_executable, SearchPath};
use crate::error::MoldError;
use crate::runner::Runner;
use log::info;
use std::collections::HashMap;

/// An in-process command.
pub trait Handler {
    fn execute(&self, args: &[String]) -> anyhow::Result<()>;
}

/// Adapts a closure into a [`Handler`].
pub struct HandlerFn<F>(pub F);

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&[String]) -> anyhow::Result<()>,
{
    fn execute(&self, args: &[String]) -> anyhow::Result<()> {
        (self.0)(args)
    }
}

/// What the registry falls back to when no handler owns a name.
pub trait SubcommandDelegate {
    fn execute(&self, name: &str, args: &[String]) -> Result<(), MoldError>;
}

/// Collects handlers during start-up. Building it freezes the set.
#[derive(Default)]
pub struct RegistryBuilder {
    handlers: HashMap<String, Box<dyn Handler>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(mut self, name: &str, handler: impl Handler + 'static) -> Self {
        self.handlers.insert(name.to_string(), Box::new(handler));
        self
    }

    pub fn register_fn<F>(self, name: &str, f: F) -> Self
    where
        F: Fn(&[String]) -> anyhow::Result<()> + 'static,
    {
        self.register(name, HandlerFn(f))
    }

    pub fn build(self, delegate: Option<Box<dyn SubcommandDelegate>>) -> Registry {
        Registry {
            handlers: self.handlers,
            delegate,
        }
    }
}

pub struct Registry {
    handlers: HashMap<String, Box<dyn Handler>>,
    delegate: Option<Box<dyn SubcommandDelegate>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&dyn Handler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    /// Runs the handler registered for `name`, otherwise hands the call to
    /// the delegate. With neither, the name is unknown.
    pub fn execute(&self, name: &str, args: &[String]) -> Result<(), MoldError> {
        if let Some(handler) = self.get(name) {
            info!("Executing command: {}", name);
            return handler.execute(args).map_err(|cause| MoldError::Handler {
                name: name.to_string(),
                cause,
            });
        }

        match &self.delegate {
            Some(delegate) => delegate.execute(name, args),
            None => Err(MoldError::CommandNotFound {
                name: name.to_string(),
            }),
        }
    }
}

/// Resolves a name to an `mm-*` binary and runs it.
pub struct SubcommandExecutor {
    fallback_dir: String,
    search_path: SearchPath,
    runner: Runner,
}

impl SubcommandExecutor {
    pub fn new(fallback_dir: impl Into<String>, search_path: SearchPath, runner: Runner) -> Self {
        Self {
            fallback_dir: fallback_dir.into(),
            search_path,
            runner,
        }
    }
}

impl SubcommandDelegate for SubcommandExecutor {
    fn execute(&self, name: &str, args: &[String]) -> Result<(), MoldError> {
        let path = find_executable(name, &self.fallback_dir, &self.search_path)?;
        info!("Executing subcommand '{}' via {}", name, path.display());
        self.runner.execute(&path, args)
    }
}
