#![deny(missing_docs)]
//! Standardized initialization shared by every lab binary.
//! Deployed lambdas log flat JSON for CloudWatch; local runs get a readable layout.

mod env;

pub use env::{ENVIRONMENT_VAR, Environment, EnvironmentErr, UnknownValue};

use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};
use tracing_tree::HierarchicalLayer;

/// Logging setup for a lab binary, consumed by [LabEntrypoint::init]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabEntrypoint {
    env: Environment,
    tree_indent: Option<usize>,
}

/// Proof that [LabEntrypoint::init] ran
#[derive(Debug)]
pub struct InitializedEntrypoint(());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogLayout {
    Json,
    Pretty,
    Tree(usize),
}

impl Default for LabEntrypoint {
    fn default() -> Self {
        dotenv::dotenv().ok();
        Self::new(Environment::new_or_prod())
    }
}

impl LabEntrypoint {
    /// Entrypoint for an explicit [Environment], ignoring `ENVIRONMENT`
    pub fn new(env: Environment) -> Self {
        Self {
            env,
            tree_indent: None,
        }
    }

    /// The environment this entrypoint initializes for
    pub fn environment(&self) -> Environment {
        self.env
    }

    /// Render spans as an indented tree with the given indent width.
    /// Deployed environments keep logging JSON regardless.
    pub fn with_tree_tracing(mut self, indent: Option<usize>) -> Self {
        self.tree_indent = indent;
        self
    }

    fn layout(&self) -> LogLayout {
        match (self.env.is_deployed(), self.tree_indent) {
            (true, _) => LogLayout::Json,
            (false, Some(indent)) => LogLayout::Tree(indent),
            (false, None) => LogLayout::Pretty,
        }
    }

    /// Loads `.env`, routes panics through tracing and installs the global subscriber
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.layout() {
            LogLayout::Json => tracing_subscriber::fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_current_span(true)
                .with_span_list(false)
                .flatten_event(true)
                .init(),
            LogLayout::Pretty => tracing_subscriber::fmt()
                .pretty()
                .with_env_filter(EnvFilter::from_default_env())
                .with_file(true)
                .with_line_number(true)
                .init(),
            LogLayout::Tree(indent) => {
                let subscriber = Registry::default()
                    .with(EnvFilter::from_default_env())
                    .with(HierarchicalLayer::new(indent).with_targets(true));
                if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
                    eprintln!("tracing subscriber already installed: {e}");
                }
            }
        }

        tracing::trace!(environment = %self.env, "initialized tracing");

        InitializedEntrypoint(())
    }
}
