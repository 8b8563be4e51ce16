use crate::core::builder::errors::ParseError;
use crate::core::components::module::{Module, ModuleKind, BROADCASTER};
use crate::core::graph::ModuleGraph;
use crate::core::types::ModuleId;
use log::info;
use std::collections::HashMap;

/// Imperative API for assembling a module graph.
///
/// Declarations are collected in order; the first invalid one is kept and
/// returned from `build`, so chained calls never need intermediate `?`.
pub struct GraphBuilder {
    /// Declared modules in declaration order
    modules: Vec<Module>,
    /// Module name -> 1-based declaration position
    declared: HashMap<ModuleId, usize>,
    /// First error seen by a chained declaration
    error: Option<ParseError>,
}

impl GraphBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
            declared: HashMap::new(),
            error: None,
        }
    }

    /// Declare the broadcaster and its destinations
    pub fn broadcaster(self, destinations: &[&str]) -> Self {
        self.chain(BROADCASTER, ModuleKind::Broadcaster, destinations)
    }

    /// Declare a toggle module
    pub fn toggle(self, name: &str, destinations: &[&str]) -> Self {
        self.chain(name, ModuleKind::Toggle, destinations)
    }

    /// Declare a detector module
    pub fn detector(self, name: &str, destinations: &[&str]) -> Self {
        self.chain(name, ModuleKind::Detector, destinations)
    }

    fn chain(mut self, name: &str, kind: ModuleKind, destinations: &[&str]) -> Self {
        if self.error.is_none() {
            let position = self.modules.len() + 1;
            let module = Module::new(
                ModuleId::from(name),
                kind,
                destinations.iter().map(|d| ModuleId::from(*d)).collect(),
            );
            if let Err(err) = self.declare(position, module) {
                self.error = Some(err);
            }
        }
        self
    }

    /// Add one declaration found at `position` (1-based line or index)
    pub fn declare(&mut self, position: usize, module: Module) -> Result<(), ParseError> {
        // Sinks are implicit and can't be declared
        if module.kind == ModuleKind::Sink {
            return Err(ParseError::UnknownKind {
                line: position,
                name: module.id.to_string(),
            });
        }
        if module.id.as_str().is_empty() {
            return Err(ParseError::EmptyName { line: position });
        }
        if module.destinations.iter().any(|d| d.as_str().is_empty()) {
            return Err(ParseError::EmptyDestination { line: position });
        }
        if self.declared.contains_key(module.id.as_str()) {
            return Err(ParseError::DuplicateModule {
                line: position,
                name: module.id.to_string(),
            });
        }

        self.declared.insert(module.id.clone(), position);
        self.modules.push(module);
        Ok(())
    }

    /// Number of declarations accepted so far
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Finish the graph, discovering every module's inputs
    pub fn build(self) -> Result<ModuleGraph, ParseError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let graph = ModuleGraph::from_modules(self.modules);
        info!(
            "Built pulse network with {} modules and {} implicit sinks",
            graph.len(),
            graph.sinks().len()
        );
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
