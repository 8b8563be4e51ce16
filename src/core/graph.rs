use crate::core::components::module::{Module, ModuleKind};
use crate::core::types::ModuleId;
use std::collections::{BTreeSet, HashMap};

/// Immutable topology of a pulse network.
///
/// Modules keep their declaration order. Input lists are discovered once,
/// when the graph is assembled, by scanning every destination list, so a
/// detector's full input set is known before the first pulse is sent.
#[derive(Debug, Clone)]
pub struct ModuleGraph {
    /// Declared modules in declaration order
    modules: Vec<Module>,
    /// Module name -> position in `modules`
    index: HashMap<ModuleId, usize>,
    /// Destination name -> distinct source names, in discovery order.
    /// Covers implicit sinks too.
    inputs: HashMap<ModuleId, Vec<ModuleId>>,
}

impl ModuleGraph {
    /// Assemble a graph from already validated declarations
    pub(crate) fn from_modules(modules: Vec<Module>) -> Self {
        let mut index = HashMap::with_capacity(modules.len());
        let mut inputs: HashMap<ModuleId, Vec<ModuleId>> = HashMap::new();

        for (position, module) in modules.iter().enumerate() {
            index.insert(module.id.clone(), position);
            for destination in &module.destinations {
                let sources = inputs.entry(destination.clone()).or_default();
                if !sources.contains(&module.id) {
                    sources.push(module.id.clone());
                }
            }
        }

        Self {
            modules,
            index,
            inputs,
        }
    }

    /// Get a declared module by name
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.index.get(name).map(|&position| &self.modules[position])
    }

    /// Check whether `name` is a declared module
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Kind of `name`; undeclared names are sinks
    pub fn kind_of(&self, name: &str) -> ModuleKind {
        self.module(name)
            .map(|module| module.kind)
            .unwrap_or(ModuleKind::Sink)
    }

    /// Ordered destinations of `name`; empty for sinks
    pub fn destinations(&self, name: &str) -> &[ModuleId] {
        self.module(name)
            .map(|module| module.destinations.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct modules that have `name` as a destination
    pub fn inputs_of(&self, name: &str) -> &[ModuleId] {
        self.inputs
            .get(name)
            .map(|sources| sources.as_slice())
            .unwrap_or(&[])
    }

    /// Modules feeding the direct inputs of `sink`.
    ///
    /// These are the modules whose high pulses gate the last detector in
    /// front of the sink.
    pub fn two_hop_predecessors(&self, sink: &str) -> BTreeSet<ModuleId> {
        self.inputs_of(sink)
            .iter()
            .flat_map(|predecessor| self.inputs_of(predecessor.as_str()).iter().cloned())
            .collect()
    }

    /// Names referenced as destinations but never declared, sorted
    pub fn sinks(&self) -> Vec<ModuleId> {
        let sinks: BTreeSet<&ModuleId> = self
            .modules
            .iter()
            .flat_map(|module| module.destinations.iter())
            .filter(|destination| !self.contains(destination.as_str()))
            .collect();
        sinks.into_iter().cloned().collect()
    }

    /// Declared modules in declaration order
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Declared modules of one kind, in declaration order
    pub fn modules_of_kind(&self, kind: ModuleKind) -> impl Iterator<Item = &Module> {
        self.modules.iter().filter(move |module| module.kind == kind)
    }

    /// Number of declared modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
