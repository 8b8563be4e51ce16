use crate::core::components::module::ModuleKind;
use crate::core::execution::config::SimulationConfig;
use crate::core::graph::ModuleGraph;
use crate::core::types::{ModuleId, PulseLevel};
use std::collections::HashMap;

/// Last pulse level seen from each input of a detector.
///
/// Keeps a running count of high inputs so the all-high check does not
/// rescan the map on every pulse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorMemory {
    last: HashMap<ModuleId, PulseLevel>,
    high_inputs: usize,
}

impl DetectorMemory {
    /// Memory with every input remembered as low
    pub fn new<'a>(inputs: impl IntoIterator<Item = &'a ModuleId>) -> Self {
        Self {
            last: inputs
                .into_iter()
                .map(|input| (input.clone(), PulseLevel::Low))
                .collect(),
            high_inputs: 0,
        }
    }

    fn add_input(&mut self, input: ModuleId) {
        self.last.entry(input).or_insert(PulseLevel::Low);
    }

    /// Store `level` for `source`, returning whether every input is now high.
    ///
    /// The input set is fixed at construction; a pulse from any other
    /// source leaves the memory untouched.
    pub fn remember(&mut self, source: &ModuleId, level: PulseLevel) -> bool {
        if let Some(slot) = self.last.get_mut(source) {
            if slot.is_high() {
                self.high_inputs -= 1;
            }
            if level.is_high() {
                self.high_inputs += 1;
            }
            *slot = level;
        }
        self.all_high()
    }

    /// Check whether every remembered input is high
    pub fn all_high(&self) -> bool {
        self.high_inputs == self.last.len()
    }

    /// Last level remembered for `source`
    pub fn get(&self, source: &str) -> Option<PulseLevel> {
        self.last.get(source).copied()
    }

    /// Number of inputs tracked
    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}

/// Mutable per-module memory for one simulation run.
///
/// Toggle flags and detector memories live here, keyed by module name, and
/// are passed explicitly to every press. Nothing is shared between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleState {
    toggles: HashMap<ModuleId, bool>,
    detectors: HashMap<ModuleId, DetectorMemory>,
}

impl ModuleState {
    /// Initial state for `graph`: every toggle off, every detector input low
    pub fn new(graph: &ModuleGraph) -> Self {
        let toggles = graph
            .modules_of_kind(ModuleKind::Toggle)
            .map(|module| (module.id().clone(), false))
            .collect();
        let detectors = graph
            .modules_of_kind(ModuleKind::Detector)
            .map(|module| {
                let inputs = graph.inputs_of(module.id().as_str());
                (module.id().clone(), DetectorMemory::new(inputs))
            })
            .collect();

        Self { toggles, detectors }
    }

    /// Initial state for running `graph` under `config`.
    ///
    /// When the entry module is a detector, the button is registered as one
    /// of its inputs up front.
    pub fn from_config(graph: &ModuleGraph, config: &SimulationConfig) -> Self {
        let mut state = Self::new(graph);
        if let Some(memory) = state.detectors.get_mut(config.entry_module.as_str()) {
            memory.add_input(ModuleId::from(config.button_name.as_str()));
        }
        state
    }

    /// Flip a toggle and return its new state.
    ///
    /// A toggle missing from the table starts off.
    pub fn flip(&mut self, toggle: &ModuleId) -> bool {
        let on = self.toggles.entry(toggle.clone()).or_insert(false);
        *on = !*on;
        *on
    }

    /// Current state of a toggle
    pub fn toggle_state(&self, toggle: &str) -> Option<bool> {
        self.toggles.get(toggle).copied()
    }

    /// Record a pulse at a detector, returning whether all its inputs are high.
    /// Detectors outside the table never report all high.
    pub fn remember(&mut self, detector: &ModuleId, source: &ModuleId, level: PulseLevel) -> bool {
        self.detectors
            .get_mut(detector)
            .map_or(false, |memory| memory.remember(source, level))
    }

    /// Memory of a detector
    pub fn detector_memory(&self, detector: &str) -> Option<&DetectorMemory> {
        self.detectors.get(detector)
    }

    /// Check whether every toggle is off and every detector input low
    pub fn is_initial(&self) -> bool {
        self.toggles.values().all(|on| !on)
            && self.detectors.values().all(|memory| memory.high_inputs == 0)
    }
}
