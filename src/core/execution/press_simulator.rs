use crate::core::execution::config::SimulationConfig;
use crate::core::execution::errors::AnalysisError;
use crate::core::execution::pulse::{PressOutcome, PulseCounts};
use crate::core::execution::pulse_scheduler::PulseScheduler;
use crate::core::graph::ModuleGraph;
use crate::core::state::ModuleState;
use crate::core::types::ModuleId;
use log::{debug, warn};

/// Observer trait for press-level simulation events
pub trait PressObserver {
    /// Called after every press has quiesced
    fn on_press_complete(&mut self, press: u64, outcome: &PressOutcome);
}

/// Drives button presses against one persistent module state.
///
/// Presses run strictly one after another; press `k + 1` starts only once
/// press `k` has quiesced.
pub struct PressSimulator<'g> {
    graph: &'g ModuleGraph,
    state: ModuleState,
    scheduler: PulseScheduler,
    config: SimulationConfig,
    /// Presses performed so far; also the 1-based index of the last press
    current_press: u64,
    /// Pulses delivered across every press so far
    totals: PulseCounts,
    observers: Vec<Box<dyn PressObserver>>,
}

impl<'g> PressSimulator<'g> {
    /// Create a simulator over `graph` in its initial state
    pub fn new(graph: &'g ModuleGraph, config: SimulationConfig) -> Self {
        if !graph.contains(&config.entry_module) {
            warn!(
                "Entry module '{}' is not declared; button presses will reach an implicit sink",
                config.entry_module
            );
        }

        Self {
            graph,
            state: ModuleState::from_config(graph, &config),
            scheduler: PulseScheduler::new(&config),
            config,
            current_press: 0,
            totals: PulseCounts::default(),
            observers: Vec::new(),
        }
    }

    /// Add an observer to the simulation
    pub fn add_observer(&mut self, observer: Box<dyn PressObserver>) {
        self.observers.push(observer);
    }

    fn notify_press_complete(&mut self, outcome: &PressOutcome) {
        for observer in &mut self.observers {
            observer.on_press_complete(self.current_press, outcome);
        }
    }

    /// Press the button once
    pub fn press(&mut self) -> PressOutcome {
        self.current_press += 1;
        let outcome = self.scheduler.run_press(self.graph, &mut self.state);
        self.totals += outcome.counts;

        debug!(
            "=== Press {} === low={} high={}",
            self.current_press, outcome.counts.low, outcome.counts.high
        );

        self.notify_press_complete(&outcome);
        outcome
    }

    /// Press the button `presses` times, returning the pulses those presses
    /// delivered. Always performs every press.
    pub fn run(&mut self, presses: u64) -> PulseCounts {
        let mut counts = PulseCounts::default();
        for _ in 0..presses {
            counts += self.press().counts;
        }
        counts
    }

    /// Press until `sink` receives a low pulse, returning that press index.
    ///
    /// This is the exhaustive route to the answer cycle analysis shortcuts;
    /// without a configured press limit it may run for a very long time.
    pub fn presses_until_low(&mut self, sink: &str) -> Result<u64, AnalysisError> {
        loop {
            if let Some(limit) = self.config.max_presses {
                if self.current_press >= limit {
                    return Err(AnalysisError::PressLimitExceeded {
                        limit,
                        unresolved: vec![ModuleId::from(sink)],
                    });
                }
            }

            if self.press().received_low(sink) {
                return Ok(self.current_press);
            }
        }
    }

    /// Presses performed so far
    pub fn current_press(&self) -> u64 {
        self.current_press
    }

    /// Pulses delivered across every press so far
    pub fn totals(&self) -> PulseCounts {
        self.totals
    }

    pub fn state(&self) -> &ModuleState {
        &self.state
    }

    pub fn graph(&self) -> &'g ModuleGraph {
        self.graph
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
