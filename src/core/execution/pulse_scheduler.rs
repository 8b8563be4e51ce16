use crate::core::components::dispatch::apply;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::pulse::{PressOutcome, Pulse};
use crate::core::graph::ModuleGraph;
use crate::core::state::ModuleState;
use crate::core::types::{ModuleId, PulseLevel};
use log::trace;
use std::collections::VecDeque;

/// FIFO pulse queue that drains one button press to quiescence.
///
/// Pulses are delivered strictly in the order they were sent. Every pulse
/// of one wave reaches its destination before any pulse that wave caused,
/// so a detector sees all sibling updates of a wave before the next wave
/// reads its memory. A stack would interleave waves and change what
/// multi-input detectors emit.
pub struct PulseScheduler {
    pulse_queue: VecDeque<Pulse>,
    /// Pulses delivered over the scheduler's lifetime
    sequence_counter: u64,
    button: ModuleId,
    entry: ModuleId,
}

impl PulseScheduler {
    /// Create a scheduler seeding presses as described by `config`
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            pulse_queue: VecDeque::new(),
            sequence_counter: 0,
            button: ModuleId::from(config.button_name.as_str()),
            entry: ModuleId::from(config.entry_module.as_str()),
        }
    }

    /// Queue a pulse behind every pulse already waiting
    pub fn schedule_pulse(&mut self, pulse: Pulse) {
        self.pulse_queue.push_back(pulse);
    }

    /// Take the oldest waiting pulse
    pub fn next_pulse(&mut self) -> Option<Pulse> {
        let pulse = self.pulse_queue.pop_front()?;
        self.sequence_counter += 1;
        Some(pulse)
    }

    /// Check if there are any pulses waiting
    pub fn has_pulses(&self) -> bool {
        !self.pulse_queue.is_empty()
    }

    /// Number of pulses waiting
    pub fn pending(&self) -> usize {
        self.pulse_queue.len()
    }

    /// Pulses delivered since the scheduler was created
    pub fn delivered(&self) -> u64 {
        self.sequence_counter
    }

    /// Press the button once and deliver pulses until the queue is empty.
    ///
    /// Every delivered pulse is counted, including the button pulse and
    /// pulses that end at sinks.
    pub fn run_press(&mut self, graph: &ModuleGraph, state: &mut ModuleState) -> PressOutcome {
        let mut outcome = PressOutcome::default();
        self.schedule_pulse(Pulse::new(
            self.button.clone(),
            self.entry.clone(),
            PulseLevel::Low,
        ));

        while let Some(pulse) = self.next_pulse() {
            trace!("#{} {}", self.sequence_counter, pulse);
            outcome.counts.tally(pulse.level);
            if pulse.level.is_low() && !outcome.low_receivers.contains(&pulse.destination) {
                outcome.low_receivers.insert(pulse.destination.clone());
            }

            let kind = graph.kind_of(pulse.destination.as_str());
            let level = match apply(&pulse.destination, kind, pulse.level, &pulse.source, state) {
                Some(level) => level,
                None => continue,
            };

            if level.is_high() && !outcome.high_senders.contains(&pulse.destination) {
                outcome.high_senders.insert(pulse.destination.clone());
            }
            for destination in graph.destinations(pulse.destination.as_str()) {
                self.schedule_pulse(Pulse::new(
                    pulse.destination.clone(),
                    destination.clone(),
                    level,
                ));
            }
        }

        outcome
    }
}
