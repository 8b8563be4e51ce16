use crate::core::execution::config::SimulationConfig;
use crate::core::execution::errors::AnalysisError;
use crate::core::execution::press_simulator::PressSimulator;
use crate::core::graph::ModuleGraph;
use crate::core::types::ModuleId;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Press index at which each monitored module first sent a high pulse.
/// Once set, an entry is never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleRecord {
    presses: BTreeMap<ModuleId, Option<u64>>,
}

impl CycleRecord {
    /// Empty record over `modules`
    pub fn new(modules: impl IntoIterator<Item = ModuleId>) -> Self {
        Self {
            presses: modules.into_iter().map(|module| (module, None)).collect(),
        }
    }

    /// Record `press` for `module` unless it already has one.
    /// Returns whether the entry was set by this call.
    pub fn record(&mut self, module: &str, press: u64) -> bool {
        match self.presses.get_mut(module) {
            Some(slot) if slot.is_none() => {
                *slot = Some(press);
                true
            }
            _ => false,
        }
    }

    /// Recorded press for `module`
    pub fn get(&self, module: &str) -> Option<u64> {
        self.presses.get(module).copied().flatten()
    }

    /// Check whether every module has a press recorded
    pub fn is_complete(&self) -> bool {
        self.presses.values().all(Option::is_some)
    }

    /// Modules without a recorded press, sorted
    pub fn unresolved(&self) -> Vec<ModuleId> {
        self.presses
            .iter()
            .filter(|(_, press)| press.is_none())
            .map(|(module, _)| module.clone())
            .collect()
    }

    /// Recorded presses, sorted by module name
    pub fn resolved(&self) -> BTreeMap<ModuleId, u64> {
        self.presses
            .iter()
            .filter_map(|(module, press)| press.map(|press| (module.clone(), press)))
            .collect()
    }
}

/// Result of a convergence analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvergenceReport {
    pub sink: ModuleId,
    /// First press on which each monitored module sent a high pulse
    pub cycles: BTreeMap<ModuleId, u64>,
    /// Presses actually simulated
    pub presses_simulated: u64,
    /// Least common multiple of `cycles`
    pub convergence_press: u64,
}

/// Predicts the press on which a sink first receives a low pulse.
///
/// The sink is expected to sit behind one detector fed by independent
/// sub-networks. The modules feeding that detector's inputs are watched
/// press by press until each has sent a high pulse once, and the press
/// indices are combined with a least common multiple.
///
/// The result is only meaningful when every watched module fires with
/// zero phase offset, i.e. its first high press is also its period, and
/// when on the common press all of them are high together in the wave
/// that reaches the final detector. That holds for counter-style
/// sub-networks that wrap on firing, not for arbitrary graphs.
///
/// `verify_periodicity` checks only the first condition. A graph whose
/// inverters go low again before the others arrive still passes it, and
/// its sink is never reached; compare against
/// [`PressSimulator::presses_until_low`] when the structure is in doubt.
pub struct CycleAnalyzer<'g> {
    simulator: PressSimulator<'g>,
    sink: ModuleId,
    monitored: Vec<ModuleId>,
    first_high: CycleRecord,
    /// Only filled when periodicity is verified
    second_high: CycleRecord,
    verify_periodicity: bool,
}

impl<'g> CycleAnalyzer<'g> {
    /// Prepare an analysis of `sink` over a fresh simulation of `graph`
    pub fn new(
        graph: &'g ModuleGraph,
        sink: &str,
        config: SimulationConfig,
    ) -> Result<Self, AnalysisError> {
        let monitored: Vec<ModuleId> = graph.two_hop_predecessors(sink).into_iter().collect();
        if graph.inputs_of(sink).is_empty() || monitored.is_empty() {
            return Err(AnalysisError::MissingSink {
                sink: sink.to_string(),
            });
        }

        let verify_periodicity = config.verify_periodicity;
        Ok(Self {
            simulator: PressSimulator::new(graph, config),
            sink: ModuleId::from(sink),
            first_high: CycleRecord::new(monitored.iter().cloned()),
            second_high: CycleRecord::new(monitored.iter().cloned()),
            monitored,
            verify_periodicity,
        })
    }

    /// Modules being watched, sorted
    pub fn monitored(&self) -> &[ModuleId] {
        &self.monitored
    }

    fn is_resolved(&self) -> bool {
        if self.verify_periodicity {
            self.second_high.is_complete()
        } else {
            self.first_high.is_complete()
        }
    }

    fn unresolved(&self) -> Vec<ModuleId> {
        if self.verify_periodicity {
            self.second_high.unresolved()
        } else {
            self.first_high.unresolved()
        }
    }

    /// Press until every monitored module is resolved and combine the
    /// recorded presses
    pub fn run(mut self) -> Result<ConvergenceReport, AnalysisError> {
        let max_presses = self.simulator.config().max_presses;

        while !self.is_resolved() {
            if let Some(limit) = max_presses {
                if self.simulator.current_press() >= limit {
                    let unresolved = self.unresolved();
                    warn!(
                        "Gave up on '{}' after {} presses; {} modules unresolved",
                        self.sink,
                        limit,
                        unresolved.len()
                    );
                    return Err(AnalysisError::PressLimitExceeded { limit, unresolved });
                }
            }

            let outcome = self.simulator.press();
            let press = self.simulator.current_press();

            for module in &self.monitored {
                if !outcome.sent_high(module.as_str()) {
                    continue;
                }
                if self.first_high.record(module.as_str(), press) {
                    info!("Module '{}' first sent high on press {}", module, press);
                    continue;
                }
                if self.verify_periodicity && self.second_high.record(module.as_str(), press) {
                    let first = self.first_high.get(module.as_str()).unwrap_or(press);
                    if press != first * 2 {
                        return Err(AnalysisError::NonPeriodic {
                            module: module.clone(),
                            first,
                            second: press,
                        });
                    }
                }
            }
        }

        let cycles = self.first_high.resolved();
        let convergence_press = lcm_all(cycles.values().copied()).ok_or_else(|| {
            AnalysisError::Overflow {
                cycles: cycles.values().copied().collect(),
            }
        })?;

        info!(
            "Sink '{}' converges on press {} ({} presses simulated)",
            self.sink,
            convergence_press,
            self.simulator.current_press()
        );

        Ok(ConvergenceReport {
            sink: self.sink,
            cycles,
            presses_simulated: self.simulator.current_press(),
            convergence_press,
        })
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple, `None` on overflow
pub fn lcm(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd(a, b)).checked_mul(b)
}

/// Least common multiple of every value; 1 for none
pub fn lcm_all(values: impl IntoIterator<Item = u64>) -> Option<u64> {
    values
        .into_iter()
        .try_fold(1u64, |acc, value| lcm(acc, value))
}
