//! Entry points for callers that only need the two headline answers.

use crate::core::builder::errors::ParseError;
use crate::core::builder::parser::parse_declarations;
use crate::core::execution::config::SimulationConfig;
use crate::core::execution::cycle_analyzer::CycleAnalyzer;
use crate::core::execution::errors::AnalysisError;
use crate::core::execution::press_simulator::PressSimulator;
use crate::core::execution::pulse::PulseCounts;
use crate::core::graph::ModuleGraph;

/// Build a graph from `<module> -> <dest>, ...` lines
pub fn build_graph<I, S>(lines: I) -> Result<ModuleGraph, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_declarations(lines)
}

/// Pulses delivered by `presses` button presses from the initial state
pub fn count_pulses(graph: &ModuleGraph, presses: u64) -> PulseCounts {
    PressSimulator::new(graph, SimulationConfig::default()).run(presses)
}

/// Press on which `sink` is predicted to first receive a low pulse
pub fn find_convergence(graph: &ModuleGraph, sink: &str) -> Result<u64, AnalysisError> {
    let report = CycleAnalyzer::new(graph, sink, SimulationConfig::default())?.run()?;
    Ok(report.convergence_press)
}
