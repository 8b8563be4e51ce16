pub mod core;

// Re-export commonly used types
pub use crate::core::api::{build_graph, count_pulses, find_convergence};
pub use crate::core::builder::{GraphBuilder, ParseError};
pub use crate::core::components::{Module, ModuleKind};
pub use crate::core::execution::{
    AnalysisError, ConvergenceReport, CycleAnalyzer, PressSimulator, PulseCounts,
    SimulationConfig,
};
pub use crate::core::graph::ModuleGraph;
pub use crate::core::state::ModuleState;
pub use crate::core::types::{ModuleId, PulseLevel};
