pub mod config;
pub mod cycle_analyzer;
pub mod errors;
pub mod press_simulator;
pub mod pulse;
pub mod pulse_scheduler;

// Re-export commonly used types
pub use config::SimulationConfig;
pub use cycle_analyzer::{ConvergenceReport, CycleAnalyzer, CycleRecord};
pub use errors::AnalysisError;
pub use press_simulator::{PressObserver, PressSimulator};
pub use pulse::{PressOutcome, Pulse, PulseCounts};
pub use pulse_scheduler::PulseScheduler;
