use crate::core::types::ModuleId;

/// Errors raised by the open-ended press analyses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The sink has no predecessors, or its predecessors have no inputs,
    /// so there is nothing to monitor
    MissingSink { sink: String },
    /// The configured press limit ran out before the analysis resolved
    PressLimitExceeded {
        limit: u64,
        unresolved: Vec<ModuleId>,
    },
    /// A monitored module's second high press is not twice its first, so
    /// its first press is not its period
    NonPeriodic {
        module: ModuleId,
        first: u64,
        second: u64,
    },
    /// The least common multiple does not fit in 64 bits
    Overflow { cycles: Vec<u64> },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::MissingSink { sink } => {
                write!(f, "Sink '{}' has no monitorable predecessors", sink)
            }
            AnalysisError::PressLimitExceeded { limit, unresolved } => {
                let names: Vec<&str> = unresolved.iter().map(|m| m.as_str()).collect();
                write!(
                    f,
                    "Press limit {} reached with unresolved modules: {}",
                    limit,
                    names.join(", ")
                )
            }
            AnalysisError::NonPeriodic {
                module,
                first,
                second,
            } => write!(
                f,
                "Module '{}' is not periodic from press 1: first high at {}, second at {}",
                module, first, second
            ),
            AnalysisError::Overflow { cycles } => {
                write!(f, "Least common multiple of {:?} overflows", cycles)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}
