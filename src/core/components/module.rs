use crate::core::types::ModuleId;
use serde::{Deserialize, Serialize};

/// Name of the module that fans the button pulse out into the network
pub const BROADCASTER: &str = "broadcaster";

/// The four kinds of module a pulse network is made of.
///
/// `Sink` is never declared: any destination name without its own
/// declaration resolves to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModuleKind {
    /// Forwards every pulse it receives to all destinations
    Broadcaster,
    /// Flip-flop: flips on low pulses, ignores high pulses
    Toggle,
    /// Remembers the last pulse per input; emits low only when all are high
    Detector,
    /// Absorbs pulses
    Sink,
}

impl ModuleKind {
    /// Declaration prefix for this kind, if it has one
    pub fn prefix(&self) -> Option<char> {
        match self {
            ModuleKind::Toggle => Some('%'),
            ModuleKind::Detector => Some('&'),
            ModuleKind::Broadcaster | ModuleKind::Sink => None,
        }
    }

    /// Check whether modules of this kind hold per-run state
    pub fn is_stateful(&self) -> bool {
        matches!(self, ModuleKind::Toggle | ModuleKind::Detector)
    }
}

impl std::fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ModuleKind::Broadcaster => "broadcaster",
            ModuleKind::Toggle => "toggle",
            ModuleKind::Detector => "detector",
            ModuleKind::Sink => "sink",
        };
        write!(f, "{}", name)
    }
}

/// A declared module: identity, kind and ordered destinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    pub(crate) id: ModuleId,
    pub(crate) kind: ModuleKind,
    /// Destinations in declaration order. Duplicates are kept; each one
    /// receives its own pulse.
    pub(crate) destinations: Vec<ModuleId>,
}

impl Module {
    pub fn new(id: ModuleId, kind: ModuleKind, destinations: Vec<ModuleId>) -> Self {
        Self {
            id,
            kind,
            destinations,
        }
    }

    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    pub fn kind(&self) -> ModuleKind {
        self.kind
    }

    pub fn destinations(&self) -> &[ModuleId] {
        &self.destinations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_prefixes() {
        assert_eq!(ModuleKind::Toggle.prefix(), Some('%'));
        assert_eq!(ModuleKind::Detector.prefix(), Some('&'));
        assert_eq!(ModuleKind::Broadcaster.prefix(), None);
        assert_eq!(ModuleKind::Sink.prefix(), None);
    }

    #[test]
    fn test_stateful_kinds() {
        assert!(ModuleKind::Toggle.is_stateful());
        assert!(ModuleKind::Detector.is_stateful());
        assert!(!ModuleKind::Broadcaster.is_stateful());
        assert!(!ModuleKind::Sink.is_stateful());
        assert_eq!(ModuleKind::Detector.to_string(), "detector");
    }
}
