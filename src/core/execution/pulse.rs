use crate::core::types::{ModuleId, PulseLevel};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::AddAssign;

/// A pulse travelling along one edge. Exists only while queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse {
    pub source: ModuleId,
    pub destination: ModuleId,
    pub level: PulseLevel,
}

impl Pulse {
    pub fn new(source: ModuleId, destination: ModuleId, level: PulseLevel) -> Self {
        Self {
            source,
            destination,
            level,
        }
    }
}

impl std::fmt::Display for Pulse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -{}-> {}", self.source, self.level, self.destination)
    }
}

/// Low and high pulse tallies for a measurement window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulseCounts {
    pub low: u64,
    pub high: u64,
}

impl PulseCounts {
    pub fn new(low: u64, high: u64) -> Self {
        Self { low, high }
    }

    /// Count one delivered pulse
    pub fn tally(&mut self, level: PulseLevel) {
        match level {
            PulseLevel::Low => self.low += 1,
            PulseLevel::High => self.high += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.low + self.high
    }

    /// Low count times high count
    pub fn product(&self) -> u128 {
        u128::from(self.low) * u128::from(self.high)
    }
}

impl AddAssign for PulseCounts {
    fn add_assign(&mut self, other: Self) {
        self.low += other.low;
        self.high += other.high;
    }
}

impl From<PulseCounts> for (u64, u64) {
    fn from(counts: PulseCounts) -> Self {
        (counts.low, counts.high)
    }
}

/// What one button press did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressOutcome {
    /// Pulses delivered during the press, button pulse included
    pub counts: PulseCounts,
    /// Modules that sent at least one high pulse
    pub high_senders: BTreeSet<ModuleId>,
    /// Modules that received at least one low pulse
    pub low_receivers: BTreeSet<ModuleId>,
}

impl PressOutcome {
    /// Check whether `module` sent a high pulse during the press
    pub fn sent_high(&self, module: &str) -> bool {
        self.high_senders.contains(module)
    }

    /// Check whether `module` received a low pulse during the press
    pub fn received_low(&self, module: &str) -> bool {
        self.low_receivers.contains(module)
    }
}
