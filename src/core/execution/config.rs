//! Configuration for pulse network runs
//!
//! Controls where the button pulse enters the network and how far the
//! open-ended analyses are allowed to run.

use crate::core::components::module::BROADCASTER;
use serde::{Deserialize, Serialize};

/// Default name of the synthetic source of every button pulse
pub const BUTTON: &str = "button";

/// Configuration for press-driven simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Module the button pulse is delivered to
    pub entry_module: String,
    /// Source name carried by the button pulse
    pub button_name: String,
    /// Upper bound on presses for the open-ended analyses.
    /// `None` means run until resolved.
    pub max_presses: Option<u64>,
    /// Require every monitored module to fire again at exactly twice its
    /// first press. Catches phase offsets, not inputs that never overlap.
    pub verify_periodicity: bool,
}

impl SimulationConfig {
    /// Create a new configuration with default values
    ///
    /// Pulses enter at `broadcaster` from `button`, with no press limit and
    /// no periodicity check
    pub fn new() -> Self {
        Self {
            entry_module: BROADCASTER.to_string(),
            button_name: BUTTON.to_string(),
            max_presses: None,
            verify_periodicity: false,
        }
    }

    /// Set the module that receives the button pulse
    ///
    /// # Arguments
    /// * `entry_module` - Name of the module the button pulse is delivered to
    ///
    /// # Returns
    /// A new configuration with the specified entry module
    pub fn with_entry_module(mut self, entry_module: impl Into<String>) -> Self {
        self.entry_module = entry_module.into();
        self
    }

    /// Set the source name of the button pulse
    ///
    /// # Arguments
    /// * `button_name` - Name detectors will see as the pulse's source
    ///
    /// # Returns
    /// A new configuration with the specified button name
    pub fn with_button_name(mut self, button_name: impl Into<String>) -> Self {
        self.button_name = button_name.into();
        self
    }

    /// Limit the open-ended analyses to `limit` presses
    ///
    /// # Arguments
    /// * `limit` - Presses after which an unresolved analysis gives up
    ///
    /// # Returns
    /// A new configuration with the specified press limit
    ///
    /// # Note
    /// `PressSimulator::run` always performs the count it is asked for and
    /// ignores this limit
    pub fn with_max_presses(mut self, limit: u64) -> Self {
        self.max_presses = Some(limit);
        self
    }

    /// Enable or disable the periodicity check in cycle analysis
    ///
    /// # Arguments
    /// * `enabled` - Whether to press on until each monitored module fires twice
    ///
    /// # Returns
    /// A new configuration with the check enabled or disabled
    pub fn with_periodicity_check(mut self, enabled: bool) -> Self {
        self.verify_periodicity = enabled;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.entry_module, "broadcaster");
        assert_eq!(config.button_name, "button");
        assert_eq!(config.max_presses, None);
        assert!(!config.verify_periodicity);
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::new()
            .with_entry_module("start")
            .with_button_name("trigger")
            .with_max_presses(5000)
            .with_periodicity_check(true);

        assert_eq!(config.entry_module, "start");
        assert_eq!(config.button_name, "trigger");
        assert_eq!(config.max_presses, Some(5000));
        assert!(config.verify_periodicity);
    }
}
