use serde::{Deserialize, Serialize};

/// Module identifier: the declared name with its kind prefix stripped
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleId(pub(crate) String);

impl ModuleId {
    /// Create a new module ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ModuleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ModuleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::borrow::Borrow<str> for ModuleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ModuleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ModuleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Level carried by a pulse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PulseLevel {
    Low,
    High,
}

impl PulseLevel {
    pub fn is_high(self) -> bool {
        matches!(self, PulseLevel::High)
    }

    pub fn is_low(self) -> bool {
        matches!(self, PulseLevel::Low)
    }
}

impl From<bool> for PulseLevel {
    fn from(high: bool) -> Self {
        if high {
            PulseLevel::High
        } else {
            PulseLevel::Low
        }
    }
}

impl std::fmt::Display for PulseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PulseLevel::Low => write!(f, "low"),
            PulseLevel::High => write!(f, "high"),
        }
    }
}
