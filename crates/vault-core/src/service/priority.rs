use std::fmt;

/// Rank of a registration; higher values win resolution.
///
/// The host's named levels are associated constants. Any other integer is
/// accepted too, so providers can slot in between the named levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ServicePriority(i32);

impl ServicePriority {
    /// Fallback implementations that should lose to anything else
    pub const LOWEST: ServicePriority = ServicePriority(-100);
    pub const LOW: ServicePriority = ServicePriority(-50);
    pub const NORMAL: ServicePriority = ServicePriority(0);
    pub const HIGH: ServicePriority = ServicePriority(50);
    pub const HIGHEST: ServicePriority = ServicePriority(100);

    const NAMED: [(&'static str, ServicePriority); 5] = [
        ("lowest", ServicePriority::LOWEST),
        ("low", ServicePriority::LOW),
        ("normal", ServicePriority::NORMAL),
        ("high", ServicePriority::HIGH),
        ("highest", ServicePriority::HIGHEST),
    ];

    /// Create a priority from a raw rank
    pub const fn new(value: i32) -> Self {
        ServicePriority(value)
    }

    /// Get the numeric value of the priority
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Parse a priority string like "high" or "25"
    pub fn parse(priority_str: &str) -> Option<Self> {
        let trimmed = priority_str.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Some(ServicePriority(value));
        }

        let lowered = trimmed.to_lowercase();
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, priority)| *priority)
    }

    /// Name of the level this priority sits exactly on, if any
    pub fn level_name(&self) -> Option<&'static str> {
        Self::NAMED
            .iter()
            .find(|(_, priority)| priority == self)
            .map(|(name, _)| *name)
    }
}

impl From<i32> for ServicePriority {
    fn from(value: i32) -> Self {
        ServicePriority(value)
    }
}

impl fmt::Display for ServicePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level_name() {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", self.0),
        }
    }
}
